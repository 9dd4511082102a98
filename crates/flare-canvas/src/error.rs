use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SurfaceErrorKind {
    /// The host has no presentation layer to search (e.g. no window or document)
    HostUnavailable,
    /// No element is registered under the surface key
    NotFound,
    /// An element exists under the surface key but it can't be drawn on
    NotDrawable,
    /// The element refused to hand out a 2D drawing context
    ContextUnavailable,
}

impl fmt::Display for SurfaceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostUnavailable => write!(f, "host presentation layer unavailable"),
            Self::NotFound => write!(f, "surface not found"),
            Self::NotDrawable => write!(f, "element is not a drawable surface"),
            Self::ContextUnavailable => write!(f, "2D context unavailable"),
        }
    }
}

/// Failure to acquire a host surface, reported by a [`SurfaceProvider`](crate::SurfaceProvider).
///
/// These errors never cross the module boundary: the registry logs them and
/// degrades to a no-op.
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {key}")]
pub struct SurfaceError {
    kind: SurfaceErrorKind,
    key: String,
}

impl SurfaceError {
    pub fn new(kind: SurfaceErrorKind, key: impl Into<String>) -> Self {
        Self { kind, key: key.into() }
    }

    pub fn kind(&self) -> SurfaceErrorKind {
        self.kind
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
