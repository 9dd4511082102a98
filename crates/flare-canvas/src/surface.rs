use core::fmt;

use crate::error::SurfaceError;
use crate::geometry::{Circle, Rect};

/// Caller-assigned identifier of a host drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(i32);

impl SurfaceId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for SurfaceId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A host drawable surface together with its cached 2D drawing context.
///
/// Implementations forward to the host's native primitives. Arguments are
/// never validated on this side; out-of-range geometry and malformed colors
/// get whatever treatment the host gives them.
pub trait Surface {
    /// Sets the size of the backing pixel buffer.
    fn set_pixel_size(&mut self, width: u32, height: u32);

    /// Brings the presentation size in line with the pixel size, for surfaces
    /// whose displayed size is tracked separately from their backing buffer.
    ///
    /// Surfaces without an independent presentation size do nothing.
    fn sync_presentation_size(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    fn clear_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, fill_color: &str);

    /// Fills a full circle (a 360 degree arc).
    fn fill_circle(&mut self, circle: Circle, fill_color: &str);
}

/// Host presentation layer able to resolve a surface key into a drawable surface.
pub trait SurfaceProvider {
    type Surface: Surface;

    fn acquire(&self, key: &str) -> Result<Self::Surface, SurfaceError>;
}
