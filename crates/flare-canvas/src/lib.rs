#![cfg_attr(doc, doc = include_str!("../README.md"))]

#[macro_use]
extern crate tracing;

mod bridge;
mod config;
mod error;
mod geometry;
mod handle;
mod registry;
mod renderer;
mod surface;

pub use bridge::Bridge;
pub use config::{Config, DEFAULT_KEY_PREFIX};
pub use error::{SurfaceError, SurfaceErrorKind};
pub use geometry::{pixel_extent, Circle, Rect};
pub use handle::{HandleTable, RawHandle, RendererHandle, NULL_HANDLE};
pub use registry::{SharedRegistry, SurfaceRegistry};
pub use renderer::{Binding, Renderer};
pub use surface::{Surface, SurfaceId, SurfaceProvider};
