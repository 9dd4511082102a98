use std::rc::Rc;

use crate::geometry::{pixel_extent, Circle, Rect};
use crate::registry::SharedRegistry;
use crate::surface::{SurfaceId, SurfaceProvider};

/// Whether a renderer's surface id currently resolves to a registered surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Bound,
    /// The renderer is valid but the host had no surface for its id: every
    /// drawing call is a no-op.
    Unbound,
}

/// One logical renderer: a surface id and its last known logical size.
///
/// All drawing goes through the registry the renderer was created with.
/// Dropping or [destroying](Self::destroy) a renderer never touches the
/// registry entry, which may be shared with other renderers on the same id.
pub struct Renderer<P: SurfaceProvider> {
    surface_id: SurfaceId,
    width: f64,
    height: f64,
    registry: SharedRegistry<P>,
}

impl<P: SurfaceProvider> Renderer<P> {
    /// Creates a renderer and (re-)initializes the surface for `surface_id` at the given size.
    ///
    /// A missing host surface is not an error: the renderer is still
    /// returned, in the [`Binding::Unbound`] state. Sizes reach the host
    /// through [`pixel_extent`], so a negative size is left to the host.
    pub fn create(registry: &SharedRegistry<P>, surface_id: SurfaceId, width: i32, height: i32) -> Self {
        let renderer = Self {
            surface_id,
            width: f64::from(width),
            height: f64::from(height),
            registry: Rc::clone(registry),
        };

        let bound = registry.borrow_mut().ensure_surface(
            surface_id,
            pixel_extent(renderer.width),
            pixel_extent(renderer.height),
        );

        if !bound {
            warn!(%surface_id, "Renderer created without a backing surface");
        }

        renderer
    }

    pub fn surface_id(&self) -> SurfaceId {
        self.surface_id
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn binding(&self) -> Binding {
        if self.registry.borrow().contains(self.surface_id) {
            Binding::Bound
        } else {
            Binding::Unbound
        }
    }

    pub fn is_bound(&self) -> bool {
        self.binding() == Binding::Bound
    }

    /// Erases the whole `width × height` area of the surface.
    pub fn clear(&self) {
        self.registry
            .borrow_mut()
            .clear_area(self.surface_id, self.width, self.height);
    }

    pub fn draw_rectangle(&self, x: f64, y: f64, width: f64, height: f64, fill_color: &str) {
        self.registry
            .borrow_mut()
            .fill_rect(self.surface_id, Rect::new(x, y, width, height), fill_color);
    }

    pub fn draw_circle(&self, x: f64, y: f64, radius: f64, fill_color: &str) {
        self.registry
            .borrow_mut()
            .fill_circle(self.surface_id, Circle::new(x, y, radius), fill_color);
    }

    /// Updates the cached size, then resizes the host surface to match.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;

        self.registry
            .borrow_mut()
            .resize_surface(self.surface_id, width, height);
    }

    /// Releases this renderer. The registry entry for its surface is left untouched.
    pub fn destroy(self) {
        trace!(surface_id = %self.surface_id, "Renderer destroyed");
    }
}
