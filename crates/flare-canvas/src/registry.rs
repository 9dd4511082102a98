use core::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::DEFAULT_KEY_PREFIX;
use crate::geometry::{pixel_extent, Circle, Rect};
use crate::surface::{Surface, SurfaceId, SurfaceProvider};

/// Registry shared between a [`Bridge`](crate::Bridge) and the renderers it hands out.
pub type SharedRegistry<P> = Rc<RefCell<SurfaceRegistry<P>>>;

/// Maps surface ids to host surfaces, acquired lazily through a [`SurfaceProvider`].
///
/// Entries are created by [`ensure_surface`](Self::ensure_surface) and are
/// only removed through [`release`](Self::release) or
/// [`release_all`](Self::release_all); destroying a renderer leaves them in place.
pub struct SurfaceRegistry<P: SurfaceProvider> {
    provider: P,
    key_prefix: String,
    surfaces: HashMap<SurfaceId, P::Surface>,
}

impl<P: SurfaceProvider> SurfaceRegistry<P> {
    pub fn new(provider: P) -> Self {
        Self::with_key_prefix(provider, DEFAULT_KEY_PREFIX)
    }

    pub fn with_key_prefix(provider: P, key_prefix: impl Into<String>) -> Self {
        Self {
            provider,
            key_prefix: key_prefix.into(),
            surfaces: HashMap::new(),
        }
    }

    #[must_use]
    pub fn into_shared(self) -> SharedRegistry<P> {
        Rc::new(RefCell::new(self))
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// Changes the naming convention for surfaces acquired from now on.
    ///
    /// Already registered surfaces are kept.
    pub fn set_key_prefix(&mut self, key_prefix: impl Into<String>) {
        self.key_prefix = key_prefix.into();
    }

    pub fn surface_key(&self, id: SurfaceId) -> String {
        format!("{}{id}", self.key_prefix)
    }

    /// Looks up the host surface for `id`, sizes it and caches it for later draw calls.
    ///
    /// Returns `false` when the host can't provide a surface. In that case a
    /// surface previously registered under `id` stays in place.
    pub fn ensure_surface(&mut self, id: SurfaceId, width: u32, height: u32) -> bool {
        let key = self.surface_key(id);

        match self.provider.acquire(&key) {
            Ok(mut surface) => {
                surface.set_pixel_size(width, height);

                if self.surfaces.insert(id, surface).is_some() {
                    debug!(%id, width, height, "Surface re-initialized");
                } else {
                    debug!(%id, width, height, "Surface registered");
                }

                true
            }
            Err(e) => {
                error!(%id, error = %e, "Couldn't initialize surface");
                false
            }
        }
    }

    pub fn clear_area(&mut self, id: SurfaceId, width: f64, height: f64) {
        if let Some(surface) = self.surfaces.get_mut(&id) {
            surface.clear_rect(Rect::from_origin(width, height));
        }
    }

    pub fn fill_rect(&mut self, id: SurfaceId, rect: Rect, fill_color: &str) {
        if let Some(surface) = self.surfaces.get_mut(&id) {
            surface.fill_rect(rect, fill_color);
        }
    }

    pub fn fill_circle(&mut self, id: SurfaceId, circle: Circle, fill_color: &str) {
        if let Some(surface) = self.surfaces.get_mut(&id) {
            surface.fill_circle(circle, fill_color);
        }
    }

    pub fn resize_surface(&mut self, id: SurfaceId, width: f64, height: f64) {
        let Some(surface) = self.surfaces.get_mut(&id) else {
            trace!(%id, "Resize ignored, no surface registered");
            return;
        };

        let (width, height) = (pixel_extent(width), pixel_extent(height));

        surface.set_pixel_size(width, height);
        surface.sync_presentation_size(width, height);
    }

    pub fn contains(&self, id: SurfaceId) -> bool {
        self.surfaces.contains_key(&id)
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&P::Surface> {
        self.surfaces.get(&id)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Drops the cached surface for `id`. Renderers naming it become unbound.
    pub fn release(&mut self, id: SurfaceId) -> Option<P::Surface> {
        let surface = self.surfaces.remove(&id);

        if surface.is_some() {
            debug!(%id, "Surface released");
        }

        surface
    }

    pub fn release_all(&mut self) {
        debug!(count = self.surfaces.len(), "Releasing all surfaces");
        self.surfaces.clear();
    }
}
