use crate::config::Config;
use crate::handle::{HandleTable, RawHandle, RendererHandle, NULL_HANDLE};
use crate::registry::{SharedRegistry, SurfaceRegistry};
use crate::renderer::Renderer;
use crate::surface::{SurfaceId, SurfaceProvider};

/// The boundary contract: renderer operations addressed by raw `u32` tokens.
///
/// Nothing here fails loudly. The null handle turns every operation into a
/// no-op, a stale handle (used after `destroy`) is logged and ignored, and a
/// missing surface only shows up in the logs and through [`is_bound`](Self::is_bound).
pub struct Bridge<P: SurfaceProvider> {
    registry: SharedRegistry<P>,
    renderers: HandleTable<Renderer<P>>,
}

impl<P: SurfaceProvider> Bridge<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, Config::default())
    }

    pub fn with_config(provider: P, config: Config) -> Self {
        Self {
            registry: SurfaceRegistry::with_key_prefix(provider, config.key_prefix).into_shared(),
            renderers: HandleTable::with_capacity(config.max_renderers),
        }
    }

    pub fn registry(&self) -> &SharedRegistry<P> {
        &self.registry
    }

    /// Returns [`NULL_HANDLE`] only when no more renderers can be allocated.
    pub fn create(&mut self, surface_id: i32, width: i32, height: i32) -> RawHandle {
        if self.renderers.is_full() {
            error!(
                surface_id,
                capacity = self.renderers.capacity(),
                "Renderer allocation failed"
            );
            return NULL_HANDLE;
        }

        let renderer = Renderer::create(&self.registry, SurfaceId::new(surface_id), width, height);

        match self.renderers.insert(renderer) {
            Ok(handle) => handle.into_raw(),
            Err(_) => NULL_HANDLE,
        }
    }

    pub fn destroy(&mut self, handle: RawHandle) {
        let Some(handle) = RendererHandle::from_raw(handle) else {
            return;
        };

        match self.renderers.remove(handle) {
            Some(renderer) => renderer.destroy(),
            None => warn!(handle = handle.into_raw(), "Ignoring destroy of a stale renderer handle"),
        }
    }

    pub fn clear(&self, handle: RawHandle) {
        if let Some(renderer) = self.renderer(handle) {
            renderer.clear();
        }
    }

    pub fn draw_rectangle(&self, handle: RawHandle, x: f64, y: f64, width: f64, height: f64, fill_color: &str) {
        if let Some(renderer) = self.renderer(handle) {
            renderer.draw_rectangle(x, y, width, height, fill_color);
        }
    }

    pub fn draw_circle(&self, handle: RawHandle, x: f64, y: f64, radius: f64, fill_color: &str) {
        if let Some(renderer) = self.renderer(handle) {
            renderer.draw_circle(x, y, radius, fill_color);
        }
    }

    pub fn resize(&mut self, handle: RawHandle, width: f64, height: f64) {
        let Some(handle) = RendererHandle::from_raw(handle) else {
            return;
        };

        match self.renderers.get_mut(handle) {
            Some(renderer) => renderer.resize(width, height),
            None => warn!(handle = handle.into_raw(), "Ignoring call on a stale renderer handle"),
        }
    }

    /// `false` for null and stale handles, and for renderers without a backing surface.
    pub fn is_bound(&self, handle: RawHandle) -> bool {
        self.renderer(handle).is_some_and(Renderer::is_bound)
    }

    pub fn width(&self, handle: RawHandle) -> f64 {
        self.renderer(handle).map_or(0.0, Renderer::width)
    }

    pub fn height(&self, handle: RawHandle) -> f64 {
        self.renderer(handle).map_or(0.0, Renderer::height)
    }

    /// Resolves a token into its renderer. Stale tokens are logged.
    pub fn renderer(&self, handle: RawHandle) -> Option<&Renderer<P>> {
        let handle = RendererHandle::from_raw(handle)?;
        let renderer = self.renderers.get(handle);

        if renderer.is_none() {
            warn!(handle = handle.into_raw(), "Ignoring call on a stale renderer handle");
        }

        renderer
    }

    pub fn live_renderers(&self) -> usize {
        self.renderers.len()
    }

    /// Drops the registry entry for `surface_id`; renderers on it become unbound.
    pub fn release_surface(&mut self, surface_id: i32) -> bool {
        self.registry.borrow_mut().release(SurfaceId::new(surface_id)).is_some()
    }

    /// Destroys every renderer and releases every surface.
    pub fn teardown(&mut self) {
        let renderers = self.renderers.drain();
        debug!(count = renderers.len(), "Tearing down renderers");

        for renderer in renderers {
            renderer.destroy();
        }

        self.registry.borrow_mut().release_all();
    }
}
