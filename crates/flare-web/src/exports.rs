//! JavaScript entry points.
//!
//! Renderers are plain numbers on the JS side. `0` is the null handle: it is
//! what `rendererCreate` returns when no renderer can be allocated, and every
//! other entry point ignores it.

use core::cell::RefCell;

use flare_canvas::{Bridge, RawHandle};
use wasm_bindgen::prelude::*;

use crate::document::DocumentSurfaces;

thread_local! {
    static BRIDGE: RefCell<Bridge<DocumentSurfaces>> = RefCell::new(Bridge::new(DocumentSurfaces));
}

/// Installs the console logger (and panic hook) once. `log_level` is one of
/// `trace`, `debug`, `info`, `warn` or `error`.
#[wasm_bindgen(js_name = flareInit)]
pub fn flare_init(log_level: &str) {
    crate::logging::init(log_level);
}

/// Changes the element id prefix used to find canvases (`canvas-` by default).
#[wasm_bindgen(js_name = flareSetSurfacePrefix)]
pub fn flare_set_surface_prefix(prefix: &str) {
    BRIDGE.with_borrow(|bridge| bridge.registry().borrow_mut().set_key_prefix(prefix));
}

#[wasm_bindgen(js_name = rendererCreate)]
pub fn renderer_create(surface_id: i32, width: i32, height: i32) -> RawHandle {
    BRIDGE.with_borrow_mut(|bridge| bridge.create(surface_id, width, height))
}

#[wasm_bindgen(js_name = rendererDestroy)]
pub fn renderer_destroy(renderer: RawHandle) {
    BRIDGE.with_borrow_mut(|bridge| bridge.destroy(renderer));
}

#[wasm_bindgen(js_name = rendererClear)]
pub fn renderer_clear(renderer: RawHandle) {
    BRIDGE.with_borrow(|bridge| bridge.clear(renderer));
}

#[wasm_bindgen(js_name = rendererDrawRectangle)]
pub fn renderer_draw_rectangle(renderer: RawHandle, x: f64, y: f64, width: f64, height: f64, fill_color: &str) {
    BRIDGE.with_borrow(|bridge| bridge.draw_rectangle(renderer, x, y, width, height, fill_color));
}

#[wasm_bindgen(js_name = rendererDrawCircle)]
pub fn renderer_draw_circle(renderer: RawHandle, x: f64, y: f64, radius: f64, fill_color: &str) {
    BRIDGE.with_borrow(|bridge| bridge.draw_circle(renderer, x, y, radius, fill_color));
}

#[wasm_bindgen(js_name = rendererResize)]
pub fn renderer_resize(renderer: RawHandle, width: f64, height: f64) {
    BRIDGE.with_borrow_mut(|bridge| bridge.resize(renderer, width, height));
}

/// `false` when the handle is null or destroyed, or when no canvas backs it.
#[wasm_bindgen(js_name = rendererIsBound)]
pub fn renderer_is_bound(renderer: RawHandle) -> bool {
    BRIDGE.with_borrow(|bridge| bridge.is_bound(renderer))
}

#[wasm_bindgen(js_name = rendererWidth)]
pub fn renderer_width(renderer: RawHandle) -> f64 {
    BRIDGE.with_borrow(|bridge| bridge.width(renderer))
}

#[wasm_bindgen(js_name = rendererHeight)]
pub fn renderer_height(renderer: RawHandle) -> f64 {
    BRIDGE.with_borrow(|bridge| bridge.height(renderer))
}

/// Forgets the cached canvas for `surfaceId`. Returns whether one was registered.
#[wasm_bindgen(js_name = flareReleaseSurface)]
pub fn flare_release_surface(surface_id: i32) -> bool {
    BRIDGE.with_borrow_mut(|bridge| bridge.release_surface(surface_id))
}

/// Destroys every renderer and forgets every cached canvas.
#[wasm_bindgen(js_name = flareTeardown)]
pub fn flare_teardown() {
    BRIDGE.with_borrow_mut(Bridge::teardown);
}
