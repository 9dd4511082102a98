use flare_canvas::{SurfaceError, SurfaceErrorKind, SurfaceProvider};
use wasm_bindgen::JsCast as _;
use web_sys::HtmlCanvasElement;

use crate::canvas::CanvasSurface;

/// Resolves surface keys against the element ids of the current document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSurfaces;

impl SurfaceProvider for DocumentSurfaces {
    type Surface = CanvasSurface;

    fn acquire(&self, key: &str) -> Result<CanvasSurface, SurfaceError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| SurfaceError::new(SurfaceErrorKind::HostUnavailable, key))?;

        let element = document
            .get_element_by_id(key)
            .ok_or_else(|| SurfaceError::new(SurfaceErrorKind::NotFound, key))?;

        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::new(SurfaceErrorKind::NotDrawable, key))?;

        CanvasSurface::from_canvas(canvas, key)
    }
}
