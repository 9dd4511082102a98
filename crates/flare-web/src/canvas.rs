use core::f64::consts::TAU;

use flare_canvas::{Circle, Rect, Surface, SurfaceError, SurfaceErrorKind};
use wasm_bindgen::JsCast as _;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A `<canvas>` element and the 2D context acquired from it.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: HtmlCanvasElement, key: &str) -> Result<Self, SurfaceError> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| SurfaceError::new(SurfaceErrorKind::ContextUnavailable, key))?;

        Ok(Self { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // The displayed size only diverges from the pixel size when set through inline style.
    fn has_presentation_size(&self) -> bool {
        let style = self.canvas.style();

        ["width", "height"]
            .into_iter()
            .any(|property| style.get_property_value(property).is_ok_and(|value| !value.is_empty()))
    }
}

impl Surface for CanvasSurface {
    fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn sync_presentation_size(&mut self, width: u32, height: u32) {
        if !self.has_presentation_size() {
            return;
        }

        let style = self.canvas.style();

        for (property, value) in [("width", width), ("height", height)] {
            if let Err(error) = style.set_property(property, &format!("{value}px")) {
                debug!(?error, property, "Couldn't update presentation size");
            }
        }
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.context.clear_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_rect(&mut self, rect: Rect, fill_color: &str) {
        self.context.set_fill_style_str(fill_color);
        self.context.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_circle(&mut self, circle: Circle, fill_color: &str) {
        self.context.set_fill_style_str(fill_color);
        self.context.begin_path();

        // Throws IndexSizeError on a negative radius.
        if let Err(error) = self.context.arc(circle.x, circle.y, circle.radius, 0.0, TAU) {
            debug!(?error, radius = circle.radius, "Circle rejected by the host");
            return;
        }

        self.context.fill();
    }
}
