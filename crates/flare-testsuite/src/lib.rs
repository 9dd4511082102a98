//! In-memory host used to exercise the drawing contract without a browser.
//!
//! [`FakeDocument`] plays the role of the page: elements are registered under
//! string ids, and the ones registered as canvases resolve into [`FakeCanvas`]
//! surfaces. Each canvas keeps a log of the calls it received and a coarse
//! raster (one color string per pixel, sampled at pixel centers) so tests can
//! check what actually ended up on screen.

use core::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use flare_canvas::{Circle, Rect, Surface, SurfaceError, SurfaceErrorKind, SurfaceProvider};

/// Size of a freshly inserted HTML canvas.
pub const DEFAULT_CANVAS_WIDTH: u32 = 300;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 150;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    SetPixelSize { width: u32, height: u32 },
    SyncPresentationSize { width: u32, height: u32 },
    ClearRect(Rect),
    FillRect(Rect, String),
    FillCircle(Circle, String),
}

enum Element {
    Canvas(FakeCanvas),
    /// A canvas whose `getContext("2d")` returns null.
    LostCanvas,
    Other,
}

#[derive(Clone, Default)]
pub struct FakeDocument {
    elements: Rc<RefCell<HashMap<String, Element>>>,
    lookups: Rc<RefCell<Vec<String>>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a canvas with the default HTML size and no inline style.
    pub fn add_canvas(&self, key: &str) -> FakeCanvas {
        let canvas = FakeCanvas::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, None);
        self.insert(key, Element::Canvas(canvas.clone()));
        canvas
    }

    /// Inserts a canvas whose displayed size is set through inline style.
    pub fn add_styled_canvas(&self, key: &str, display_width: u32, display_height: u32) -> FakeCanvas {
        let canvas = FakeCanvas::new(
            DEFAULT_CANVAS_WIDTH,
            DEFAULT_CANVAS_HEIGHT,
            Some((display_width, display_height)),
        );
        self.insert(key, Element::Canvas(canvas.clone()));
        canvas
    }

    pub fn add_canvas_without_context(&self, key: &str) {
        self.insert(key, Element::LostCanvas);
    }

    pub fn add_element(&self, key: &str) {
        self.insert(key, Element::Other);
    }

    pub fn remove(&self, key: &str) {
        self.elements.borrow_mut().remove(key);
    }

    /// Keys requested so far, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    fn insert(&self, key: &str, element: Element) {
        self.elements.borrow_mut().insert(key.to_owned(), element);
    }
}

impl SurfaceProvider for FakeDocument {
    type Surface = FakeCanvas;

    fn acquire(&self, key: &str) -> Result<FakeCanvas, SurfaceError> {
        self.lookups.borrow_mut().push(key.to_owned());

        match self.elements.borrow().get(key) {
            Some(Element::Canvas(canvas)) => Ok(canvas.clone()),
            Some(Element::LostCanvas) => Err(SurfaceError::new(SurfaceErrorKind::ContextUnavailable, key)),
            Some(Element::Other) => Err(SurfaceError::new(SurfaceErrorKind::NotDrawable, key)),
            None => Err(SurfaceError::new(SurfaceErrorKind::NotFound, key)),
        }
    }
}

struct CanvasState {
    width: u32,
    height: u32,
    presentation: Option<(u32, u32)>,
    pixels: Vec<Option<String>>,
    calls: Vec<DrawCall>,
}

/// Shared view on a fake canvas; clones observe the same state.
#[derive(Clone)]
pub struct FakeCanvas(Rc<RefCell<CanvasState>>);

impl FakeCanvas {
    fn new(width: u32, height: u32, presentation: Option<(u32, u32)>) -> Self {
        Self(Rc::new(RefCell::new(CanvasState {
            width,
            height,
            presentation,
            pixels: blank_pixels(width, height),
            calls: Vec::new(),
        })))
    }

    pub fn size(&self) -> (u32, u32) {
        let state = self.0.borrow();
        (state.width, state.height)
    }

    pub fn presentation_size(&self) -> Option<(u32, u32)> {
        self.0.borrow().presentation
    }

    /// Color of the pixel at `(x, y)`, `None` when transparent or out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<String> {
        let state = self.0.borrow();
        state.index(x, y).and_then(|index| state.pixels.get(index).cloned().flatten())
    }

    pub fn painted_pixels(&self) -> usize {
        self.0.borrow().pixels.iter().filter(|pixel| pixel.is_some()).count()
    }

    pub fn painted_pixels_of(&self, color: &str) -> usize {
        self.0
            .borrow()
            .pixels
            .iter()
            .filter(|pixel| pixel.as_deref() == Some(color))
            .count()
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.0.borrow().calls.clone()
    }

    pub fn take_calls(&self) -> Vec<DrawCall> {
        core::mem::take(&mut self.0.borrow_mut().calls)
    }

    pub fn same_as(&self, other: &FakeCanvas) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Surface for FakeCanvas {
    fn set_pixel_size(&mut self, width: u32, height: u32) {
        let mut state = self.0.borrow_mut();
        state.calls.push(DrawCall::SetPixelSize { width, height });

        // Like an HTML canvas, setting the size resets the bitmap.
        state.width = reflected_extent(width, DEFAULT_CANVAS_WIDTH);
        state.height = reflected_extent(height, DEFAULT_CANVAS_HEIGHT);
        state.pixels = blank_pixels(state.width, state.height);
    }

    fn sync_presentation_size(&mut self, width: u32, height: u32) {
        let mut state = self.0.borrow_mut();

        if state.presentation.is_some() {
            state.calls.push(DrawCall::SyncPresentationSize { width, height });
            state.presentation = Some((width, height));
        }
    }

    fn clear_rect(&mut self, rect: Rect) {
        let mut state = self.0.borrow_mut();
        state.calls.push(DrawCall::ClearRect(rect));
        state.paint_where(|x, y| rect_contains(rect, x, y), None);
    }

    fn fill_rect(&mut self, rect: Rect, fill_color: &str) {
        let mut state = self.0.borrow_mut();
        state.calls.push(DrawCall::FillRect(rect, fill_color.to_owned()));
        state.paint_where(|x, y| rect_contains(rect, x, y), Some(fill_color));
    }

    fn fill_circle(&mut self, circle: Circle, fill_color: &str) {
        let mut state = self.0.borrow_mut();
        state.calls.push(DrawCall::FillCircle(circle, fill_color.to_owned()));

        // A real context throws on negative radii and paints nothing.
        if circle.radius < 0.0 {
            return;
        }

        state.paint_where(
            |x, y| {
                let (dx, dy) = (x - circle.x, y - circle.y);
                dx * dx + dy * dy <= circle.radius * circle.radius
            },
            Some(fill_color),
        );
    }
}

impl CanvasState {
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = u64::from(y) * u64::from(self.width) + u64::from(x);
        usize::try_from(index).ok()
    }

    // Samples every pixel at its center.
    fn paint_where(&mut self, covers: impl Fn(f64, f64) -> bool, color: Option<&str>) {
        for y in 0..self.height {
            for x in 0..self.width {
                if !covers(f64::from(x) + 0.5, f64::from(y) + 0.5) {
                    continue;
                }

                if let Some(pixel) = self.index(x, y).and_then(|index| self.pixels.get_mut(index)) {
                    *pixel = color.map(str::to_owned);
                }
            }
        }
    }
}

// Negative extents grow towards the origin, as with the canvas API.
fn rect_contains(rect: Rect, x: f64, y: f64) -> bool {
    let (left, right) = ordered(rect.x, rect.x + rect.width);
    let (top, bottom) = ordered(rect.y, rect.y + rect.height);

    (left..right).contains(&x) && (top..bottom).contains(&y)
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// `width`/`height` are reflected `unsigned long` attributes: values above
// i32::MAX (a wrapped negative size, for instance) set the default instead.
fn reflected_extent(value: u32, default: u32) -> u32 {
    if i32::try_from(value).is_ok() {
        value
    } else {
        default
    }
}

fn blank_pixels(width: u32, height: u32) -> Vec<Option<String>> {
    let len = usize::try_from(u64::from(width) * u64::from(height)).unwrap_or(0);
    vec![None; len]
}
