/// Axis-aligned rectangle in surface coordinates, top-left corner at `(x, y)`.
///
/// Extents are forwarded to the host as is: negative widths or heights are
/// not normalized here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle anchored at the origin, covering a whole `width × height` surface.
    pub fn from_origin(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }
}

/// Converts a logical extent into a host pixel extent.
///
/// Follows the WebIDL `unsigned long` conversion: NaN and infinities become 0,
/// fractional parts are truncated and the result wraps modulo 2^32. Negative
/// and oversized values are not rejected here; the host decides what a
/// wrapped extent means (an HTML canvas falls back to its default size).
#[expect(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is an integer in [0, 2^32) after rem_euclid, so the cast is exact"
)]
pub fn pixel_extent(value: f64) -> u32 {
    const MODULUS: f64 = 4_294_967_296.0;

    if !value.is_finite() {
        return 0;
    }

    value.trunc().rem_euclid(MODULUS) as u32
}
