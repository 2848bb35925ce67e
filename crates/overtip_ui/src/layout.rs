//! Layout utilities shared by the tooltip views.

use gpui::{point, px, size, Bounds, Pixels};
use overtip_core::ScreenRect;

/// Standard spacing constants for UI layout.
pub mod spacing {
    use gpui::{px, Pixels};

    /// Extra small spacing: 4px
    pub const XS: Pixels = px(4.0);
    /// Small spacing: 8px
    pub const SM: Pixels = px(8.0);
    /// Large spacing: 16px
    pub const LG: Pixels = px(16.0);
}

/// Standard border radius constants.
pub mod radius {
    use gpui::{px, Pixels};

    /// Medium radius: 4px
    pub const MD: Pixels = px(4.0);
}

/// Helper to convert pixels to f64 for geometry calculations.
pub fn to_f64(pixels: Pixels) -> f64 {
    let value: f32 = pixels.into();
    f64::from(value)
}

/// Helper to create pixels from f64.
pub fn from_f64(value: f64) -> Pixels {
    px(value as f32)
}

/// GPUI bounds as a rectangle with the same numbers (no axis flip).
pub fn rect_from_bounds(bounds: Bounds<Pixels>) -> ScreenRect {
    ScreenRect::new(
        to_f64(bounds.origin.x),
        to_f64(bounds.origin.y),
        to_f64(bounds.size.width),
        to_f64(bounds.size.height),
    )
}

/// Rectangle as GPUI bounds with the same numbers (no axis flip).
pub fn bounds_from_rect(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::new(
        point(from_f64(rect.origin.x), from_f64(rect.origin.y)),
        size(from_f64(rect.width()), from_f64(rect.height())),
    )
}
