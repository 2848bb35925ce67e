//! Bordered container that wraps overlay content.

use crate::geometry::{ScreenRect, Size};
use crate::host::ContentRegion;

/// Default border width around every overlay.
pub const BORDER_WIDTH: f64 = 2.0;

/// Drawing surface for the border. Coordinates are local to the container.
pub trait BorderCanvas {
    /// Fill `rect` with the border color.
    fn fill_rect(&mut self, rect: ScreenRect);
}

/// Hosts one content region at its native size and strokes a solid border
/// around the full bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderedContainer<C> {
    content: C,
    border_width: f64,
}

impl<C: ContentRegion> BorderedContainer<C> {
    /// Wrap content with the default 2-unit border.
    pub fn new(content: C) -> Self {
        Self::with_border_width(content, BORDER_WIDTH)
    }

    /// Wrap content with a custom border width.
    pub fn with_border_width(content: C, border_width: f64) -> Self {
        Self { content, border_width: border_width.max(0.0) }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    /// The container is exactly as large as its content.
    pub fn size(&self) -> Size {
        self.content.size()
    }

    /// Local bounds, anchored at the zero point.
    pub fn bounds(&self) -> ScreenRect {
        ScreenRect::with_size(self.size())
    }

    /// The four edge strips forming the border, inset into the bounds.
    ///
    /// Strips never exceed the bounds, so a border wider than half the
    /// content simply covers it.
    pub fn border_strips(&self) -> [ScreenRect; 4] {
        let bounds = self.bounds();
        let w = self.border_width.min(bounds.width());
        let h = self.border_width.min(bounds.height());
        [
            // bottom
            ScreenRect::new(0.0, 0.0, bounds.width(), h),
            // top
            ScreenRect::new(0.0, bounds.height() - h, bounds.width(), h),
            // left
            ScreenRect::new(0.0, 0.0, w, bounds.height()),
            // right
            ScreenRect::new(bounds.width() - w, 0.0, w, bounds.height()),
        ]
    }

    /// Draw the border. Called on every redraw of the overlay.
    pub fn redraw(&self, canvas: &mut impl BorderCanvas) {
        if self.border_width == 0.0 {
            return;
        }
        for strip in self.border_strips() {
            canvas.fill_rect(strip);
        }
    }
}
