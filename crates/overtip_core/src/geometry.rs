//! Screen-space geometry value types.
//!
//! All rectangles live in a single global screen space where y grows
//! upward (origin at the bottom-left corner of the primary display).

use serde::{Deserialize, Serialize};

/// A point in global screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a region.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in y-up screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    /// Bottom-left corner.
    pub origin: Point,
    pub size: Size,
}

impl ScreenRect {
    /// Create a rectangle from its bottom-left corner and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { origin: Point::new(x, y), size: Size::new(width, height) }
    }

    /// Create a rectangle from an origin and a size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle of the given size anchored at the zero point.
    pub const fn with_size(size: Size) -> Self {
        Self { origin: Point::new(0.0, 0.0), size }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Left edge.
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Top edge.
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Same size, moved to a new origin.
    pub fn with_origin(&self, origin: Point) -> Self {
        Self { origin, size: self.size }
    }

    /// Mirror this rectangle vertically inside `space`.
    ///
    /// Converts between y-down (top-left origin) and y-up (bottom-left
    /// origin) coordinates of the same space. Applying it twice is identity.
    pub fn flipped_within(&self, space: &ScreenRect) -> Self {
        let y = space.min_y() + space.max_y() - self.max_y();
        Self { origin: Point::new(self.origin.x, y), size: self.size }
    }

    /// Whether `other` lies entirely inside this rectangle (edges inclusive).
    pub fn contains_rect(&self, other: &ScreenRect) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }
}

/// Layout direction of the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl ReadingDirection {
    pub fn is_left_to_right(self) -> bool {
        matches!(self, Self::LeftToRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_are_y_up() {
        let rect = ScreenRect::new(10.0, 20.0, 100.0, 30.0);
        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.min_y(), 20.0);
        assert_eq!(rect.max_y(), 50.0);
    }

    #[test]
    fn test_with_origin_keeps_size() {
        let rect = ScreenRect::new(0.0, 0.0, 200.0, 60.0);
        let moved = rect.with_origin(Point::new(5.0, -7.0));
        assert_eq!(moved.size, rect.size);
        assert_eq!(moved.origin, Point::new(5.0, -7.0));
    }

    #[test]
    fn test_flipped_within_converts_top_left_origin() {
        let display = ScreenRect::new(0.0, 0.0, 1440.0, 900.0);
        // 25 units from the top in y-down space
        let y_down = ScreenRect::new(100.0, 25.0, 80.0, 30.0);
        let y_up = y_down.flipped_within(&display);
        assert_eq!(y_up, ScreenRect::new(100.0, 845.0, 80.0, 30.0));
        assert_eq!(y_up.flipped_within(&display), y_down);
    }

    #[test]
    fn test_contains_rect_is_edge_inclusive() {
        let outer = ScreenRect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&outer));
        assert!(outer.contains_rect(&ScreenRect::new(10.0, 10.0, 90.0, 90.0)));
        assert!(!outer.contains_rect(&ScreenRect::new(10.0, 10.0, 91.0, 10.0)));
        assert!(!outer.contains_rect(&ScreenRect::new(0.0, -1.0, 10.0, 10.0)));
    }

    #[test]
    fn test_reading_direction_serde_names() {
        let json = serde_json::to_string(&ReadingDirection::RightToLeft).unwrap();
        assert_eq!(json, "\"right_to_left\"");
        let parsed: ReadingDirection = serde_json::from_str("\"left_to_right\"").unwrap();
        assert!(parsed.is_left_to_right());
    }
}
