//! Overlay placement relative to its owning control.
//!
//! The preferred spot is just below the owner, shifted by half the owner's
//! width toward the reading direction (right for left-to-right, left for
//! right-to-left). Horizontal edges are kept a safety margin inside the
//! visible area. When the overlay would hang below the visible area it is
//! attached above the owner instead.
//!
//! The top edge of the visible area is not defended unless
//! [`PlacementConfig::clamp_top`] is set.

use serde::{Deserialize, Serialize};

use crate::geometry::{ReadingDirection, ScreenRect, Size};

/// Distance kept between the overlay and the left/right visible edges.
pub const DEFAULT_H_SAFETY_MARGIN: f64 = 20.0;

/// Tunables for [`compute_placement_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Horizontal safety margin from the visible area's side edges.
    pub h_safety_margin: f64,
    /// Gap between owner and overlay on the vertical axis.
    pub v_padding: f64,
    /// Pull the overlay back under the visible area's top edge after the
    /// above-the-owner flip. Off by default to match historical placement.
    pub clamp_top: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { h_safety_margin: DEFAULT_H_SAFETY_MARGIN, v_padding: 0.0, clamp_top: false }
    }
}

/// Compute the overlay frame using the default [`PlacementConfig`].
pub fn compute_placement(
    owner_rect: ScreenRect,
    visible_rect: ScreenRect,
    overlay_size: Size,
    direction: ReadingDirection,
) -> ScreenRect {
    compute_placement_with(
        &PlacementConfig::default(),
        owner_rect,
        visible_rect,
        overlay_size,
        direction,
    )
}

/// Compute the overlay frame. Never resizes the overlay, only positions it.
pub fn compute_placement_with(
    config: &PlacementConfig,
    owner_rect: ScreenRect,
    visible_rect: ScreenRect,
    overlay_size: Size,
    direction: ReadingDirection,
) -> ScreenRect {
    let h_padding = owner_rect.width() / 2.0;
    let mut origin = owner_rect.origin;

    origin.y -= overlay_size.height + config.v_padding;

    match direction {
        ReadingDirection::LeftToRight => {
            origin.x += h_padding;
            origin.x = origin
                .x
                .min(visible_rect.max_x() - overlay_size.width - config.h_safety_margin);
        }
        ReadingDirection::RightToLeft => {
            origin.x -= h_padding;
            origin.x = origin.x.max(visible_rect.min_x() + config.h_safety_margin);
        }
    }

    if origin.y < visible_rect.min_y() {
        origin.y = owner_rect.max_y() + config.v_padding;

        if config.clamp_top {
            origin.y = origin.y.min(visible_rect.max_y() - overlay_size.height);
        }
    }

    ScreenRect::from_origin_size(origin, overlay_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn screen() -> ScreenRect {
        ScreenRect::new(0.0, 0.0, 1000.0, 800.0)
    }

    fn owner() -> ScreenRect {
        ScreenRect::new(500.0, 100.0, 100.0, 30.0)
    }

    const OVERLAY: Size = Size::new(200.0, 60.0);

    #[test]
    fn test_left_to_right_places_below_and_right() {
        let frame = compute_placement(owner(), screen(), OVERLAY, ReadingDirection::LeftToRight);
        // min(500 + 50, 1000 - 200 - 20) = 550
        assert_eq!(frame.origin, Point::new(550.0, 40.0));
        assert_eq!(frame.size, OVERLAY);
    }

    #[test]
    fn test_right_to_left_places_below_and_left() {
        let frame = compute_placement(owner(), screen(), OVERLAY, ReadingDirection::RightToLeft);
        assert_eq!(frame.origin, Point::new(450.0, 40.0));
    }

    #[test]
    fn test_left_to_right_clamps_right_edge() {
        let far_right = ScreenRect::new(950.0, 100.0, 40.0, 20.0);
        let frame = compute_placement(far_right, screen(), OVERLAY, ReadingDirection::LeftToRight);
        assert_eq!(frame.origin.x, 1000.0 - 200.0 - 20.0);
        assert_eq!(frame.max_x(), screen().max_x() - DEFAULT_H_SAFETY_MARGIN);
    }

    #[test]
    fn test_right_to_left_clamps_left_edge() {
        let far_left = ScreenRect::new(5.0, 300.0, 30.0, 20.0);
        let frame = compute_placement(far_left, screen(), OVERLAY, ReadingDirection::RightToLeft);
        assert_eq!(frame.origin.x, 20.0);
    }

    #[test]
    fn test_clamps_respect_offset_visible_area() {
        // Visible area that does not start at the screen origin (menu bar, dock).
        let visible = ScreenRect::new(100.0, 50.0, 600.0, 700.0);
        let near_left = ScreenRect::new(110.0, 400.0, 20.0, 20.0);
        let rtl = compute_placement(near_left, visible, OVERLAY, ReadingDirection::RightToLeft);
        assert_eq!(rtl.origin.x, 120.0);

        let near_right = ScreenRect::new(680.0, 400.0, 20.0, 20.0);
        let ltr = compute_placement(near_right, visible, OVERLAY, ReadingDirection::LeftToRight);
        assert_eq!(ltr.origin.x, 700.0 - 200.0 - 20.0);
    }

    #[test]
    fn test_flips_above_when_below_visible_bottom() {
        let near_bottom = ScreenRect::new(300.0, 10.0, 80.0, 24.0);
        let tall = Size::new(150.0, 120.0);
        let frame = compute_placement(near_bottom, screen(), tall, ReadingDirection::LeftToRight);
        assert_eq!(frame.origin.y, near_bottom.max_y());
        assert_eq!(frame.origin.x, 340.0);
    }

    #[test]
    fn test_touching_visible_bottom_does_not_flip() {
        let owner = ScreenRect::new(300.0, 60.0, 80.0, 24.0);
        let frame = compute_placement(owner, screen(), OVERLAY, ReadingDirection::LeftToRight);
        assert_eq!(frame.origin.y, 0.0);
    }

    #[test]
    fn test_flip_above_does_not_clamp_top_by_default() {
        // Visible area too short for the overlay either below or above.
        let visible = ScreenRect::new(0.0, 0.0, 1000.0, 100.0);
        let owner = ScreenRect::new(100.0, 30.0, 50.0, 40.0);
        let frame = compute_placement(owner, visible, OVERLAY, ReadingDirection::LeftToRight);
        assert_eq!(frame.origin.y, 70.0);
        assert!(frame.max_y() > visible.max_y());
    }

    #[test]
    fn test_clamp_top_keeps_flipped_overlay_on_screen() {
        let config = PlacementConfig { clamp_top: true, ..Default::default() };
        let visible = ScreenRect::new(0.0, 0.0, 1000.0, 100.0);
        let owner = ScreenRect::new(100.0, 30.0, 50.0, 40.0);
        let frame =
            compute_placement_with(&config, owner, visible, OVERLAY, ReadingDirection::LeftToRight);
        assert_eq!(frame.max_y(), visible.max_y());
    }

    #[test]
    fn test_v_padding_applies_to_both_branches() {
        let config = PlacementConfig { v_padding: 4.0, ..Default::default() };
        let below = compute_placement_with(
            &config,
            owner(),
            screen(),
            OVERLAY,
            ReadingDirection::LeftToRight,
        );
        assert_eq!(below.origin.y, 100.0 - 60.0 - 4.0);

        let near_bottom = ScreenRect::new(300.0, 10.0, 80.0, 24.0);
        let above = compute_placement_with(
            &config,
            near_bottom,
            screen(),
            OVERLAY,
            ReadingDirection::LeftToRight,
        );
        assert_eq!(above.origin.y, 34.0 + 4.0);
    }

    #[test]
    fn test_overlay_wider_than_visible_area_clips_left() {
        let narrow = ScreenRect::new(0.0, 0.0, 150.0, 800.0);
        let owner = ScreenRect::new(10.0, 400.0, 20.0, 20.0);
        let frame = compute_placement(owner, narrow, OVERLAY, ReadingDirection::LeftToRight);
        assert_eq!(frame.origin.x, 150.0 - 200.0 - 20.0);
        assert_eq!(frame.size, OVERLAY);
    }

    #[test]
    fn test_placement_is_deterministic() {
        let a = compute_placement(owner(), screen(), OVERLAY, ReadingDirection::RightToLeft);
        let b = compute_placement(owner(), screen(), OVERLAY, ReadingDirection::RightToLeft);
        assert_eq!(a, b);
    }

    #[test]
    fn test_horizontal_invariants_over_owner_sweep() {
        let visible = screen();
        for step in 0..=60 {
            let x = -100.0 + f64::from(step) * 20.0;
            for width in [0.0, 10.0, 120.0, 400.0] {
                let owner = ScreenRect::new(x, 300.0, width, 25.0);

                let ltr = compute_placement(owner, visible, OVERLAY, ReadingDirection::LeftToRight);
                let expected = (x + width / 2.0).min(visible.max_x() - OVERLAY.width - 20.0);
                assert_eq!(ltr.origin.x, expected);
                assert!(ltr.max_x() <= visible.max_x() - 20.0);

                let rtl = compute_placement(owner, visible, OVERLAY, ReadingDirection::RightToLeft);
                assert!(rtl.origin.x >= visible.min_x() + 20.0);
            }
        }
    }

    #[test]
    fn test_config_deserializes_partial_json() {
        let config: PlacementConfig = serde_json::from_str(r#"{"clamp_top": true}"#).unwrap();
        assert!(config.clamp_top);
        assert_eq!(config.h_safety_margin, DEFAULT_H_SAFETY_MARGIN);
        assert_eq!(config.v_padding, 0.0);
    }
}
