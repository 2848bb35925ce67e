//! The seam between overlays and the host windowing system.
//!
//! Everything platform-specific (coordinate conversion, screen queries,
//! window stacking) goes through [`WindowHost`]. The core never talks to a
//! window system directly.

use std::fmt;

use crate::border::BorderedContainer;
use crate::error::OverlayError;
use crate::geometry::{Point, ReadingDirection, ScreenRect, Size};

/// Non-owning handle to an owner control. The host resolves it to geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(pub u64);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner#{}", self.0)
    }
}

/// Host-assigned identity of a top-level overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// Caller-supplied payload shown inside an overlay.
///
/// The core never lays it out; it only needs the finished size.
pub trait ContentRegion {
    /// Final size of the content, fixed before the overlay is created.
    fn size(&self) -> Size;
}

/// Platform services used by overlay windows.
///
/// All calls happen on the UI thread in response to input events, so
/// implementations are expected to return promptly.
pub trait WindowHost: Send + Sync {
    /// Content type the host knows how to render.
    type Content: ContentRegion + Send;

    /// Owner frame converted to global y-up screen space, or `None` if the
    /// owner is not in a window yet.
    fn owner_screen_rect(&self, owner: OwnerId) -> Option<ScreenRect>;

    /// Visible area of the screen containing the owner.
    fn visible_area(&self, owner: OwnerId) -> Option<ScreenRect>;

    /// Current layout direction of the application.
    fn reading_direction(&self) -> ReadingDirection;

    /// Create a borderless top-level window at `frame` hosting `container`.
    /// The window stays hidden until [`WindowHost::order_front`].
    fn create_window(
        &self,
        frame: ScreenRect,
        container: &BorderedContainer<Self::Content>,
    ) -> Result<WindowId, OverlayError>;

    /// Show the window above other windows.
    fn order_front(&self, window: WindowId);

    /// Move the window, keeping its size.
    fn set_window_origin(&self, window: WindowId, origin: Point);

    /// Hide and release the window.
    fn order_out(&self, window: WindowId);
}
