//! Overlay window lifecycle.
//!
//! An [`OverlayWindow`] is created already placed and visible. It can be
//! moved when its owner moves and is hidden exactly once, either through
//! [`OverlayWindow::dismiss`] or when it is dropped.

use std::sync::Arc;

use crate::border::BorderedContainer;
use crate::error::OverlayError;
use crate::geometry::ScreenRect;
use crate::host::{OwnerId, WindowHost, WindowId};
use crate::placement::{compute_placement_with, PlacementConfig};

/// Lifecycle state of an overlay. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// Window exists but has not been ordered front.
    Unshown,
    /// On screen.
    Visible,
    /// Hidden for good.
    Dismissed,
}

/// A borderless tooltip window attached to an owner control.
pub struct OverlayWindow<H: WindowHost> {
    host: Arc<H>,
    owner: OwnerId,
    window: WindowId,
    container: BorderedContainer<H::Content>,
    frame: ScreenRect,
    config: PlacementConfig,
    state: OverlayState,
}

impl<H: WindowHost> OverlayWindow<H> {
    /// Create the overlay window, place it next to `owner` and show it.
    ///
    /// If the host cannot resolve the owner's geometry yet, the window is
    /// shown at its initial content rectangle.
    pub fn show_near(
        host: Arc<H>,
        owner: OwnerId,
        container: BorderedContainer<H::Content>,
        config: PlacementConfig,
    ) -> Result<Self, OverlayError> {
        let frame = container.bounds();
        let window = host.create_window(frame, &container)?;

        let mut overlay =
            Self { host, owner, window, container, frame, config, state: OverlayState::Unshown };
        overlay.place();

        overlay.host.order_front(window);
        overlay.state = OverlayState::Visible;
        tracing::debug!(%owner, %window, frame = ?overlay.frame, "Overlay shown");

        Ok(overlay)
    }

    /// Recompute placement after the owner moved.
    ///
    /// Only the origin changes. Returns true if the window was moved; a
    /// dismissed overlay or missing host geometry makes this a no-op.
    pub fn reposition(&mut self) -> bool {
        if self.state != OverlayState::Visible {
            tracing::trace!(window = %self.window, state = ?self.state, "Reposition skipped");
            return false;
        }
        self.place()
    }

    /// Hide the overlay. Calling this again is a no-op.
    pub fn dismiss(&mut self) {
        if self.state == OverlayState::Dismissed {
            return;
        }
        self.host.order_out(self.window);
        self.state = OverlayState::Dismissed;
        tracing::debug!(owner = %self.owner, window = %self.window, "Overlay dismissed");
    }

    fn place(&mut self) -> bool {
        let Some(owner_rect) = self.host.owner_screen_rect(self.owner) else {
            tracing::trace!(owner = %self.owner, "Owner has no screen geometry, not placing");
            return false;
        };
        let Some(visible_rect) = self.host.visible_area(self.owner) else {
            tracing::trace!(owner = %self.owner, "No visible screen area, not placing");
            return false;
        };

        let frame = compute_placement_with(
            &self.config,
            owner_rect,
            visible_rect,
            self.frame.size,
            self.host.reading_direction(),
        );
        self.host.set_window_origin(self.window, frame.origin);
        self.frame = frame;
        true
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == OverlayState::Visible
    }

    /// Last frame handed to the host.
    pub fn frame(&self) -> ScreenRect {
        self.frame
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn window_id(&self) -> WindowId {
        self.window
    }

    pub fn container(&self) -> &BorderedContainer<H::Content> {
        &self.container
    }
}

impl<H: WindowHost> Drop for OverlayWindow<H> {
    fn drop(&mut self) {
        self.dismiss();
    }
}
