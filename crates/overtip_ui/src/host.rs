//! GPUI-backed [`WindowHost`].
//!
//! Overlay calls arrive while an event handler or a prepaint pass is
//! running, where no `App` is at hand. The host records geometry and window
//! commands, and [`GpuiHost::flush`] applies them from a deferred callback
//! before the next frame.
//!
//! GPUI windows cannot be moved after creation, so moving a visible overlay
//! closes its popup and reopens it at the new origin.

use std::collections::HashMap;

use gpui::{
    AnyWindowHandle, App, AppContext, Bounds, Pixels, WindowBounds, WindowKind, WindowOptions,
};
use overtip_core::{
    BorderedContainer, OverlayError, OwnerId, Point, ReadingDirection, ScreenRect, WindowHost,
    WindowId,
};
use parking_lot::Mutex;

use crate::layout::{bounds_from_rect, rect_from_bounds};
use crate::tooltip::{RichTooltip, TooltipView};

enum WindowCommand {
    Show(WindowId),
    Hide(AnyWindowHandle),
}

struct OverlayEntry {
    frame: ScreenRect,
    container: BorderedContainer<RichTooltip>,
    handle: Option<AnyWindowHandle>,
}

#[derive(Default)]
struct HostState {
    /// Full display bounds in GPUI (y-down) numbers; the frame for axis flips.
    display: Option<ScreenRect>,
    /// Display area not reserved by menu bar or dock, y-up.
    visible: Option<ScreenRect>,
    owners: HashMap<OwnerId, ScreenRect>,
    direction: ReadingDirection,
    next_window: u64,
    windows: HashMap<WindowId, OverlayEntry>,
    pending: Vec<WindowCommand>,
}

/// Window host that opens overlays as GPUI popup windows.
#[derive(Default)]
pub struct GpuiHost {
    state: Mutex<HostState>,
}

impl GpuiHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the display the owners live on.
    ///
    /// `bounds` is the whole display and `visible_bounds` the part of it not
    /// covered by the menu bar or dock, both in GPUI screen coordinates.
    pub fn set_display(&self, bounds: Bounds<Pixels>, visible_bounds: Bounds<Pixels>) {
        let display = rect_from_bounds(bounds);
        let visible = rect_from_bounds(visible_bounds).flipped_within(&display);
        let mut state = self.state.lock();
        state.display = Some(display);
        state.visible = Some(visible);
    }

    pub fn set_reading_direction(&self, direction: ReadingDirection) {
        self.state.lock().direction = direction;
    }

    /// Record where an owner element is on screen.
    ///
    /// `window_bounds` is the owner's window in screen coordinates and
    /// `element_bounds` the element inside that window. Returns true if the
    /// owner's screen rectangle changed.
    pub fn set_owner_bounds(
        &self,
        owner: OwnerId,
        window_bounds: Bounds<Pixels>,
        element_bounds: Bounds<Pixels>,
    ) -> bool {
        let window = rect_from_bounds(window_bounds);
        let element = rect_from_bounds(element_bounds);
        let on_screen = ScreenRect::new(
            window.origin.x + element.origin.x,
            window.origin.y + element.origin.y,
            element.width(),
            element.height(),
        );

        let mut state = self.state.lock();
        let Some(display) = state.display else {
            return false;
        };
        let y_up = on_screen.flipped_within(&display);
        state.owners.insert(owner, y_up) != Some(y_up)
    }

    /// Whether window commands are waiting for [`GpuiHost::flush`].
    pub fn has_pending(&self) -> bool {
        !self.state.lock().pending.is_empty()
    }

    /// Apply queued window commands.
    pub fn flush(&self, cx: &mut App) {
        let commands = std::mem::take(&mut self.state.lock().pending);
        for command in commands {
            match command {
                WindowCommand::Show(id) => self.open_popup(id, cx),
                WindowCommand::Hide(handle) => {
                    handle.update(cx, |_, window, _cx| window.remove_window()).ok();
                }
            }
        }
    }

    fn open_popup(&self, id: WindowId, cx: &mut App) {
        let (bounds, container) = {
            let state = self.state.lock();
            let (Some(entry), Some(display)) = (state.windows.get(&id), state.display) else {
                // Dismissed before it was ever shown.
                return;
            };
            (bounds_from_rect(entry.frame.flipped_within(&display)), entry.container.clone())
        };

        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: None,
            focus: false,
            show: true,
            kind: WindowKind::PopUp,
            is_movable: false,
            ..Default::default()
        };

        match cx.open_window(options, |_window, cx| cx.new(|_cx| TooltipView::new(container))) {
            Ok(handle) => {
                let handle: AnyWindowHandle = handle.into();
                let mut state = self.state.lock();
                match state.windows.get_mut(&id) {
                    Some(entry) => entry.handle = Some(handle),
                    // Dismissed while opening
                    None => state.pending.push(WindowCommand::Hide(handle)),
                }
                tracing::trace!(%id, "Overlay popup opened");
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "Failed to open overlay popup");
            }
        }
    }
}

impl WindowHost for GpuiHost {
    type Content = RichTooltip;

    fn owner_screen_rect(&self, owner: OwnerId) -> Option<ScreenRect> {
        self.state.lock().owners.get(&owner).copied()
    }

    fn visible_area(&self, _owner: OwnerId) -> Option<ScreenRect> {
        self.state.lock().visible
    }

    fn reading_direction(&self) -> ReadingDirection {
        self.state.lock().direction
    }

    fn create_window(
        &self,
        frame: ScreenRect,
        container: &BorderedContainer<RichTooltip>,
    ) -> Result<WindowId, OverlayError> {
        let mut state = self.state.lock();
        if state.display.is_none() {
            return Err(OverlayError::window("no display available for overlay"));
        }
        state.next_window += 1;
        let id = WindowId(state.next_window);
        state
            .windows
            .insert(id, OverlayEntry { frame, container: container.clone(), handle: None });
        Ok(id)
    }

    fn order_front(&self, window: WindowId) {
        self.state.lock().pending.push(WindowCommand::Show(window));
    }

    fn set_window_origin(&self, window: WindowId, origin: Point) {
        let mut state = self.state.lock();
        let Some(entry) = state.windows.get_mut(&window) else {
            return;
        };
        entry.frame = entry.frame.with_origin(origin);
        if let Some(handle) = entry.handle.take() {
            state.pending.push(WindowCommand::Hide(handle));
            state.pending.push(WindowCommand::Show(window));
        }
    }

    fn order_out(&self, window: WindowId) {
        let mut state = self.state.lock();
        if let Some(handle) = state.windows.remove(&window).and_then(|entry| entry.handle) {
            state.pending.push(WindowCommand::Hide(handle));
        }
    }
}
