//! In-memory host used by the unit tests.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::border::BorderedContainer;
use crate::error::OverlayError;
use crate::geometry::{Point, ReadingDirection, ScreenRect, Size};
use crate::host::{ContentRegion, OwnerId, WindowHost, WindowId};

/// Fixed-size content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestContent {
    size: Size,
}

impl TestContent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { size: Size::new(width, height) }
    }
}

impl ContentRegion for TestContent {
    fn size(&self) -> Size {
        self.size
    }
}

/// Everything the host was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Create { window: WindowId, frame: ScreenRect },
    OrderFront(WindowId),
    SetOrigin(WindowId, Point),
    OrderOut(WindowId),
}

#[derive(Default)]
struct MockState {
    owners: HashMap<OwnerId, ScreenRect>,
    visible: Option<ScreenRect>,
    direction: ReadingDirection,
    fail_create: bool,
    next_window: u64,
    calls: Vec<HostCall>,
    frames: HashMap<WindowId, ScreenRect>,
}

/// Recording host with scriptable geometry.
#[derive(Default)]
pub struct MockHost {
    state: Mutex<MockState>,
}

impl MockHost {
    /// Host with a 1000x800 visible area.
    pub fn new() -> Self {
        let host = Self::default();
        host.set_visible(Some(ScreenRect::new(0.0, 0.0, 1000.0, 800.0)));
        host
    }

    pub fn set_owner(&self, owner: OwnerId, rect: ScreenRect) {
        self.state.lock().owners.insert(owner, rect);
    }

    pub fn remove_owner(&self, owner: OwnerId) {
        self.state.lock().owners.remove(&owner);
    }

    pub fn set_visible(&self, visible: Option<ScreenRect>) {
        self.state.lock().visible = visible;
    }

    pub fn set_direction(&self, direction: ReadingDirection) {
        self.state.lock().direction = direction;
    }

    pub fn fail_next_create(&self) {
        self.state.lock().fail_create = true;
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Current frame of a window as the host sees it.
    pub fn frame(&self, window: WindowId) -> Option<ScreenRect> {
        self.state.lock().frames.get(&window).copied()
    }

    /// Windows created but not yet ordered out.
    pub fn open_windows(&self) -> usize {
        self.state.lock().frames.len()
    }
}

impl WindowHost for MockHost {
    type Content = TestContent;

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
        _container: &BorderedContainer<TestContent>,
    ) -> Result<WindowId, OverlayError> {
        let mut state = self.state.lock();
        if std::mem::take(&mut state.fail_create) {
            return Err(OverlayError::window("mock host refused to create a window"));
        }
        state.next_window += 1;
        let window = WindowId(state.next_window);
        state.frames.insert(window, frame);
        state.calls.push(HostCall::Create { window, frame });
        Ok(window)
    }

    fn order_front(&self, window: WindowId) {
        self.state.lock().calls.push(HostCall::OrderFront(window));
    }

    fn set_window_origin(&self, window: WindowId, origin: Point) {
        let mut state = self.state.lock();
        if let Some(frame) = state.frames.get_mut(&window) {
            *frame = frame.with_origin(origin);
        }
        state.calls.push(HostCall::SetOrigin(window, origin));
    }

    fn order_out(&self, window: WindowId) {
        let mut state = self.state.lock();
        state.frames.remove(&window);
        state.calls.push(HostCall::OrderOut(window));
    }
}
