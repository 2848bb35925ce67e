//! Core types and logic for rich tooltip overlays.
//!
//! This crate is headless; a windowing backend plugs in through
//! [`host::WindowHost`]:
//!
//! - **geometry**: y-up screen rectangles and reading direction
//! - **placement**: where an overlay goes relative to its owner
//! - **overlay**: overlay window lifecycle (show, reposition, dismiss)
//! - **border**: bordered container around overlay content
//! - **interception**: handler registry for hooking host events
//! - **controller**: pointer-tracking glue for one owner
//! - **settings**: JSON settings file
//! - **logging**: Structured logging setup

pub mod border;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod host;
pub mod interception;
pub mod logging;
pub mod overlay;
pub mod placement;
pub mod settings;

#[cfg(test)]
mod test_support;

pub use border::{BorderCanvas, BorderedContainer, BORDER_WIDTH};
pub use controller::{install_tracking, TooltipController, TrackingEvent, TrackingHandlers};
pub use error::OverlayError;
pub use geometry::{Point, ReadingDirection, ScreenRect, Size};
pub use host::{ContentRegion, OwnerId, WindowHost, WindowId};
pub use interception::{decorate, Handler, HandlerKey, HandlerRegistry};
pub use overlay::{OverlayState, OverlayWindow};
pub use placement::{compute_placement, compute_placement_with, PlacementConfig};
pub use settings::{Settings, StartupSettings};
