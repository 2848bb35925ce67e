//! Pointer-tracking glue between an owner control and its overlay.
//!
//! A [`TooltipController`] keeps at most one live overlay for one owner and
//! maps the three trigger events onto the overlay lifecycle:
//!
//! - pointer entered: show a fresh overlay next to the owner
//! - owner moved: reposition the overlay
//! - pointer exited: dismiss and release it
//!
//! [`install_tracking`] hooks a controller into the owner's event handlers
//! through a [`HandlerRegistry`], so the host's original handlers still run.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::border::BorderedContainer;
use crate::error::OverlayError;
use crate::host::{OwnerId, WindowHost};
use crate::interception::{decorate, Handler, HandlerKey, HandlerRegistry};
use crate::overlay::OverlayWindow;
use crate::settings::Settings;

/// Builds the tooltip content each time the overlay is shown.
pub type ContentFactory<C> = Box<dyn Fn() -> C + Send + Sync>;

/// Events the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingEvent {
    PointerEntered,
    PointerExited,
    OwnerMoved,
}

impl TrackingEvent {
    pub const ALL: [TrackingEvent; 3] =
        [TrackingEvent::PointerEntered, TrackingEvent::PointerExited, TrackingEvent::OwnerMoved];

    /// Host event name used as the interception key.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::PointerEntered => "mouse_entered",
            Self::PointerExited => "mouse_exited",
            Self::OwnerMoved => "frame_did_change",
        }
    }
}

/// Shows, moves and hides the rich tooltip of one owner.
pub struct TooltipController<H: WindowHost> {
    host: Arc<H>,
    owner: OwnerId,
    content: ContentFactory<H::Content>,
    settings: Settings,
    overlay: Option<OverlayWindow<H>>,
}

impl<H: WindowHost> TooltipController<H> {
    pub fn new(
        host: Arc<H>,
        owner: OwnerId,
        settings: Settings,
        content: impl Fn() -> H::Content + Send + Sync + 'static,
    ) -> Self {
        Self { host, owner, content: Box::new(content), settings, overlay: None }
    }

    /// Show the tooltip near the owner, replacing any overlay still up.
    pub fn pointer_entered(&mut self) -> Result<(), OverlayError> {
        if let Some(mut stale) = self.overlay.take() {
            stale.dismiss();
        }

        let container =
            BorderedContainer::with_border_width((self.content)(), self.settings.border_width);
        let overlay = OverlayWindow::show_near(
            self.host.clone(),
            self.owner,
            container,
            self.settings.placement,
        )?;
        self.overlay = Some(overlay);
        Ok(())
    }

    /// Follow the owner after it moved or resized.
    pub fn owner_moved(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.reposition();
        }
    }

    /// Hide and release the overlay.
    pub fn pointer_exited(&mut self) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.dismiss();
        }
    }

    /// Dispatch one tracking event. Failures are logged, never raised.
    pub fn handle(&mut self, event: TrackingEvent) {
        match event {
            TrackingEvent::PointerEntered => {
                if let Err(e) = self.pointer_entered() {
                    tracing::warn!(owner = %self.owner, error = %e, "Failed to show tooltip");
                }
            }
            TrackingEvent::PointerExited => self.pointer_exited(),
            TrackingEvent::OwnerMoved => self.owner_moved(),
        }
    }

    pub fn is_showing(&self) -> bool {
        self.overlay.as_ref().is_some_and(OverlayWindow::is_visible)
    }

    pub fn overlay(&self) -> Option<&OverlayWindow<H>> {
        self.overlay.as_ref()
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }
}

/// Decorated handlers produced by [`install_tracking`].
pub struct TrackingHandlers {
    pub entered: Handler<TrackingEvent>,
    pub exited: Handler<TrackingEvent>,
    pub moved: Handler<TrackingEvent>,
}

impl TrackingHandlers {
    /// Invoke the handler installed for `event`.
    pub fn dispatch(&self, event: TrackingEvent) {
        let handler = match event {
            TrackingEvent::PointerEntered => &self.entered,
            TrackingEvent::PointerExited => &self.exited,
            TrackingEvent::OwnerMoved => &self.moved,
        };
        handler(&event);
    }
}

/// Hook `controller` into the tracking events of `target`.
///
/// `original` supplies the handler the host had installed for each event;
/// it runs after the controller, so the owner keeps its normal behavior.
pub fn install_tracking<H>(
    registry: &HandlerRegistry<TrackingEvent>,
    target: &'static str,
    controller: Arc<Mutex<TooltipController<H>>>,
    mut original: impl FnMut(TrackingEvent) -> Handler<TrackingEvent>,
) -> Result<TrackingHandlers, OverlayError>
where
    H: WindowHost + 'static,
{
    let priors = TrackingEvent::ALL.map(&mut original);
    registry.register_overrides(
        TrackingEvent::ALL
            .iter()
            .zip(&priors)
            .map(|(event, prior)| (HandlerKey::new(target, event.event_name()), prior.clone())),
    )?;

    let [entered, exited, moved] = priors.map(|prior| {
        let controller = controller.clone();
        decorate(prior, move |event: &TrackingEvent| controller.lock().handle(*event))
    });
    let handlers = TrackingHandlers { entered, exited, moved };
    tracing::debug!(handler_target = target, "Tooltip tracking installed");
    Ok(handlers)
}
