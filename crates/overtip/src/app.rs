//! Demo window: one button that owns a rich tooltip.

use std::sync::Arc;

use gpui::{canvas, div, prelude::*, Context, IntoElement, Render, Window};
use overtip_core::{
    install_tracking, HandlerRegistry, OwnerId, ReadingDirection, Settings, TooltipController,
    TrackingEvent, TrackingHandlers,
};
use overtip_ui::layout::{radius, spacing};
use overtip_ui::{GpuiHost, OvertipTheme, RichTooltip};
use parking_lot::Mutex;

const OWNER: OwnerId = OwnerId(1);

/// Root view of the demo window.
pub struct DemoApp {
    host: Arc<GpuiHost>,
    /// Keeps the originals of the intercepted handlers alive.
    _registry: HandlerRegistry<TrackingEvent>,
    handlers: Option<Arc<TrackingHandlers>>,
    direction: ReadingDirection,
}

impl DemoApp {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let host = Arc::new(GpuiHost::new());
        match cx.primary_display() {
            Some(display) => host.set_display(display.bounds(), display.visible_bounds()),
            None => tracing::warn!("No primary display, tooltips are disabled"),
        }

        let settings = cx.global::<Settings>().clone();
        let controller = Arc::new(Mutex::new(TooltipController::new(
            host.clone(),
            OWNER,
            settings,
            || {
                RichTooltip::new(
                    "Rich tooltip",
                    "Placed below its owner and flipped above\n\
                     when the dock or screen bottom is in the way.",
                )
                .glyph("i")
            },
        )));

        let registry = HandlerRegistry::new();
        let handlers = install_tracking(&registry, "demo_button", controller, |event| {
            Arc::new(move |_: &TrackingEvent| tracing::trace!(?event, "Owner event"))
        });
        let handlers = match handlers {
            Ok(handlers) => Some(Arc::new(handlers)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install tooltip tracking");
                None
            }
        };

        Self { host, _registry: registry, handlers, direction: ReadingDirection::default() }
    }

    fn toggle_direction(&mut self) {
        self.direction = match self.direction {
            ReadingDirection::LeftToRight => ReadingDirection::RightToLeft,
            ReadingDirection::RightToLeft => ReadingDirection::LeftToRight,
        };
        self.host.set_reading_direction(self.direction);
        tracing::debug!(direction = ?self.direction, "Reading direction changed");
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<OvertipTheme>();
        let colors = theme.colors.clone();

        let hover_host = self.host.clone();
        let hover_handlers = self.handlers.clone();
        let bounds_host = self.host.clone();
        let bounds_handlers = self.handlers.clone();

        let direction_label = match self.direction {
            ReadingDirection::LeftToRight => "Reading direction: left to right",
            ReadingDirection::RightToLeft => "Reading direction: right to left",
        };

        div()
            .flex()
            .flex_col()
            .size_full()
            .items_center()
            .justify_center()
            .gap(spacing::LG)
            .bg(colors.background)
            .text_color(colors.text)
            .child(
                div()
                    .id("tooltip-owner")
                    .relative()
                    .px(spacing::LG)
                    .py(spacing::SM)
                    .rounded(radius::MD)
                    .bg(colors.accent)
                    .hover(|style| style.bg(colors.accent_hover))
                    .text_color(colors.background)
                    .child("Hover me")
                    .on_hover(move |hovered: &bool, _window, cx| {
                        let Some(handlers) = &hover_handlers else {
                            return;
                        };
                        let event = if *hovered {
                            TrackingEvent::PointerEntered
                        } else {
                            TrackingEvent::PointerExited
                        };
                        handlers.dispatch(event);
                        let host = hover_host.clone();
                        cx.defer(move |cx| host.flush(cx));
                    })
                    // Track the owner's screen bounds so placement can follow it.
                    .child(
                        canvas(
                            move |bounds, window, cx| {
                                if !bounds_host.set_owner_bounds(OWNER, window.bounds(), bounds) {
                                    return;
                                }
                                if let Some(handlers) = &bounds_handlers {
                                    handlers.dispatch(TrackingEvent::OwnerMoved);
                                }
                                if bounds_host.has_pending() {
                                    let host = bounds_host.clone();
                                    cx.defer(move |cx| host.flush(cx));
                                }
                            },
                            |_, _, _, _| {},
                        )
                        .absolute()
                        .top_0()
                        .left_0()
                        .size_full(),
                    ),
            )
            .child(
                div()
                    .id("direction-toggle")
                    .px(spacing::SM)
                    .py(spacing::XS)
                    .rounded(radius::MD)
                    .border_1()
                    .border_color(colors.border)
                    .text_sm()
                    .text_color(colors.text_muted)
                    .child(direction_label)
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.toggle_direction();
                        cx.notify();
                    })),
            )
    }
}
