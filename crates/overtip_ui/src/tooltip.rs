//! Rich tooltip content and the view that renders it inside an overlay.
//!
//! The content is laid out like a classic rich tooltip: a square glyph on
//! the left, a bold title line and a smaller body underneath.

use gpui::{
    canvas, div, fill, point, prelude::*, px, size, Bounds, Context, FontWeight, Hsla, IntoElement,
    Pixels, Render, SharedString, Window,
};
use overtip_core::{BorderCanvas, BorderedContainer, ContentRegion, ScreenRect, Size};

use crate::layout::from_f64;
use crate::OvertipTheme;

/// Approximate advance of one character at the body text size.
const BODY_CHAR_WIDTH: f64 = 6.0;
/// Approximate advance of one character of the bold title.
const TITLE_CHAR_WIDTH: f64 = 8.5;
const TITLE_LINE_HEIGHT: f64 = 18.0;
const BODY_LINE_HEIGHT: f64 = 14.0;
/// Outer padding around glyph and text.
const PADDING: f64 = 5.0;

/// Title, body and optional glyph shown in a tooltip overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct RichTooltip {
    pub title: SharedString,
    pub body: SharedString,
    pub glyph: Option<SharedString>,
    size: Size,
}

impl RichTooltip {
    /// Create tooltip content sized from its text.
    pub fn new(title: impl Into<SharedString>, body: impl Into<SharedString>) -> Self {
        let title = title.into();
        let body = body.into();
        let size = Self::estimate_size(&title, &body, false);
        Self { title, body, glyph: None, size }
    }

    /// Add a square glyph to the left of the text.
    pub fn glyph(mut self, glyph: impl Into<SharedString>) -> Self {
        self.glyph = Some(glyph.into());
        self.size = Self::estimate_size(&self.title, &self.body, true);
        self
    }

    /// Override the estimated size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Glyph edge length; the glyph is as tall as the text block.
    pub fn glyph_extent(&self) -> f64 {
        Self::text_height(&self.body)
    }

    fn text_height(body: &str) -> f64 {
        TITLE_LINE_HEIGHT + body.lines().count() as f64 * BODY_LINE_HEIGHT
    }

    fn estimate_size(title: &str, body: &str, with_glyph: bool) -> Size {
        let title_width = title.chars().count() as f64 * TITLE_CHAR_WIDTH;
        let body_width = body
            .lines()
            .map(|line| line.chars().count() as f64 * BODY_CHAR_WIDTH)
            .fold(0.0, f64::max);
        let text_width = title_width.max(body_width);
        let text_height = Self::text_height(body);

        let glyph_width = if with_glyph { text_height + PADDING } else { 0.0 };
        Size::new(glyph_width + text_width + 3.0 * PADDING, text_height + 2.0 * PADDING)
    }
}

impl ContentRegion for RichTooltip {
    fn size(&self) -> Size {
        self.size
    }
}

/// Root view of an overlay window.
pub struct TooltipView {
    container: BorderedContainer<RichTooltip>,
}

impl TooltipView {
    pub fn new(container: BorderedContainer<RichTooltip>) -> Self {
        Self { container }
    }
}

/// Paints border strips as filled quads inside the element bounds.
struct QuadPainter<'a> {
    window: &'a mut Window,
    bounds: Bounds<Pixels>,
    local: ScreenRect,
    color: Hsla,
}

impl BorderCanvas for QuadPainter<'_> {
    fn fill_rect(&mut self, rect: ScreenRect) {
        // Strips come in y-up local space; GPUI paints y-down.
        let rect = rect.flipped_within(&self.local);
        let quad = Bounds::new(
            point(
                self.bounds.origin.x + from_f64(rect.origin.x),
                self.bounds.origin.y + from_f64(rect.origin.y),
            ),
            size(from_f64(rect.width()), from_f64(rect.height())),
        );
        self.window.paint_quad(fill(quad, self.color));
    }
}

impl Render for TooltipView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<OvertipTheme>();
        let colors = &theme.colors;
        let content = self.container.content().clone();
        let content_size = self.container.size();
        let glyph_extent = from_f64(content.glyph_extent());

        let border = self.container.clone();
        let border_color = colors.border;

        div()
            .relative()
            .w(from_f64(content_size.width))
            .h(from_f64(content_size.height))
            .overflow_hidden()
            .bg(colors.elevated_surface)
            .text_color(colors.text)
            .flex()
            .flex_row()
            .items_center()
            .gap(px(PADDING as f32))
            .p(px(PADDING as f32))
            .when_some(content.glyph, |this, glyph| {
                this.child(
                    div()
                        .flex()
                        .flex_none()
                        .items_center()
                        .justify_center()
                        .size(glyph_extent)
                        .text_color(colors.text_accent)
                        .text_xl()
                        .child(glyph),
                )
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(div().text_sm().font_weight(FontWeight::BOLD).child(content.title))
                    .child(div().text_xs().text_color(colors.text_muted).child(content.body)),
            )
            // Border is painted last so it sits above the content.
            .child(
                canvas(
                    |_, _, _| {},
                    move |bounds, _, window, _cx| {
                        let local = border.bounds();
                        let mut painter =
                            QuadPainter { window, bounds, local, color: border_color };
                        border.redraw(&mut painter);
                    },
                )
                .absolute()
                .top_0()
                .left_0()
                .size_full(),
            )
    }
}
