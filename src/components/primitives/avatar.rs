//! Avatar Component

use gpui::{App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, Window, div, px};

use crate::theme::colors::SmiteColors;

/// A round avatar showing initials
#[derive(IntoElement)]
pub struct Avatar {
    initials: SharedString,
    size: f32,
    bg: Rgba,
    fg: Rgba,
}

impl Avatar {
    pub fn new(initials: impl Into<SharedString>) -> Self {
        Self {
            initials: initials.into(),
            size: 40.0,
            bg: SmiteColors::accent(),
            fg: SmiteColors::foreground(),
        }
    }

    /// Diameter in pixels
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Swap to the primary colors (used for the signed-in user)
    pub fn primary(mut self) -> Self {
        self.bg = SmiteColors::primary();
        self.fg = SmiteColors::primary_foreground();
        self
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .size(px(self.size))
            .flex_none()
            .rounded_full()
            .bg(self.bg)
            .flex()
            .items_center()
            .justify_center()
            .text_color(self.fg)
            .text_xs()
            .font_weight(gpui::FontWeight::MEDIUM)
            .child(self.initials)
    }
}
