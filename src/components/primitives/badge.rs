//! Badge Component

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div};

use crate::components::widget::frame::BadgeTone;
use crate::theme::colors::SmiteColors;

/// A small pill-shaped status label
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    tone: BadgeTone,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>, tone: BadgeTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, fg, border) = match self.tone {
            BadgeTone::Success => (
                SmiteColors::success_bg(),
                SmiteColors::success(),
                SmiteColors::transparent(),
            ),
            BadgeTone::Warning => (
                SmiteColors::warning_bg(),
                SmiteColors::warning(),
                SmiteColors::warning(),
            ),
        };

        div()
            .px_2p5()
            .py_0p5()
            .rounded_full()
            .border_1()
            .border_color(border)
            .bg(bg)
            .text_color(fg)
            .text_xs()
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .child(self.label)
    }
}
