//! Shell Component
//!
//! Arranges sidebar, header and a single content slot. The shell never looks
//! inside the slot.

use gpui::{
    AnyView, App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*,
};

use super::header::Header;
use super::sidebar::Sidebar;
use crate::theme::colors::SmiteColors;

/// Application shell wrapper
#[derive(IntoElement)]
pub struct Shell {
    sidebar: Sidebar,
    header: Header,
    content: Option<AnyView>,
}

impl Shell {
    pub fn new(sidebar: Sidebar, header: Header) -> Self {
        Self {
            sidebar,
            header,
            content: None,
        }
    }

    /// Fill the content slot
    pub fn content(mut self, content: impl Into<AnyView>) -> Self {
        self.content = Some(content.into());
        self
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_row()
            .bg(SmiteColors::background())
            .text_color(SmiteColors::foreground())
            .child(self.sidebar)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.header)
                    .child(
                        div()
                            .id("page-content")
                            .flex_1()
                            .overflow_y_scroll()
                            .p_6()
                            .children(self.content),
                    ),
            )
    }
}
