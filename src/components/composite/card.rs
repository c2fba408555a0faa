//! Card Component
//!
//! Bordered container with an optional title block, used by every widget.

use gpui::{
    AnyElement, App, ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::theme::colors::SmiteColors;
use crate::theme::typography::Typography;

/// Card component
#[derive(IntoElement)]
pub struct Card {
    id: ElementId,
    title: Option<SharedString>,
    description: Option<SharedString>,
    children: Vec<AnyElement>,
}

impl Card {
    /// Create a new card
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            children: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<SharedString>) -> Self {
        self.description = description;
        self
    }

    /// Add a child element to the card body
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let has_header = self.title.is_some() || self.description.is_some();

        div()
            .id(self.id)
            .w_full()
            .flex()
            .flex_col()
            .bg(SmiteColors::card())
            .border_1()
            .border_color(SmiteColors::border())
            .rounded_lg()
            .overflow_hidden()
            // Header
            .when(has_header, |this| {
                this.child(
                    div()
                        .px_6()
                        .pt_6()
                        .pb_4()
                        .flex()
                        .flex_col()
                        .gap_1p5()
                        .when_some(self.title, |this, title| {
                            this.child(
                                div()
                                    .text_size(px(Typography::TEXT_LG))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(SmiteColors::foreground())
                                    .child(title),
                            )
                        })
                        .when_some(self.description, |this, description| {
                            this.child(
                                div()
                                    .text_sm()
                                    .text_color(SmiteColors::muted_foreground())
                                    .child(description),
                            )
                        }),
                )
            })
            // Body
            .child(
                div()
                    .px_6()
                    .pb_6()
                    .when(!has_header, |this| this.pt_6())
                    .children(self.children),
            )
    }
}
