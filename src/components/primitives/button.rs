//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::Icon;

use crate::assets::AppIcon;
use crate::theme::colors::SmiteColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Transparent until hovered
    #[default]
    Ghost,
    /// Bordered, for header controls that carry a label
    Outline,
}

/// A button with an icon, a label, or both
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    icon: Option<AppIcon>,
    label: Option<SharedString>,
    variant: ButtonVariant,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            icon: None,
            label: None,
            variant: ButtonVariant::Ghost,
            on_click: None,
        }
    }

    /// Create a square ghost button showing only an icon
    pub fn icon(id: impl Into<ElementId>, icon: AppIcon) -> Self {
        Self::new(id).with_icon(icon)
    }

    pub fn with_icon(mut self, icon: AppIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let icon_only = self.label.is_none();

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .rounded_md()
            .text_sm()
            .text_color(SmiteColors::foreground())
            .cursor_pointer()
            .hover(|s| s.bg(SmiteColors::accent()))
            .when(icon_only, |this| this.size(px(40.0)))
            .when(!icon_only, |this| this.h(px(36.0)).px_3())
            .when(self.variant == ButtonVariant::Outline, |this| {
                this.border_1().border_color(SmiteColors::border())
            })
            .when_some(self.icon, |this, icon| {
                this.child(Icon::from(icon).size_5().text_color(SmiteColors::foreground()))
            })
            .when_some(self.label, |this, label| this.child(label));

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
