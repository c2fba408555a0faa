//! Header Component
//!
//! The top bar with search, quick actions, language switcher and the signed-in
//! administrator.

use gpui::{
    App, ClickEvent, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*, px,
};
use gpui_component::Icon;

use crate::assets::AppIcon;
use crate::components::primitives::avatar::Avatar;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::constants::HEADER_HEIGHT;
use crate::i18n::{Locale, t};
use crate::theme::colors::SmiteColors;

/// Header component
#[derive(IntoElement)]
pub struct Header {
    locale: Locale,
    on_toggle_locale: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Header {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            on_toggle_locale: None,
        }
    }

    /// Set the language switcher handler
    pub fn on_toggle_locale(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_toggle_locale = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let locale = self.locale;

        let mut lang_switcher = Button::new("lang-switcher")
            .variant(ButtonVariant::Outline)
            .with_icon(AppIcon::Languages)
            .label(locale.display_name());
        if let Some(handler) = self.on_toggle_locale {
            lang_switcher = lang_switcher.on_click(handler);
        }

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_none()
            .px_6()
            .flex()
            .items_center()
            .justify_between()
            .gap_4()
            .bg(SmiteColors::card())
            .border_b_1()
            .border_color(SmiteColors::border())
            // Left side: search box
            .child(
                div()
                    .flex_1()
                    .max_w(px(576.0))
                    .h(px(40.0))
                    .px_3()
                    .flex()
                    .items_center()
                    .gap_2()
                    .rounded_md()
                    .border_1()
                    .border_color(SmiteColors::border())
                    .bg(SmiteColors::background())
                    .child(
                        Icon::from(AppIcon::Search)
                            .size_4()
                            .text_color(SmiteColors::muted_foreground()),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(SmiteColors::muted_foreground())
                            .child(t(locale, "header.search")),
                    ),
            )
            // Right side: actions and identity
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(Button::icon("notifications", AppIcon::Bell))
                    .child(Button::icon("theme-toggle", AppIcon::Moon))
                    .child(lang_switcher)
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_3()
                            .pl_3()
                            .border_l_1()
                            .border_color(SmiteColors::border())
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .items_end()
                                    .child(
                                        div()
                                            .text_sm()
                                            .font_weight(gpui::FontWeight::MEDIUM)
                                            .text_color(SmiteColors::foreground())
                                            .child(t(locale, "header.admin_name")),
                                    )
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(SmiteColors::muted_foreground())
                                            .child(t(locale, "header.admin_email")),
                                    ),
                            )
                            .child(Avatar::new("AU").size(32.0).primary()),
                    ),
            )
    }
}
