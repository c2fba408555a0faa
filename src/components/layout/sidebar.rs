//! Sidebar Component
//!
//! Collapsible navigation sidebar. Icons are always drawn; the brand and the
//! entry labels only while the sidebar is open.

use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    Stateful, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::Icon;

use crate::app::navigation::NavItem;
use crate::assets::AppIcon;
use crate::components::primitives::button::Button;
use crate::i18n::{Locale, t};
use crate::state::sidebar_state::SidebarState;
use crate::theme::colors::SmiteColors;

/// What a single navigation entry shows
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub item: NavItem,
    pub icon: AppIcon,
    /// Present only while the sidebar is open
    pub label: Option<SharedString>,
    pub active: bool,
}

/// Sidebar component
#[derive(IntoElement)]
pub struct Sidebar {
    state: SidebarState,
    locale: Locale,
    active: NavItem,
    on_toggle: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Sidebar {
    pub fn new(state: SidebarState, locale: Locale) -> Self {
        Self {
            state,
            locale,
            active: NavItem::Dashboard,
            on_toggle: None,
        }
    }

    /// Set the handler for the menu (collapse) button
    pub fn on_toggle(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    /// Whether the brand is drawn next to the menu button
    pub fn shows_brand(&self) -> bool {
        self.state.is_open()
    }

    pub fn width(&self) -> f32 {
        self.state.width()
    }

    /// Entries of the main navigation list
    pub fn entries(&self) -> Vec<NavEntry> {
        NavItem::primary().iter().map(|item| self.entry(*item)).collect()
    }

    /// Entries pinned to the footer
    pub fn footer_entries(&self) -> Vec<NavEntry> {
        NavItem::footer().iter().map(|item| self.entry(*item)).collect()
    }

    fn entry(&self, item: NavItem) -> NavEntry {
        NavEntry {
            item,
            icon: item.icon(),
            label: self
                .state
                .is_open()
                .then(|| t(self.locale, item.title_key())),
            active: item == self.active,
        }
    }

    fn render_entry(entry: NavEntry) -> Stateful<gpui::Div> {
        let (bg, fg) = if entry.active {
            (SmiteColors::accent(), SmiteColors::foreground())
        } else {
            (SmiteColors::transparent(), SmiteColors::muted_foreground())
        };
        let centered = entry.label.is_none();

        div()
            .id(SharedString::from(format!("nav-{:?}", entry.item)))
            .w_full()
            .flex()
            .items_center()
            .gap_3()
            .px_3()
            .py_2()
            .rounded_lg()
            .bg(bg)
            .text_color(fg)
            .cursor_pointer()
            .hover(|s| s.bg(SmiteColors::accent()).text_color(SmiteColors::foreground()))
            .when(centered, |this| this.justify_center())
            .child(Icon::from(entry.icon).size_5())
            .when_some(entry.label, |this, label| {
                this.child(
                    div()
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .child(label),
                )
            })
    }
}

impl RenderOnce for Sidebar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let entries = self.entries();
        let footer = self.footer_entries();
        let show_brand = self.shows_brand();
        let brand = t(self.locale, "app.brand");

        let mut toggle = Button::icon("sidebar-toggle", AppIcon::Menu);
        if let Some(handler) = self.on_toggle {
            toggle = toggle.on_click(handler);
        }

        div()
            .w(px(self.state.width()))
            .h_full()
            .flex_none()
            .flex()
            .flex_col()
            .bg(SmiteColors::card())
            .border_r_1()
            .border_color(SmiteColors::border())
            // Brand and toggle
            .child(
                div()
                    .p_4()
                    .flex()
                    .items_center()
                    .when(show_brand, |this| this.justify_between())
                    .when(!show_brand, |this| this.justify_center())
                    .border_b_1()
                    .border_color(SmiteColors::border())
                    .when(show_brand, |this| {
                        this.child(
                            div()
                                .text_xl()
                                .font_weight(gpui::FontWeight::BOLD)
                                .text_color(SmiteColors::foreground())
                                .child(brand),
                        )
                    })
                    .child(toggle),
            )
            // Navigation
            .child(
                div()
                    .flex_1()
                    .p_3()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .children(entries.into_iter().map(Self::render_entry)),
            )
            // Footer
            .child(
                div()
                    .p_3()
                    .border_t_1()
                    .border_color(SmiteColors::border())
                    .children(footer.into_iter().map(Self::render_entry)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_sidebar_shows_labels_and_brand() {
        let sidebar = Sidebar::new(SidebarState::Open, Locale::EnUS);
        assert!(sidebar.shows_brand());

        let labels: Vec<_> = sidebar
            .entries()
            .into_iter()
            .map(|e| e.label.map(|l| l.to_string()))
            .collect();
        assert_eq!(
            labels,
            vec![
                Some("Dashboard".to_string()),
                Some("Tunnels".to_string()),
                Some("Users".to_string()),
                Some("Settings".to_string()),
            ]
        );
        assert_eq!(
            sidebar.footer_entries()[0].label.as_ref().map(|l| l.as_ref()),
            Some("Logout")
        );
    }

    #[test]
    fn collapsed_sidebar_keeps_icons_only() {
        let sidebar = Sidebar::new(SidebarState::Open.toggled(), Locale::EnUS);
        assert!(!sidebar.shows_brand());
        assert_eq!(sidebar.width(), crate::constants::SIDEBAR_COLLAPSED_WIDTH);

        let entries: Vec<_> = sidebar
            .entries()
            .into_iter()
            .chain(sidebar.footer_entries())
            .collect();
        assert_eq!(entries.len(), 5);
        for entry in &entries {
            assert!(entry.label.is_none(), "{:?} still labelled", entry.item);
            assert_eq!(entry.icon, entry.item.icon());
        }
    }

    #[test]
    fn dashboard_entry_is_active() {
        let sidebar = Sidebar::new(SidebarState::Collapsed, Locale::EnUS);
        let active: Vec<_> = sidebar
            .entries()
            .into_iter()
            .filter(|e| e.active)
            .map(|e| e.item)
            .collect();
        assert_eq!(active, vec![NavItem::Dashboard]);
    }
}
