//! Workspace - Layout Shell State
//!
//! The workspace owns the sidebar state and hands it down by value to the
//! sidebar each render. The page is injected into the shell's content slot.

use gpui::{
    AnyView, App, ClickEvent, Context, Entity, FocusHandle, InteractiveElement, IntoElement,
    ParentElement, Render, Styled, Window, div,
};
use tracing::debug;

use crate::app::actions::ToggleSidebar;
use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::shell::Shell;
use crate::components::layout::sidebar::Sidebar;
use crate::state::i18n_state::I18nState;
use crate::state::sidebar_state::SidebarState;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    sidebar: SidebarState,
    content: AnyView,
    focus_handle: FocusHandle,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        initial_sidebar: SidebarState,
        content: impl Into<AnyView>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Take focus so window-level key bindings reach this view
        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        Self {
            entities,
            sidebar: initial_sidebar,
            content: content.into(),
            focus_handle,
        }
    }

    pub fn sidebar_state(&self) -> SidebarState {
        self.sidebar
    }

    /// Flip the sidebar between open and collapsed
    pub fn toggle_sidebar(&mut self, cx: &mut Context<Self>) {
        self.sidebar.toggle();
        debug!(state = ?self.sidebar, "Sidebar toggled");
        cx.notify();
    }

    fn toggle_locale(i18n: &Entity<I18nState>, cx: &mut App) {
        i18n.update(cx, |i18n, cx| {
            i18n.toggle_locale();
            debug!(locale = ?i18n.locale, "Locale switched");
            cx.notify();
        });
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let i18n = self.entities.i18n.clone();

        let sidebar = Sidebar::new(self.sidebar, locale).on_toggle(cx.listener(
            |this, _event: &ClickEvent, _window, cx| {
                this.toggle_sidebar(cx);
            },
        ));

        let header = Header::new(locale).on_toggle_locale(move |_event, _window, cx| {
            Self::toggle_locale(&i18n, cx);
        });

        div()
            .size_full()
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|this, _: &ToggleSidebar, _window, cx| {
                this.toggle_sidebar(cx);
            }))
            .child(Shell::new(sidebar, header).content(self.content.clone()))
    }
}
