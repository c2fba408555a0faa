//! Tab Strip Widget
//!
//! Overview, Analytics, Reports and Notifications tabs above the dashboard.
//! The selection lives in a `TabsState` entity; an inert strip ignores clicks.

use std::sync::Arc;

use gpui::{
    AnyElement, App, AppContext, Entity, InteractiveElement, IntoElement, ParentElement, Rgba,
    SharedString, StatefulInteractiveElement, Styled, div, prelude::*,
};

use crate::app::navigation::DashboardTab;
use crate::components::widget::{
    Cell, DashboardWidget, WidgetFrame, WidgetKind, WidgetRow, empty_state, render_empty_card,
};
use crate::domain::dataset::DatasetSource;
use crate::i18n::{Locale, t};
use crate::state::tabs_state::TabsState;
use crate::theme::colors::SmiteColors;

pub struct TabStrip {
    source: Arc<dyn DatasetSource<DashboardTab>>,
    state: Entity<TabsState>,
}

impl TabStrip {
    pub fn new(
        source: Arc<dyn DatasetSource<DashboardTab>>,
        interactive: bool,
        cx: &mut App,
    ) -> Self {
        let state = cx.new(|_| TabsState::new(interactive));
        Self { source, state }
    }

    pub fn build_frame(tabs: &[DashboardTab], state: &TabsState, locale: Locale) -> WidgetFrame {
        let rows: Vec<_> = tabs
            .iter()
            .map(|tab| {
                WidgetRow::new(
                    tab.title_key(),
                    vec![Cell::Tab {
                        label: t(locale, tab.title_key()),
                        active: *tab == state.active(),
                    }],
                )
            })
            .collect();

        WidgetFrame::new(t(locale, "tab.strip"))
            .rows(rows)
            .empty_message(t(locale, "widget.empty"))
    }
}

/// The active tab is marked by an underline in the primary color
fn underline_color(active: bool) -> Rgba {
    if active {
        SmiteColors::primary()
    } else {
        SmiteColors::transparent()
    }
}

impl DashboardWidget for TabStrip {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TabStrip
    }

    fn frame(&self, locale: Locale, cx: &App) -> WidgetFrame {
        Self::build_frame(&self.source.records(), self.state.read(cx), locale)
    }

    fn render_frame(&self, frame: WidgetFrame) -> AnyElement {
        if let Some((title, message)) = empty_state(&frame) {
            return render_empty_card(self.kind(), title, message);
        }
        let tabs = self.source.records();

        div()
            .id(self.kind().id())
            .flex()
            .items_center()
            .gap_2()
            .border_b_1()
            .border_color(SmiteColors::border())
            .children(frame.rows.iter().zip(tabs.iter()).map(|(row, tab)| {
                let (label, active) = match row.cells.first() {
                    Some(Cell::Tab { label, active }) => (label.clone(), *active),
                    _ => (row.key.clone(), false),
                };
                let state = self.state.clone();
                let tab = *tab;

                div()
                    .id(SharedString::from(format!("tab-{:?}", tab)))
                    .px_4()
                    .py_2()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .border_b_2()
                    .border_color(underline_color(active))
                    .when(active, |this| this.text_color(SmiteColors::foreground()))
                    .when(!active, |this| {
                        this.text_color(SmiteColors::muted_foreground())
                            .hover(|s| s.text_color(SmiteColors::foreground()))
                    })
                    .on_click(move |_, window, cx| {
                        let changed = state.update(cx, |state, cx| {
                            let changed = state.select(tab);
                            if changed {
                                cx.notify();
                            }
                            changed
                        });
                        if changed {
                            tracing::debug!(?tab, "Dashboard tab selected");
                            window.refresh();
                        }
                    })
                    .child(label)
            }))
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_flags(frame: &WidgetFrame) -> Vec<bool> {
        frame
            .rows
            .iter()
            .map(|row| matches!(row.cells[0], Cell::Tab { active: true, .. }))
            .collect()
    }

    #[test]
    fn overview_is_active_initially() {
        let state = TabsState::default();
        let frame = TabStrip::build_frame(DashboardTab::all(), &state, Locale::EnUS);
        assert_eq!(frame.row_count(), 4);
        assert_eq!(active_flags(&frame), vec![true, false, false, false]);
        assert_eq!(
            frame.rows[3].cells[0].text().map(|s| s.to_string()),
            Some("Notifications".to_string())
        );
    }

    #[test]
    fn inert_strip_frame_never_moves() {
        let mut state = TabsState::new(false);
        state.select(DashboardTab::Reports);
        let frame = TabStrip::build_frame(DashboardTab::all(), &state, Locale::EnUS);
        assert_eq!(active_flags(&frame), vec![true, false, false, false]);
    }

    #[test]
    fn interactive_selection_is_reflected() {
        let mut state = TabsState::new(true);
        state.select(DashboardTab::Analytics);
        let frame = TabStrip::build_frame(DashboardTab::all(), &state, Locale::EnUS);
        assert_eq!(active_flags(&frame), vec![false, true, false, false]);
    }

    #[test]
    fn empty_tab_list_renders_titled_card() {
        let frame = TabStrip::build_frame(&[], &TabsState::default(), Locale::EnUS);
        assert!(frame.is_empty());

        let (title, message) = empty_state(&frame).unwrap_or_default();
        assert_eq!(title, t(Locale::EnUS, "tab.strip"));
        assert_eq!(message.as_ref(), "No data");
    }

    #[test]
    fn only_active_tab_is_underlined() {
        assert_eq!(underline_color(true), SmiteColors::primary());
        assert_eq!(underline_color(false), SmiteColors::transparent());
    }
}
