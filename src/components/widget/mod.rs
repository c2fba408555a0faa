//! Widget - Dashboard Widget Contract
//!
//! A widget owns (a handle to) one immutable dataset and renders it. Widgets
//! never share mutable state and never call into each other; the page only
//! decides where each one goes.

pub mod frame;

use gpui::{AnyElement, App, IntoElement, ParentElement, SharedString, Styled, div, px};
use gpui_component::Icon;

use crate::assets::AppIcon;
use crate::components::composite::card::Card;
use crate::components::primitives::avatar::Avatar;
use crate::components::primitives::badge::Badge;
use crate::constants::PLACEHOLDER;
use crate::i18n::Locale;
use crate::theme::colors::SmiteColors;
use crate::theme::typography::Typography;

pub use frame::{BadgeTone, Cell, WidgetFrame, WidgetRow};

/// The widget types that can be placed on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    TabStrip,
    StatsSummary,
    OverviewChart,
    RecentActivity,
    ConnectionTable,
}

impl WidgetKind {
    /// Element id prefix for the widget's root element
    pub fn id(&self) -> &'static str {
        match self {
            WidgetKind::TabStrip => "tab-strip",
            WidgetKind::StatsSummary => "stats-summary",
            WidgetKind::OverviewChart => "overview-chart",
            WidgetKind::RecentActivity => "recent-activity",
            WidgetKind::ConnectionTable => "connection-table",
        }
    }
}

/// A self-contained render unit
pub trait DashboardWidget: 'static {
    fn kind(&self) -> WidgetKind;

    /// Describe what to draw. Must not fail, even for an empty dataset.
    fn frame(&self, locale: Locale, cx: &App) -> WidgetFrame;

    /// Turn a frame into elements
    fn render_frame(&self, frame: WidgetFrame) -> AnyElement;

    fn render(&self, locale: Locale, cx: &App) -> AnyElement {
        let frame = self.frame(locale, cx);
        self.render_frame(frame)
    }
}

/// Title and message to show when a frame has no rows
pub fn empty_state(frame: &WidgetFrame) -> Option<(SharedString, SharedString)> {
    if !frame.is_empty() {
        return None;
    }
    let message = frame
        .empty_message
        .clone()
        .unwrap_or_else(|| SharedString::from(PLACEHOLDER));
    Some((frame.title.clone(), message))
}

/// Titled card with a muted message, drawn in place of a widget without rows
pub fn render_empty_card(
    kind: WidgetKind,
    title: SharedString,
    message: SharedString,
) -> AnyElement {
    Card::new(kind.id())
        .title(title)
        .child(
            div()
                .px_6()
                .pb_6()
                .text_sm()
                .text_color(SmiteColors::muted_foreground())
                .child(message),
        )
        .into_any_element()
}

/// Render a single cell with the default styling for its kind
pub fn render_cell(cell: &Cell) -> AnyElement {
    match cell {
        Cell::Text(text) => div()
            .text_sm()
            .text_color(SmiteColors::foreground())
            .child(text.clone())
            .into_any_element(),
        Cell::Muted(text) => div()
            .text_sm()
            .text_color(SmiteColors::muted_foreground())
            .child(text.clone())
            .into_any_element(),
        Cell::Mono(text) => div()
            .text_xs()
            .font_family("monospace")
            .text_color(SmiteColors::muted_foreground())
            .child(text.clone())
            .into_any_element(),
        Cell::Strong(text) => div()
            .text_size(px(Typography::TEXT_2XL))
            .font_weight(gpui::FontWeight::BOLD)
            .text_color(SmiteColors::foreground())
            .child(text.clone())
            .into_any_element(),
        Cell::Icon(icon) => Icon::from(*icon)
            .size_4()
            .text_color(SmiteColors::muted_foreground())
            .into_any_element(),
        Cell::Avatar(initials) => Avatar::new(initials.clone()).into_any_element(),
        Cell::Badge { label, tone } => Badge::new(label.clone(), *tone).into_any_element(),
        Cell::Trend(text) => div()
            .flex()
            .items_center()
            .gap_1()
            .text_xs()
            .text_color(SmiteColors::muted_foreground())
            .child(
                Icon::from(AppIcon::ArrowUp)
                    .size_3()
                    .text_color(SmiteColors::success()),
            )
            .child(text.clone())
            .into_any_element(),
        Cell::Bar { label, .. } | Cell::Tab { label, .. } => div()
            .text_sm()
            .text_color(SmiteColors::foreground())
            .child(label.clone())
            .into_any_element(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frame_keeps_title_and_message() {
        let frame = WidgetFrame::new("Stats").empty_message("No data");
        let (title, message) = empty_state(&frame).unwrap_or_default();
        assert_eq!(title.as_ref(), "Stats");
        assert_eq!(message.as_ref(), "No data");
    }

    #[test]
    fn empty_frame_without_message_uses_placeholder() {
        let frame = WidgetFrame::new("Tabs");
        let (_, message) = empty_state(&frame).unwrap_or_default();
        assert_eq!(message.as_ref(), PLACEHOLDER);
    }

    #[test]
    fn frame_with_rows_has_no_empty_state() {
        let frame = WidgetFrame::new("Stats").rows([WidgetRow::new("1", Vec::new())]);
        assert!(empty_state(&frame).is_none());
    }
}
