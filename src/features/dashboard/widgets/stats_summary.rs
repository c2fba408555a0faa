//! Stats Summary Widget
//!
//! Four headline cards: title with icon, value and a change note.

use std::sync::Arc;

use gpui::{
    AnyElement, App, IntoElement, ParentElement, SharedString, Styled, div, prelude::*, px,
};

use crate::assets::AppIcon;
use crate::components::composite::card::Card;
use crate::components::widget::{
    Cell, DashboardWidget, WidgetFrame, WidgetKind, WidgetRow, empty_state, render_cell,
    render_empty_card,
};
use crate::domain::dataset::DatasetSource;
use crate::domain::stat::{StatCard, StatIcon};
use crate::i18n::{Locale, t};
use crate::theme::colors::SmiteColors;
use crate::utils::format::field_or_placeholder;

pub struct StatsSummary {
    source: Arc<dyn DatasetSource<StatCard>>,
}

impl StatsSummary {
    pub fn new(source: Arc<dyn DatasetSource<StatCard>>) -> Self {
        Self { source }
    }

    pub fn build_frame(&self, locale: Locale) -> WidgetFrame {
        let records = self.source.records();
        let rows = records.iter().map(|card| {
            let title = field_or_placeholder(&card.title);
            WidgetRow::new(
                title.clone(),
                vec![
                    Cell::Muted(title),
                    Cell::Icon(stat_icon(card.icon)),
                    Cell::Strong(field_or_placeholder(&card.value)),
                    Cell::Trend(field_or_placeholder(&card.change_text)),
                ],
            )
        });

        WidgetFrame::new(t(locale, "stats.title"))
            .rows(rows.collect::<Vec<_>>())
            .empty_message(t(locale, "widget.empty"))
    }

    fn render_card(index: usize, row: &WidgetRow) -> AnyElement {
        let card = Card::new(SharedString::from(format!("stat-{}", index)));
        let body = match row.cells.as_slice() {
            [title, icon, value, change] => div()
                .px_6()
                .py_6()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .flex()
                        .items_center()
                        .justify_between()
                        .pb_2()
                        .child(render_cell(title))
                        .child(render_cell(icon)),
                )
                .child(render_cell(value))
                .child(render_cell(change)),
            cells => div()
                .p_6()
                .flex()
                .flex_col()
                .gap_1()
                .children(cells.iter().map(render_cell)),
        };
        card.child(body).into_any_element()
    }
}

fn stat_icon(icon: StatIcon) -> AppIcon {
    match icon {
        StatIcon::DollarSign => AppIcon::DollarSign,
        StatIcon::Activity => AppIcon::Activity,
        StatIcon::Users => AppIcon::Users,
        StatIcon::TrendingUp => AppIcon::TrendingUp,
    }
}

impl DashboardWidget for StatsSummary {
    fn kind(&self) -> WidgetKind {
        WidgetKind::StatsSummary
    }

    fn frame(&self, locale: Locale, _cx: &App) -> WidgetFrame {
        self.build_frame(locale)
    }

    fn render_frame(&self, frame: WidgetFrame) -> AnyElement {
        if let Some((title, message)) = empty_state(&frame) {
            return render_empty_card(self.kind(), title, message);
        }

        div()
            .id(self.kind().id())
            .w_full()
            .flex()
            .gap_4()
            .text_color(SmiteColors::foreground())
            .children(frame.rows.iter().enumerate().map(|(index, row)| {
                div()
                    .flex_1()
                    .min_w(px(0.0))
                    .child(Self::render_card(index, row))
            }))
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::StaticDataset;
    use crate::domain::sample;

    fn widget(cards: Vec<StatCard>) -> StatsSummary {
        StatsSummary::new(StaticDataset::new(cards).shared())
    }

    #[test]
    fn four_cards_in_order() {
        let frame = widget(sample::stat_cards()).build_frame(Locale::EnUS);
        let keys: Vec<_> = frame.rows.iter().map(|r| r.key.to_string()).collect();
        assert_eq!(
            keys,
            vec!["Total Bandwidth", "Active Tunnels", "Connected Users", "Active Now"]
        );
        assert!(frame.rows.iter().all(WidgetRow::has_icon));
    }

    #[test]
    fn card_cells_carry_value_and_change() {
        let frame = widget(sample::stat_cards()).build_frame(Locale::EnUS);
        let first = &frame.rows[0];
        assert_eq!(first.cells[1], Cell::Icon(AppIcon::DollarSign));
        assert_eq!(first.cells[2], Cell::Strong("1.2 TB".into()));
        assert_eq!(first.cells[3], Cell::Trend("+20.1% from last month".into()));
    }

    #[test]
    fn empty_dataset_renders_titled_card() {
        let frame = widget(Vec::new()).build_frame(Locale::EnUS);
        assert!(frame.is_empty());

        let (title, message) = empty_state(&frame).unwrap_or_default();
        assert_eq!(title, t(Locale::EnUS, "stats.title"));
        assert_eq!(message.as_ref(), "No data");
    }

    #[test]
    fn sample_cards_skip_empty_state() {
        let frame = widget(sample::stat_cards()).build_frame(Locale::EnUS);
        assert!(empty_state(&frame).is_none());
    }

    #[test]
    fn blank_value_uses_placeholder() {
        let frame = widget(vec![StatCard {
            title: "Uptime".into(),
            value: " ".into(),
            change_text: String::new(),
            icon: StatIcon::Activity,
        }])
        .build_frame(Locale::EnUS);
        assert_eq!(frame.rows[0].cells[2], Cell::Strong(crate::constants::PLACEHOLDER.into()));
        assert_eq!(frame.rows[0].cells[3], Cell::Trend(crate::constants::PLACEHOLDER.into()));
    }
}
