//! Recent Activity Widget

use std::sync::Arc;

use gpui::{
    AnyElement, App, IntoElement, ParentElement, SharedString, Styled, div, prelude::*, px,
};

use crate::components::composite::card::Card;
use crate::components::widget::{
    Cell, DashboardWidget, WidgetFrame, WidgetKind, WidgetRow, render_cell,
};
use crate::domain::activity::ActivityRecord;
use crate::domain::dataset::DatasetSource;
use crate::i18n::{Locale, t, t_count};
use crate::theme::colors::SmiteColors;
use crate::utils::format::field_or_placeholder;

/// Feed of recent tunnel activity with a monthly connection count
pub struct RecentActivity {
    source: Arc<dyn DatasetSource<ActivityRecord>>,
    monthly_connections: u64,
}

impl RecentActivity {
    pub fn new(source: Arc<dyn DatasetSource<ActivityRecord>>, monthly_connections: u64) -> Self {
        Self {
            source,
            monthly_connections,
        }
    }

    pub fn build_frame(&self, locale: Locale) -> WidgetFrame {
        let rows: Vec<_> = self
            .source
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| {
                WidgetRow::new(
                    SharedString::from(format!("{}-{}", index, record.host)),
                    vec![
                        Cell::Avatar(field_or_placeholder(&record.initials)),
                        Cell::Text(field_or_placeholder(&record.name)),
                        Cell::Muted(field_or_placeholder(&record.host)),
                        Cell::Text(field_or_placeholder(&record.amount)),
                    ],
                )
            })
            .collect();

        WidgetFrame::new(t(locale, "activity.title"))
            .description(t_count(
                locale,
                "activity.description",
                self.monthly_connections,
            ))
            .rows(rows)
    }

    fn render_row(row: &WidgetRow) -> AnyElement {
        match row.cells.as_slice() {
            [avatar, name, host, amount] => div()
                .flex()
                .items_center()
                .gap_4()
                .child(render_cell(avatar))
                .child(
                    div()
                        .flex_1()
                        .min_w(px(0.0))
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(render_cell(name))
                        .child(render_cell(host)),
                )
                .child(
                    div()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .child(render_cell(amount)),
                )
                .into_any_element(),
            cells => div()
                .flex()
                .items_center()
                .gap_4()
                .children(cells.iter().map(render_cell))
                .into_any_element(),
        }
    }
}

impl DashboardWidget for RecentActivity {
    fn kind(&self) -> WidgetKind {
        WidgetKind::RecentActivity
    }

    fn frame(&self, locale: Locale, _cx: &App) -> WidgetFrame {
        self.build_frame(locale)
    }

    fn render_frame(&self, frame: WidgetFrame) -> AnyElement {
        Card::new(self.kind().id())
            .title(frame.title)
            .description(frame.description)
            .child(
                div()
                    .px_6()
                    .pb_6()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .text_color(SmiteColors::foreground())
                    .children(frame.rows.iter().map(Self::render_row)),
            )
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::StaticDataset;
    use crate::domain::sample;

    fn widget(records: Vec<ActivityRecord>, count: u64) -> RecentActivity {
        RecentActivity::new(StaticDataset::new(records).shared(), count)
    }

    #[test]
    fn description_quotes_monthly_count() {
        let frame = widget(sample::recent_activity(), 265).build_frame(Locale::EnUS);
        let description = frame.description.map(|d| d.to_string()).unwrap_or_default();
        assert!(description.contains("265"), "{}", description);
    }

    #[test]
    fn rows_follow_dataset_order() {
        let frame = widget(sample::recent_activity(), 265).build_frame(Locale::EnUS);
        assert_eq!(frame.row_count(), 5);
        assert_eq!(frame.rows[0].cells[0], Cell::Avatar("UE".into()));
        assert_eq!(frame.rows[0].cells[1], Cell::Text("Tunnel US-East".into()));
        assert_eq!(frame.rows[4].cells[2], Cell::Muted("eu-central-1.smite.local".into()));
        assert_eq!(frame.rows[4].cells[3], Cell::Text("+$39.00".into()));
    }

    #[test]
    fn duplicate_hosts_keep_distinct_keys() {
        let record = sample::recent_activity().remove(0);
        let frame = widget(vec![record.clone(), record], 0).build_frame(Locale::EnUS);
        assert_ne!(frame.rows[0].key, frame.rows[1].key);
    }

    #[test]
    fn empty_dataset_keeps_header() {
        let frame = widget(Vec::new(), 0).build_frame(Locale::EnUS);
        assert!(!frame.title.is_empty());
        assert!(frame.description.is_some());
        assert!(frame.is_empty());
    }
}
