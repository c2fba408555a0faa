//! Connection Table Widget
//!
//! Active connections with a status badge per row. Missing fields are drawn
//! as a placeholder rather than left blank.

use std::sync::Arc;

use gpui::{AnyElement, App, IntoElement};

use crate::components::composite::card::Card;
use crate::components::composite::data_table::{Column, DataTable};
use crate::components::widget::{
    BadgeTone, Cell, DashboardWidget, WidgetFrame, WidgetKind, WidgetRow,
};
use crate::domain::connection::{ConnectionRecord, ConnectionStatus};
use crate::domain::dataset::DatasetSource;
use crate::i18n::{Locale, t};
use crate::utils::format::field_or_placeholder;

pub struct ConnectionTable {
    source: Arc<dyn DatasetSource<ConnectionRecord>>,
}

impl ConnectionTable {
    pub fn new(source: Arc<dyn DatasetSource<ConnectionRecord>>) -> Self {
        Self { source }
    }

    pub fn columns() -> Vec<Column> {
        vec![
            Column::new("tunnel", "connections.col_tunnel").flex_width(120.0),
            Column::new("user", "connections.col_user").flex_width(180.0),
            Column::new("ip", "connections.col_ip").flex_width(130.0),
            Column::new("bandwidth", "connections.col_bandwidth").fixed_width(120.0),
            Column::new("duration", "connections.col_duration").fixed_width(110.0),
            Column::new("status", "connections.col_status").fixed_width(120.0),
        ]
    }

    pub fn build_frame(&self, locale: Locale) -> WidgetFrame {
        let rows: Vec<_> = self
            .source
            .records()
            .iter()
            .map(|record| Self::row(record, locale))
            .collect();

        WidgetFrame::new(t(locale, "connections.title"))
            .headers(Self::columns().iter().map(|c| c.label(locale)))
            .rows(rows)
            .empty_message(t(locale, "connections.empty"))
    }

    fn row(record: &ConnectionRecord, locale: Locale) -> WidgetRow {
        let key = if record.id.trim().is_empty() {
            &record.tunnel
        } else {
            &record.id
        };

        WidgetRow::new(
            field_or_placeholder(key),
            vec![
                Cell::Text(field_or_placeholder(&record.tunnel)),
                Cell::Muted(field_or_placeholder(&record.user)),
                Cell::Mono(field_or_placeholder(&record.ip)),
                Cell::Text(field_or_placeholder(&record.bandwidth)),
                Cell::Muted(field_or_placeholder(&record.duration)),
                Cell::Badge {
                    label: t(locale, record.status.label_key()),
                    tone: status_tone(record.status),
                },
            ],
        )
    }
}

pub fn status_tone(status: ConnectionStatus) -> BadgeTone {
    match status {
        ConnectionStatus::Active => BadgeTone::Success,
        ConnectionStatus::Warning => BadgeTone::Warning,
    }
}

impl DashboardWidget for ConnectionTable {
    fn kind(&self) -> WidgetKind {
        WidgetKind::ConnectionTable
    }

    fn frame(&self, locale: Locale, _cx: &App) -> WidgetFrame {
        self.build_frame(locale)
    }

    fn render_frame(&self, frame: WidgetFrame) -> AnyElement {
        let mut table = DataTable::new(Self::columns(), frame.headers, frame.rows);
        if let Some(message) = frame.empty_message {
            table = table.empty_message(message);
        }

        Card::new(self.kind().id())
            .title(frame.title)
            .child(table)
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PLACEHOLDER;
    use crate::domain::dataset::StaticDataset;
    use crate::domain::sample;

    fn widget(records: Vec<ConnectionRecord>) -> ConnectionTable {
        ConnectionTable::new(StaticDataset::new(records).shared())
    }

    #[test]
    fn only_us_west_2_warns() {
        let frame = widget(sample::active_connections()).build_frame(Locale::EnUS);
        assert_eq!(frame.row_count(), 4);
        assert_eq!(frame.headers.len(), ConnectionTable::columns().len());

        let tones: Vec<_> = frame.rows.iter().map(WidgetRow::badge_tone).collect();
        assert_eq!(
            tones,
            vec![
                Some(BadgeTone::Success),
                Some(BadgeTone::Success),
                Some(BadgeTone::Success),
                Some(BadgeTone::Warning),
            ]
        );
        assert_eq!(frame.rows[3].cells[0], Cell::Text("US-West-2".into()));
    }

    #[test]
    fn tones_are_disjoint() {
        assert_ne!(
            status_tone(ConnectionStatus::Active),
            status_tone(ConnectionStatus::Warning)
        );
    }

    #[test]
    fn missing_fields_show_placeholder() {
        let mut record = sample::active_connections().remove(0);
        record.user = String::new();
        record.ip = "  ".into();
        let frame = widget(vec![record]).build_frame(Locale::EnUS);

        assert_eq!(frame.rows[0].cells[1], Cell::Muted(PLACEHOLDER.into()));
        assert_eq!(frame.rows[0].cells[2], Cell::Mono(PLACEHOLDER.into()));
    }

    #[test]
    fn empty_dataset_keeps_headers_and_message() {
        let frame = widget(Vec::new()).build_frame(Locale::EnUS);
        assert!(frame.is_empty());
        assert_eq!(frame.headers.len(), 6);
        assert!(frame.empty_message.is_some());
    }
}
