//! Overview Chart Widget
//!
//! Monthly bandwidth as a vertical bar chart.

use std::sync::Arc;

use gpui::{AnyElement, App, IntoElement, ParentElement, SharedString, Styled, div, px};
use gpui_component::chart::BarChart;

use crate::components::composite::card::Card;
use crate::components::widget::{Cell, DashboardWidget, WidgetFrame, WidgetKind, WidgetRow};
use crate::constants::CHART_HEIGHT;
use crate::domain::chart::ChartPoint;
use crate::domain::dataset::DatasetSource;
use crate::i18n::{Locale, t};
use crate::theme::colors::SmiteColors;
use crate::utils::format::field_or_placeholder;

pub struct OverviewChart {
    source: Arc<dyn DatasetSource<ChartPoint>>,
}

impl OverviewChart {
    pub fn new(source: Arc<dyn DatasetSource<ChartPoint>>) -> Self {
        Self { source }
    }

    pub fn build_frame(&self, locale: Locale) -> WidgetFrame {
        let rows: Vec<_> = self
            .source
            .records()
            .iter()
            .map(|point| {
                let label = field_or_placeholder(&point.label);
                WidgetRow::new(
                    label.clone(),
                    vec![Cell::Bar {
                        label,
                        value: point.value,
                    }],
                )
            })
            .collect();

        WidgetFrame::new(t(locale, "chart.title"))
            .headers([t(locale, "chart.col_month"), t(locale, "chart.col_value")])
            .rows(rows)
    }
}

/// Bars as (label, value) pairs, in frame order
fn bars(frame: &WidgetFrame) -> Vec<(SharedString, u64)> {
    frame
        .rows
        .iter()
        .filter_map(|row| {
            row.cells.iter().find_map(|cell| match cell {
                Cell::Bar { label, value } => Some((label.clone(), *value)),
                _ => None,
            })
        })
        .collect()
}

impl DashboardWidget for OverviewChart {
    fn kind(&self) -> WidgetKind {
        WidgetKind::OverviewChart
    }

    fn frame(&self, locale: Locale, _cx: &App) -> WidgetFrame {
        self.build_frame(locale)
    }

    fn render_frame(&self, frame: WidgetFrame) -> AnyElement {
        let chart = BarChart::new(bars(&frame))
            .x(|(label, _)| label.clone())
            .y(|(_, value)| *value as f64)
            .fill(|_| SmiteColors::chart());

        Card::new(self.kind().id())
            .title(frame.title)
            .child(div().px_6().pb_6().h(px(CHART_HEIGHT)).child(chart))
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::StaticDataset;
    use crate::domain::sample;

    fn widget(points: Vec<ChartPoint>) -> OverviewChart {
        OverviewChart::new(StaticDataset::new(points).shared())
    }

    #[test]
    fn one_bar_per_month_in_order() {
        let frame = widget(sample::monthly_bandwidth()).build_frame(Locale::EnUS);
        let bars = bars(&frame);
        assert_eq!(bars.len(), 12);
        assert_eq!(bars[0], ("Jan".into(), 4500));
        assert_eq!(bars[6], ("Jul".into(), 5500));
        assert_eq!(bars[11], ("Dec".into(), 1600));
        assert_eq!(frame.headers.len(), 2);
    }

    #[test]
    fn blank_month_uses_placeholder() {
        let frame = widget(vec![ChartPoint::new("", 10)]).build_frame(Locale::EnUS);
        assert_eq!(bars(&frame), vec![(crate::constants::PLACEHOLDER.into(), 10)]);
    }

    #[test]
    fn empty_dataset_draws_no_bars() {
        let frame = widget(Vec::new()).build_frame(Locale::EnUS);
        assert!(!frame.title.is_empty());
        assert!(bars(&frame).is_empty());
    }
}
