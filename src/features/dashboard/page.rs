//! Dashboard Page
//!
//! Heading plus the widget grid. The page owns one widget per layout slot and
//! places them; it never reads their data.

use gpui::{
    App, Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px,
    relative,
};

use crate::app::entities::AppEntities;
use crate::components::widget::{DashboardWidget, WidgetKind};
use crate::features::dashboard::controller::DashboardDatasets;
use crate::features::dashboard::layout::DASHBOARD_LAYOUT;
use crate::features::dashboard::widgets::{
    ConnectionTable, OverviewChart, RecentActivity, StatsSummary, TabStrip,
};
use crate::i18n::t;
use crate::theme::colors::SmiteColors;
use crate::theme::typography::Typography;

struct PlacedWidget {
    fraction: f32,
    widget: Box<dyn DashboardWidget>,
}

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
    rows: Vec<Vec<PlacedWidget>>,
}

impl DashboardPage {
    pub fn new(
        entities: AppEntities,
        datasets: DashboardDatasets,
        tabs_interactive: bool,
        cx: &mut Context<Self>,
    ) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        let rows = DASHBOARD_LAYOUT
            .iter()
            .map(|row| {
                row.iter()
                    .map(|slot| PlacedWidget {
                        fraction: slot.fraction(),
                        widget: build_widget(slot.kind, &datasets, tabs_interactive, cx),
                    })
                    .collect()
            })
            .collect();

        Self { entities, rows }
    }
}

fn build_widget(
    kind: WidgetKind,
    datasets: &DashboardDatasets,
    tabs_interactive: bool,
    cx: &mut App,
) -> Box<dyn DashboardWidget> {
    match kind {
        WidgetKind::TabStrip => Box::new(TabStrip::new(
            datasets.tabs.clone(),
            tabs_interactive,
            cx,
        )),
        WidgetKind::StatsSummary => Box::new(StatsSummary::new(datasets.stats.clone())),
        WidgetKind::OverviewChart => Box::new(OverviewChart::new(datasets.chart.clone())),
        WidgetKind::RecentActivity => Box::new(RecentActivity::new(
            datasets.activity.clone(),
            datasets.monthly_connections,
        )),
        WidgetKind::ConnectionTable => {
            Box::new(ConnectionTable::new(datasets.connections.clone()))
        }
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let app: &App = cx;

        let heading = div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_size(px(Typography::TEXT_3XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(SmiteColors::foreground())
                    .child(t(locale, "page.title")),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(SmiteColors::muted_foreground())
                    .child(t(locale, "page.subtitle")),
            );

        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut line = div().w_full().flex().flex_row().items_start().gap_4();
            for placed in row {
                line = line.child(
                    div()
                        .flex_basis(relative(placed.fraction))
                        .flex_grow()
                        .flex_shrink()
                        .min_w(px(0.0))
                        .child(placed.widget.render(locale, app)),
                );
            }
            rows.push(line);
        }

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_6()
            .child(heading)
            .children(rows)
    }
}
