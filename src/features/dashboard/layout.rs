//! Dashboard Layout
//!
//! Where each widget sits. Rows are laid out top to bottom; within a row the
//! spans are shares of a grid of `GRID_COLUMNS` columns.

use crate::components::widget::WidgetKind;
use crate::constants::GRID_COLUMNS;

/// A widget placed in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSlot {
    pub kind: WidgetKind,
    /// Columns taken out of `GRID_COLUMNS`
    pub span: u16,
}

impl WidgetSlot {
    pub const fn new(kind: WidgetKind, span: u16) -> Self {
        Self { kind, span }
    }

    /// Slot spanning the whole row
    pub const fn full(kind: WidgetKind) -> Self {
        Self::new(kind, GRID_COLUMNS)
    }

    /// Fraction of the row width
    pub fn fraction(&self) -> f32 {
        f32::from(self.span) / f32::from(GRID_COLUMNS)
    }
}

pub const DASHBOARD_LAYOUT: &[&[WidgetSlot]] = &[
    &[WidgetSlot::full(WidgetKind::TabStrip)],
    &[WidgetSlot::full(WidgetKind::StatsSummary)],
    &[
        WidgetSlot::new(WidgetKind::OverviewChart, 4),
        WidgetSlot::new(WidgetKind::RecentActivity, 3),
    ],
    &[WidgetSlot::full(WidgetKind::ConnectionTable)],
];

/// Widgets in reading order
pub fn widget_order() -> Vec<WidgetKind> {
    DASHBOARD_LAYOUT
        .iter()
        .flat_map(|row| row.iter().map(|slot| slot.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widgets_in_reading_order() {
        assert_eq!(
            widget_order(),
            vec![
                WidgetKind::TabStrip,
                WidgetKind::StatsSummary,
                WidgetKind::OverviewChart,
                WidgetKind::RecentActivity,
                WidgetKind::ConnectionTable,
            ]
        );
    }

    #[test]
    fn every_row_fills_the_grid() {
        for row in DASHBOARD_LAYOUT {
            let total: u16 = row.iter().map(|slot| slot.span).sum();
            assert_eq!(total, GRID_COLUMNS, "{:?}", row);
        }
    }

    #[test]
    fn chart_is_wider_than_activity() {
        let row = DASHBOARD_LAYOUT[2];
        assert!(row[0].fraction() > row[1].fraction());
        assert!((row[0].fraction() + row[1].fraction() - 1.0).abs() < f32::EPSILON);
    }
}
