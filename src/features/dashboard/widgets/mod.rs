//! Dashboard Widgets

pub mod connection_table;
pub mod overview_chart;
pub mod recent_activity;
pub mod stats_summary;
pub mod tab_strip;

pub use connection_table::ConnectionTable;
pub use overview_chart::OverviewChart;
pub use recent_activity::RecentActivity;
pub use stats_summary::StatsSummary;
pub use tab_strip::TabStrip;
