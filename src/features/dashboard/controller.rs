//! Dashboard Controller
//!
//! Loads the datasets the dashboard widgets display.

use std::sync::Arc;

use tracing::info;

use crate::app::navigation::DashboardTab;
use crate::domain::activity::ActivityRecord;
use crate::domain::chart::ChartPoint;
use crate::domain::connection::ConnectionRecord;
use crate::domain::dataset::{DatasetSource, StaticDataset};
use crate::domain::sample;
use crate::domain::stat::StatCard;

/// One dataset handle per widget
#[derive(Clone)]
pub struct DashboardDatasets {
    pub tabs: Arc<dyn DatasetSource<DashboardTab>>,
    pub stats: Arc<dyn DatasetSource<StatCard>>,
    pub chart: Arc<dyn DatasetSource<ChartPoint>>,
    pub activity: Arc<dyn DatasetSource<ActivityRecord>>,
    /// Count quoted in the activity feed description
    pub monthly_connections: u64,
    pub connections: Arc<dyn DatasetSource<ConnectionRecord>>,
}

impl DashboardDatasets {
    /// The bundled sample data
    pub fn sample() -> Self {
        Self {
            tabs: StaticDataset::new(DashboardTab::all().to_vec()).shared(),
            stats: StaticDataset::new(sample::stat_cards()).shared(),
            chart: StaticDataset::new(sample::monthly_bandwidth()).shared(),
            activity: StaticDataset::new(sample::recent_activity()).shared(),
            monthly_connections: sample::MONTHLY_CONNECTIONS,
            connections: StaticDataset::new(sample::active_connections()).shared(),
        }
    }

    /// Datasets without any records
    pub fn empty() -> Self {
        Self {
            tabs: StaticDataset::empty().shared(),
            stats: StaticDataset::empty().shared(),
            chart: StaticDataset::empty().shared(),
            activity: StaticDataset::empty().shared(),
            monthly_connections: 0,
            connections: StaticDataset::empty().shared(),
        }
    }
}

/// Dashboard page controller
#[derive(Debug, Default)]
pub struct DashboardController;

impl DashboardController {
    pub fn new() -> Self {
        Self
    }

    /// Load the datasets for every widget
    pub fn load_datasets(&self) -> DashboardDatasets {
        let datasets = DashboardDatasets::sample();
        info!(
            stats = datasets.stats.len(),
            chart = datasets.chart.len(),
            activity = datasets.activity.len(),
            connections = datasets.connections.len(),
            "Dashboard datasets loaded"
        );
        datasets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::DashboardConfig;
    use crate::state::sidebar_state::SidebarState;

    #[test]
    fn loads_sample_data() {
        let datasets = DashboardController::new().load_datasets();
        assert_eq!(datasets.tabs.len(), 4);
        assert_eq!(datasets.stats.len(), 4);
        assert_eq!(datasets.chart.len(), 12);
        assert_eq!(datasets.activity.len(), 5);
        assert_eq!(datasets.connections.len(), 4);
        assert_eq!(datasets.monthly_connections, 265);
    }

    #[test]
    fn default_load_opens_sidebar_with_four_stats() {
        let config = DashboardConfig::default();
        let sidebar = SidebarState::from_open(config.sidebar_open);
        assert_eq!(sidebar, SidebarState::Open);

        let datasets = DashboardDatasets::sample();
        let titles: Vec<_> = datasets
            .stats
            .records()
            .iter()
            .map(|card| card.title.clone())
            .collect();
        assert_eq!(
            titles,
            vec!["Total Bandwidth", "Active Tunnels", "Connected Users", "Active Now"]
        );
    }

    #[test]
    fn empty_datasets_have_no_records() {
        let datasets = DashboardDatasets::empty();
        assert!(datasets.tabs.is_empty());
        assert!(datasets.stats.is_empty());
        assert!(datasets.chart.is_empty());
        assert!(datasets.activity.is_empty());
        assert!(datasets.connections.is_empty());
    }
}
