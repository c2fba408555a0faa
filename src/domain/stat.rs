//! Stat - Summary Stat Cards

use serde::{Deserialize, Serialize};

/// Icon shown in the corner of a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatIcon {
    DollarSign,
    Activity,
    Users,
    TrendingUp,
}

/// A headline figure with its trend line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    /// Preformatted value (e.g. "1.2 TB")
    pub value: String,
    /// Trend description (e.g. "+20.1% from last month")
    pub change_text: String,
    pub icon: StatIcon,
}
