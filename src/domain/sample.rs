//! Sample - Bundled Demo Datasets
//!
//! The dashboard ships with fixed sample data until a live panel backend exists.

use super::activity::ActivityRecord;
use super::chart::ChartPoint;
use super::connection::{ConnectionRecord, ConnectionStatus};
use super::stat::{StatCard, StatIcon};

/// Connections counted this month, shown under the activity feed title
pub const MONTHLY_CONNECTIONS: u64 = 265;

fn stat(title: &str, value: &str, change_text: &str, icon: StatIcon) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change_text: change_text.to_string(),
        icon,
    }
}

pub fn stat_cards() -> Vec<StatCard> {
    vec![
        stat("Total Bandwidth", "1.2 TB", "+20.1% from last month", StatIcon::DollarSign),
        stat("Active Tunnels", "+2,350", "+180.1% from last month", StatIcon::Activity),
        stat("Connected Users", "+12,234", "+19% from last month", StatIcon::Users),
        stat("Active Now", "+573", "+201 since last hour", StatIcon::TrendingUp),
    ]
}

pub fn monthly_bandwidth() -> Vec<ChartPoint> {
    [
        ("Jan", 4500),
        ("Feb", 5000),
        ("Mar", 3800),
        ("Apr", 2100),
        ("May", 4400),
        ("Jun", 2400),
        ("Jul", 5500),
        ("Aug", 1800),
        ("Sep", 3100),
        ("Oct", 1500),
        ("Nov", 1600),
        ("Dec", 1600),
    ]
    .into_iter()
    .map(|(label, value)| ChartPoint::new(label, value))
    .collect()
}

fn activity(name: &str, host: &str, amount: &str, initials: &str) -> ActivityRecord {
    ActivityRecord {
        name: name.to_string(),
        host: host.to_string(),
        amount: amount.to_string(),
        initials: initials.to_string(),
    }
}

pub fn recent_activity() -> Vec<ActivityRecord> {
    vec![
        activity("Tunnel US-East", "us-east-1.smite.local", "+$1,999.00", "UE"),
        activity("Tunnel EU-West", "eu-west-1.smite.local", "+$39.00", "EW"),
        activity("Tunnel Asia-Pacific", "ap-south-1.smite.local", "+$299.00", "AP"),
        activity("Tunnel US-West", "us-west-2.smite.local", "+$99.00", "UW"),
        activity("Tunnel EU-Central", "eu-central-1.smite.local", "+$39.00", "EC"),
    ]
}

fn connection(
    id: &str,
    tunnel: &str,
    user: &str,
    ip: &str,
    bandwidth: &str,
    duration: &str,
    status: ConnectionStatus,
) -> ConnectionRecord {
    ConnectionRecord {
        id: id.to_string(),
        tunnel: tunnel.to_string(),
        user: user.to_string(),
        ip: ip.to_string(),
        bandwidth: bandwidth.to_string(),
        duration: duration.to_string(),
        status,
    }
}

pub fn active_connections() -> Vec<ConnectionRecord> {
    use ConnectionStatus::{Active, Warning};

    vec![
        connection("1", "US-East-1", "user@example.com", "192.168.1.100", "125 MB/s", "2h 34m", Active),
        connection("2", "EU-West-1", "admin@company.com", "10.0.1.45", "89 MB/s", "5h 12m", Active),
        connection("3", "AP-South-1", "dev@startup.io", "172.16.0.20", "234 MB/s", "1h 05m", Active),
        connection("4", "US-West-2", "support@service.com", "192.168.2.150", "67 MB/s", "45m", Warning),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sizes() {
        assert_eq!(stat_cards().len(), 4);
        assert_eq!(monthly_bandwidth().len(), 12);
        assert_eq!(recent_activity().len(), 5);
        assert_eq!(active_connections().len(), 4);
    }

    #[test]
    fn only_last_connection_warns() {
        let statuses: Vec<_> = active_connections().iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![
                ConnectionStatus::Active,
                ConnectionStatus::Active,
                ConnectionStatus::Active,
                ConnectionStatus::Warning,
            ]
        );
    }
}
