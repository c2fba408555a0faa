//! Connection - Active Tunnel Connection Records

use serde::{Deserialize, Serialize};

/// Health of a live connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Active,
    Warning,
}

impl ConnectionStatus {
    /// Get the translation key for the status label
    pub fn label_key(&self) -> &'static str {
        match self {
            ConnectionStatus::Active => "status.active",
            ConnectionStatus::Warning => "status.warning",
        }
    }
}

/// A user session riding on a tunnel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub id: String,
    /// Tunnel name (e.g. "US-East-1")
    pub tunnel: String,
    /// User identity
    pub user: String,
    /// Client IP address
    pub ip: String,
    /// Current throughput, preformatted (e.g. "125 MB/s")
    pub bandwidth: String,
    /// Session length, preformatted (e.g. "2h 34m")
    pub duration: String,
    pub status: ConnectionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_lowercase_names() {
        let status: ConnectionStatus = toml::Value::String("warning".into())
            .try_into()
            .expect("known status");
        assert_eq!(status, ConnectionStatus::Warning);
        assert_ne!(
            ConnectionStatus::Active.label_key(),
            ConnectionStatus::Warning.label_key()
        );
    }
}
