//! Activity - Recent Tunnel Activity Records

use serde::{Deserialize, Serialize};

/// One line of the recent-activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Display name (e.g. "Tunnel US-East")
    pub name: String,
    /// Tunnel host name
    pub host: String,
    /// Preformatted amount (e.g. "+$39.00")
    pub amount: String,
    /// Avatar initials
    pub initials: String,
}
