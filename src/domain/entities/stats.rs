use serde::{Deserialize, Serialize};

/// Card counters on the dashboard landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_authors: u64,
    pub in_active_authors: u64,
    pub active_students: u64,
    pub in_active_students: u64,
    pub total_active: u64,
    pub total_inactive: u64,
}
