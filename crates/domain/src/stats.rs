//! Directory-wide aggregate counters for the admin overview.

use serde::{Deserialize, Serialize};

/// Totals shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    pub service_count: i64,
    pub category_count: i64,
    /// Sum of every service's click count; zero when there are no services.
    pub total_clicks: i64,
}
