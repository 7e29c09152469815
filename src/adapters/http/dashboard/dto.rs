//! HTTP DTOs for the dashboard endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::dashboard::DashboardMetrics;

/// Query parameters for the dashboard endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardParams {
    /// YYYY-MM-DD; defaults to today (UTC).
    pub as_of: Option<String>,
}

/// Dashboard metrics together with the date they were computed for.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub as_of: NaiveDate,
    #[serde(flatten)]
    pub metrics: DashboardMetrics,
}
