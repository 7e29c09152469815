//! Dashboard handlers.
//!
//! ## Queries
//! - Get spend metrics for the dashboard

mod get_dashboard_metrics;

pub use get_dashboard_metrics::{
    GetDashboardMetricsHandler, GetDashboardMetricsQuery, GetDashboardMetricsResult,
};
