//! Dashboard module - spend metrics derived from a user's subscriptions.
//!
//! Metrics are read-only projections. They are recomputed from the current
//! subscription list on every request and never stored.

mod aggregator;
mod metrics;

pub use aggregator::{
    AggregationPolicy, SpendAggregator, DEFAULT_RENEWAL_WINDOW_DAYS, DEFAULT_TOP_SPENDERS_LIMIT,
};
pub use metrics::{DashboardMetrics, NormalizationWarning, RenewalEntry, SpenderEntry};
