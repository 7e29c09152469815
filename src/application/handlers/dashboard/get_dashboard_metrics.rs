//! GetDashboardMetricsHandler - Query handler for the spend dashboard.
//!
//! Loads the user's subscriptions from the gateway and reduces them with the
//! configured aggregation policy. Metrics are never cached.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::dashboard::{AggregationPolicy, DashboardMetrics, SpendAggregator};
use crate::domain::foundation::UserId;
use crate::ports::SubscriptionGateway;

use super::super::subscription::SubscriptionCommandError;

/// Query to compute dashboard metrics.
#[derive(Debug, Clone)]
pub struct GetDashboardMetricsQuery {
    pub user_id: UserId,
    /// Calendar date the renewal window starts from.
    pub as_of: NaiveDate,
}

pub type GetDashboardMetricsResult = DashboardMetrics;

pub struct GetDashboardMetricsHandler {
    gateway: Arc<dyn SubscriptionGateway>,
    aggregator: SpendAggregator,
}

impl GetDashboardMetricsHandler {
    pub fn new(gateway: Arc<dyn SubscriptionGateway>, policy: AggregationPolicy) -> Self {
        Self {
            gateway,
            aggregator: SpendAggregator::new(policy),
        }
    }

    pub async fn handle(
        &self,
        query: GetDashboardMetricsQuery,
    ) -> Result<GetDashboardMetricsResult, SubscriptionCommandError> {
        let subscriptions = self.gateway.list(&query.user_id).await?;
        let metrics = self.aggregator.aggregate(&subscriptions, query.as_of);

        if !metrics.warnings.is_empty() {
            tracing::info!(
                user_id = %query.user_id,
                skipped = metrics.warnings.len(),
                "Dashboard computed with skipped subscriptions"
            );
        }
        Ok(metrics)
    }
}
