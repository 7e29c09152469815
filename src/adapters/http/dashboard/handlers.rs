//! HTTP handlers for dashboard endpoints.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use chrono::NaiveDate;

use crate::application::handlers::{GetDashboardMetricsHandler, GetDashboardMetricsQuery};
use crate::domain::dashboard::AggregationPolicy;
use crate::domain::foundation::Timestamp;
use crate::domain::subscription::BILLING_DATE_FORMAT;
use crate::ports::SubscriptionGateway;

use super::super::error::ApiError;
use super::super::middleware::AuthenticatedUser;
use super::dto::{DashboardParams, DashboardResponse};

/// Shared state for dashboard endpoints.
#[derive(Clone)]
pub struct DashboardAppState {
    pub gateway: Arc<dyn SubscriptionGateway>,
    pub policy: AggregationPolicy,
}

impl DashboardAppState {
    pub fn new(gateway: Arc<dyn SubscriptionGateway>, policy: AggregationPolicy) -> Self {
        Self { gateway, policy }
    }

    pub fn metrics_handler(&self) -> GetDashboardMetricsHandler {
        GetDashboardMetricsHandler::new(self.gateway.clone(), self.policy)
    }
}

/// GET /api/dashboard?as_of=YYYY-MM-DD
pub async fn get_dashboard(
    State(state): State<DashboardAppState>,
    Query(params): Query<DashboardParams>,
    user: AuthenticatedUser,
) -> Result<Json<DashboardResponse>, ApiError> {
    let as_of = match params.as_of.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => NaiveDate::parse_from_str(raw, BILLING_DATE_FORMAT)
            .map_err(|_| ApiError::bad_request("as_of", "Expected a date in YYYY-MM-DD format"))?,
        _ => Timestamp::today(),
    };

    let query = GetDashboardMetricsQuery {
        user_id: user.user_id,
        as_of,
    };

    let metrics = state.metrics_handler().handle(query).await?;
    Ok(Json(DashboardResponse { as_of, metrics }))
}
