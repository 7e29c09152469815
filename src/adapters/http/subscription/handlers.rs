//! HTTP handlers for subscription endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, DeactivateSubscriptionCommand,
    DeactivateSubscriptionHandler, ListSubscriptionsHandler, ListSubscriptionsQuery,
    UpdateSubscriptionCommand, UpdateSubscriptionHandler,
};
use crate::domain::foundation::SubscriptionId;
use crate::ports::SubscriptionGateway;

use super::super::error::ApiError;
use super::super::middleware::AuthenticatedUser;
use super::dto::{
    DeactivateParams, ListSubscriptionsParams, SubscriptionFormRequest, SubscriptionListResponse,
    SubscriptionResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for subscription endpoints.
#[derive(Clone)]
pub struct SubscriptionAppState {
    pub gateway: Arc<dyn SubscriptionGateway>,
}

impl SubscriptionAppState {
    pub fn new(gateway: Arc<dyn SubscriptionGateway>) -> Self {
        Self { gateway }
    }

    pub fn list_handler(&self) -> ListSubscriptionsHandler {
        ListSubscriptionsHandler::new(self.gateway.clone())
    }

    pub fn create_handler(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(self.gateway.clone())
    }

    pub fn update_handler(&self) -> UpdateSubscriptionHandler {
        UpdateSubscriptionHandler::new(self.gateway.clone())
    }

    pub fn deactivate_handler(&self) -> DeactivateSubscriptionHandler {
        DeactivateSubscriptionHandler::new(self.gateway.clone())
    }
}

fn parse_subscription_id(raw: &str) -> Result<SubscriptionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("id", "Invalid subscription ID format"))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/subscriptions
pub async fn list_subscriptions(
    State(state): State<SubscriptionAppState>,
    Query(params): Query<ListSubscriptionsParams>,
    user: AuthenticatedUser,
) -> Result<Json<SubscriptionListResponse>, ApiError> {
    let query = ListSubscriptionsQuery {
        user_id: user.user_id,
        active_only: params.active_only.unwrap_or(true),
    };

    let subscriptions = state.list_handler().handle(query).await?;
    Ok(Json(SubscriptionListResponse::from(subscriptions)))
}

/// POST /api/subscriptions
pub async fn create_subscription(
    State(state): State<SubscriptionAppState>,
    user: AuthenticatedUser,
    Json(request): Json<SubscriptionFormRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateSubscriptionCommand {
        user_id: user.user_id,
        form: request.into(),
    };

    let subscription = state.create_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(SubscriptionResponse::from(subscription))))
}

/// PUT /api/subscriptions/:id
pub async fn update_subscription(
    State(state): State<SubscriptionAppState>,
    Path(id): Path<String>,
    user: AuthenticatedUser,
    Json(request): Json<SubscriptionFormRequest>,
) -> Result<Json<SubscriptionResponse>, ApiError> {
    let cmd = UpdateSubscriptionCommand {
        user_id: user.user_id,
        subscription_id: parse_subscription_id(&id)?,
        form: request.into(),
    };

    let subscription = state.update_handler().handle(cmd).await?;
    Ok(Json(SubscriptionResponse::from(subscription)))
}

/// DELETE /api/subscriptions/:id?confirm=true
///
/// Retires the subscription; the record is kept but hidden from the
/// dashboard and from the default listing.
pub async fn deactivate_subscription(
    State(state): State<SubscriptionAppState>,
    Path(id): Path<String>,
    Query(params): Query<DeactivateParams>,
    user: AuthenticatedUser,
) -> Result<Json<SubscriptionResponse>, ApiError> {
    let cmd = DeactivateSubscriptionCommand {
        user_id: user.user_id,
        subscription_id: parse_subscription_id(&id)?,
        confirmed: params.confirm,
    };

    let subscription = state.deactivate_handler().handle(cmd).await?;
    Ok(Json(SubscriptionResponse::from(subscription)))
}
