//! Error responses shared by all HTTP endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::handlers::SubscriptionCommandError;
use crate::domain::foundation::ErrorCode;
use crate::domain::subscription::SubscriptionError;
use crate::ports::GatewayError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed path or query parameter
    BadRequest { field: &'static str, message: String },
    /// Failure from a subscription use case
    Command(SubscriptionCommandError),
}

impl ApiError {
    pub fn bad_request(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            field,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Command(SubscriptionCommandError::Validation(e)) => match e {
                SubscriptionError::InvalidCycle { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::Command(SubscriptionCommandError::Gateway(e)) => match e {
                GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
                GatewayError::Unauthorized => StatusCode::FORBIDDEN,
                GatewayError::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
                GatewayError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::BadRequest { field, message } => {
                ErrorResponse::new(ErrorCode::InvalidFormat, message.clone())
                    .with_details(serde_json::json!({ "field": field }))
            }
            ApiError::Command(SubscriptionCommandError::Validation(e)) => {
                let response = ErrorResponse::new(e.code(), e.to_string());
                match e.field() {
                    Some(field) => response.with_details(serde_json::json!({ "field": field })),
                    None => response,
                }
            }
            // Store failures are logged, not echoed to the client
            ApiError::Command(SubscriptionCommandError::Gateway(GatewayError::Unavailable(_))) => {
                ErrorResponse::new(ErrorCode::InternalError, "Internal server error")
            }
            ApiError::Command(e) => ErrorResponse::new(e.code(), e.to_string()),
        }
    }
}

impl From<SubscriptionCommandError> for ApiError {
    fn from(err: SubscriptionCommandError) -> Self {
        ApiError::Command(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }
        (status, Json(self.body())).into_response()
    }
}
