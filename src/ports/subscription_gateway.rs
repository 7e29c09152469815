//! Subscription lifecycle gateway port.
//!
//! The gateway is the only component that owns and mutates subscription
//! records. Everything else reads from it or hands it validated payloads.
//!
//! # Design
//!
//! - **Sparse writes**: create and update receive a [`SparsePayload`], never a
//!   full record
//! - **Soft delete**: records are retired by `deactivate`, which only accepts a
//!   [`ConfirmedDeactivation`]
//! - **User scoped**: every call names the owner; touching another user's
//!   record is `Unauthorized`
//!
//! # Example
//!
//! ```ignore
//! async fn retire(
//!     gateway: &dyn SubscriptionGateway,
//!     user_id: &UserId,
//!     id: SubscriptionId,
//! ) -> Result<Subscription, SubscriptionCommandError> {
//!     let confirmed = DeactivationRequest::new(id).confirm(true)?;
//!     Ok(gateway.deactivate(user_id, &confirmed).await?)
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, SubscriptionId, UserId};
use crate::domain::subscription::{
    ConfirmedDeactivation, SparsePayload, Subscription, SubscriptionError,
};

/// Errors reported by a gateway implementation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// No record with this id exists for the user
    #[error("Subscription not found: {0}")]
    NotFound(SubscriptionId),

    /// The caller may not touch this record
    #[error("Not authorized to access this subscription")]
    Unauthorized,

    /// The merged record would break a subscription invariant
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The backing store cannot be reached
    #[error("Subscription store unavailable: {0}")]
    Unavailable(String),
}

impl GatewayError {
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        GatewayError::InvalidPayload(reason.into())
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        GatewayError::Unavailable(reason.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            GatewayError::NotFound(_) => ErrorCode::SubscriptionNotFound,
            GatewayError::Unauthorized => ErrorCode::Forbidden,
            GatewayError::InvalidPayload(_) => ErrorCode::ValidationFailed,
            GatewayError::Unavailable(_) => ErrorCode::GatewayUnavailable,
        }
    }
}

impl From<SubscriptionError> for GatewayError {
    fn from(err: SubscriptionError) -> Self {
        GatewayError::InvalidPayload(err.to_string())
    }
}

/// Port for subscription persistence and lifecycle transitions.
///
/// Implementations must ensure:
/// - `list` returns records in creation order
/// - `create` assigns a fresh id and stores the record as active
/// - `update` changes only the fields present in the payload
/// - `custom_cycle_days` is set iff the billing cycle is custom after any write
#[async_trait]
pub trait SubscriptionGateway: Send + Sync {
    /// All of the user's subscriptions, active and inactive, oldest first.
    async fn list(&self, user_id: &UserId) -> Result<Vec<Subscription>, GatewayError>;

    /// Find one subscription.
    ///
    /// Returns `None` if the user has no such record.
    async fn get(
        &self,
        user_id: &UserId,
        id: SubscriptionId,
    ) -> Result<Option<Subscription>, GatewayError>;

    /// Create a subscription from a complete creation payload.
    ///
    /// # Errors
    ///
    /// - `InvalidPayload` if a mandatory field is missing or malformed
    /// - `Unavailable` on storage failure
    async fn create(
        &self,
        user_id: &UserId,
        payload: &SparsePayload,
    ) -> Result<Subscription, GatewayError>;

    /// Merge a sparse payload into an existing subscription.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the record does not exist for this user
    /// - `InvalidPayload` if the merged record would break an invariant
    async fn update(
        &self,
        user_id: &UserId,
        id: SubscriptionId,
        payload: &SparsePayload,
    ) -> Result<Subscription, GatewayError>;

    /// Retire a subscription. Idempotent for already inactive records.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the record does not exist for this user
    async fn deactivate(
        &self,
        user_id: &UserId,
        deactivation: &ConfirmedDeactivation,
    ) -> Result<Subscription, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn subscription_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn SubscriptionGateway) {}
    }

    #[test]
    fn domain_errors_become_invalid_payload() {
        let err: GatewayError = SubscriptionError::MissingCustomCycleDays.into();
        assert!(matches!(err, GatewayError::InvalidPayload(_)));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn not_found_maps_to_subscription_not_found() {
        let id = SubscriptionId::new();
        let err = GatewayError::NotFound(id);
        assert_eq!(err.code(), ErrorCode::SubscriptionNotFound);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
