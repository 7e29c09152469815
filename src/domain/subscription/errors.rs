//! Subscription-specific error types.
//!
//! All of these are local, synchronous and recoverable: the caller re-prompts
//! the user (validation) or shows a non-blocking warning (`InvalidCycle`).
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidCycle | 422 |
//! | EmptyUpdate | 400 |
//! | MissingRequiredField | 400 |
//! | MissingCustomCycleDays | 400 |
//! | InvalidField | 400 |
//! | ConfirmationRequired | 400 |

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, SubscriptionId};

/// Subscription-specific errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubscriptionError {
    /// Custom billing cycle with no positive day count; the record cannot be
    /// normalized.
    #[error("Subscription {subscription_id} has a custom billing cycle without a positive day count")]
    InvalidCycle { subscription_id: SubscriptionId },

    /// An update form carried no fields after the inclusion policy.
    #[error("No fields to update")]
    EmptyUpdate,

    /// A mandatory creation field is absent.
    #[error("Missing required field '{field}'")]
    MissingRequiredField { field: &'static str },

    /// A custom billing cycle was requested without `custom_cycle_days`.
    #[error("Custom billing cycle requires 'custom_cycle_days'")]
    MissingCustomCycleDays,

    /// A field is present but cannot be coerced to its type.
    #[error("Field '{field}' is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// A deactivation intent reached the gateway boundary unconfirmed.
    #[error("Deactivation of subscription {0} requires confirmation")]
    ConfirmationRequired(SubscriptionId),
}

impl SubscriptionError {
    pub fn invalid_cycle(subscription_id: SubscriptionId) -> Self {
        SubscriptionError::InvalidCycle { subscription_id }
    }

    pub fn missing(field: &'static str) -> Self {
        SubscriptionError::MissingRequiredField { field }
    }

    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        SubscriptionError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::InvalidCycle { .. } => ErrorCode::InvalidCycle,
            SubscriptionError::EmptyUpdate => ErrorCode::EmptyUpdate,
            SubscriptionError::MissingRequiredField { .. } => ErrorCode::MissingRequiredField,
            SubscriptionError::MissingCustomCycleDays => ErrorCode::MissingCustomCycleDays,
            SubscriptionError::InvalidField { .. } => ErrorCode::InvalidFormat,
            SubscriptionError::ConfirmationRequired(_) => ErrorCode::ConfirmationRequired,
        }
    }

    /// Name of the offending form field, if the error is about one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SubscriptionError::MissingRequiredField { field }
            | SubscriptionError::InvalidField { field, .. } => Some(field),
            SubscriptionError::MissingCustomCycleDays => Some("custom_cycle_days"),
            _ => None,
        }
    }
}
