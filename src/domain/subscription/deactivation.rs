//! Two-step deactivation protocol.
//!
//! Deleting a subscription retires it (`is_active = false`) rather than
//! removing it. The gateway only accepts a [`ConfirmedDeactivation`], which
//! can only be obtained by confirming a [`DeactivationRequest`].

use crate::domain::foundation::SubscriptionId;

use super::SubscriptionError;

/// Intent to deactivate a subscription, not yet confirmed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeactivationRequest {
    subscription_id: SubscriptionId,
}

impl DeactivationRequest {
    pub fn new(subscription_id: SubscriptionId) -> Self {
        Self { subscription_id }
    }

    pub fn subscription_id(&self) -> SubscriptionId {
        self.subscription_id
    }

    /// Turns the intent into a confirmed deactivation.
    ///
    /// # Errors
    ///
    /// `ConfirmationRequired` if the user did not confirm.
    pub fn confirm(self, confirmed: bool) -> Result<ConfirmedDeactivation, SubscriptionError> {
        if !confirmed {
            return Err(SubscriptionError::ConfirmationRequired(self.subscription_id));
        }
        Ok(ConfirmedDeactivation {
            subscription_id: self.subscription_id,
        })
    }
}

/// A deactivation the user has confirmed; the only form the gateway accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmedDeactivation {
    subscription_id: SubscriptionId,
}

impl ConfirmedDeactivation {
    pub fn subscription_id(&self) -> SubscriptionId {
        self.subscription_id
    }
}
