//! DeactivateSubscriptionHandler - Command handler for retiring a subscription.
//!
//! Deletion is a two-step protocol: the request carries the user's
//! confirmation, and only a confirmed deactivation is forwarded.

use std::sync::Arc;

use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{DeactivationRequest, Subscription};
use crate::ports::SubscriptionGateway;

use super::SubscriptionCommandError;

/// Command to retire a subscription.
#[derive(Debug, Clone)]
pub struct DeactivateSubscriptionCommand {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
    /// Whether the user confirmed the deletion prompt.
    pub confirmed: bool,
}

pub type DeactivateSubscriptionResult = Subscription;

pub struct DeactivateSubscriptionHandler {
    gateway: Arc<dyn SubscriptionGateway>,
}

impl DeactivateSubscriptionHandler {
    pub fn new(gateway: Arc<dyn SubscriptionGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: DeactivateSubscriptionCommand,
    ) -> Result<DeactivateSubscriptionResult, SubscriptionCommandError> {
        // 1. Intent -> confirmation
        let confirmed = DeactivationRequest::new(cmd.subscription_id).confirm(cmd.confirmed)?;

        // 2. Flip the active flag
        let subscription = self.gateway.deactivate(&cmd.user_id, &confirmed).await?;

        Ok(subscription)
    }
}
