//! UpdateSubscriptionHandler - Command handler for editing a subscription.

use std::sync::Arc;

use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::{PayloadMode, RawFormState, Subscription, UpdatePayloadBuilder};
use crate::ports::SubscriptionGateway;

use super::SubscriptionCommandError;

/// Command to apply an edit form to an existing subscription.
#[derive(Debug, Clone)]
pub struct UpdateSubscriptionCommand {
    pub user_id: UserId,
    pub subscription_id: SubscriptionId,
    pub form: RawFormState,
}

pub type UpdateSubscriptionResult = Subscription;

/// Handler for editing subscriptions.
///
/// Only the fields the user actually filled in are sent to the gateway.
pub struct UpdateSubscriptionHandler {
    gateway: Arc<dyn SubscriptionGateway>,
}

impl UpdateSubscriptionHandler {
    pub fn new(gateway: Arc<dyn SubscriptionGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSubscriptionCommand,
    ) -> Result<UpdateSubscriptionResult, SubscriptionCommandError> {
        let payload = UpdatePayloadBuilder::build(&cmd.form, PayloadMode::Update)?;

        let subscription = self
            .gateway
            .update(&cmd.user_id, cmd.subscription_id, &payload)
            .await?;

        tracing::debug!(
            subscription_id = %cmd.subscription_id,
            fields = ?payload.field_names(),
            "Updated subscription"
        );
        Ok(subscription)
    }
}
