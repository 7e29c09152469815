//! CreateSubscriptionHandler - Command handler for adding a subscription.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::{PayloadMode, RawFormState, Subscription, UpdatePayloadBuilder};
use crate::ports::SubscriptionGateway;

use super::SubscriptionCommandError;

/// Command to create a subscription from a submitted form.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub user_id: UserId,
    pub form: RawFormState,
}

pub type CreateSubscriptionResult = Subscription;

/// Handler for creating subscriptions.
///
/// The form is validated in create mode before the gateway sees it, so an
/// incomplete form never produces a gateway call.
pub struct CreateSubscriptionHandler {
    gateway: Arc<dyn SubscriptionGateway>,
}

impl CreateSubscriptionHandler {
    pub fn new(gateway: Arc<dyn SubscriptionGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<CreateSubscriptionResult, SubscriptionCommandError> {
        // 1. Validate and build the payload
        let payload = UpdatePayloadBuilder::build(&cmd.form, PayloadMode::Create)?;

        // 2. Hand it to the gateway
        let subscription = self.gateway.create(&cmd.user_id, &payload).await?;

        tracing::debug!(subscription_id = %subscription.id, "Created subscription");
        Ok(subscription)
    }
}
