//! In-Memory Subscription Gateway
//!
//! Keeps subscription records in process memory, in insertion order.
//! Used by the development server and by tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};
use crate::domain::subscription::{ConfirmedDeactivation, SparsePayload, Subscription};
use crate::ports::{GatewayError, SubscriptionGateway};

/// In-memory subscription store shared across clones.
#[derive(Debug, Clone, Default)]
pub struct InMemorySubscriptionGateway {
    records: Arc<RwLock<Vec<Subscription>>>,
}

impl InMemorySubscriptionGateway {
    /// Create an empty gateway
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway pre-loaded with records (useful for tests)
    pub fn with_records(records: Vec<Subscription>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Total number of stored records across all users
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

/// Locates a record owned by `user_id`.
fn position_for(
    records: &[Subscription],
    user_id: &UserId,
    id: SubscriptionId,
) -> Result<usize, GatewayError> {
    let index = records
        .iter()
        .position(|s| s.id == id)
        .ok_or(GatewayError::NotFound(id))?;
    if &records[index].user_id != user_id {
        return Err(GatewayError::Unauthorized);
    }
    Ok(index)
}

#[async_trait]
impl SubscriptionGateway for InMemorySubscriptionGateway {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Subscription>, GatewayError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|s| &s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get(
        &self,
        user_id: &UserId,
        id: SubscriptionId,
    ) -> Result<Option<Subscription>, GatewayError> {
        let records = self.records.read().await;
        match position_for(&records, user_id, id) {
            Ok(index) => Ok(Some(records[index].clone())),
            Err(GatewayError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(
        &self,
        user_id: &UserId,
        payload: &SparsePayload,
    ) -> Result<Subscription, GatewayError> {
        let subscription =
            Subscription::from_payload(SubscriptionId::new(), user_id.clone(), payload, Timestamp::now())?;

        self.records.write().await.push(subscription.clone());

        tracing::info!(
            subscription_id = %subscription.id,
            user_id = %user_id,
            "Subscription created"
        );
        Ok(subscription)
    }

    async fn update(
        &self,
        user_id: &UserId,
        id: SubscriptionId,
        payload: &SparsePayload,
    ) -> Result<Subscription, GatewayError> {
        let mut records = self.records.write().await;
        let index = position_for(&records, user_id, id)?;

        let record = &mut records[index];
        record.apply(payload, Timestamp::now())?;

        tracing::info!(
            subscription_id = %id,
            fields = ?payload.field_names(),
            "Subscription updated"
        );
        Ok(record.clone())
    }

    async fn deactivate(
        &self,
        user_id: &UserId,
        deactivation: &ConfirmedDeactivation,
    ) -> Result<Subscription, GatewayError> {
        let id = deactivation.subscription_id();
        let mut records = self.records.write().await;
        let index = position_for(&records, user_id, id)?;

        let record = &mut records[index];
        if record.deactivate(Timestamp::now()) {
            tracing::info!(subscription_id = %id, "Subscription deactivated");
        } else {
            tracing::debug!(subscription_id = %id, "Subscription already inactive");
        }
        Ok(record.clone())
    }
}
