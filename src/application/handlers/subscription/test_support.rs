//! Mock gateway shared by the subscription handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};
use crate::domain::subscription::{ConfirmedDeactivation, SparsePayload, Subscription};
use crate::ports::{GatewayError, SubscriptionGateway};

/// Records every call and answers from a fixed record list.
pub(crate) struct MockSubscriptionGateway {
    records: Mutex<Vec<Subscription>>,
    calls: Mutex<Vec<&'static str>>,
    payloads: Mutex<Vec<SparsePayload>>,
    fail: bool,
}

impl MockSubscriptionGateway {
    pub(crate) fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub(crate) fn with_records(records: Vec<Subscription>) -> Self {
        Self {
            records: Mutex::new(records),
            calls: Mutex::new(Vec::new()),
            payloads: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn last_payload(&self) -> Option<SparsePayload> {
        self.payloads.lock().unwrap().last().cloned()
    }

    fn record_call(&self, name: &'static str) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(name);
        if self.fail {
            return Err(GatewayError::unavailable("Simulated failure"));
        }
        Ok(())
    }

    fn with_record<T>(
        &self,
        user_id: &UserId,
        id: SubscriptionId,
        f: impl FnOnce(&mut Subscription) -> Result<T, GatewayError>,
    ) -> Result<T, GatewayError> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|s| s.id == id && &s.user_id == user_id)
            .ok_or(GatewayError::NotFound(id))?;
        f(record)
    }
}

#[async_trait]
impl SubscriptionGateway for MockSubscriptionGateway {
    async fn list(&self, user_id: &UserId) -> Result<Vec<Subscription>, GatewayError> {
        self.record_call("list")?;
        Ok(self
            .records
            .lock()
            .unwrap()
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
        self.record_call("get")?;
        match self.with_record(user_id, id, |s| Ok(s.clone())) {
            Ok(s) => Ok(Some(s)),
            Err(_) => Ok(None),
        }
    }

    async fn create(
        &self,
        user_id: &UserId,
        payload: &SparsePayload,
    ) -> Result<Subscription, GatewayError> {
        self.record_call("create")?;
        self.payloads.lock().unwrap().push(payload.clone());
        let created =
            Subscription::from_payload(SubscriptionId::new(), user_id.clone(), payload, Timestamp::now())?;
        self.records.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        user_id: &UserId,
        id: SubscriptionId,
        payload: &SparsePayload,
    ) -> Result<Subscription, GatewayError> {
        self.record_call("update")?;
        self.payloads.lock().unwrap().push(payload.clone());
        self.with_record(user_id, id, |s| {
            s.apply(payload, Timestamp::now())?;
            Ok(s.clone())
        })
    }

    async fn deactivate(
        &self,
        user_id: &UserId,
        deactivation: &ConfirmedDeactivation,
    ) -> Result<Subscription, GatewayError> {
        self.record_call("deactivate")?;
        self.with_record(user_id, deactivation.subscription_id(), |s| {
            s.deactivate(Timestamp::now());
            Ok(s.clone())
        })
    }
}
