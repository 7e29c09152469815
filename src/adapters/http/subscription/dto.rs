//! HTTP DTOs for subscription endpoints.
//!
//! Request bodies are read leniently: form clients send numbers as strings
//! and strings as numbers, so every form field is accepted as either and
//! handed to the payload builder as raw text.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::{SubscriptionId, Timestamp};
use crate::domain::subscription::{BillingCycle, Normalizer, RawFormState, Subscription};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Create or edit form as submitted by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionFormRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cost: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub billing_cycle: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub custom_cycle_days: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub next_billing_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub notes: Option<String>,
}

impl From<SubscriptionFormRequest> for RawFormState {
    fn from(req: SubscriptionFormRequest) -> Self {
        RawFormState {
            name: req.name,
            cost: req.cost,
            billing_cycle: req.billing_cycle,
            custom_cycle_days: req.custom_cycle_days,
            next_billing_date: req.next_billing_date,
            payment_method: req.payment_method,
            category_id: req.category_id,
            logo_url: req.logo_url,
            notes: req.notes,
        }
    }
}

/// Accepts a JSON string, number or bool as text; `null` is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}

/// Query parameters for the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSubscriptionsParams {
    /// Defaults to true.
    pub active_only: Option<bool>,
}

/// Query parameters for the delete endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeactivateParams {
    /// Must be true for the deletion to go through.
    #[serde(default)]
    pub confirm: bool,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A subscription record as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub id: SubscriptionId,
    pub name: String,
    pub cost: f64,
    pub billing_cycle: BillingCycle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_cycle_days: Option<u32>,
    /// YYYY-MM-DD
    pub next_billing_date: String,
    pub payment_method: Option<String>,
    pub category_id: Option<String>,
    pub logo_url: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    /// Absent when the record cannot be normalized.
    pub monthly_equivalent: Option<f64>,
    pub yearly_equivalent: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(s: Subscription) -> Self {
        let equivalents = Normalizer::normalize(&s).ok();
        Self {
            id: s.id,
            next_billing_date: s.next_billing_date.to_string(),
            monthly_equivalent: equivalents.map(|e| e.monthly_equivalent),
            yearly_equivalent: equivalents.map(|e| e.yearly_equivalent),
            name: s.name,
            cost: s.cost,
            billing_cycle: s.billing_cycle,
            custom_cycle_days: s.custom_cycle_days,
            payment_method: s.payment_method,
            category_id: s.category_id,
            logo_url: s.logo_url,
            notes: s.notes,
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionListResponse {
    pub subscriptions: Vec<SubscriptionResponse>,
    pub count: usize,
}

impl From<Vec<Subscription>> for SubscriptionListResponse {
    fn from(subscriptions: Vec<Subscription>) -> Self {
        let subscriptions: Vec<SubscriptionResponse> =
            subscriptions.into_iter().map(SubscriptionResponse::from).collect();
        Self {
            count: subscriptions.len(),
            subscriptions,
        }
    }
}
