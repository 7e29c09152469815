use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::{BillingCycle, Subscription, SubscriptionError};

/// Derived dashboard metrics - recomputed on every request, never persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Sum of monthly equivalents over active, normalizable subscriptions
    pub total_monthly: f64,
    pub total_yearly: f64,

    /// Active subscriptions, including ones that could not be normalized
    pub active_count: usize,

    /// Renewals inside the window, soonest first
    pub upcoming_renewals: Vec<RenewalEntry>,

    /// Most expensive subscriptions by monthly equivalent
    pub top_spenders: Vec<SpenderEntry>,

    /// Records left out of totals and rankings
    pub warnings: Vec<NormalizationWarning>,
}

impl DashboardMetrics {
    /// Metrics for a user with nothing to show.
    pub fn empty() -> Self {
        Self {
            total_monthly: 0.0,
            total_yearly: 0.0,
            active_count: 0,
            upcoming_renewals: Vec::new(),
            top_spenders: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalEntry {
    pub subscription_id: SubscriptionId,
    pub name: String,
    pub cost: f64,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: NaiveDate,
    /// 0 = renews on the as-of date
    pub days_until: i64,
}

impl RenewalEntry {
    pub(crate) fn new(subscription: &Subscription, as_of: NaiveDate) -> Self {
        Self {
            subscription_id: subscription.id,
            name: subscription.name.clone(),
            cost: subscription.cost,
            billing_cycle: subscription.billing_cycle,
            next_billing_date: subscription.next_billing_date,
            days_until: (subscription.next_billing_date - as_of).num_days(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpenderEntry {
    pub subscription_id: SubscriptionId,
    pub name: String,
    pub monthly_equivalent: f64,
    /// Share of `total_monthly`, 0-100; 0 when the total is 0
    pub percent_of_total: f64,
}

/// Non-blocking notice that one record was skipped
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationWarning {
    pub subscription_id: SubscriptionId,
    pub name: String,
    pub code: String,
    pub message: String,
}

impl NormalizationWarning {
    pub(crate) fn new(subscription: &Subscription, error: &SubscriptionError) -> Self {
        Self {
            subscription_id: subscription.id,
            name: subscription.name.clone(),
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}
