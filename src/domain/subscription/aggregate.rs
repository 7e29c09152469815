//! Subscription aggregate entity.
//!
//! A Subscription is one recurring charge a user tracks. The lifecycle gateway
//! owns persistence and identity; this type owns the merge rules so that every
//! gateway implementation keeps the same invariants.
//!
//! # Invariants
//!
//! - `custom_cycle_days` is `Some(n > 0)` iff `billing_cycle == Custom`
//! - `cost` is finite and positive
//! - `name` is non-empty
//! - Records are retired by clearing `is_active`, never rewritten otherwise

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};

use super::{BillingCycle, SparsePayload, SubscriptionError};

/// Date format accepted for `next_billing_date`.
pub const BILLING_DATE_FORMAT: &str = "%Y-%m-%d";

/// A tracked recurring subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier, assigned at creation.
    pub id: SubscriptionId,

    /// Owner of the record.
    pub user_id: UserId,

    /// Display name.
    pub name: String,

    /// Charge per billing cycle, in a single implied currency.
    pub cost: f64,

    /// Billing cadence.
    pub billing_cycle: BillingCycle,

    /// Day interval for custom cycles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_cycle_days: Option<u32>,

    /// Next charge date (day granularity).
    pub next_billing_date: NaiveDate,

    pub payment_method: Option<String>,
    pub category_id: Option<String>,
    pub logo_url: Option<String>,
    pub notes: Option<String>,

    /// Soft-retirement flag. Only active records reach the dashboard.
    pub is_active: bool,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Subscription {
    /// Creates an active subscription from already-typed values.
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        cost: f64,
        billing_cycle: BillingCycle,
        custom_cycle_days: Option<u32>,
        next_billing_date: NaiveDate,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: SubscriptionId::new(),
            user_id,
            name: name.into(),
            cost,
            billing_cycle,
            custom_cycle_days,
            next_billing_date,
            payment_method: None,
            category_id: None,
            logo_url: None,
            notes: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds a new active subscription from a creation payload.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if name, cost, billing cycle or date is absent
    /// - `MissingCustomCycleDays` for a custom cycle without a day count
    /// - `InvalidField` if the billing date cannot be parsed
    pub fn from_payload(
        id: SubscriptionId,
        user_id: UserId,
        payload: &SparsePayload,
        now: Timestamp,
    ) -> Result<Self, SubscriptionError> {
        let name = payload
            .name
            .clone()
            .ok_or_else(|| SubscriptionError::missing("name"))?;
        let cost = payload.cost.ok_or_else(|| SubscriptionError::missing("cost"))?;
        let raw_date = payload
            .next_billing_date
            .as_deref()
            .ok_or_else(|| SubscriptionError::missing("next_billing_date"))?;
        let billing_cycle = payload
            .billing_cycle
            .ok_or_else(|| SubscriptionError::missing("billing_cycle"))?;

        let subscription = Self {
            id,
            user_id,
            name,
            cost,
            billing_cycle,
            custom_cycle_days: payload.custom_cycle_days,
            next_billing_date: parse_billing_date(raw_date)?,
            payment_method: payload.payment_method.clone(),
            category_id: payload.category_id.clone(),
            logo_url: payload.logo_url.clone(),
            notes: payload.notes.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        subscription.reconciled()
    }

    /// Merges a sparse update into this subscription.
    ///
    /// Only fields present in the payload change. The merge is atomic: on
    /// error the subscription is left untouched.
    pub fn apply(&mut self, payload: &SparsePayload, now: Timestamp) -> Result<(), SubscriptionError> {
        let mut next = self.clone();

        if let Some(name) = &payload.name {
            next.name = name.clone();
        }
        if let Some(cost) = payload.cost {
            next.cost = cost;
        }
        if let Some(cycle) = payload.billing_cycle {
            next.billing_cycle = cycle;
        }
        if let Some(days) = payload.custom_cycle_days {
            next.custom_cycle_days = Some(days);
        }
        if let Some(raw_date) = payload.next_billing_date.as_deref() {
            next.next_billing_date = parse_billing_date(raw_date)?;
        }
        if let Some(method) = &payload.payment_method {
            next.payment_method = Some(method.clone());
        }
        if let Some(category) = &payload.category_id {
            next.category_id = Some(category.clone());
        }
        if let Some(logo) = &payload.logo_url {
            next.logo_url = Some(logo.clone());
        }
        if let Some(notes) = &payload.notes {
            next.notes = Some(notes.clone());
        }
        next.updated_at = now;

        *self = next.reconciled()?;
        Ok(())
    }

    /// Retires the subscription from all derived views.
    ///
    /// Returns `false` if it was already inactive.
    pub fn deactivate(&mut self, now: Timestamp) -> bool {
        if !self.is_active {
            return false;
        }
        self.is_active = false;
        self.updated_at = now;
        true
    }

    /// Enforces the cycle/day-count invariant.
    ///
    /// Non-custom cycles drop any stray day count; custom cycles must carry a
    /// positive one.
    fn reconciled(mut self) -> Result<Self, SubscriptionError> {
        if self.billing_cycle.requires_custom_days() {
            match self.custom_cycle_days {
                Some(days) if days > 0 => {}
                _ => return Err(SubscriptionError::MissingCustomCycleDays),
            }
        } else {
            self.custom_cycle_days = None;
        }
        Ok(self)
    }
}

/// Parses a billing date from its opaque wire form.
///
/// Accepts `YYYY-MM-DD` and also an RFC 3339 timestamp, whose calendar date is
/// used as-is.
pub fn parse_billing_date(raw: &str) -> Result<NaiveDate, SubscriptionError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, BILLING_DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| {
            SubscriptionError::invalid_field("next_billing_date", format!("'{}' is not a date", raw))
        })
}
