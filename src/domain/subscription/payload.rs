//! UpdatePayloadBuilder - turns raw form state into a validated sparse payload.
//!
//! This is the single gate both the create and the edit flow pass through, so
//! the lifecycle gateway never receives a record that breaks the
//! cycle/day-count invariant.
//!
//! # Inclusion policy
//!
//! A field is included only if it is present and, for strings, non-empty after
//! trimming. `notes` is the exception: it is included whenever it is defined,
//! even as an empty string, because empty notes clears previous notes.

use serde::{Deserialize, Serialize};

use super::{BillingCycle, SubscriptionError};

/// Raw form state as submitted by the user.
///
/// Every field is the untouched input text; `None` means the field was not
/// defined at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFormState {
    pub name: Option<String>,
    pub cost: Option<String>,
    pub billing_cycle: Option<String>,
    pub custom_cycle_days: Option<String>,
    pub next_billing_date: Option<String>,
    pub payment_method: Option<String>,
    pub category_id: Option<String>,
    pub logo_url: Option<String>,
    pub notes: Option<String>,
}

/// Which flow the payload is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadMode {
    Create,
    Update,
}

/// Validated payload containing only the fields being set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparsePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<BillingCycle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_cycle_days: Option<u32>,
    /// Opaque calendar-date string; the gateway interprets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_billing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SparsePayload {
    /// Names of the fields this payload sets, in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let present = [
            ("name", self.name.is_some()),
            ("cost", self.cost.is_some()),
            ("billing_cycle", self.billing_cycle.is_some()),
            ("custom_cycle_days", self.custom_cycle_days.is_some()),
            ("next_billing_date", self.next_billing_date.is_some()),
            ("payment_method", self.payment_method.is_some()),
            ("category_id", self.category_id.is_some()),
            ("logo_url", self.logo_url.is_some()),
            ("notes", self.notes.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(name, is_set)| is_set.then_some(name))
            .collect()
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }
}

/// Stateless builder for create and update payloads.
pub struct UpdatePayloadBuilder;

impl UpdatePayloadBuilder {
    /// Builds a sparse payload from raw form state.
    ///
    /// # Errors
    ///
    /// - `InvalidField` if cost, custom day count or billing cycle cannot be coerced
    /// - `EmptyUpdate` in update mode when nothing survives the inclusion policy
    /// - `MissingRequiredField` in create mode, checked in the order
    ///   name, cost, next_billing_date, billing_cycle
    /// - `MissingCustomCycleDays` in create mode for a custom cycle without days
    pub fn build(form: &RawFormState, mode: PayloadMode) -> Result<SparsePayload, SubscriptionError> {
        let mut payload = SparsePayload {
            name: included(&form.name),
            cost: included(&form.cost).map(|raw| parse_cost(&raw)).transpose()?,
            billing_cycle: included(&form.billing_cycle)
                .map(|raw| parse_cycle(&raw))
                .transpose()?,
            custom_cycle_days: included(&form.custom_cycle_days)
                .map(|raw| parse_custom_days(&raw))
                .transpose()?,
            next_billing_date: included(&form.next_billing_date),
            payment_method: included(&form.payment_method),
            category_id: included(&form.category_id),
            logo_url: included(&form.logo_url),
            notes: form.notes.as_deref().map(|notes| notes.trim().to_string()),
        };

        // A day count only means something next to a custom cycle.
        if matches!(payload.billing_cycle, Some(cycle) if !cycle.requires_custom_days()) {
            payload.custom_cycle_days = None;
        }

        match mode {
            PayloadMode::Update => {
                if payload.is_empty() {
                    return Err(SubscriptionError::EmptyUpdate);
                }
            }
            PayloadMode::Create => Self::require_create_fields(&payload)?,
        }

        Ok(payload)
    }

    fn require_create_fields(payload: &SparsePayload) -> Result<(), SubscriptionError> {
        if payload.name.is_none() {
            return Err(SubscriptionError::missing("name"));
        }
        if payload.cost.is_none() {
            return Err(SubscriptionError::missing("cost"));
        }
        if payload.next_billing_date.is_none() {
            return Err(SubscriptionError::missing("next_billing_date"));
        }
        match payload.billing_cycle {
            None => Err(SubscriptionError::missing("billing_cycle")),
            Some(BillingCycle::Custom) if payload.custom_cycle_days.is_none() => {
                Err(SubscriptionError::MissingCustomCycleDays)
            }
            Some(_) => Ok(()),
        }
    }
}

/// Trimmed value if present and non-blank.
fn included(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn parse_cost(raw: &str) -> Result<f64, SubscriptionError> {
    let cost: f64 = raw
        .parse()
        .map_err(|_| SubscriptionError::invalid_field("cost", format!("'{}' is not a number", raw)))?;
    if !cost.is_finite() || cost <= 0.0 {
        return Err(SubscriptionError::invalid_field("cost", "must be a positive amount"));
    }
    Ok(cost)
}

fn parse_custom_days(raw: &str) -> Result<u32, SubscriptionError> {
    match raw.parse::<u32>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(SubscriptionError::invalid_field(
            "custom_cycle_days",
            format!("'{}' is not a positive whole number of days", raw),
        )),
    }
}

fn parse_cycle(raw: &str) -> Result<BillingCycle, SubscriptionError> {
    raw.parse::<BillingCycle>()
        .map_err(|e| SubscriptionError::invalid_field("billing_cycle", e.to_string()))
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;
