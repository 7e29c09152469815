//! Subscription domain module.
//!
//! Holds the tracked-subscription entity and the pure rules around it.
//!
//! # Module Structure
//!
//! - `aggregate` - Subscription entity and merge rules
//! - `billing_cycle` - BillingCycle cadence enum
//! - `normalizer` - Monthly/yearly cost equivalents
//! - `payload` - Raw form to sparse payload builder
//! - `deactivation` - Intent/confirmation protocol for soft delete

mod aggregate;
mod billing_cycle;
mod deactivation;
mod errors;
mod normalizer;
mod payload;

pub use aggregate::{parse_billing_date, Subscription, BILLING_DATE_FORMAT};
pub use billing_cycle::{BillingCycle, UnknownBillingCycle};
pub use deactivation::{ConfirmedDeactivation, DeactivationRequest};
pub use errors::SubscriptionError;
pub use normalizer::{
    CostEquivalents, Normalizer, DAYS_PER_NOMINAL_MONTH, DAYS_PER_NOMINAL_YEAR, MONTHS_PER_YEAR,
};
pub use payload::{PayloadMode, RawFormState, SparsePayload, UpdatePayloadBuilder};
