//! Billing cycle definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cadence at which a subscription charges.
///
/// A `Custom` cycle charges every `custom_cycle_days` days; the day count is
/// stored on the subscription, not here, so that the wire shape stays a plain
/// lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
    Custom,
}

impl BillingCycle {
    /// Returns the wire name for this cycle.
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
            BillingCycle::Custom => "custom",
        }
    }

    /// Returns true if this cycle needs a custom day count.
    pub fn requires_custom_days(&self) -> bool {
        matches!(self, BillingCycle::Custom)
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown billing cycle name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown billing cycle '{0}', expected monthly, yearly or custom")]
pub struct UnknownBillingCycle(pub String);

impl FromStr for BillingCycle {
    type Err = UnknownBillingCycle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(BillingCycle::Monthly),
            "yearly" => Ok(BillingCycle::Yearly),
            "custom" => Ok(BillingCycle::Custom),
            _ => Err(UnknownBillingCycle(s.to_string())),
        }
    }
}
