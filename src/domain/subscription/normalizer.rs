//! Normalizer - converts a subscription's cost and cadence into comparable
//! monthly and yearly equivalents.
//!
//! Custom cycles use a flat 30-day month and 365-day year rather than real
//! calendar lengths. This is a known approximation; the constants must stay
//! exactly 30 and 365 so that displayed figures are reproducible.

use serde::Serialize;

use super::{BillingCycle, Subscription, SubscriptionError};

/// Nominal days in a month for custom-cycle conversion.
pub const DAYS_PER_NOMINAL_MONTH: f64 = 30.0;

/// Nominal days in a year for custom-cycle conversion.
pub const DAYS_PER_NOMINAL_YEAR: f64 = 365.0;

/// Months per year for monthly/yearly conversion.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Normalized spend figures for one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEquivalents {
    pub monthly_equivalent: f64,
    pub yearly_equivalent: f64,
}

/// Stateless cost normalizer.
pub struct Normalizer;

impl Normalizer {
    /// Computes the monthly and yearly equivalents of a subscription.
    ///
    /// | cycle   | monthly              | yearly                |
    /// |---------|----------------------|-----------------------|
    /// | monthly | cost                 | cost * 12             |
    /// | yearly  | cost / 12            | cost                  |
    /// | custom  | (cost / days) * 30   | (cost / days) * 365   |
    ///
    /// # Errors
    ///
    /// - `InvalidCycle` if the cycle is custom and the day count is missing or zero
    /// - `InvalidField` if the cost is not a finite positive amount
    pub fn normalize(subscription: &Subscription) -> Result<CostEquivalents, SubscriptionError> {
        let cost = subscription.cost;
        if !cost.is_finite() || cost <= 0.0 {
            return Err(SubscriptionError::invalid_field(
                "cost",
                format!("subscription {} has non-positive cost", subscription.id),
            ));
        }

        let equivalents = match subscription.billing_cycle {
            BillingCycle::Monthly => CostEquivalents {
                monthly_equivalent: cost,
                yearly_equivalent: cost * MONTHS_PER_YEAR,
            },
            BillingCycle::Yearly => CostEquivalents {
                monthly_equivalent: cost / MONTHS_PER_YEAR,
                yearly_equivalent: cost,
            },
            BillingCycle::Custom => {
                let days = match subscription.custom_cycle_days {
                    Some(days) if days > 0 => f64::from(days),
                    _ => return Err(SubscriptionError::invalid_cycle(subscription.id)),
                };
                let per_day = cost / days;
                CostEquivalents {
                    monthly_equivalent: per_day * DAYS_PER_NOMINAL_MONTH,
                    yearly_equivalent: per_day * DAYS_PER_NOMINAL_YEAR,
                }
            }
        };

        Ok(equivalents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn subscription(cost: f64, cycle: BillingCycle, days: Option<u32>) -> Subscription {
        Subscription::new(
            UserId::new("user-1").unwrap(),
            "Streaming",
            cost,
            cycle,
            days,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn monthly_cost_is_monthly_equivalent() {
        let eq = Normalizer::normalize(&subscription(15.0, BillingCycle::Monthly, None)).unwrap();
        assert_eq!(eq.monthly_equivalent, 15.0);
        assert_eq!(eq.yearly_equivalent, 180.0);
    }

    #[test]
    fn yearly_cost_is_yearly_equivalent() {
        let eq = Normalizer::normalize(&subscription(120.0, BillingCycle::Yearly, None)).unwrap();
        assert_eq!(eq.monthly_equivalent, 10.0);
        assert_eq!(eq.yearly_equivalent, 120.0);
    }

    #[test]
    fn custom_cycle_uses_nominal_month_and_year() {
        let eq =
            Normalizer::normalize(&subscription(100.0, BillingCycle::Custom, Some(10))).unwrap();
        assert_eq!(eq.monthly_equivalent, 300.0);
        assert_eq!(eq.yearly_equivalent, 3650.0);
    }

    #[test]
    fn custom_cycle_without_days_is_invalid() {
        let sub = subscription(100.0, BillingCycle::Custom, None);
        let err = Normalizer::normalize(&sub).unwrap_err();
        assert_eq!(err, SubscriptionError::invalid_cycle(sub.id));
    }

    #[test]
    fn custom_cycle_with_zero_days_is_invalid() {
        let sub = subscription(100.0, BillingCycle::Custom, Some(0));
        assert!(matches!(
            Normalizer::normalize(&sub),
            Err(SubscriptionError::InvalidCycle { .. })
        ));
    }

    #[test]
    fn monthly_cycle_ignores_stray_custom_days() {
        let eq = Normalizer::normalize(&subscription(9.0, BillingCycle::Monthly, Some(3))).unwrap();
        assert_eq!(eq.monthly_equivalent, 9.0);
    }

    #[test]
    fn non_positive_cost_is_rejected() {
        assert!(Normalizer::normalize(&subscription(0.0, BillingCycle::Monthly, None)).is_err());
        assert!(Normalizer::normalize(&subscription(f64::NAN, BillingCycle::Yearly, None)).is_err());
    }

    proptest! {
        #[test]
        fn monthly_equivalents_match_cost(cost in 0.01f64..100_000.0) {
            let eq = Normalizer::normalize(&subscription(cost, BillingCycle::Monthly, None)).unwrap();
            prop_assert_eq!(eq.monthly_equivalent, cost);
            prop_assert_eq!(eq.yearly_equivalent, cost * 12.0);
        }

        #[test]
        fn yearly_equivalents_match_cost(cost in 0.01f64..100_000.0) {
            let eq = Normalizer::normalize(&subscription(cost, BillingCycle::Yearly, None)).unwrap();
            prop_assert_eq!(eq.monthly_equivalent, cost / 12.0);
            prop_assert_eq!(eq.yearly_equivalent, cost);
        }

        #[test]
        fn custom_equivalents_are_finite(cost in 0.01f64..100_000.0, days in 1u32..3650) {
            let eq = Normalizer::normalize(&subscription(cost, BillingCycle::Custom, Some(days))).unwrap();
            prop_assert!(eq.monthly_equivalent.is_finite());
            prop_assert!(eq.yearly_equivalent > eq.monthly_equivalent);
        }
    }
}
