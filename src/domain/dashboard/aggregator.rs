//! Spend Aggregator - derives dashboard metrics from a collection of
//! subscriptions.
//!
//! The aggregator never fails. A record that cannot be normalized is left out
//! of totals and rankings and reported as a warning, so one malformed record
//! never blocks the dashboard.

use chrono::{Days, NaiveDate};

use crate::domain::subscription::{CostEquivalents, Normalizer, Subscription};

use super::metrics::{DashboardMetrics, NormalizationWarning, RenewalEntry, SpenderEntry};

/// Number of calendar days, counting the as-of date as day 1, whose
/// renewals are "upcoming".
pub const DEFAULT_RENEWAL_WINDOW_DAYS: u32 = 7;

/// Number of entries in the top-spenders ranking; also its upper bound.
pub const DEFAULT_TOP_SPENDERS_LIMIT: usize = 5;

/// Tunable bounds for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationPolicy {
    pub renewal_window_days: u32,
    pub top_spenders_limit: usize,
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self {
            renewal_window_days: DEFAULT_RENEWAL_WINDOW_DAYS,
            top_spenders_limit: DEFAULT_TOP_SPENDERS_LIMIT,
        }
    }
}

/// Stateless, deterministic metrics reducer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpendAggregator {
    policy: AggregationPolicy,
}

impl SpendAggregator {
    /// Creates an aggregator; the ranking size is capped at
    /// [`DEFAULT_TOP_SPENDERS_LIMIT`].
    pub fn new(policy: AggregationPolicy) -> Self {
        Self {
            policy: AggregationPolicy {
                top_spenders_limit: policy.top_spenders_limit.min(DEFAULT_TOP_SPENDERS_LIMIT),
                ..policy
            },
        }
    }

    pub fn policy(&self) -> AggregationPolicy {
        self.policy
    }

    /// Computes dashboard metrics as of the given calendar date.
    ///
    /// Steps, in order:
    /// 1. keep active subscriptions only
    /// 2. normalize each; failures become warnings and contribute 0
    /// 3. sum monthly and yearly equivalents in input order
    /// 4. count active subscriptions, normalizable or not
    /// 5. collect renewals with `as_of <= date <= as_of + (window - 1)`, stable by date
    /// 6. rank by monthly equivalent, stable descending, truncated
    pub fn aggregate(&self, subscriptions: &[Subscription], as_of: NaiveDate) -> DashboardMetrics {
        let active: Vec<&Subscription> = subscriptions.iter().filter(|s| s.is_active).collect();

        let mut normalized: Vec<(&Subscription, CostEquivalents)> = Vec::with_capacity(active.len());
        let mut warnings = Vec::new();
        for subscription in active.iter().copied() {
            match Normalizer::normalize(subscription) {
                Ok(equivalents) => normalized.push((subscription, equivalents)),
                Err(error) => {
                    tracing::warn!(
                        subscription_id = %subscription.id,
                        error = %error,
                        "Skipping subscription that cannot be normalized"
                    );
                    warnings.push(NormalizationWarning::new(subscription, &error));
                }
            }
        }

        // Explicit fold: an empty float sum must be +0.0, not -0.0.
        let total_monthly = normalized
            .iter()
            .fold(0.0_f64, |acc, (_, eq)| acc + eq.monthly_equivalent);
        let total_yearly = normalized
            .iter()
            .fold(0.0_f64, |acc, (_, eq)| acc + eq.yearly_equivalent);

        let upcoming_renewals = self.upcoming_renewals(&active, as_of);
        let top_spenders = self.top_spenders(&normalized, total_monthly);

        tracing::debug!(
            active = active.len(),
            skipped = warnings.len(),
            renewals = upcoming_renewals.len(),
            total_monthly,
            "Aggregated dashboard metrics"
        );

        DashboardMetrics {
            total_monthly,
            total_yearly,
            active_count: active.len(),
            upcoming_renewals,
            top_spenders,
            warnings,
        }
    }

    fn upcoming_renewals(&self, active: &[&Subscription], as_of: NaiveDate) -> Vec<RenewalEntry> {
        // as_of is day 1, so a 7-day window ends on as_of + 6
        let Some(last_day) = self.policy.renewal_window_days.checked_sub(1) else {
            return Vec::new();
        };
        let window_end = as_of
            .checked_add_days(Days::new(u64::from(last_day)))
            .unwrap_or(NaiveDate::MAX);

        let mut renewals: Vec<RenewalEntry> = active
            .iter()
            .filter(|s| as_of <= s.next_billing_date && s.next_billing_date <= window_end)
            .map(|s| RenewalEntry::new(s, as_of))
            .collect();

        // sort_by_key is stable: equal dates keep input order
        renewals.sort_by_key(|entry| entry.next_billing_date);
        renewals
    }

    fn top_spenders(
        &self,
        normalized: &[(&Subscription, CostEquivalents)],
        total_monthly: f64,
    ) -> Vec<SpenderEntry> {
        let mut ranked: Vec<&(&Subscription, CostEquivalents)> = normalized.iter().collect();
        ranked.sort_by(|a, b| b.1.monthly_equivalent.total_cmp(&a.1.monthly_equivalent));

        ranked
            .into_iter()
            .take(self.policy.top_spenders_limit)
            .map(|(subscription, equivalents)| SpenderEntry {
                subscription_id: subscription.id,
                name: subscription.name.clone(),
                monthly_equivalent: equivalents.monthly_equivalent,
                percent_of_total: percent_of(equivalents.monthly_equivalent, total_monthly),
            })
            .collect()
    }
}

/// Share of `total` as a percentage; 0 when the total is 0.
fn percent_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    let percent = part / total * 100.0;
    if percent.is_finite() {
        percent
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod aggregator_test;
