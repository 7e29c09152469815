//! Dashboard aggregation configuration

use serde::Deserialize;

use crate::domain::dashboard::{
    AggregationPolicy, DEFAULT_RENEWAL_WINDOW_DAYS, DEFAULT_TOP_SPENDERS_LIMIT,
};

use super::error::ValidationError;

/// Bounds for the spend dashboard
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Calendar days, counting the as-of date, a renewal counts as upcoming
    #[serde(default = "default_renewal_window_days")]
    pub renewal_window_days: u32,

    /// Number of entries in the top-spenders ranking, at most 5
    #[serde(default = "default_top_spenders_limit")]
    pub top_spenders_limit: usize,
}

impl DashboardConfig {
    pub fn policy(&self) -> AggregationPolicy {
        AggregationPolicy {
            renewal_window_days: self.renewal_window_days,
            top_spenders_limit: self.top_spenders_limit,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.renewal_window_days == 0 || self.renewal_window_days > 366 {
            return Err(ValidationError::InvalidRenewalWindow);
        }
        if self.top_spenders_limit == 0 || self.top_spenders_limit > DEFAULT_TOP_SPENDERS_LIMIT {
            return Err(ValidationError::InvalidTopSpendersLimit);
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            renewal_window_days: default_renewal_window_days(),
            top_spenders_limit: default_top_spenders_limit(),
        }
    }
}

fn default_renewal_window_days() -> u32 {
    DEFAULT_RENEWAL_WINDOW_DAYS
}

fn default_top_spenders_limit() -> usize {
    DEFAULT_TOP_SPENDERS_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_aggregation_policy() {
        let config = DashboardConfig::default();
        assert_eq!(config.renewal_window_days, 7);
        assert_eq!(config.top_spenders_limit, 5);
        assert_eq!(config.policy(), AggregationPolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_values_are_rejected() {
        let config = DashboardConfig {
            renewal_window_days: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidRenewalWindow));

        let config = DashboardConfig {
            top_spenders_limit: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTopSpendersLimit));
    }

    #[test]
    fn test_ranking_larger_than_five_is_rejected() {
        let config = DashboardConfig {
            top_spenders_limit: 50,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTopSpendersLimit));

        let config = DashboardConfig {
            top_spenders_limit: 5,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let config: DashboardConfig = serde_json::from_str(r#"{"top_spenders_limit": 3}"#).unwrap();
        assert_eq!(config.top_spenders_limit, 3);
        assert_eq!(config.renewal_window_days, 7);
    }
}
