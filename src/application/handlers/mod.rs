//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dashboard;
pub mod subscription;

pub use dashboard::{
    GetDashboardMetricsHandler, GetDashboardMetricsQuery, GetDashboardMetricsResult,
};
pub use subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, CreateSubscriptionResult,
    DeactivateSubscriptionCommand, DeactivateSubscriptionHandler, DeactivateSubscriptionResult,
    ListSubscriptionsHandler, ListSubscriptionsQuery, ListSubscriptionsResult,
    SubscriptionCommandError, UpdateSubscriptionCommand, UpdateSubscriptionHandler,
    UpdateSubscriptionResult,
};
