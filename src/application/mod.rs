//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Subscription handlers
    CreateSubscriptionCommand, CreateSubscriptionHandler, DeactivateSubscriptionCommand,
    DeactivateSubscriptionHandler, ListSubscriptionsHandler, ListSubscriptionsQuery,
    SubscriptionCommandError, UpdateSubscriptionCommand, UpdateSubscriptionHandler,
    // Dashboard handlers
    GetDashboardMetricsHandler, GetDashboardMetricsQuery,
};
