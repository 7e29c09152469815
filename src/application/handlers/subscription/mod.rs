//! Subscription handlers.
//!
//! ## Commands
//! - Creating a subscription from a form
//! - Updating a subscription with a sparse edit
//! - Deactivating (soft deleting) a subscription
//!
//! ## Queries
//! - Listing a user's subscriptions

mod create_subscription;
mod deactivate_subscription;
mod errors;
mod list_subscriptions;
mod update_subscription;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::SubscriptionCommandError;

// Commands
pub use create_subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, CreateSubscriptionResult,
};
pub use deactivate_subscription::{
    DeactivateSubscriptionCommand, DeactivateSubscriptionHandler, DeactivateSubscriptionResult,
};
pub use update_subscription::{
    UpdateSubscriptionCommand, UpdateSubscriptionHandler, UpdateSubscriptionResult,
};

// Queries
pub use list_subscriptions::{ListSubscriptionsHandler, ListSubscriptionsQuery, ListSubscriptionsResult};
