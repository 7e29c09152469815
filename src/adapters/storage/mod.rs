//! Storage Adapters
//!
//! Implementations of the SubscriptionGateway port.
//!
//! ## Available Adapters
//!
//! - **InMemorySubscriptionGateway** - Stores records in memory (development/testing)

mod in_memory_subscription_gateway;

pub use in_memory_subscription_gateway::InMemorySubscriptionGateway;
