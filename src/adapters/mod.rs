//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API (axum)
//! - `storage` - SubscriptionGateway implementations

pub mod http;
pub mod storage;

pub use http::app_router;
pub use storage::InMemorySubscriptionGateway;
