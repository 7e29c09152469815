//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubscriptionGateway` - Lifecycle and persistence of subscription records

mod subscription_gateway;

pub use subscription_gateway::{GatewayError, SubscriptionGateway};
