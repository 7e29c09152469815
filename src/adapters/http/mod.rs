//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` assembles them into the served application.

pub mod dashboard;
pub mod error;
pub mod middleware;
pub mod router;
pub mod subscription;

// Re-export key types for convenience
pub use dashboard::{dashboard_routes, DashboardAppState};
pub use error::{ApiError, ErrorResponse};
pub use middleware::AuthenticatedUser;
pub use router::app_router;
pub use subscription::{subscription_routes, SubscriptionAppState};
