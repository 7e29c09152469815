//! HTTP adapter for subscription endpoints.
//!
//! - `GET /api/subscriptions` - List the caller's subscriptions
//! - `POST /api/subscriptions` - Create a subscription
//! - `PUT /api/subscriptions/:id` - Update fields of a subscription
//! - `DELETE /api/subscriptions/:id?confirm=true` - Deactivate a subscription

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SubscriptionAppState;
pub use routes::subscription_routes;
