//! Dashboard HTTP adapter module.
//!
//! - `GET /api/dashboard` - Spend metrics for the caller

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::DashboardAppState;
pub use routes::dashboard_routes;
