//! HTTP routes for dashboard endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_dashboard, DashboardAppState};

/// Creates the dashboard router.
pub fn dashboard_routes(state: DashboardAppState) -> Router {
    Router::new()
        // GET /api/dashboard
        .route("/api/dashboard", get(get_dashboard))
        .with_state(state)
}
