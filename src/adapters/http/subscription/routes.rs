//! HTTP routes for subscription endpoints.

use axum::routing::{get, put};
use axum::Router;

use super::handlers::{
    create_subscription, deactivate_subscription, list_subscriptions, update_subscription,
    SubscriptionAppState,
};

/// Creates the subscription router with all routes.
pub fn subscription_routes(state: SubscriptionAppState) -> Router {
    Router::new()
        // GET/POST /api/subscriptions
        .route(
            "/api/subscriptions",
            get(list_subscriptions).post(create_subscription),
        )
        // PUT/DELETE /api/subscriptions/:id
        .route(
            "/api/subscriptions/:id",
            put(update_subscription).delete(deactivate_subscription),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySubscriptionGateway;
    use std::sync::Arc;

    #[test]
    fn subscription_routes_creates_router() {
        let state = SubscriptionAppState::new(Arc::new(InMemorySubscriptionGateway::new()));
        let _: Router = subscription_routes(state);
    }
}
