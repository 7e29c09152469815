//! Top-level HTTP router.
//!
//! Merges the module routers and applies the transport layers (tracing,
//! request timeout, CORS).

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::ports::SubscriptionGateway;

use super::dashboard::{dashboard_routes, DashboardAppState};
use super::middleware::USER_ID_HEADER;
use super::subscription::{subscription_routes, SubscriptionAppState};

/// Builds the complete application router.
///
/// # Routes
///
/// - `GET /health` - Liveness probe
/// - `GET /api/dashboard` - Spend metrics
/// - `GET|POST /api/subscriptions` - List / create
/// - `PUT|DELETE /api/subscriptions/:id` - Update / deactivate
pub fn app_router(gateway: Arc<dyn SubscriptionGateway>, config: &AppConfig) -> Router {
    let subscriptions = SubscriptionAppState::new(gateway.clone());
    let dashboard = DashboardAppState::new(gateway, config.dashboard.policy());

    Router::new()
        .route("/health", get(health))
        .merge(subscription_routes(subscriptions))
        .merge(dashboard_routes(dashboard))
        .layer(cors_layer(
            &config.server.cors_origins_list(),
            !config.is_production(),
        ))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// CORS policy.
///
/// Configured origins form an allow-list. With none configured, any origin is
/// allowed outside production and no cross-origin request is allowed in
/// production.
fn cors_layer(origins: &[String], allow_any_when_unset: bool) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)]);

    if origins.is_empty() && allow_any_when_unset {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySubscriptionGateway;
    use crate::config::Environment;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn router() -> Router {
        app_router(Arc::new(InMemorySubscriptionGateway::new()), &AppConfig::default())
    }

    #[tokio::test]
    async fn health_is_public() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_requires_user_header() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/dashboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/subscriptions")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    }

    fn config_with(environment: Environment, cors_origins: Option<&str>) -> AppConfig {
        let mut config = AppConfig::default();
        config.server.environment = environment;
        config.server.cors_origins = cors_origins.map(str::to_string);
        config
    }

    async fn allowed_origin(config: &AppConfig, origin: &str) -> Option<String> {
        let app = app_router(Arc::new(InMemorySubscriptionGateway::new()), config);
        let response = app.oneshot(preflight(origin)).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|value| value.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn preflight_echoes_configured_origin_only() {
        let config = config_with(Environment::Production, Some("http://localhost:5173"));

        assert_eq!(
            allowed_origin(&config, "http://localhost:5173").await.as_deref(),
            Some("http://localhost:5173")
        );
        assert_eq!(allowed_origin(&config, "http://evil.example").await, None);
    }

    #[tokio::test]
    async fn unconfigured_origins_allow_any_in_development() {
        let config = config_with(Environment::Development, None);
        assert_eq!(
            allowed_origin(&config, "http://anywhere.example").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn unconfigured_origins_allow_none_in_production() {
        let config = config_with(Environment::Production, None);
        assert_eq!(allowed_origin(&config, "http://anywhere.example").await, None);
    }
}
