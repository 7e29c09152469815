use std::sync::Arc;

use subtrack::adapters::{app_router, InMemorySubscriptionGateway};
use subtrack::config::AppConfig;
use subtrack::observability::init_observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_observability(&config.server);

    let addr = config.server.socket_addr()?;
    let gateway = Arc::new(InMemorySubscriptionGateway::new());
    let app = app_router(gateway, &config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        renewal_window_days = config.dashboard.renewal_window_days,
        "Subtrack listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
