//! Structured logging setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured `server.log_level`
//! directive is used.

use std::io;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, ServerConfig};

/// Fallback when neither `RUST_LOG` nor the configured directive parses.
const FALLBACK_FILTER: &str = "info";

/// Resolves the log filter for the given configuration.
pub fn env_filter(config: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Installs the global tracing subscriber.
///
/// Must be called once, before the server starts.
pub fn init_observability(config: &ServerConfig) {
    let subscriber = tracing_subscriber::registry().with(env_filter(config));

    match config.log_format {
        LogFormat::Pretty => {
            subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(false)
                        .with_thread_names(false)
                        .with_span_events(FmtSpan::CLOSE)
                        .with_writer(io::stderr),
                )
                .init();
        }
        LogFormat::Json => {
            subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_current_span(true)
                        .with_span_list(true)
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE)
                        .with_writer(io::stderr),
                )
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directive_is_used_without_rust_log() {
        let config = ServerConfig {
            log_level: "warn,subtrack=trace".to_string(),
            ..Default::default()
        };
        if std::env::var("RUST_LOG").is_err() {
            assert!(env_filter(&config).to_string().contains("subtrack=trace"));
        }
    }
}
