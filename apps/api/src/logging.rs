use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` in the environment wins; otherwise this crate and the HTTP
/// trace layer log at `config.rust_log`.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "profile_api={level},seed={level},tower_http={level}"
    ))
}
