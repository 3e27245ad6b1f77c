//! Tracing initialization for embedding applications

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn is_production() -> bool {
    std::env::var("RUST_ENV").map(|e| e == "production").unwrap_or(false)
}

/// Initialize tracing/logging
///
/// JSON output in production for log aggregation, pretty output otherwise.
/// `RUST_LOG` overrides the default filter. Call once at startup.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production() {
            "gymtrack_engine=info".into()
        } else {
            "gymtrack_engine=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
