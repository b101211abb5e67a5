//! Tracing/logging initialization for embedding applications.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for the process.
///
/// Filtering is configurable via `RUST_LOG`; without it, engine events are
/// logged at `info`. Safe to call multiple times (subsequent calls are
/// no-ops).
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
