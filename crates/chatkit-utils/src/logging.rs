//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when `RUST_LOG` is not set: framework crates at INFO,
/// everything else at WARN
const DEFAULT_DIRECTIVES: &str = "warn,chatkit_core=info,chatkit_docs=info,chatkit_locale=info";

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise framework crates log at INFO and
/// everything else at WARN.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
