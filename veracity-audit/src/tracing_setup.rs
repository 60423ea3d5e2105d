//! Tracing setup — structured logging for Veracity binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `VERACITY_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("VERACITY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .init();
}

/// Initialize tracing with a custom filter string (for testing or
/// embedding). Ignores double-initialization instead of panicking.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
