//! Tracing subscriber setup for binaries and tests embedding shopkit.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,shopkit_core=debug,shopkit_services=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopkit_services=trace` - Show trace for the service layer only
/// - Default: INFO, DEBUG for shopkit crates
///
/// Panics if a global subscriber is already installed; use
/// [`try_init_tracing`] where that can happen.
pub fn init_tracing() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

/// Like [`init_tracing`], but returns false instead of panicking when a
/// subscriber is already installed.
pub fn try_init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init()
        .is_ok()
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
