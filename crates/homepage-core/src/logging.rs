//! Tracing subscriber setup.
//!
//! Console output through `tracing_subscriber::fmt`, filtered by `RUST_LOG`
//! and falling back to the given default directive.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::{HomepageError, HomepageResult};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`, or `fallback` when unset or invalid
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(fallback: &str) -> HomepageResult<()> {
    tracing_subscriber::registry()
        .with(env_filter(fallback))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| HomepageError::Logging(e.to_string()))
}
