//! Log setup for the binary.
//!
//! Logs go to stderr so they never interleave with game output on stdout.

use std::io;

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Picks the log filter: an explicit directive first, then `RUST_LOG`,
/// then [`DEFAULT_FILTER`].
///
/// An explicit directive that does not parse falls back to the default.
#[must_use]
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::try_new(directive),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER)),
    }
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init(directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive))
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}
