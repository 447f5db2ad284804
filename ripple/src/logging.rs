//! Logging setup.
//!
//! Messages from the `log` facade are bridged into `tracing`, filtered by
//! `RUST_LOG` (default `info`), and written to stderr so stdout carries only the
//! rendered terrain.

use std::io;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Must be called once, before any logging.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
