//! Tracing subscriber setup for the CLI

use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize a compact tracing subscriber writing to stderr.
///
/// `RUST_LOG` wins over `default_filter` when set. Stdout is left to command
/// output so it can be piped.
pub fn init_logging(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
