//! Tracing subscriber setup.

use numberwords_foundation::{Error, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Installs a stderr fmt subscriber.
///
/// `RUST_LOG` overrides the filter derived from `verbosity`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: Verbosity) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::internal(format!("failed to install logger: {e}")))
}
