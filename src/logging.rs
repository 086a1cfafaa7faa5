//! Diagnostic logging setup.
//!
//! Logs go to standard error so the catalogue text on standard output stays
//! byte-exact. The filter comes from `RUST_LOG`, falling back to
//! [`DEFAULT_FILTER`].

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::CatalogueError;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns `CatalogueError::Logging` if a global subscriber is already set.
pub fn init() -> Result<(), CatalogueError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|error| CatalogueError::Logging(error.to_string()))
}
