//! Error types for the demonstration framework.
//!
//! Errors fall into two groups:
//!
//! - **Startup errors** ([`RegistryError`], [`CatalogueError`]) abort the
//!   program before any demonstration runs.
//! - **Unit errors** ([`UnitError`], [`TaskError`]) are surfaced by a single
//!   demonstration while the runner is executing it. They are caught at the
//!   unit boundary, recorded in the run summary and never abort the run.

use crate::config::ConfigError;

// =============================================================================
// Registry Errors
// =============================================================================

/// Errors raised while building a [`Registry`](crate::registry::Registry).
///
/// # Examples
///
/// ```rust
/// use lambda_catalogue::error::RegistryError;
///
/// let error = RegistryError::DuplicateName {
///     name: "stream_with_limit".to_string(),
/// };
/// assert_eq!(
///     format!("{error}"),
///     "demonstration `stream_with_limit` is already registered"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A unit with the same name has already been registered.
    #[error("demonstration `{name}` is already registered")]
    DuplicateName {
        /// The colliding name.
        name: String,
    },
}

// =============================================================================
// Task Errors
// =============================================================================

/// Failures of the task capabilities offered to a unit.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The operating system refused to start a detached thread.
    #[error("failed to spawn detached task `{name}`: {source}")]
    Spawn {
        /// Name given to the thread.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An awaited task panicked or was cancelled before producing a value.
    #[error("awaited task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

// =============================================================================
// Unit Errors
// =============================================================================

/// A failure surfaced by a demonstration's action.
///
/// The runner converts every `UnitError` into the textual description stored
/// in the run summary using its `Display` implementation.
///
/// # Examples
///
/// ```rust
/// use lambda_catalogue::error::UnitError;
///
/// let error = UnitError::failed("boom");
/// assert_eq!(error.to_string(), "boom");
///
/// let panicked = UnitError::Panicked("index out of bounds".to_string());
/// assert_eq!(panicked.to_string(), "panicked: index out of bounds");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    /// The action reported a failure with a message.
    #[error("{0}")]
    Failed(String),

    /// The action panicked. Contains the panic payload when it was a string.
    #[error("panicked: {0}")]
    Panicked(String),

    /// A task capability failed and the unit could not fall back.
    #[error(transparent)]
    Task(#[from] TaskError),
}

impl UnitError {
    /// Creates a [`UnitError::Failed`] from any displayable message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Builds a [`UnitError::Panicked`] from a payload caught by
    /// `std::panic::catch_unwind`.
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self::Panicked(message)
    }
}

/// The result every demonstration action returns.
pub type UnitResult = Result<(), UnitError>;

// =============================================================================
// Startup Errors
// =============================================================================

/// Fatal errors that prevent the catalogue from running at all.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// The registry could not be built.
    #[error("failed to initialize the demonstration registry: {0}")]
    Registry(#[from] RegistryError),

    /// The async runtime backing awaited tasks could not be created.
    #[error("failed to build the task runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The global tracing subscriber could not be installed.
    #[error("failed to install the log subscriber: {0}")]
    Logging(String),
}
