//! Concurrency capabilities available to demonstrations.
//!
//! The runner itself is strictly sequential. A demonstration that wants
//! concurrency picks one of two explicit capabilities:
//!
//! - **Detached tasks** ([`detached`]): work started on its own thread without
//!   waiting for it. Output of detached work is excluded from the catalogue's
//!   determinism guarantee.
//! - **Awaited tasks** ([`awaited`]): work started concurrently on the async
//!   runtime whose completion the caller blocks on before returning. The
//!   concurrency stays inside the unit and is invisible to the runner.
//!
//! [`TaskCapabilities`] bundles both and is owned by the runner for the whole
//! run.

pub mod awaited;
pub mod detached;

use std::future::Future;

pub use awaited::AwaitedTasks;
pub use detached::{DetachedReport, DetachedTasks};

use crate::config::CatalogueConfig;
use crate::error::{CatalogueError, TaskError};

/// Detached and awaited task capabilities for one catalogue run.
#[derive(Debug)]
pub struct TaskCapabilities {
    awaited: AwaitedTasks,
    detached: DetachedTasks,
}

impl TaskCapabilities {
    /// Builds the capabilities, creating the async runtime.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::Runtime` if the runtime cannot be created.
    pub fn new(config: &CatalogueConfig) -> Result<Self, CatalogueError> {
        Ok(Self {
            awaited: AwaitedTasks::new(config.worker_threads)?,
            detached: DetachedTasks::default(),
        })
    }

    /// Starts `job` on a named thread without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Spawn` if the thread cannot be started.
    pub fn detached<F>(&self, name: &str, job: F) -> Result<(), TaskError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.detached.spawn(name, job)
    }

    /// Runs `future` on the runtime and blocks until it resolves.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Join` if the task panicked or was cancelled.
    pub fn awaited<F>(&self, future: F) -> Result<F::Output, TaskError>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.awaited.run(future)
    }

    /// Number of detached threads started and not yet joined.
    pub fn pending_detached(&self) -> usize {
        self.detached.pending()
    }

    /// Joins every detached thread started so far.
    pub fn join_detached(&self) -> DetachedReport {
        self.detached.join_all()
    }
}
