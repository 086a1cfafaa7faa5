//! Blocking waits on background futures.
//!
//! [`AwaitedTasks`] owns a multi-thread tokio runtime. [`AwaitedTasks::run`]
//! spawns a future onto the runtime's workers and parks the calling thread
//! until the spawned task resolves, so a demonstration can launch concurrent
//! work while still presenting a synchronous call to the runner.
//!
//! # Runtime Flavor Considerations
//!
//! `run` uses `Runtime::block_on`, which panics when called from inside
//! another tokio runtime. The runner always drives units from a plain thread;
//! tests exercising awaited units must do the same (use `#[rstest]`, not
//! `#[tokio::test]`).
//!
//! Tokio leaf futures such as `tokio::time::sleep` look up the runtime when
//! they are created, so they must be created inside the future passed to
//! `run`, never on the calling thread.
//!
//! # Examples
//!
//! ```rust
//! use lambda_catalogue::task::AwaitedTasks;
//!
//! let tasks = AwaitedTasks::new(1).unwrap();
//! let value = tasks.run(async { 6 * 7 }).unwrap();
//! assert_eq!(value, 42);
//! ```

use std::future::Future;

use tokio::runtime::{Builder, Runtime};

use crate::error::{CatalogueError, TaskError};

/// A runtime dedicated to awaited tasks.
#[derive(Debug)]
pub struct AwaitedTasks {
    runtime: Runtime,
}

impl AwaitedTasks {
    /// Creates the runtime with `worker_threads` workers.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::Runtime` if tokio cannot build the runtime.
    pub fn new(worker_threads: usize) -> Result<Self, CatalogueError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(worker_threads.max(1))
            .thread_name("catalogue-awaited")
            .enable_all()
            .build()
            .map_err(CatalogueError::Runtime)?;
        Ok(Self { runtime })
    }

    /// Spawns `future` and blocks the current thread until it completes.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Join` if the spawned task panicked.
    pub fn run<F>(&self, future: F) -> Result<F::Output, TaskError>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let handle = self.runtime.spawn(future);
        let output = self.runtime.block_on(handle)?;
        Ok(output)
    }
}
