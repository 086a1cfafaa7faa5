//! Fire-and-forget threads.
//!
//! A detached task is started on its own OS thread and the caller continues
//! immediately. Handles are kept so the program can still decide to join them
//! later (see [`DetachedPolicy`](crate::config::DetachedPolicy)); nothing in
//! the runner waits for them while units are executing.

use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::error::TaskError;

/// Outcome of joining detached threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetachedReport {
    /// Threads that ran to completion.
    pub completed: usize,
    /// Threads that panicked.
    pub panicked: usize,
}

impl DetachedReport {
    /// Total number of threads joined.
    pub const fn joined(&self) -> usize {
        self.completed + self.panicked
    }
}

/// The set of detached threads started during a run.
#[derive(Debug, Default)]
pub struct DetachedTasks {
    handles: Mutex<Vec<(String, JoinHandle<()>)>>,
}

impl DetachedTasks {
    /// Spawns `job` on a thread named `name`.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Spawn` if the operating system refuses the thread.
    pub fn spawn<F>(&self, name: &str, job: F) -> Result<(), TaskError>
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(job)
            .map_err(|source| TaskError::Spawn {
                name: name.to_string(),
                source,
            })?;
        tracing::debug!(task = name, "detached task started");
        self.handles.lock().push((name.to_string(), handle));
        Ok(())
    }

    /// Number of threads spawned and not yet joined.
    pub fn pending(&self) -> usize {
        self.handles.lock().len()
    }

    /// Joins every thread spawned so far, in spawn order.
    ///
    /// Threads spawned while joining are picked up as well.
    pub fn join_all(&self) -> DetachedReport {
        let mut report = DetachedReport::default();
        loop {
            let drained = std::mem::take(&mut *self.handles.lock());
            if drained.is_empty() {
                return report;
            }
            for (name, handle) in drained {
                match handle.join() {
                    Ok(()) => report.completed += 1,
                    Err(_) => {
                        tracing::warn!(task = %name, "detached task panicked");
                        report.panicked += 1;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn test_join_all_waits_for_every_thread() {
        let tasks = DetachedTasks::default();
        let counter = Arc::new(AtomicUsize::new(0));
        for index in 0..4 {
            let counter = Arc::clone(&counter);
            tasks
                .spawn(&format!("worker-{index}"), move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })
                .unwrap();
        }
        assert_eq!(tasks.pending(), 4);

        let report = tasks.join_all();
        assert_eq!(report, DetachedReport { completed: 4, panicked: 0 });
        assert_eq!(counter.load(Ordering::SeqCst), 4);
        assert_eq!(tasks.pending(), 0);
    }

    #[rstest]
    fn test_panicking_thread_is_counted() {
        let tasks = DetachedTasks::default();
        tasks.spawn("ok", || {}).unwrap();
        tasks.spawn("broken", || panic!("detached failure")).unwrap();

        let report = tasks.join_all();
        assert_eq!(report.completed, 1);
        assert_eq!(report.panicked, 1);
        assert_eq!(report.joined(), 2);
    }

    #[rstest]
    fn test_thread_carries_its_name() {
        let tasks = DetachedTasks::default();
        let observed = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&observed);
        tasks
            .spawn("named-task", move || {
                *sink.lock() = thread::current().name().map(str::to_string);
            })
            .unwrap();
        tasks.join_all();
        assert_eq!(observed.lock().as_deref(), Some("named-task"));
    }
}
