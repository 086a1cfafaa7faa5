//! Sequential, failure-isolating execution of a [`Registry`].
//!
//! The runner executes every registered demonstration exactly once, in
//! registration order, on the calling thread. The next unit starts only after
//! the current unit's call has returned.
//!
//! # Failure Containment
//!
//! A unit fails by returning `Err(UnitError)` or by panicking. Both are caught
//! exactly at the unit's call site, turned into a textual description and
//! recorded in the [`RunSummary`]; the run then continues with the next unit.
//! Failures are never retried and there is no per-unit timeout.
//!
//! # Output
//!
//! ```text
//! === Lambda Expressions Examples ===
//!
//! 1. first_unit => ...
//! ...
//!
//! === All 50 Lambda Examples Completed ===
//! Summary: succeeded=50, failed=0
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambda_catalogue::config::CatalogueConfig;
//! use lambda_catalogue::console::Console;
//! use lambda_catalogue::error::UnitError;
//! use lambda_catalogue::registry::Registry;
//! use lambda_catalogue::runner::Runner;
//!
//! let mut registry = Registry::new();
//! registry.add("a", |context| {
//!     context.output().line("a");
//!     Ok(())
//! }).unwrap();
//! registry.add("b", |_| Err(UnitError::failed("boom"))).unwrap();
//!
//! let (console, captured) = Console::capture();
//! let runner = Runner::new(CatalogueConfig::default().with_worker_threads(1), console).unwrap();
//! let summary = runner.run_all(&registry);
//!
//! assert_eq!((summary.succeeded, summary.failed), (1, 1));
//! assert!(captured.stdout().contains("  - b: boom"));
//! ```

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::config::{CatalogueConfig, DetachedPolicy};
use crate::console::Console;
use crate::error::{CatalogueError, UnitError, UnitResult};
use crate::registry::Registry;
use crate::task::{DetachedReport, TaskCapabilities};
use crate::unit::{Demonstration, UnitContext};

// =============================================================================
// RunSummary
// =============================================================================

/// A unit that did not complete, with the description of its failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Name of the failed unit.
    pub name: String,
    /// Textual description of the failure.
    pub description: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.name, self.description)
    }
}

/// Aggregate outcome of one run.
///
/// `succeeded + failed == total` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Units attempted.
    pub total: usize,
    /// Units whose action completed.
    pub succeeded: usize,
    /// Units whose action failed.
    pub failed: usize,
    /// Failures in the order they were encountered.
    pub failures: Vec<Failure>,
}

impl RunSummary {
    fn record_success(&mut self) {
        self.total += 1;
        self.succeeded += 1;
    }

    fn record_failure(&mut self, name: &str, error: &UnitError) {
        self.total += 1;
        self.failed += 1;
        self.failures.push(Failure {
            name: name.to_string(),
            description: error.to_string(),
        });
    }

    /// Returns `true` if no unit failed.
    pub const fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// `(name, description)` pairs of the failures, in encounter order.
    pub fn failure_pairs(&self) -> Vec<(&str, &str)> {
        self.failures
            .iter()
            .map(|failure| (failure.name.as_str(), failure.description.as_str()))
            .collect()
    }
}

// =============================================================================
// Banner
// =============================================================================

/// Text framing a run: an opening title and a closing completion line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    title: String,
    subject: String,
}

impl Default for Banner {
    fn default() -> Self {
        Self::new("Demonstrations", "Demonstrations")
    }
}

impl Banner {
    /// Creates a banner. `subject` names the units in the closing line, as in
    /// `=== All 50 {subject} Completed ===`.
    pub fn new(title: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
        }
    }

    fn write_opening(&self, console: &Console) {
        console.line(format_args!("=== {} ===", self.title));
        console.blank();
    }

    fn write_closing(&self, console: &Console, summary: &RunSummary) {
        console.blank();
        if summary.all_succeeded() {
            console.line(format_args!(
                "=== All {} {} Completed ===",
                summary.total, self.subject
            ));
        } else {
            console.line(format_args!(
                "=== {} of {} {} Completed ===",
                summary.succeeded, summary.total, self.subject
            ));
        }
        console.line(format_args!(
            "Summary: succeeded={}, failed={}",
            summary.succeeded, summary.failed
        ));
        for failure in &summary.failures {
            console.line(format_args!("  - {failure}"));
        }
    }
}

// =============================================================================
// Runner
// =============================================================================

/// Executes registries one unit at a time with per-unit failure isolation.
#[derive(Debug)]
pub struct Runner {
    config: CatalogueConfig,
    console: Console,
    tasks: TaskCapabilities,
    banner: Banner,
}

impl Runner {
    /// Creates a runner writing to `console`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::Runtime` if the task runtime cannot be built.
    pub fn new(config: CatalogueConfig, console: Console) -> Result<Self, CatalogueError> {
        let tasks = TaskCapabilities::new(&config)?;
        Ok(Self {
            config,
            console,
            tasks,
            banner: Banner::default(),
        })
    }

    /// Replaces the banner framing each run.
    #[must_use]
    pub fn with_banner(mut self, banner: Banner) -> Self {
        self.banner = banner;
        self
    }

    /// The task capabilities handed to units.
    pub const fn tasks(&self) -> &TaskCapabilities {
        &self.tasks
    }

    /// Runs every unit of `registry` in registration order and reports the
    /// outcome.
    ///
    /// The opening banner is written first; the closing banner and the
    /// summary lines after the last unit.
    pub fn run_all(&self, registry: &Registry) -> RunSummary {
        tracing::info!(units = registry.len(), "starting run");
        self.banner.write_opening(&self.console);

        let summary = registry
            .iter()
            .enumerate()
            .fold(RunSummary::default(), |mut summary, (index, unit)| {
                match self.run_unit(index + 1, unit) {
                    Ok(()) => summary.record_success(),
                    Err(error) => summary.record_failure(unit.name(), &error),
                }
                summary
            });

        if self.config.detached == DetachedPolicy::JoinBeforeSummary {
            self.join_detached();
        }

        self.banner.write_closing(&self.console, &summary);
        tracing::info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "run finished"
        );
        summary
    }

    /// Applies the configured [`DetachedPolicy`] at the end of the program.
    ///
    /// Joins outstanding detached threads unless the policy is `Abandon`.
    pub fn finish(&self) -> DetachedReport {
        match self.config.detached {
            DetachedPolicy::Abandon => {
                let pending = self.tasks.pending_detached();
                if pending > 0 {
                    tracing::debug!(pending, "abandoning detached tasks");
                }
                DetachedReport::default()
            }
            DetachedPolicy::JoinAtExit | DetachedPolicy::JoinBeforeSummary => self.join_detached(),
        }
    }

    fn join_detached(&self) -> DetachedReport {
        let report = self.tasks.join_detached();
        if report.joined() > 0 {
            tracing::debug!(
                completed = report.completed,
                panicked = report.panicked,
                "joined detached tasks"
            );
        }
        report
    }

    fn run_unit(&self, ordinal: usize, unit: &Demonstration) -> UnitResult {
        let span = tracing::info_span!("unit", ordinal, name = unit.name());
        let _entered = span.enter();

        let context = UnitContext::new(
            ordinal,
            self.console.for_unit(ordinal, unit.name()),
            &self.tasks,
            &self.config,
        );

        tracing::debug!("unit started");
        let result = panic::catch_unwind(AssertUnwindSafe(|| unit.invoke(&context)))
            .unwrap_or_else(|payload| Err(UnitError::from_panic(payload.as_ref())));

        match &result {
            Ok(()) => tracing::debug!("unit completed"),
            Err(error) => tracing::warn!(%error, "unit failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn config() -> CatalogueConfig {
        CatalogueConfig::default().with_worker_threads(1)
    }

    #[rstest]
    fn test_failure_display() {
        let failure = Failure {
            name: "b".to_string(),
            description: "boom".to_string(),
        };
        assert_eq!(failure.to_string(), "b: boom");
    }

    #[rstest]
    fn test_summary_counts_partition_total() {
        let mut summary = RunSummary::default();
        summary.record_success();
        summary.record_failure("x", &UnitError::failed("bad"));
        summary.record_success();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded + summary.failed, summary.total);
        assert_eq!(summary.failure_pairs(), vec![("x", "bad")]);
        assert!(!summary.all_succeeded());
    }

    #[rstest]
    fn test_closing_banner_when_some_failed(config: CatalogueConfig) {
        let mut registry = Registry::new();
        registry.add("ok", |_| Ok(())).unwrap();
        registry
            .add("broken", |_| Err(UnitError::failed("nope")))
            .unwrap();

        let (console, captured) = Console::capture();
        let runner = Runner::new(config, console)
            .unwrap()
            .with_banner(Banner::new("Title", "Things"));
        runner.run_all(&registry);

        assert_eq!(
            captured.stdout_lines(),
            vec![
                "=== Title ===",
                "",
                "",
                "=== 1 of 2 Things Completed ===",
                "Summary: succeeded=1, failed=1",
                "  - broken: nope",
            ]
        );
    }

    #[rstest]
    fn test_context_carries_ordinal_and_label(config: CatalogueConfig) {
        let mut registry = Registry::new();
        registry.add("first", |_| Ok(())).unwrap();
        registry
            .add("second", |context| {
                assert_eq!(context.ordinal(), 2);
                context.output().headline(context.output().label());
                Ok(())
            })
            .unwrap();

        let (console, captured) = Console::capture();
        let summary = Runner::new(config, console).unwrap().run_all(&registry);

        assert!(summary.all_succeeded());
        assert!(
            captured
                .stdout_lines()
                .contains(&"2. second => 2. second".to_string())
        );
    }
}
