//! Demonstration units and the context they run in.
//!
//! A [`Demonstration`] pairs a unique name with an action. The action takes
//! no parameters of its own: everything it may touch arrives through the
//! [`UnitContext`] the runner hands it, namely its labelled output, the task
//! capabilities and the run configuration. It cannot reach the registry.
//!
//! # Examples
//!
//! ```rust
//! use lambda_catalogue::unit::{Demonstration, UnitContext};
//!
//! let unit = Demonstration::new("lambda_with_supplier", |context: &UnitContext<'_>| {
//!     let supplier = || "Java Supplier";
//!     context.output().headline(supplier());
//!     Ok(())
//! });
//! assert_eq!(unit.name(), "lambda_with_supplier");
//! ```

use std::fmt;

use crate::config::CatalogueConfig;
use crate::console::UnitOutput;
use crate::error::UnitResult;
use crate::task::TaskCapabilities;

/// The boxed action of a demonstration.
pub type Action = Box<dyn Fn(&UnitContext<'_>) -> UnitResult + Send + Sync>;

// =============================================================================
// Demonstration
// =============================================================================

/// A named, parameterless demonstration.
pub struct Demonstration {
    name: String,
    action: Action,
}

impl Demonstration {
    /// Creates a demonstration from a name and an action.
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&UnitContext<'_>) -> UnitResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }

    /// The demonstration's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the action. Failures are returned, panics propagate.
    pub fn invoke(&self, context: &UnitContext<'_>) -> UnitResult {
        (self.action)(context)
    }
}

impl fmt::Debug for Demonstration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Demonstration")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// UnitContext
// =============================================================================

/// Everything a demonstration can reach while it runs.
#[derive(Debug)]
pub struct UnitContext<'a> {
    ordinal: usize,
    output: UnitOutput,
    tasks: &'a TaskCapabilities,
    config: &'a CatalogueConfig,
}

impl<'a> UnitContext<'a> {
    /// Creates the context for the unit at 1-based position `ordinal`.
    pub const fn new(
        ordinal: usize,
        output: UnitOutput,
        tasks: &'a TaskCapabilities,
        config: &'a CatalogueConfig,
    ) -> Self {
        Self {
            ordinal,
            output,
            tasks,
            config,
        }
    }

    /// The unit's 1-based registration position.
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The unit's labelled output.
    pub const fn output(&self) -> &UnitOutput {
        &self.output
    }

    /// Detached and awaited task capabilities.
    pub const fn tasks(&self) -> &'a TaskCapabilities {
        self.tasks
    }

    /// The run configuration.
    pub const fn config(&self) -> &'a CatalogueConfig {
        self.config
    }
}
