//! # lambda-catalogue
//!
//! A catalogue of fifty self-contained demonstrations of closures, function
//! references and iterator pipelines, hosted by a small framework that runs
//! them in a fixed order and keeps one failing demonstration from stopping the
//! rest.
//!
//! ## Overview
//!
//! - **Registry**: an ordered set of uniquely named [`Demonstration`]s,
//!   built once at startup.
//! - **Runner**: executes a registry sequentially, catches failures and
//!   panics at each unit boundary, and returns a [`RunSummary`].
//! - **Tasks**: explicit detached and awaited task capabilities for the
//!   demonstrations that use concurrency.
//! - **Catalogue**: the demonstrations themselves.
//!
//! ## Example
//!
//! ```rust
//! use lambda_catalogue::prelude::*;
//!
//! let mut registry = Registry::new();
//! registry
//!     .add("lambda_with_unary_operator", |context| {
//!         let square = |value: i32| value * value;
//!         context.output().headline(format_args!("Square of 5: {}", square(5)));
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let (console, captured) = Console::capture();
//! let runner = Runner::new(CatalogueConfig::default().with_worker_threads(1), console).unwrap();
//! let summary = runner.run_all(&registry);
//!
//! assert_eq!(summary.succeeded, 1);
//! assert!(captured.stdout().contains("1. lambda_with_unary_operator => Square of 5: 25"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use lambda_catalogue::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{CatalogueConfig, DetachedPolicy};
    pub use crate::console::{Captured, Console, UnitOutput};
    pub use crate::error::{RegistryError, TaskError, UnitError, UnitResult};
    pub use crate::registry::Registry;
    pub use crate::runner::{Banner, Failure, RunSummary, Runner};
    pub use crate::task::{DetachedReport, TaskCapabilities};
    pub use crate::unit::{Demonstration, UnitContext};
}

pub mod catalogue;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod registry;
pub mod runner;
pub mod task;
pub mod unit;

pub use registry::Registry;
pub use runner::{RunSummary, Runner};
pub use unit::Demonstration;
