//! Runtime configuration for the catalogue.
//!
//! The catalogue needs no configuration: every field has a default that
//! reproduces the documented behaviour. Environment variables can override the
//! defaults for local experimentation and for tests.
//!
//! # Environment Variables
//!
//! - `LAMBDA_CATALOGUE_ASYNC_DELAY_MS`: simulated work of the awaited
//!   demonstration, in milliseconds (default: 1000)
//! - `LAMBDA_CATALOGUE_WORKER_THREADS`: worker threads of the task runtime
//!   (default: number of CPUs)
//! - `LAMBDA_CATALOGUE_DETACHED`: one of `join-at-exit`, `join-before-summary`
//!   or `abandon` (default: `join-at-exit`)
//!
//! Log filtering is controlled separately through `RUST_LOG`.
//!
//! # Example
//!
//! ```rust
//! use lambda_catalogue::config::{CatalogueConfig, DetachedPolicy};
//!
//! let config = CatalogueConfig::from_lookup(|key| match key {
//!     "LAMBDA_CATALOGUE_DETACHED" => Some("abandon".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//! assert_eq!(config.detached, DetachedPolicy::Abandon);
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable overriding [`CatalogueConfig::async_delay`].
pub const ASYNC_DELAY_VAR: &str = "LAMBDA_CATALOGUE_ASYNC_DELAY_MS";
/// Environment variable overriding [`CatalogueConfig::worker_threads`].
pub const WORKER_THREADS_VAR: &str = "LAMBDA_CATALOGUE_WORKER_THREADS";
/// Environment variable overriding [`CatalogueConfig::detached`].
pub const DETACHED_VAR: &str = "LAMBDA_CATALOGUE_DETACHED";

const DEFAULT_ASYNC_DELAY: Duration = Duration::from_millis(1000);

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

// =============================================================================
// DetachedPolicy
// =============================================================================

/// What happens to detached threads still running when the catalogue ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetachedPolicy {
    /// The summary is printed without waiting; the process joins detached
    /// threads right before exiting. Their output may follow the summary.
    #[default]
    JoinAtExit,
    /// Detached threads are joined before the summary is printed, making the
    /// whole output deterministic.
    JoinBeforeSummary,
    /// Detached threads are never joined; process exit may discard them.
    Abandon,
}

impl DetachedPolicy {
    /// The textual form accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JoinAtExit => "join-at-exit",
            Self::JoinBeforeSummary => "join-before-summary",
            Self::Abandon => "abandon",
        }
    }
}

impl fmt::Display for DetachedPolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for DetachedPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "join-at-exit" => Ok(Self::JoinAtExit),
            "join-before-summary" => Ok(Self::JoinBeforeSummary),
            "abandon" => Ok(Self::Abandon),
            other => Err(ConfigError::InvalidValue {
                key: DETACHED_VAR.to_string(),
                message: format!(
                    "`{other}` is not one of join-at-exit, join-before-summary, abandon"
                ),
            }),
        }
    }
}

// =============================================================================
// CatalogueConfig
// =============================================================================

/// Catalogue configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogueConfig {
    /// Simulated work performed by the awaited background task.
    pub async_delay: Duration,
    /// Worker threads of the runtime driving awaited tasks.
    pub worker_threads: usize,
    /// Handling of detached threads at the end of a run.
    pub detached: DetachedPolicy,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            async_delay: DEFAULT_ASYNC_DELAY,
            worker_threads: num_cpus::get(),
            detached: DetachedPolicy::default(),
        }
    }
}

impl CatalogueConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a present value is invalid.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let async_delay = lookup(ASYNC_DELAY_VAR)
            .map(|value| parse_number::<u64>(ASYNC_DELAY_VAR, &value))
            .transpose()?
            .map_or(defaults.async_delay, Duration::from_millis);

        let worker_threads = lookup(WORKER_THREADS_VAR)
            .map(|value| parse_number::<usize>(WORKER_THREADS_VAR, &value))
            .transpose()?
            .unwrap_or(defaults.worker_threads);
        if worker_threads == 0 {
            return Err(ConfigError::InvalidValue {
                key: WORKER_THREADS_VAR.to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        let detached = lookup(DETACHED_VAR)
            .map(|value| value.parse::<DetachedPolicy>())
            .transpose()?
            .unwrap_or(defaults.detached);

        Ok(Self {
            async_delay,
            worker_threads,
            detached,
        })
    }

    /// Returns a copy with a different awaited-task delay.
    #[must_use]
    pub const fn with_async_delay(mut self, async_delay: Duration) -> Self {
        self.async_delay = async_delay;
        self
    }

    /// Returns a copy with a different worker thread count.
    #[must_use]
    pub const fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    /// Returns a copy with a different detached-thread policy.
    #[must_use]
    pub const fn with_detached(mut self, detached: DetachedPolicy) -> Self {
        self.detached = detached;
        self
    }
}

fn parse_number<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|error| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(candidate, _)| *candidate == key)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[rstest]
    fn test_defaults_when_nothing_is_set() {
        let config = CatalogueConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CatalogueConfig::default());
        assert_eq!(config.async_delay, Duration::from_secs(1));
        assert_eq!(config.detached, DetachedPolicy::JoinAtExit);
        assert!(config.worker_threads >= 1);
    }

    #[rstest]
    fn test_overrides_are_applied() {
        let config = CatalogueConfig::from_lookup(lookup_from(&[
            (ASYNC_DELAY_VAR, "25"),
            (WORKER_THREADS_VAR, " 2 "),
            (DETACHED_VAR, "JOIN-BEFORE-SUMMARY"),
        ]))
        .unwrap();
        assert_eq!(config.async_delay, Duration::from_millis(25));
        assert_eq!(config.worker_threads, 2);
        assert_eq!(config.detached, DetachedPolicy::JoinBeforeSummary);
    }

    #[rstest]
    #[case(ASYNC_DELAY_VAR, "soon")]
    #[case(WORKER_THREADS_VAR, "-1")]
    #[case(WORKER_THREADS_VAR, "0")]
    #[case(DETACHED_VAR, "forget")]
    fn test_invalid_values_are_rejected(#[case] key: &'static str, #[case] value: &'static str) {
        let result = CatalogueConfig::from_lookup(move |candidate| {
            (candidate == key).then(|| value.to_string())
        });
        match result {
            Err(ConfigError::InvalidValue { key: reported, .. }) => assert_eq!(reported, key),
            other => panic!("expected InvalidValue for {key}, got {other:?}"),
        }
    }

    #[rstest]
    #[case(DetachedPolicy::JoinAtExit)]
    #[case(DetachedPolicy::JoinBeforeSummary)]
    #[case(DetachedPolicy::Abandon)]
    fn test_detached_policy_display_parses_back(#[case] policy: DetachedPolicy) {
        assert_eq!(policy.to_string().parse::<DetachedPolicy>(), Ok(policy));
    }
}
