//! Ordered registry of demonstrations.
//!
//! The registry is populated once at startup and then handed to the
//! [`Runner`](crate::runner::Runner). Registration order is execution order;
//! names are unique.
//!
//! # Examples
//!
//! ```rust
//! use lambda_catalogue::error::RegistryError;
//! use lambda_catalogue::registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.add("first", |_| Ok(())).unwrap();
//! registry.add("second", |_| Ok(())).unwrap();
//!
//! let duplicate = registry.add("first", |_| Ok(()));
//! assert!(matches!(duplicate, Err(RegistryError::DuplicateName { .. })));
//! assert_eq!(registry.names().collect::<Vec<_>>(), vec!["first", "second"]);
//! ```

use rustc_hash::FxHashSet;

use crate::error::{RegistryError, UnitResult};
use crate::unit::{Demonstration, UnitContext};

/// An ordered collection of uniquely named demonstrations.
#[derive(Debug, Default)]
pub struct Registry {
    units: Vec<Demonstration>,
    names: FxHashSet<String>,
}

static_assertions::assert_impl_all!(Registry: Send, Sync);

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `unit` after every unit registered so far.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if a unit with the same name is
    /// already registered. The registry is left unchanged.
    pub fn register(&mut self, unit: Demonstration) -> Result<(), RegistryError> {
        if !self.names.insert(unit.name().to_string()) {
            return Err(RegistryError::DuplicateName {
                name: unit.name().to_string(),
            });
        }
        self.units.push(unit);
        Ok(())
    }

    /// Builds a [`Demonstration`] from `name` and `action` and registers it.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if `name` is taken.
    pub fn add<F>(&mut self, name: &str, action: F) -> Result<&mut Self, RegistryError>
    where
        F: Fn(&UnitContext<'_>) -> UnitResult + Send + Sync + 'static,
    {
        self.register(Demonstration::new(name, action))?;
        Ok(self)
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns `true` if a unit named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Units in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Demonstration> {
        self.units.iter()
    }

    /// Unit names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(Demonstration::name)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Demonstration;
    type IntoIter = std::slice::Iter<'a, Demonstration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Demonstration>> for Registry {
    type Error = RegistryError;

    fn try_from(units: Vec<Demonstration>) -> Result<Self, Self::Error> {
        units.into_iter().try_fold(Self::new(), |mut registry, unit| {
            registry.register(unit)?;
            Ok(registry)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn noop(_: &UnitContext<'_>) -> UnitResult {
        Ok(())
    }

    #[rstest]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.names().count(), 0);
    }

    #[rstest]
    fn test_register_preserves_order() {
        let mut registry = Registry::new();
        for name in ["c", "a", "b"] {
            registry.register(Demonstration::new(name, noop)).unwrap();
        }
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert!(registry.contains("a"));
        assert!(!registry.contains("d"));
    }

    #[rstest]
    fn test_duplicate_is_rejected_and_not_added() {
        let mut registry = Registry::new();
        registry.add("stream_with_skip", noop).unwrap();

        let error = registry.add("stream_with_skip", noop).unwrap_err();
        assert_eq!(
            error,
            RegistryError::DuplicateName {
                name: "stream_with_skip".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[rstest]
    fn test_add_chains() {
        let mut registry = Registry::new();
        registry.add("one", noop).unwrap().add("two", noop).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[rstest]
    fn test_try_from_vec_stops_at_first_duplicate() {
        let result = Registry::try_from(vec![
            Demonstration::new("x", noop),
            Demonstration::new("y", noop),
            Demonstration::new("x", noop),
        ]);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateName { ref name }) if name == "x"
        ));
    }
}
