//! Tests for registry construction.

use lambda_catalogue::catalogue;
use lambda_catalogue::error::CatalogueError;
use lambda_catalogue::prelude::*;
use proptest::prelude::*;
use rstest::rstest;

fn noop(_: &UnitContext<'_>) -> UnitResult {
    Ok(())
}

#[rstest]
fn test_duplicate_registration_fails_without_adding() {
    let mut registry = Registry::new();
    registry.register(Demonstration::new("B", noop)).unwrap();

    let result = registry.register(Demonstration::new("B", noop));

    assert_eq!(
        result,
        Err(RegistryError::DuplicateName {
            name: "B".to_string()
        })
    );
    assert_eq!(registry.len(), 1);
}

#[rstest]
fn test_names_are_case_sensitive() {
    let mut registry = Registry::new();
    registry.add("stream", noop).unwrap();
    registry.add("Stream", noop).unwrap();
    assert_eq!(registry.len(), 2);
}

#[rstest]
fn test_catalogue_registry_order() {
    let registry = catalogue::registry().unwrap();
    let names: Vec<&str> = registry.names().collect();

    assert_eq!(names.len(), 50);
    assert_eq!(names[2], "filter_list_with_lambda");
    assert_eq!(names[20], "stream_reduce_with_lambda");
    assert_eq!(names[40], "stream_with_summarizing_int");
    assert_eq!(names[49], "lambda_with_completable_future");
}

#[rstest]
fn test_catalogue_demonstrations_match_registry() {
    let registry = catalogue::registry().unwrap();
    let from_iterator: Vec<String> = catalogue::demonstrations()
        .map(|unit| unit.name().to_string())
        .collect();
    let from_registry: Vec<String> = registry.names().map(str::to_string).collect();
    assert_eq!(from_iterator, from_registry);
}

fn startup_config() -> CatalogueConfig {
    CatalogueConfig::default().with_worker_threads(1)
}

#[rstest]
fn test_assemble_rejects_duplicate_names_before_running() {
    let units = vec![
        Demonstration::new("dup", noop),
        Demonstration::new("other", noop),
        Demonstration::new("dup", noop),
    ];
    let (console, captured) = Console::capture();

    let Err(error) = catalogue::assemble(units, startup_config(), console) else {
        panic!("duplicate names must fail assembly");
    };

    assert!(matches!(
        &error,
        CatalogueError::Registry(RegistryError::DuplicateName { name }) if name == "dup"
    ));
    assert!(captured.stdout().is_empty());

    let fatal = anyhow::Error::from(error);
    assert!(fatal.to_string().contains("dup"));
}

#[rstest]
fn test_assemble_builds_the_full_catalogue() {
    let (console, _captured) = Console::capture();
    let Ok((registry, runner)) =
        catalogue::assemble(catalogue::demonstrations(), startup_config(), console)
    else {
        panic!("catalogue must assemble");
    };
    assert_eq!(registry.len(), 50);
    assert_eq!(runner.finish().joined(), 0);
}

proptest! {
    #[test]
    fn prop_registry_keeps_first_of_each_name(names in prop::collection::vec("[a-d]{1,2}", 0..30)) {
        let mut registry = Registry::new();
        let mut expected: Vec<String> = Vec::new();
        for name in &names {
            let result = registry.add(name, noop);
            if expected.contains(name) {
                prop_assert!(result.is_err());
            } else {
                prop_assert!(result.is_ok());
                expected.push(name.clone());
            }
        }
        let registered: Vec<String> = registry.names().map(str::to_string).collect();
        prop_assert_eq!(registered, expected);
    }
}
