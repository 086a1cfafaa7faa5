//! The fifty demonstrations and their fixed registration order.
//!
//! Each demonstration builds a small in-memory collection, applies one
//! closure, function-reference or iterator idiom, and prints the outcome
//! through its labelled output. Collections whose iteration order would
//! otherwise depend on hashing are rendered with ordered collections so the
//! catalogue output is reproducible.
//!
//! Demonstrations 1 and 7 start detached threads; their lines are the only
//! part of the output whose position is not fixed. Demonstration 50 awaits
//! background work before returning.

pub mod asynchronous;
pub mod closures;
pub mod collectors;
pub mod pipelines;
pub mod streams;

use std::fmt::Display;

use crate::config::CatalogueConfig;
use crate::console::Console;
use crate::error::{CatalogueError, RegistryError, UnitResult};
use crate::registry::Registry;
use crate::runner::{Banner, Runner};
use crate::unit::{Demonstration, UnitContext};

type DemonstrationFn = fn(&UnitContext<'_>) -> UnitResult;

/// Every demonstration, in execution order.
const DEMONSTRATIONS: [(&str, DemonstrationFn); 50] = [
    ("simple_runnable_example", closures::simple_runnable_example),
    ("iterate_list_with_lambda", closures::iterate_list_with_lambda),
    ("filter_list_with_lambda", closures::filter_list_with_lambda),
    ("sort_list_with_lambda", closures::sort_list_with_lambda),
    ("use_custom_functional_interface", closures::use_custom_functional_interface),
    ("lambda_with_map_iteration", closures::lambda_with_map_iteration),
    ("thread_with_lambda", closures::thread_with_lambda),
    ("lambda_in_comparator", closures::lambda_in_comparator),
    ("method_reference_example", closures::method_reference_example),
    ("lambda_with_optional", closures::lambda_with_optional),
    ("lambda_with_predicate", closures::lambda_with_predicate),
    ("lambda_with_bi_function", closures::lambda_with_bi_function),
    ("lambda_with_consumer", closures::lambda_with_consumer),
    ("lambda_with_supplier", closures::lambda_with_supplier),
    ("lambda_with_function", closures::lambda_with_function),
    ("lambda_with_unary_operator", closures::lambda_with_unary_operator),
    ("lambda_with_binary_operator", closures::lambda_with_binary_operator),
    ("check_even_numbers_with_lambda", closures::check_even_numbers_with_lambda),
    ("custom_sorting_with_lambda", closures::custom_sorting_with_lambda),
    ("uppercase_conversion_with_lambda", streams::uppercase_conversion_with_lambda),
    ("stream_reduce_with_lambda", streams::stream_reduce_with_lambda),
    ("stream_distinct_with_lambda", streams::stream_distinct_with_lambda),
    ("stream_filter_with_lambda", streams::stream_filter_with_lambda),
    ("stream_map_with_lambda", streams::stream_map_with_lambda),
    ("stream_sorted_with_lambda", streams::stream_sorted_with_lambda),
    ("stream_with_count", streams::stream_with_count),
    ("stream_search_with_any_match", streams::stream_search_with_any_match),
    ("stream_with_all_match", streams::stream_with_all_match),
    ("stream_with_none_match", streams::stream_with_none_match),
    ("stream_with_find_first", streams::stream_with_find_first),
    ("stream_with_find_any", streams::stream_with_find_any),
    ("stream_for_summing_integers", streams::stream_for_summing_integers),
    ("stream_for_max_integers", streams::stream_for_max_integers),
    ("stream_for_min_integers", streams::stream_for_min_integers),
    ("stream_for_joining_strings", streams::stream_for_joining_strings),
    ("stream_map_to_int", streams::stream_map_to_int),
    ("stream_collect_to_set", collectors::stream_collect_to_set),
    ("stream_grouping_by", collectors::stream_grouping_by),
    ("stream_with_partitioning_by", collectors::stream_with_partitioning_by),
    ("stream_with_counting", collectors::stream_with_counting),
    ("stream_with_summarizing_int", collectors::stream_with_summarizing_int),
    ("stream_grouping_by_length", collectors::stream_grouping_by_length),
    ("stream_joining_without_delimiter", collectors::stream_joining_without_delimiter),
    ("stream_with_to_map", collectors::stream_with_to_map),
    ("create_stream", pipelines::create_stream),
    ("stream_with_limit", pipelines::stream_with_limit),
    ("stream_with_skip", pipelines::stream_with_skip),
    ("stream_with_peek", pipelines::stream_with_peek),
    ("stream_with_optional_or_else", pipelines::stream_with_optional_or_else),
    ("lambda_with_completable_future", asynchronous::lambda_with_completable_future),
];

/// Names of the demonstrations that start detached threads.
pub const DETACHED_DEMONSTRATIONS: [&str; 2] = ["simple_runnable_example", "thread_with_lambda"];

/// Builds the registry holding every demonstration in execution order.
///
/// # Errors
///
/// Returns `RegistryError::DuplicateName` if two demonstrations share a name.
pub fn registry() -> Result<Registry, RegistryError> {
    Registry::try_from(demonstrations().collect::<Vec<_>>())
}

/// Every demonstration as a [`Demonstration`], in execution order.
pub fn demonstrations() -> impl Iterator<Item = Demonstration> {
    DEMONSTRATIONS
        .into_iter()
        .map(|(name, action)| Demonstration::new(name, action))
}

/// Builds the registry from `units` and a runner framed by the catalogue
/// banner. Any error here is fatal for the process.
///
/// # Errors
///
/// Returns `CatalogueError::Registry` if two units share a name, or
/// `CatalogueError::Runtime` if the task runtime cannot be built.
pub fn assemble<I>(
    units: I,
    config: CatalogueConfig,
    console: Console,
) -> Result<(Registry, Runner), CatalogueError>
where
    I: IntoIterator<Item = Demonstration>,
{
    let registry = Registry::try_from(units.into_iter().collect::<Vec<_>>())?;
    let runner = Runner::new(config, console)?.with_banner(banner());
    Ok((registry, runner))
}

/// The banner framing a catalogue run.
pub fn banner() -> Banner {
    Banner::new("Lambda Expressions Examples", "Lambda Examples")
}

/// Renders items as `[a, b, c]` using their `Display` form.
pub(crate) fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let joined = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Runs one demonstration on its own with a captured console and returns
/// the lines it wrote.
#[cfg(test)]
pub(crate) fn run_alone(ordinal: usize, name: &str, action: DemonstrationFn) -> Vec<String> {
    use crate::task::TaskCapabilities;

    let config = CatalogueConfig::default().with_worker_threads(1);
    let tasks = TaskCapabilities::new(&config).unwrap();
    let (console, captured) = Console::capture();
    let context = UnitContext::new(ordinal, console.for_unit(ordinal, name), &tasks, &config);
    action(&context).unwrap();
    captured.stdout_lines()
}
