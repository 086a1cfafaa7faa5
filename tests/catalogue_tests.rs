//! End-to-end run of the full catalogue against a captured console.

use std::time::Duration;

use lambda_catalogue::catalogue;
use lambda_catalogue::prelude::*;
use rstest::{fixture, rstest};

const EXPECTED_DETERMINISTIC_OUTPUT: &[&str] = &[
    "=== Lambda Expressions Examples ===",
    "",
    "2. iterate_list_with_lambda:",
    "Java",
    "Spring",
    "Lambda",
    "3. filter_list_with_lambda => starts with 'J':",
    "Java",
    "Javascript",
    "4. sort_list_with_lambda => sorted alphabetically:",
    "Java",
    "Kafka",
    "Lambda",
    "5. use_custom_functional_interface => Addition: 8",
    "5. use_custom_functional_interface => Multiplication: 12",
    "6. lambda_with_map_iteration:",
    "Java: 8",
    "Lambda: 1",
    "SpringBoot: 5",
    "8. lambda_in_comparator => sorted by length:",
    "Java",
    "Kafka",
    "Lambda",
    "9. method_reference_example:",
    "Java",
    "Kafka",
    "Lambda",
    "10. lambda_with_optional => Value is present: Java",
    "11. lambda_with_predicate => isEmpty(\"\"): true",
    "11. lambda_with_predicate => isEmpty(\"Java\"): false",
    "12. lambda_with_bi_function => 2 + 3 = 5",
    "13. lambda_with_consumer => Hello World Consumer!",
    "14. lambda_with_supplier => Java Supplier",
    "15. lambda_with_function => Length of 'Lambda with function': 20",
    "16. lambda_with_unary_operator => Square of 5: 25",
    "17. lambda_with_binary_operator => 2 * 3 = 6",
    "18. check_even_numbers_with_lambda => 4 is even: true",
    "18. check_even_numbers_with_lambda => 5 is even: false",
    "19. custom_sorting_with_lambda => Descending:",
    "Pear",
    "Grapes",
    "Apple",
    "20. uppercase_conversion_with_lambda:",
    "JAVA",
    "SPRING",
    "LAMBDA",
    "21. stream_reduce_with_lambda => Sum: 15",
    "22. stream_distinct_with_lambda => Unique values:",
    "1",
    "2",
    "3",
    "4",
    "5",
    "23. stream_filter_with_lambda => Even numbers:",
    "2",
    "4",
    "6",
    "8",
    "10",
    "24. stream_map_with_lambda => Lowercase:",
    "java",
    "spring",
    "lambda",
    "25. stream_sorted_with_lambda => Sorted:",
    "Banana",
    "Grapes",
    "Pear",
    "26. stream_with_count => Count: 6",
    "27. stream_search_with_any_match => Contains 'Java': false",
    "28. stream_with_all_match => All even: true",
    "29. stream_with_none_match => Contains no Python: true",
    "30. stream_with_find_first => First element: Java",
    "31. stream_with_find_any => Any element: Java",
    "32. stream_for_summing_integers => Sum: 15",
    "33. stream_for_max_integers => Max: 5",
    "34. stream_for_min_integers => Min: 1",
    "35. stream_for_joining_strings => Joined: Java,Spring,Lambda",
    "36. stream_map_to_int => String lengths:",
    "4",
    "6",
    "6",
    "37. stream_collect_to_set => Unique elements:",
    "Java",
    "Lambda",
    "Spring",
    "38. stream_grouping_by => Frequency count:",
    "Java: 2",
    "Lambda: 1",
    "Spring: 1",
    "39. stream_with_partitioning_by => Partitioned:",
    "Odd: [1, 3, 5, 7, 9]",
    "Even: [2, 4, 6, 8, 10]",
    "40. stream_with_counting => Count: 3",
    "41. stream_with_summarizing_int:",
    "  Sum: 15",
    "  Average: 3.0",
    "  Max: 5",
    "  Min: 1",
    "42. stream_grouping_by_length => Grouped by length:",
    "4: [Java]",
    "6: [Spring, Lambda]",
    "43. stream_joining_without_delimiter => JavaSpringLambda",
    "44. stream_with_to_map => String to length mapping:",
    "Java: 4",
    "Lambda: 6",
    "Spring: 6",
    "45. create_stream => Created stream:",
    "Java",
    "Spring",
    "Lambda",
    "46. stream_with_limit => First 2 elements:",
    "Java",
    "Spring",
    "47. stream_with_skip => Skip first 2 elements:",
    "Lambda",
    "Kafka",
    "48. stream_with_peek => Peek at elements:",
    "  Processing: Java",
    "  Processing: Spring",
    "  Processing: Lambda",
    "  Processing: Kafka",
    "  Result: [Java, Spring, Lambda, Kafka]",
    "49. stream_with_optional_or_else => Default Value",
    "50. lambda_with_completable_future => Async Lambda Result",
    "",
    "=== All 50 Lambda Examples Completed ===",
    "Summary: succeeded=50, failed=0",
];

const DETACHED_LINES: [&str; 2] = [
    "1. simple_runnable_example => Hello, Lambda!",
    "7. thread_with_lambda => Thread with Lambda!",
];

#[fixture]
fn config() -> CatalogueConfig {
    CatalogueConfig::default()
        .with_worker_threads(2)
        .with_async_delay(Duration::ZERO)
        .with_detached(DetachedPolicy::JoinBeforeSummary)
}

fn run_catalogue(config: CatalogueConfig) -> (RunSummary, Captured) {
    let registry = catalogue::registry().unwrap();
    let (console, captured) = Console::capture();
    let runner = Runner::new(config, console)
        .unwrap()
        .with_banner(catalogue::banner());
    let summary = runner.run_all(&registry);
    runner.finish();
    (summary, captured)
}

#[rstest]
fn test_every_demonstration_succeeds(config: CatalogueConfig) {
    let (summary, captured) = run_catalogue(config);

    assert_eq!(summary.total, 50);
    assert_eq!(summary.succeeded, 50);
    assert!(summary.failures.is_empty());
    assert!(captured.stderr().is_empty());
}

#[rstest]
fn test_deterministic_output_matches_catalogue(config: CatalogueConfig) {
    let (_, captured) = run_catalogue(config);

    let deterministic: Vec<String> = captured
        .stdout_lines()
        .into_iter()
        .filter(|line| !DETACHED_LINES.contains(&line.as_str()))
        .collect();

    assert_eq!(deterministic, EXPECTED_DETERMINISTIC_OUTPUT);
}

#[rstest]
fn test_detached_lines_appear_exactly_once_before_summary(config: CatalogueConfig) {
    let (_, captured) = run_catalogue(config);
    let lines = captured.stdout_lines();
    let summary_position = lines
        .iter()
        .position(|line| line.starts_with("Summary:"))
        .unwrap();

    for expected in DETACHED_LINES {
        let positions: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.as_str() == expected)
            .map(|(position, _)| position)
            .collect();
        assert_eq!(positions.len(), 1, "{expected} should appear once");
        assert!(positions[0] < summary_position);
    }
}

#[rstest]
fn test_detached_output_survives_join_at_exit(config: CatalogueConfig) {
    let (_, captured) = run_catalogue(config.with_detached(DetachedPolicy::JoinAtExit));
    let lines = captured.stdout_lines();
    for expected in DETACHED_LINES {
        assert!(lines.iter().any(|line| line == expected));
    }
}

#[rstest]
fn test_awaited_demonstration_honours_configured_delay(config: CatalogueConfig) {
    let registry = Registry::try_from(
        catalogue::demonstrations()
            .filter(|unit| unit.name() == "lambda_with_completable_future")
            .collect::<Vec<_>>(),
    )
    .unwrap();
    let (console, captured) = Console::capture();
    let runner = Runner::new(config.with_async_delay(Duration::from_millis(40)), console).unwrap();

    let started = std::time::Instant::now();
    let summary = runner.run_all(&registry);

    assert!(started.elapsed() >= Duration::from_millis(40));
    assert!(summary.all_succeeded());
    assert!(
        captured
            .stdout_lines()
            .contains(&"1. lambda_with_completable_future => Async Lambda Result".to_string())
    );
}
