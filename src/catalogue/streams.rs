//! Iterator adapters and terminal operations.

use std::ops::Add;

use rustc_hash::FxHashSet;

use crate::error::UnitResult;
use crate::unit::UnitContext;

/// 20. Mapping every element to upper case.
pub fn uppercase_conversion_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = ["java", "spring", "lambda"];
    let upper: Vec<String> = list.iter().map(|word| word.to_uppercase()).collect();
    output.heading();
    upper.iter().for_each(|word| output.line(word));
    Ok(())
}

/// 21. Folding with an identity and an associative operator.
pub fn stream_reduce_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let numbers = [1, 2, 3, 4, 5];
    let sum = numbers.iter().copied().fold(0, <i32 as Add>::add);
    context.output().headline(format_args!("Sum: {sum}"));
    Ok(())
}

/// 22. Dropping repeated values while keeping first-occurrence order.
pub fn stream_distinct_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let numbers = [1, 2, 2, 3, 4, 4, 5];
    let mut seen = FxHashSet::default();
    output.headline("Unique values:");
    numbers
        .iter()
        .filter(|number| seen.insert(**number))
        .for_each(|number| output.line(number));
    Ok(())
}

/// 23. Filtering even numbers.
pub fn stream_filter_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let even_numbers: Vec<i32> = (1..=10).filter(|number| number % 2 == 0).collect();
    output.headline("Even numbers:");
    even_numbers.iter().for_each(|number| output.line(number));
    Ok(())
}

/// 24. Mapping through a method reference.
pub fn stream_map_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = ["Java", "Spring", "Lambda"];
    output.headline("Lowercase:");
    list.iter()
        .copied()
        .map(str::to_lowercase)
        .for_each(|word| output.line(word));
    Ok(())
}

/// 25. Natural ordering without touching the source.
pub fn stream_sorted_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = ["Banana", "Pear", "Grapes"];
    let mut sorted = list.to_vec();
    sorted.sort_unstable();
    output.headline("Sorted:");
    sorted.iter().for_each(|word| output.line(word));
    Ok(())
}

/// 26. Counting elements.
pub fn stream_with_count(context: &UnitContext<'_>) -> UnitResult {
    let numbers = [1, 2, 3, 4, 5, 6];
    let count = numbers.iter().count();
    context.output().headline(format_args!("Count: {count}"));
    Ok(())
}

/// 27. Short-circuiting search for any match.
pub fn stream_search_with_any_match(context: &UnitContext<'_>) -> UnitResult {
    let list = ["Banana", "Pears", "Grapes"];
    let contains_java = list.iter().any(|word| *word == "Java");
    context
        .output()
        .headline(format_args!("Contains 'Java': {contains_java}"));
    Ok(())
}

/// 28. Checking that every element matches.
pub fn stream_with_all_match(context: &UnitContext<'_>) -> UnitResult {
    let list = [2, 4, 6, 8, 10];
    let all_even = list.iter().all(|number| number % 2 == 0);
    context
        .output()
        .headline(format_args!("All even: {all_even}"));
    Ok(())
}

/// 29. Checking that no element matches.
pub fn stream_with_none_match(context: &UnitContext<'_>) -> UnitResult {
    let list = ["Java", "Spring", "Lambda"];
    let no_python = !list.iter().any(|word| *word == "Python");
    context
        .output()
        .headline(format_args!("Contains no Python: {no_python}"));
    Ok(())
}

/// 30. Taking the first element.
pub fn stream_with_find_first(context: &UnitContext<'_>) -> UnitResult {
    let list = ["Java", "Spring", "Lambda"];
    if let Some(first) = list.iter().next() {
        context
            .output()
            .headline(format_args!("First element: {first}"));
    }
    Ok(())
}

/// 31. Taking any element. A sequential iterator yields the first one.
pub fn stream_with_find_any(context: &UnitContext<'_>) -> UnitResult {
    let list = ["Java", "Spring", "Lambda"];
    if let Some(any) = list.iter().find(|_| true) {
        context
            .output()
            .headline(format_args!("Any element: {any}"));
    }
    Ok(())
}

/// 32. Summing integers.
pub fn stream_for_summing_integers(context: &UnitContext<'_>) -> UnitResult {
    let list = [1, 2, 3, 4, 5];
    let sum: i32 = list.iter().sum();
    context.output().headline(format_args!("Sum: {sum}"));
    Ok(())
}

/// 33. Maximum with a fallback for an empty source.
pub fn stream_for_max_integers(context: &UnitContext<'_>) -> UnitResult {
    let list = [1, 2, 3, 4, 5];
    let max = list.iter().copied().max().unwrap_or(0);
    context.output().headline(format_args!("Max: {max}"));
    Ok(())
}

/// 34. Minimum with a fallback for an empty source.
pub fn stream_for_min_integers(context: &UnitContext<'_>) -> UnitResult {
    let list = [1, 2, 3, 4, 5];
    let min = list.iter().copied().min().unwrap_or(0);
    context.output().headline(format_args!("Min: {min}"));
    Ok(())
}

/// 35. Joining with a delimiter.
pub fn stream_for_joining_strings(context: &UnitContext<'_>) -> UnitResult {
    let list = ["Java", "Spring", "Lambda"];
    let joined = list.join(",");
    context.output().headline(format_args!("Joined: {joined}"));
    Ok(())
}

/// 36. Mapping strings to their lengths.
pub fn stream_map_to_int(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = ["Java", "Spring", "Lambda"];
    output.headline("String lengths:");
    list.iter()
        .map(|word| word.len())
        .for_each(|length| output.line(length));
    Ok(())
}
