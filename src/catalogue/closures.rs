//! Closures, function references and the `Fn` traits.

use std::collections::BTreeMap;
use std::ops::{Add, Mul};

use crate::console::UnitOutput;
use crate::error::UnitResult;
use crate::unit::UnitContext;

// =============================================================================
// Calculator
// =============================================================================

/// A single-method interface implemented by any binary integer closure.
pub trait Calculator {
    /// Combines two operands.
    fn calculate(&self, left: i32, right: i32) -> i32;
}

impl<F> Calculator for F
where
    F: Fn(i32, i32) -> i32,
{
    fn calculate(&self, left: i32, right: i32) -> i32 {
        self(left, right)
    }
}

// =============================================================================
// Demonstrations
// =============================================================================

/// 1. A closure run on a detached thread.
pub fn simple_runnable_example(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output().clone();
    let runnable = move || output.headline("Hello, Lambda!");
    context.tasks().detached("simple-runnable", runnable)?;
    Ok(())
}

/// 2. Iterating a list with `for_each`.
pub fn iterate_list_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = ["Java", "Spring", "Lambda"];
    output.heading();
    list.iter().for_each(|item| output.line(item));
    Ok(())
}

/// 3. Keeping the words that start with `J`.
pub fn filter_list_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = ["Java", "Javascript", "Python", "C"];
    let filtered: Vec<&str> = list
        .into_iter()
        .filter(|word| word.starts_with('J'))
        .collect();
    output.headline("starts with 'J':");
    filtered.iter().for_each(|word| output.line(word));
    Ok(())
}

/// 4. Sorting with a comparator passed by reference.
pub fn sort_list_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let mut sorted = vec!["Java", "Kafka", "Lambda"];
    sorted.sort_by(Ord::cmp);
    output.headline("sorted alphabetically:");
    sorted.iter().for_each(|word| output.line(word));
    Ok(())
}

/// 5. A custom single-method trait satisfied by a function reference and a
/// closure.
pub fn use_custom_functional_interface(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let add = <i32 as Add>::add;
    let multiply = |left: i32, right: i32| left * right;
    output.headline(format_args!("Addition: {}", add.calculate(5, 3)));
    output.headline(format_args!(
        "Multiplication: {}",
        multiply.calculate(4, 3)
    ));
    Ok(())
}

/// 6. Visiting every entry of a map.
pub fn lambda_with_map_iteration(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let map = BTreeMap::from([("Java", 8), ("SpringBoot", 5), ("Lambda", 1)]);
    output.heading();
    map.iter()
        .for_each(|(key, value)| output.line(format_args!("{key}: {value}")));
    Ok(())
}

/// 7. A thread whose body is an inline closure.
pub fn thread_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output().clone();
    context
        .tasks()
        .detached("thread-with-lambda", move || {
            output.headline("Thread with Lambda!");
        })?;
    Ok(())
}

/// 8. Sorting by a derived key. The sort is stable, so equal lengths keep
/// their original order.
pub fn lambda_in_comparator(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let mut list = vec!["Java", "Kafka", "Lambda"];
    list.sort_by_key(|word| word.len());
    output.headline("sorted by length:");
    list.iter().for_each(|word| output.line(word));
    Ok(())
}

/// 9. Methods named by path and used as function values: `str::to_owned`
/// converts each element and `UnitOutput::line` is bound once as the printer.
pub fn method_reference_example(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = ["Java", "Kafka", "Lambda"];
    let print = UnitOutput::line::<String>;
    output.heading();
    list.iter()
        .copied()
        .map(str::to_owned)
        .for_each(|word| print(output, word));
    Ok(())
}

/// 10. Acting on an `Option` only when it holds a value.
pub fn lambda_with_optional(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let optional = Some("Java");
    if let Some(value) = optional {
        output.headline(format_args!("Value is present: {value}"));
    }
    Ok(())
}

/// 11. A predicate taken from an existing method.
pub fn lambda_with_predicate(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let is_empty = str::is_empty;
    output.headline(format_args!("isEmpty(\"\"): {}", is_empty("")));
    output.headline(format_args!("isEmpty(\"Java\"): {}", is_empty("Java")));
    Ok(())
}

/// 12. A two-argument function taken from an operator trait.
pub fn lambda_with_bi_function(context: &UnitContext<'_>) -> UnitResult {
    let addition: fn(i32, i32) -> i32 = <i32 as Add>::add;
    context
        .output()
        .headline(format_args!("2 + 3 = {}", addition(2, 3)));
    Ok(())
}

/// 13. A closure consuming its argument for a side effect.
pub fn lambda_with_consumer(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let print = |message: &str| output.headline(message);
    print("Hello World Consumer!");
    Ok(())
}

/// 14. A closure producing a value from nothing.
pub fn lambda_with_supplier(context: &UnitContext<'_>) -> UnitResult {
    let supplier = || "Java Supplier";
    context.output().headline(supplier());
    Ok(())
}

/// 15. A one-argument function from a method reference.
pub fn lambda_with_function(context: &UnitContext<'_>) -> UnitResult {
    let length = str::len;
    context.output().headline(format_args!(
        "Length of 'Lambda with function': {}",
        length("Lambda with function")
    ));
    Ok(())
}

/// 16. A unary operator.
pub fn lambda_with_unary_operator(context: &UnitContext<'_>) -> UnitResult {
    let square = |value: i32| value * value;
    context
        .output()
        .headline(format_args!("Square of 5: {}", square(5)));
    Ok(())
}

/// 17. A binary operator.
pub fn lambda_with_binary_operator(context: &UnitContext<'_>) -> UnitResult {
    let multiply: fn(i32, i32) -> i32 = <i32 as Mul>::mul;
    context
        .output()
        .headline(format_args!("2 * 3 = {}", multiply(2, 3)));
    Ok(())
}

/// 18. A predicate closure over integers.
pub fn check_even_numbers_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let is_even = |value: i32| value % 2 == 0;
    output.headline(format_args!("4 is even: {}", is_even(4)));
    output.headline(format_args!("5 is even: {}", is_even(5)));
    Ok(())
}

/// 19. Sorting in reverse natural order.
pub fn custom_sorting_with_lambda(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let mut list = vec!["Apple", "Pear", "Grapes"];
    list.sort_by(|left, right| right.cmp(left));
    output.headline("Descending:");
    list.iter().for_each(|word| output.line(word));
    Ok(())
}
