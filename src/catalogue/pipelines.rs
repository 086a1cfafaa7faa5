//! Building iterator pipelines and shaping them with `take`, `skip` and
//! `inspect`.

use std::iter;

use super::bracketed;
use crate::error::UnitResult;
use crate::unit::UnitContext;

/// 45. Creating an iterator from values.
pub fn create_stream(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let stream = ["Java", "Spring", "Lambda"].into_iter();
    output.headline("Created stream:");
    stream.for_each(|word| output.line(word));
    Ok(())
}

/// 46. Truncating to the first elements.
pub fn stream_with_limit(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let stream = ["Java", "Spring", "Lambda", "Kafka"].into_iter();
    output.headline("First 2 elements:");
    stream.take(2).for_each(|word| output.line(word));
    Ok(())
}

/// 47. Skipping the first elements.
pub fn stream_with_skip(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let stream = ["Java", "Spring", "Lambda", "Kafka"].into_iter();
    output.headline("Skip first 2 elements:");
    stream.skip(2).for_each(|word| output.line(word));
    Ok(())
}

/// 48. Observing elements as they flow through the pipeline.
pub fn stream_with_peek(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let stream = ["Java", "Spring", "Lambda", "Kafka"].into_iter();
    output.headline("Peek at elements:");
    let result: Vec<&str> = stream
        .inspect(|word| output.line(format_args!("  Processing: {word}")))
        .collect();
    output.line(format_args!("  Result: {}", bracketed(&result)));
    Ok(())
}

/// 49. Falling back to a default when nothing is present.
pub fn stream_with_optional_or_else(context: &UnitContext<'_>) -> UnitResult {
    let optional = iter::empty::<&str>().next();
    let result = optional.unwrap_or("Default Value");
    context.output().headline(result);
    Ok(())
}
