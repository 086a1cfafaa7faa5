//! Collecting iterators into sets, maps, partitions and statistics.

use std::collections::{BTreeMap, BTreeSet};

use super::bracketed;
use crate::error::UnitResult;
use crate::unit::UnitContext;

// =============================================================================
// IntSummary
// =============================================================================

/// Count, sum, minimum and maximum of a sequence of integers, gathered in a
/// single pass.
///
/// An empty summary reports `i32::MAX` as minimum, `i32::MIN` as maximum and
/// an average of zero.
///
/// # Examples
///
/// ```rust
/// use lambda_catalogue::catalogue::collectors::IntSummary;
///
/// let summary: IntSummary = [1, 2, 3, 4, 5].into_iter().collect();
/// assert_eq!(summary.sum(), 15);
/// assert_eq!(summary.average(), 3.0);
/// assert_eq!((summary.min(), summary.max()), (1, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntSummary {
    count: u64,
    sum: i64,
    min: i32,
    max: i32,
}

impl Default for IntSummary {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0,
            min: i32::MAX,
            max: i32::MIN,
        }
    }
}

impl IntSummary {
    /// Folds one value into the summary.
    pub fn accept(&mut self, value: i32) {
        self.count += 1;
        self.sum += i64::from(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Number of values seen.
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Sum of the values, widened so it cannot overflow for `i32` inputs.
    pub const fn sum(&self) -> i64 {
        self.sum
    }

    /// Smallest value seen.
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Largest value seen.
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Arithmetic mean, or zero when empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

impl Extend<i32> for IntSummary {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, values: I) {
        values.into_iter().for_each(|value| self.accept(value));
    }
}

impl FromIterator<i32> for IntSummary {
    fn from_iter<I: IntoIterator<Item = i32>>(values: I) -> Self {
        let mut summary = Self::default();
        summary.extend(values);
        summary
    }
}

// =============================================================================
// Demonstrations
// =============================================================================

/// 37. Collecting into a set.
pub fn stream_collect_to_set(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = ["Java", "Spring", "Lambda", "Spring"];
    let set: BTreeSet<&str> = list.into_iter().collect();
    output.headline("Unique elements:");
    set.iter().for_each(|word| output.line(word));
    Ok(())
}

/// 38. Grouping by identity and counting each group.
pub fn stream_grouping_by(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = ["Java", "Spring", "Lambda", "Java"];
    let frequency = list
        .into_iter()
        .fold(BTreeMap::<&str, u64>::new(), |mut counts, word| {
            *counts.entry(word).or_default() += 1;
            counts
        });
    output.headline("Frequency count:");
    frequency
        .iter()
        .for_each(|(word, count)| output.line(format_args!("{word}: {count}")));
    Ok(())
}

/// 39. Splitting into the elements that match a predicate and those that
/// do not.
pub fn stream_with_partitioning_by(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let (even, odd): (Vec<i32>, Vec<i32>) = (1..=10).partition(|number| number % 2 == 0);
    output.headline("Partitioned:");
    [(false, odd), (true, even)]
        .iter()
        .for_each(|(is_even, numbers)| {
            let label = if *is_even { "Even" } else { "Odd" };
            output.line(format_args!("{label}: {}", bracketed(numbers)));
        });
    Ok(())
}

/// 40. Counting through a collector.
pub fn stream_with_counting(context: &UnitContext<'_>) -> UnitResult {
    let list = ["Java", "Spring", "Lambda"];
    let count = list.iter().fold(0_u64, |count, _| count + 1);
    context.output().headline(format_args!("Count: {count}"));
    Ok(())
}

/// 41. Summary statistics in one pass.
pub fn stream_with_summarizing_int(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = [1, 2, 3, 4, 5];
    let stats: IntSummary = list.into_iter().collect();
    output.heading();
    output.line(format_args!("  Sum: {}", stats.sum()));
    output.line(format_args!("  Average: {:?}", stats.average()));
    output.line(format_args!("  Max: {}", stats.max()));
    output.line(format_args!("  Min: {}", stats.min()));
    Ok(())
}

/// 42. Grouping by a derived key.
pub fn stream_grouping_by_length(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = ["Java", "Spring", "Lambda"];
    let groups = list
        .into_iter()
        .fold(BTreeMap::<usize, Vec<&str>>::new(), |mut groups, word| {
            groups.entry(word.len()).or_default().push(word);
            groups
        });
    output.headline("Grouped by length:");
    groups
        .iter()
        .for_each(|(length, words)| output.line(format_args!("{length}: {}", bracketed(words))));
    Ok(())
}

/// 43. Joining without a delimiter.
pub fn stream_joining_without_delimiter(context: &UnitContext<'_>) -> UnitResult {
    let list = ["Java", "Spring", "Lambda"];
    context.output().headline(list.concat());
    Ok(())
}

/// 44. Collecting into a map keyed by the element.
pub fn stream_with_to_map(context: &UnitContext<'_>) -> UnitResult {
    let output = context.output();
    let list = ["Java", "Spring", "Lambda"];
    let map: BTreeMap<&str, usize> = list.into_iter().map(|word| (word, word.len())).collect();
    output.headline("String to length mapping:");
    map.iter()
        .for_each(|(word, length)| output.line(format_args!("{word}: {length}")));
    Ok(())
}
