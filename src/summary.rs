//! Descriptive statistics over cleaned numeric sequences.

use crate::error::{CleanError, CleanResult};
use crate::types::Summary;

/// Compute count, min, max, mean, median, and population standard deviation
/// over `numbers`.
///
/// Returns [`CleanError::EmptyInput`] for an empty slice; every non-empty
/// input succeeds. Inputs coming from [`crate::clean::clean`] are finite by
/// construction; values supplied directly are ordered with `f64::total_cmp`
/// so a stray NaN cannot panic the median sort.
pub fn summarize(numbers: &[f64]) -> CleanResult<Summary> {
    if numbers.is_empty() {
        return Err(CleanError::EmptyInput);
    }

    let count = numbers.len();
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = numbers.iter().sum::<f64>() / count as f64;

    Ok(Summary {
        count,
        min,
        max,
        mean,
        median: median(numbers),
        // Population stdev of one value is 0; stated explicitly rather than
        // relying on the general formula degenerating for n == 1.
        stdev: if count > 1 {
            population_stdev(numbers, mean)
        } else {
            0.0
        },
    })
}

fn median(numbers: &[f64]) -> f64 {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

fn population_stdev(numbers: &[f64], mean: f64) -> f64 {
    let variance =
        numbers.iter().map(|n| (n - mean).powi(2)).sum::<f64>() / numbers.len() as f64;
    variance.sqrt()
}
