use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::{LinkBenchError, Result};
use crate::samples::{SampleSeries, Unit};

/// Summary of one test's samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub name: String,
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub p99: f64,
    pub p99_9: f64,
    pub unit: Unit,
    pub timestamp: DateTime<Local>,
}

/// Index of percentile `numerator / denominator` in a sorted series of length `n`.
///
/// Computes `floor(n * p)` in integer arithmetic and clamps it to the last element.
fn percentile_index(n: usize, numerator: usize, denominator: usize) -> usize {
    debug_assert!(n > 0);
    ((n * numerator) / denominator).min(n - 1)
}

/// Reduce `series` to min/avg/max/p99/p99.9.  The timestamp is taken at summarization time.
///
/// Fails with `InvalidInput` for an empty series or one holding a negative or non-finite sample.
pub fn summarize(name: impl Into<String>, series: &SampleSeries, unit: Unit) -> Result<TestResult> {
    let name = name.into();
    if series.is_empty() {
        return Err(LinkBenchError::invalid_input(format!("cannot summarize empty sample series for {name:?}")));
    }
    if let Some(bad) = series.as_slice().iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(LinkBenchError::invalid_input(format!("sample series for {name:?} contains invalid value {bad}")));
    }

    let mut sorted = series.as_slice().to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let avg = sorted.iter().sum::<f64>() / n as f64;

    Ok(TestResult {
        name,
        min: sorted[0],
        avg,
        max: sorted[n - 1],
        p99: sorted[percentile_index(n, 99, 100)],
        p99_9: sorted[percentile_index(n, 999, 1000)],
        unit,
        timestamp: Local::now(),
    })
}
