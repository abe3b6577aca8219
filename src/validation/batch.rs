//! Many independent Diebold-Mariano tests at once.
//!
//! Each comparison is a pure function of its inputs, so batches run on the
//! rayon thread pool with no shared state.

use crate::error::Result;
use crate::validation::diebold_mariano::{dm_test_with_config, DmTestConfig, DmTestResult};
use rayon::prelude::*;

/// One comparison: two forecasts of the same actual series.
#[derive(Debug, Clone, Copy)]
pub struct ForecastPair<'a> {
    /// Observed values
    pub actual: &'a [f64],
    /// First forecast
    pub first: &'a [f64],
    /// Second forecast
    pub second: &'a [f64],
}

impl<'a> ForecastPair<'a> {
    /// Bundle an actual series with two competing forecasts.
    pub fn new(actual: &'a [f64], first: &'a [f64], second: &'a [f64]) -> Self {
        Self {
            actual,
            first,
            second,
        }
    }
}

/// Result of comparing forecast `first` against forecast `second`.
#[derive(Debug, Clone)]
pub struct PairwiseResult {
    /// Index of the first forecast
    pub first: usize,
    /// Index of the second forecast
    pub second: usize,
    /// Test outcome
    pub result: Result<DmTestResult>,
}

/// Run the test on every pair in parallel.
///
/// Output order matches `pairs`; a failure in one pair does not affect others.
pub fn dm_test_batch(
    pairs: &[ForecastPair<'_>],
    config: &DmTestConfig,
) -> Vec<Result<DmTestResult>> {
    tracing::debug!(pairs = pairs.len(), horizon = config.horizon, "batch dm tests");

    pairs
        .par_iter()
        .map(|pair| dm_test_with_config(pair.actual, pair.first, pair.second, config))
        .collect()
}

/// Compare every forecast against every later one (`i < j`).
///
/// P-values are not adjusted for multiple comparisons.
pub fn pairwise_dm_tests(
    actual: &[f64],
    forecasts: &[&[f64]],
    config: &DmTestConfig,
) -> Vec<PairwiseResult> {
    let k = forecasts.len();
    let indices: Vec<(usize, usize)> = (0..k)
        .flat_map(|i| ((i + 1)..k).map(move |j| (i, j)))
        .collect();

    tracing::debug!(forecasts = k, comparisons = indices.len(), "pairwise dm tests");

    indices
        .into_par_iter()
        .map(|(i, j)| PairwiseResult {
            first: i,
            second: j,
            result: dm_test_with_config(actual, forecasts[i], forecasts[j], config),
        })
        .collect()
}
