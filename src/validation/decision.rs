//! Verdicts over a suite of Diebold-Mariano tests.
//!
//! Runs the test under several losses and classifies the pair of forecasts
//! as similar, or one of them as better. Thresholds are caller policy and
//! live in [`DecisionThresholds`].

use crate::error::{DmTestError, Result};
use crate::loss::LossFunction;
use crate::utils::metrics::{accuracy_summary, AccuracySummary};
use crate::validation::diebold_mariano::{dm_test_with_config, DmTestConfig, DmTestResult};
use std::fmt;

/// Thresholds used to turn test results into a [`Verdict`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionThresholds {
    /// Mean statistics with absolute value below this are "similar".
    pub similarity_bound: f64,
    /// When set, a mean p-value above this level is also "similar".
    pub significance: Option<f64>,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            similarity_bound: 5.0,
            significance: None,
        }
    }
}

impl DecisionThresholds {
    /// Create thresholds with the given similarity bound.
    pub fn new(similarity_bound: f64) -> Self {
        Self {
            similarity_bound,
            ..Default::default()
        }
    }

    /// Also treat non-significant results (mean p-value > `alpha`) as similar.
    pub fn with_significance(mut self, alpha: f64) -> Self {
        self.significance = Some(alpha);
        self
    }
}

/// Outcome of a forecast comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No meaningful difference in accuracy.
    Similar,
    /// The first forecast is more accurate.
    FirstBetter,
    /// The second forecast is more accurate.
    SecondBetter,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Similar => f.write_str("Similar"),
            Self::FirstBetter => f.write_str("First better"),
            Self::SecondBetter => f.write_str("Second better"),
        }
    }
}

/// Classify a set of test results.
///
/// Returns `Similar` for an empty slice.
pub fn classify(results: &[DmTestResult], thresholds: &DecisionThresholds) -> Verdict {
    if results.is_empty() {
        return Verdict::Similar;
    }

    let k = results.len() as f64;
    let mean_statistic = results.iter().map(|r| r.statistic).sum::<f64>() / k;
    let mean_p_value = results.iter().map(|r| r.p_value).sum::<f64>() / k;

    let not_significant = thresholds
        .significance
        .is_some_and(|alpha| mean_p_value > alpha);

    if mean_statistic.abs() < thresholds.similarity_bound || not_significant {
        Verdict::Similar
    } else if mean_statistic <= 0.0 {
        Verdict::FirstBetter
    } else {
        Verdict::SecondBetter
    }
}

/// Per-loss results and the overall verdict for one pair of forecasts.
#[derive(Debug, Clone)]
pub struct ForecastComparison {
    /// Test outcome for each loss, in the order requested
    pub results: Vec<(LossFunction, Result<DmTestResult>)>,
    /// Mean statistic across the losses that produced a result
    pub mean_statistic: f64,
    /// Mean p-value across the losses that produced a result
    pub mean_p_value: f64,
    /// Accuracy of the first forecast
    pub first: AccuracySummary,
    /// Accuracy of the second forecast
    pub second: AccuracySummary,
    /// Overall classification
    pub verdict: Verdict,
}

impl ForecastComparison {
    /// Results of the losses whose test succeeded.
    pub fn successful(&self) -> impl Iterator<Item = (LossFunction, &DmTestResult)> + '_ {
        self.results
            .iter()
            .filter_map(|(loss, result)| result.as_ref().ok().map(|r| (*loss, r)))
    }

    /// Number of losses whose test failed.
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_err()).count()
    }
}

/// Compare two forecasts under each loss in `losses`.
///
/// # Arguments
/// * `actual` - Observed values
/// * `pred1`, `pred2` - Competing forecasts
/// * `horizon` - Forecast horizon
/// * `losses` - Losses to test under (see [`LossFunction::standard_suite`])
/// * `thresholds` - Classification policy
///
/// A loss whose test fails (for example with a degenerate variance) is kept
/// in [`ForecastComparison::results`] as an error and left out of the means
/// and the verdict. If every loss fails, the first error is returned.
///
/// # Example
/// ```
/// use dm_test::loss::LossFunction;
/// use dm_test::validation::{compare_forecasts, DecisionThresholds, Verdict};
///
/// let actual: Vec<f64> = (1..=40).map(|i| i as f64).collect();
/// let pred2: Vec<f64> = actual
///     .iter()
///     .enumerate()
///     .map(|(i, a)| a + 10.0 + (i % 4) as f64)
///     .collect();
///
/// let comparison = compare_forecasts(
///     &actual,
///     &actual,
///     &pred2,
///     1,
///     &LossFunction::standard_suite(),
///     &DecisionThresholds::default(),
/// )
/// .unwrap();
/// assert_eq!(comparison.verdict, Verdict::FirstBetter);
/// ```
pub fn compare_forecasts(
    actual: &[f64],
    pred1: &[f64],
    pred2: &[f64],
    horizon: usize,
    losses: &[LossFunction],
    thresholds: &DecisionThresholds,
) -> Result<ForecastComparison> {
    if losses.is_empty() {
        return Err(DmTestError::InvalidLossKind(
            "at least one loss function is required".to_string(),
        ));
    }

    let mut results = Vec::with_capacity(losses.len());
    for &loss in losses {
        let config = DmTestConfig::new(horizon).with_loss(loss);
        let result = dm_test_with_config(actual, pred1, pred2, &config);
        match &result {
            Ok(test) => tracing::debug!(
                loss = %loss,
                statistic = test.statistic,
                p_value = test.p_value,
                "diebold-mariano test"
            ),
            Err(e) => tracing::debug!(loss = %loss, error = %e, "diebold-mariano test failed"),
        }
        results.push((loss, result));
    }

    let tests: Vec<DmTestResult> = results
        .iter()
        .filter_map(|(_, r)| r.as_ref().ok().cloned())
        .collect();
    if tests.is_empty() {
        if let Some(e) = results.iter().find_map(|(_, r)| r.as_ref().err()) {
            return Err(e.clone());
        }
    }

    let k = tests.len() as f64;
    let mean_statistic = tests.iter().map(|r| r.statistic).sum::<f64>() / k;
    let mean_p_value = tests.iter().map(|r| r.p_value).sum::<f64>() / k;
    let verdict = classify(&tests, thresholds);

    tracing::debug!(
        %verdict,
        mean_statistic,
        mean_p_value,
        horizon,
        failed = results.len() - tests.len(),
        "forecast comparison"
    );

    Ok(ForecastComparison {
        results,
        mean_statistic,
        mean_p_value,
        first: accuracy_summary(actual, pred1)?,
        second: accuracy_summary(actual, pred2)?,
        verdict,
    })
}
