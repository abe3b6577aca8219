//! Diebold-Mariano test for equal predictive accuracy.
//!
//! Compares two forecasts of the same series through the mean of their loss
//! differential. The variance of that mean is estimated with autocovariances
//! up to lag `h - 1`, since `h`-step-ahead forecast errors are serially
//! correlated up to that order. The statistic gets the Harvey, Leybourne and
//! Newbold (1997) small-sample correction and is referred to a Student's t
//! distribution with `n - 1` degrees of freedom.
//!
//! Sign convention: a negative statistic means the first forecast has the
//! lower average loss.

use crate::error::{DmTestError, Result};
use crate::loss::{loss_differential, LossFunction};
use crate::utils::distribution::{p_value, Alternative};
use crate::utils::stats::{autocovariance, mean};

/// Configuration for the Diebold-Mariano test.
#[derive(Debug, Clone, PartialEq)]
pub struct DmTestConfig {
    /// Forecast horizon `h` (steps ahead).
    pub horizon: usize,
    /// Loss applied to each forecast error.
    pub loss: LossFunction,
    /// Alternative hypothesis.
    pub alternative: Alternative,
}

impl Default for DmTestConfig {
    fn default() -> Self {
        Self {
            horizon: 1,
            loss: LossFunction::Mse,
            alternative: Alternative::TwoSided,
        }
    }
}

impl DmTestConfig {
    /// Create a config for an `horizon`-step-ahead comparison.
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            ..Default::default()
        }
    }

    /// Set the forecast horizon.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the loss function.
    pub fn with_loss(mut self, loss: LossFunction) -> Self {
        self.loss = loss;
        self
    }

    /// Set the alternative hypothesis.
    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }
}

/// Which forecast a test result favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// First forecast is significantly more accurate.
    First,
    /// Second forecast is significantly more accurate.
    Second,
    /// No significant difference.
    Neither,
}

/// Diebold-Mariano test result.
#[derive(Debug, Clone, PartialEq)]
pub struct DmTestResult {
    /// Corrected DM statistic (negative favors the first forecast)
    pub statistic: f64,
    /// P-value under the t reference distribution
    pub p_value: f64,
    /// Number of observations
    pub n: usize,
    /// Forecast horizon used for the variance estimate
    pub horizon: usize,
    /// Mean loss differential
    pub mean_differential: f64,
    /// Estimated variance of the mean differential
    pub variance: f64,
    /// Alternative hypothesis the p-value refers to
    pub alternative: Alternative,
}

impl DmTestResult {
    /// Degrees of freedom of the reference t distribution.
    pub fn df(&self) -> usize {
        self.n.saturating_sub(1)
    }

    /// Check if the null of equal accuracy is rejected at `alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }

    /// Forecast favored at significance level `alpha`.
    pub fn preferred(&self, alpha: f64) -> Preference {
        if !self.is_significant(alpha) || self.statistic == 0.0 {
            Preference::Neither
        } else if self.statistic < 0.0 {
            Preference::First
        } else {
            Preference::Second
        }
    }
}

/// Perform a two-sided Diebold-Mariano test.
///
/// # Arguments
/// * `actual` - Observed values
/// * `pred1` - First forecast, aligned with `actual`
/// * `pred2` - Second forecast, aligned with `actual`
/// * `horizon` - Forecast horizon, `1 <= horizon < n`
/// * `loss` - Loss applied to each forecast error
///
/// # Returns
/// `DmTestResult` with the corrected statistic and p-value.
///
/// # Example
/// ```
/// use dm_test::loss::LossFunction;
/// use dm_test::validation::dm_test;
///
/// let actual: Vec<f64> = (1..=30).map(|i| i as f64).collect();
/// let pred1: Vec<f64> = actual.iter().map(|a| a + 0.1).collect();
/// let pred2: Vec<f64> = actual
///     .iter()
///     .enumerate()
///     .map(|(i, a)| a + 1.0 + (i % 3) as f64)
///     .collect();
///
/// let result = dm_test(&actual, &pred1, &pred2, 2, LossFunction::Mse).unwrap();
/// assert!(result.statistic < 0.0);
/// assert!(result.p_value < 0.05);
/// ```
pub fn dm_test(
    actual: &[f64],
    pred1: &[f64],
    pred2: &[f64],
    horizon: usize,
    loss: LossFunction,
) -> Result<DmTestResult> {
    let config = DmTestConfig::new(horizon).with_loss(loss);
    dm_test_with_config(actual, pred1, pred2, &config)
}

/// Perform a Diebold-Mariano test with an explicit configuration.
pub fn dm_test_with_config(
    actual: &[f64],
    pred1: &[f64],
    pred2: &[f64],
    config: &DmTestConfig,
) -> Result<DmTestResult> {
    let d = loss_differential(actual, pred1, pred2, config.loss)?;
    let n = d.len();
    let h = config.horizon;

    if h == 0 || h >= n {
        return Err(DmTestError::InvalidHorizon { horizon: h, n });
    }

    let mean_d = mean(&d);

    // Identical losses everywhere: no difference to detect
    if d.iter().all(|&x| x == 0.0) {
        return Ok(DmTestResult {
            statistic: 0.0,
            p_value: 1.0,
            n,
            horizon: h,
            mean_differential: 0.0,
            variance: 0.0,
            alternative: config.alternative,
        });
    }

    let variance = long_run_variance(&d, h);
    if !variance.is_finite() || variance <= 0.0 {
        return Err(DmTestError::DegenerateVariance(variance));
    }

    let statistic = mean_d / variance.sqrt() * small_sample_correction(n, h);
    if !statistic.is_finite() {
        return Err(DmTestError::DegenerateVariance(variance));
    }

    let p_value = p_value(statistic, (n - 1) as f64, config.alternative)?;

    Ok(DmTestResult {
        statistic,
        p_value,
        n,
        horizon: h,
        mean_differential: mean_d,
        variance,
        alternative: config.alternative,
    })
}

/// Variance of the mean loss differential, `(γ0 + 2 Σ_{k=1}^{h-1} γk) / n`.
///
/// Autocovariances share the full-sample mean. The truncated sum can be
/// zero or negative for short series with long horizons.
pub fn long_run_variance(d: &[f64], horizon: usize) -> f64 {
    let n = d.len();
    if n == 0 || horizon == 0 || horizon > n {
        return f64::NAN;
    }

    let mean_d = mean(d);
    let gamma_0 = autocovariance(d, 0, mean_d);
    let gamma_sum: f64 = (1..horizon).map(|k| autocovariance(d, k, mean_d)).sum();

    (gamma_0 + 2.0 * gamma_sum) / n as f64
}

/// Harvey-Leybourne-Newbold multiplier `sqrt((n + 1 - 2h + h(h-1)/n) / n)`.
pub fn small_sample_correction(n: usize, horizon: usize) -> f64 {
    let n = n as f64;
    let h = horizon as f64;
    ((n + 1.0 - 2.0 * h + h * (h - 1.0) / n) / n).sqrt()
}
