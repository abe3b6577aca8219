//! Student's t reference distribution.
//!
//! Everything that touches `statrs` goes through [`t_cdf`] so the backend
//! can be swapped or checked against reference tables in isolation.

use crate::error::{DmTestError, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt;

/// Alternative hypothesis for a test statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// Accuracy differs in either direction.
    #[default]
    TwoSided,
    /// The statistic is below zero (first forecast more accurate).
    Less,
    /// The statistic is above zero (second forecast more accurate).
    Greater,
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoSided => f.write_str("two-sided"),
            Self::Less => f.write_str("less"),
            Self::Greater => f.write_str("greater"),
        }
    }
}

/// Cumulative distribution function of the standard Student's t.
///
/// # Arguments
/// * `x` - Evaluation point
/// * `df` - Degrees of freedom (must be positive)
///
/// # Returns
/// `P(T <= x)`, in `[0, 1]`.
pub fn t_cdf(x: f64, df: f64) -> Result<f64> {
    if x.is_nan() {
        return Err(DmTestError::Distribution(
            "cannot evaluate CDF at NaN".to_string(),
        ));
    }

    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| DmTestError::Distribution(format!("t({}): {}", df, e)))?;

    Ok(dist.cdf(x).clamp(0.0, 1.0))
}

/// P-value of `statistic` under a t distribution with `df` degrees of freedom.
pub fn p_value(statistic: f64, df: f64, alternative: Alternative) -> Result<f64> {
    let p = match alternative {
        // 2 * (1 - F(|s|)), computed from the lower tail to keep precision
        Alternative::TwoSided => 2.0 * t_cdf(-statistic.abs(), df)?,
        Alternative::Less => t_cdf(statistic, df)?,
        Alternative::Greater => t_cdf(-statistic, df)?,
    };
    Ok(p.clamp(0.0, 1.0))
}
