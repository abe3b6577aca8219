//! Loss functions for forecast comparison.
//!
//! A loss maps an (actual, predicted) pair to a non-negative penalty. The
//! Diebold-Mariano test works on the difference between the losses of two
//! competing forecasts, the *loss differential*.
//!
//! # Example
//!
//! ```
//! use dm_test::loss::{loss_differential, LossFunction};
//!
//! let actual = vec![1.0, 2.0, 3.0];
//! let pred1 = vec![1.0, 2.0, 3.5];
//! let pred2 = vec![1.5, 2.0, 3.0];
//!
//! let d = loss_differential(&actual, &pred1, &pred2, LossFunction::Mad).unwrap();
//! assert_eq!(d, vec![-0.5, 0.0, 0.5]);
//!
//! let quartic: LossFunction = "poly:4".parse().unwrap();
//! assert_eq!(quartic, LossFunction::Poly { power: 4.0 });
//! ```

use crate::error::{DmTestError, Result};
use std::fmt;
use std::str::FromStr;

/// Exponent used by `poly` when none is given.
pub const DEFAULT_POWER: f64 = 2.0;

/// Pointwise loss applied to forecast errors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LossFunction {
    /// Absolute error `|a - p|`.
    Mad,
    /// Squared error `(a - p)^2`.
    #[default]
    Mse,
    /// Absolute percentage error `|(a - p) / a|`.
    Mape,
    /// Absolute error raised to `power`.
    Poly { power: f64 },
}

impl LossFunction {
    /// Power loss with a validated exponent.
    pub fn poly(power: f64) -> Result<Self> {
        if !power.is_finite() || power <= 0.0 {
            return Err(DmTestError::InvalidPower(power));
        }
        Ok(Self::Poly { power })
    }

    /// Check that the loss is usable. Only `Poly` carries parameters.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Poly { power } => Self::poly(power).map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Loss of a single prediction against its actual value.
    ///
    /// `Mape` returns an infinite loss for a zero actual; callers going
    /// through [`loss_differential`] get [`DmTestError::ZeroActual`] instead.
    #[inline]
    pub fn evaluate(&self, actual: f64, predicted: f64) -> f64 {
        let error = actual - predicted;
        match *self {
            Self::Mad => error.abs(),
            Self::Mse => error * error,
            Self::Mape => (error / actual).abs(),
            Self::Poly { power } => error.abs().powf(power),
        }
    }

    /// Canonical short name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mad => "MAD",
            Self::Mse => "MSE",
            Self::Mape => "MAPE",
            Self::Poly { .. } => "poly",
        }
    }

    /// MAD, MSE and quartic power loss.
    pub fn standard_suite() -> Vec<Self> {
        vec![Self::Mad, Self::Mse, Self::Poly { power: 4.0 }]
    }
}

impl fmt::Display for LossFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poly { power } => write!(f, "poly({})", power),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for LossFunction {
    type Err = DmTestError;

    /// Parse `MAD`, `MSE`, `MAPE`, `poly`, `poly:<p>` or `poly(<p>)`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        match lower.as_str() {
            "mad" => return Ok(Self::Mad),
            "mse" => return Ok(Self::Mse),
            "mape" => return Ok(Self::Mape),
            "poly" => return Ok(Self::Poly { power: DEFAULT_POWER }),
            _ => {}
        }

        let exponent = lower
            .strip_prefix("poly:")
            .or_else(|| {
                lower
                    .strip_prefix("poly(")
                    .and_then(|rest| rest.strip_suffix(')'))
            })
            .ok_or_else(|| DmTestError::InvalidLossKind(trimmed.to_string()))?;

        let power: f64 = exponent
            .trim()
            .parse()
            .map_err(|_| DmTestError::InvalidLossKind(trimmed.to_string()))?;
        Self::poly(power)
    }
}

/// Reject empty input, mismatched lengths and non-finite values.
pub(crate) fn validate_series(actual: &[f64], pred1: &[f64], pred2: &[f64]) -> Result<()> {
    if actual.is_empty() {
        return Err(DmTestError::EmptyData);
    }

    for forecast in [pred1, pred2] {
        if forecast.len() != actual.len() {
            return Err(DmTestError::LengthMismatch {
                expected: actual.len(),
                got: forecast.len(),
            });
        }
    }

    for (series, values) in [("actual", actual), ("pred1", pred1), ("pred2", pred2)] {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(DmTestError::NonFiniteValue { series, index });
        }
    }

    Ok(())
}

/// Loss differential `d_t = L(actual_t, pred1_t) - L(actual_t, pred2_t)`.
///
/// Negative values mean `pred1` was closer at that step.
pub fn loss_differential(
    actual: &[f64],
    pred1: &[f64],
    pred2: &[f64],
    loss: LossFunction,
) -> Result<Vec<f64>> {
    validate_series(actual, pred1, pred2)?;
    loss.validate()?;

    if loss == LossFunction::Mape {
        if let Some(index) = actual.iter().position(|&a| a == 0.0) {
            return Err(DmTestError::ZeroActual { index });
        }
    }

    Ok(actual
        .iter()
        .zip(pred1.iter().zip(pred2.iter()))
        .map(|(&a, (&p1, &p2))| loss.evaluate(a, p1) - loss.evaluate(a, p2))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==================== evaluate ====================

    #[test]
    fn evaluate_each_loss() {
        assert_relative_eq!(LossFunction::Mad.evaluate(3.0, 1.0), 2.0);
        assert_relative_eq!(LossFunction::Mad.evaluate(1.0, 3.0), 2.0);
        assert_relative_eq!(LossFunction::Mse.evaluate(3.0, 1.0), 4.0);
        assert_relative_eq!(LossFunction::Mape.evaluate(4.0, 3.0), 0.25);
        assert_relative_eq!(LossFunction::Mape.evaluate(-4.0, -3.0), 0.25);
        assert_relative_eq!(
            LossFunction::Poly { power: 4.0 }.evaluate(3.0, 1.0),
            16.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            LossFunction::Poly { power: 0.5 }.evaluate(5.0, 1.0),
            2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn poly_two_matches_mse() {
        let poly = LossFunction::poly(2.0).unwrap();
        for (a, p) in [(1.0, 1.5), (-2.0, 3.0), (10.0, 10.0)] {
            assert_relative_eq!(
                poly.evaluate(a, p),
                LossFunction::Mse.evaluate(a, p),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn poly_rejects_bad_power() {
        assert_eq!(
            LossFunction::poly(0.0),
            Err(DmTestError::InvalidPower(0.0))
        );
        assert_eq!(
            LossFunction::poly(-2.0),
            Err(DmTestError::InvalidPower(-2.0))
        );
        assert!(LossFunction::poly(f64::NAN).is_err());
        assert!(LossFunction::poly(f64::INFINITY).is_err());
        assert!(LossFunction::Poly { power: -1.0 }.validate().is_err());
        assert!(LossFunction::Mad.validate().is_ok());
    }

    // ==================== parsing ====================

    #[test]
    fn parse_reference_selectors() {
        assert_eq!("MAD".parse::<LossFunction>().unwrap(), LossFunction::Mad);
        assert_eq!("mse".parse::<LossFunction>().unwrap(), LossFunction::Mse);
        assert_eq!(" MAPE ".parse::<LossFunction>().unwrap(), LossFunction::Mape);
        assert_eq!(
            "poly".parse::<LossFunction>().unwrap(),
            LossFunction::Poly { power: 2.0 }
        );
        assert_eq!(
            "poly:4".parse::<LossFunction>().unwrap(),
            LossFunction::Poly { power: 4.0 }
        );
        assert_eq!(
            "Poly(1.5)".parse::<LossFunction>().unwrap(),
            LossFunction::Poly { power: 1.5 }
        );
    }

    #[test]
    fn parse_rejects_unknown_selector() {
        assert_eq!(
            "MAE".parse::<LossFunction>(),
            Err(DmTestError::InvalidLossKind("MAE".to_string()))
        );
        assert!(matches!(
            "poly:abc".parse::<LossFunction>(),
            Err(DmTestError::InvalidLossKind(_))
        ));
        assert!(matches!(
            "poly(3".parse::<LossFunction>(),
            Err(DmTestError::InvalidLossKind(_))
        ));
        assert_eq!(
            "poly:-1".parse::<LossFunction>(),
            Err(DmTestError::InvalidPower(-1.0))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for loss in [
            LossFunction::Mad,
            LossFunction::Mse,
            LossFunction::Mape,
            LossFunction::Poly { power: 4.0 },
        ] {
            let parsed: LossFunction = loss.to_string().parse().unwrap();
            assert_eq!(parsed, loss);
        }
    }

    // ==================== loss_differential ====================

    #[test]
    fn differential_sign_follows_first_minus_second() {
        let actual = vec![1.0, 2.0, 3.0, 4.0];
        let pred1 = vec![1.0, 2.0, 3.0, 4.0];
        let pred2 = vec![2.0, 3.0, 4.0, 5.0];

        let d = loss_differential(&actual, &pred1, &pred2, LossFunction::Mse).unwrap();
        assert!(d.iter().all(|&x| x < 0.0));

        let swapped = loss_differential(&actual, &pred2, &pred1, LossFunction::Mse).unwrap();
        for (a, b) in d.iter().zip(swapped.iter()) {
            assert_relative_eq!(*a, -*b);
        }
    }

    #[test]
    fn differential_validates_lengths() {
        let result = loss_differential(&[1.0, 2.0], &[1.0], &[1.0, 2.0], LossFunction::Mad);
        assert_eq!(
            result,
            Err(DmTestError::LengthMismatch {
                expected: 2,
                got: 1
            })
        );

        let result = loss_differential(
            &[1.0, 2.0],
            &[1.0, 2.0],
            &[1.0, 2.0, 3.0],
            LossFunction::Mad,
        );
        assert_eq!(
            result,
            Err(DmTestError::LengthMismatch {
                expected: 2,
                got: 3
            })
        );
    }

    #[test]
    fn differential_rejects_empty_and_non_finite() {
        assert_eq!(
            loss_differential(&[], &[], &[], LossFunction::Mse),
            Err(DmTestError::EmptyData)
        );

        let result = loss_differential(
            &[1.0, 2.0, 3.0],
            &[1.0, f64::NAN, 3.0],
            &[1.0, 2.0, 3.0],
            LossFunction::Mse,
        );
        assert_eq!(
            result,
            Err(DmTestError::NonFiniteValue {
                series: "pred1",
                index: 1
            })
        );
    }

    #[test]
    fn differential_mape_rejects_zero_actual() {
        let result = loss_differential(
            &[1.0, 0.0, 3.0],
            &[1.0, 0.5, 3.0],
            &[1.0, 0.2, 3.0],
            LossFunction::Mape,
        );
        assert_eq!(result, Err(DmTestError::ZeroActual { index: 1 }));

        // Other losses are fine with zeros
        assert!(loss_differential(
            &[1.0, 0.0, 3.0],
            &[1.0, 0.5, 3.0],
            &[1.0, 0.2, 3.0],
            LossFunction::Mad,
        )
        .is_ok());
    }
}
