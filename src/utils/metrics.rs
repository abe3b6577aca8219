//! Accuracy summaries for the forecasts being compared.

use crate::error::{DmTestError, Result};
use crate::loss::LossFunction;

/// Average losses of a single forecast against the actual series.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracySummary {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
}

/// Calculate accuracy summary between actual and predicted values.
pub fn accuracy_summary(actual: &[f64], predicted: &[f64]) -> Result<AccuracySummary> {
    let mae = mean_loss(actual, predicted, LossFunction::Mad)?;
    let mse = mean_loss(actual, predicted, LossFunction::Mse)?;

    Ok(AccuracySummary {
        mae,
        mse,
        rmse: mse.sqrt(),
    })
}

/// Mean of `loss` over all time steps.
pub fn mean_loss(actual: &[f64], predicted: &[f64], loss: LossFunction) -> Result<f64> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(DmTestError::EmptyData);
    }

    if actual.len() != predicted.len() {
        return Err(DmTestError::LengthMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    loss.validate()?;

    let total: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(&a, &p)| loss.evaluate(a, p))
        .sum();

    Ok(total / actual.len() as f64)
}
