//! Statistical utility functions.

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample autocovariance at `lag`, centered on a shared `mean`.
///
/// Sums the `n - lag` overlapping products and divides by `n`, so lag 0
/// gives the biased (population) variance. Returns NaN when `lag >= n`.
pub fn autocovariance(values: &[f64], lag: usize, mean: f64) -> f64 {
    let n = values.len();
    if lag >= n {
        return f64::NAN;
    }

    let sum: f64 = values
        .iter()
        .skip(lag)
        .zip(values.iter())
        .map(|(&a, &b)| (a - mean) * (b - mean))
        .sum();

    sum / n as f64
}

/// Calculate the variance of a slice (sample variance with n-1 denominator).
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / (values.len() - 1) as f64
}
