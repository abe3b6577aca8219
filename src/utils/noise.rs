//! Seeded Gaussian perturbations for synthetic forecast scenarios.
//!
//! Builds "competing forecasts" by adding normal noise to a base series,
//! which is how accuracy comparisons are exercised without fitted models.

use crate::error::{DmTestError, Result};
use rand::prelude::*;
use rand_distr::Normal;

/// Draw `n` values from `N(mean, std_dev^2)`.
///
/// # Arguments
/// * `n` - Number of draws
/// * `mean` - Noise mean (a bias when perturbing a forecast)
/// * `std_dev` - Noise standard deviation (non-negative)
/// * `seed` - Random seed for reproducibility (None for random)
pub fn gaussian_noise(
    n: usize,
    mean: f64,
    std_dev: f64,
    seed: Option<u64>,
) -> Result<Vec<f64>> {
    if !(std_dev >= 0.0 && std_dev.is_finite()) {
        return Err(DmTestError::Distribution(format!(
            "standard deviation must be non-negative and finite, got {}",
            std_dev
        )));
    }

    let normal = Normal::new(mean, std_dev)
        .map_err(|e| DmTestError::Distribution(format!("N({}, {}): {}", mean, std_dev, e)))?;

    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Ok((0..n).map(|_| normal.sample(&mut rng)).collect())
}

/// Add seeded Gaussian noise to every value of `base`.
pub fn perturb(base: &[f64], mean: f64, std_dev: f64, seed: Option<u64>) -> Result<Vec<f64>> {
    let noise = gaussian_noise(base.len(), mean, std_dev, seed)?;
    Ok(base.iter().zip(noise).map(|(&b, e)| b + e).collect())
}
