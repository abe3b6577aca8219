//! Numeric helpers for forecast comparison.

pub mod distribution;
pub mod metrics;
pub mod noise;
pub mod stats;

pub use distribution::{p_value, t_cdf, Alternative};
pub use metrics::{accuracy_summary, mean_loss, AccuracySummary};
pub use noise::{gaussian_noise, perturb};
pub use stats::{autocovariance, mean, sample_variance};
