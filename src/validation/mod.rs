//! Forecast accuracy comparison.
//!
//! Provides the Diebold-Mariano test, verdicts over a suite of losses and
//! parallel batch comparisons.
//!
//! # Example
//!
//! ```
//! use dm_test::loss::LossFunction;
//! use dm_test::validation::{dm_test, DmTestConfig, dm_test_with_config};
//! use dm_test::utils::Alternative;
//!
//! let actual: Vec<f64> = (1..=20).map(|i| i as f64).collect();
//! let pred1: Vec<f64> = actual
//!     .iter()
//!     .enumerate()
//!     .map(|(i, a)| a + 0.1 * (i % 3) as f64)
//!     .collect();
//! let pred2: Vec<f64> = actual
//!     .iter()
//!     .enumerate()
//!     .map(|(i, a)| a + 0.5 * (i % 4) as f64)
//!     .collect();
//!
//! let two_sided = dm_test(&actual, &pred1, &pred2, 2, LossFunction::Mad).unwrap();
//!
//! let config = DmTestConfig::new(2)
//!     .with_loss(LossFunction::Mad)
//!     .with_alternative(Alternative::Less);
//! let one_sided = dm_test_with_config(&actual, &pred1, &pred2, &config).unwrap();
//! assert!(one_sided.p_value <= two_sided.p_value);
//! ```

pub mod batch;
pub mod decision;
pub mod diebold_mariano;

pub use batch::{dm_test_batch, pairwise_dm_tests, ForecastPair, PairwiseResult};
pub use decision::{classify, compare_forecasts, DecisionThresholds, ForecastComparison, Verdict};
pub use diebold_mariano::{
    dm_test, dm_test_with_config, long_run_variance, small_sample_correction, DmTestConfig,
    DmTestResult, Preference,
};
