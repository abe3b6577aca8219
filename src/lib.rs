//! # dm-test
//!
//! Diebold-Mariano test for comparing the predictive accuracy of two
//! forecasts of the same series.
//!
//! Builds the loss differential under a chosen loss, estimates its long-run
//! variance with autocovariances up to lag `h - 1`, applies the
//! Harvey-Leybourne-Newbold small-sample correction and reports a p-value
//! from a Student's t distribution with `n - 1` degrees of freedom.
//!
//! ```
//! use dm_test::prelude::*;
//!
//! let actual: Vec<f64> = (1..=50).map(|i| i as f64).collect();
//! let result = dm_test(&actual, &actual, &actual, 4, LossFunction::Mse).unwrap();
//! assert_eq!(result.statistic, 0.0);
//! assert_eq!(result.p_value, 1.0);
//! ```

pub mod error;
pub mod loss;
pub mod utils;
pub mod validation;

pub use error::{DmTestError, Result};

pub mod prelude {
    pub use crate::error::{DmTestError, Result};
    pub use crate::loss::LossFunction;
    pub use crate::utils::{AccuracySummary, Alternative};
    pub use crate::validation::{
        compare_forecasts, dm_test, dm_test_with_config, DecisionThresholds, DmTestConfig,
        DmTestResult, Verdict,
    };
}
