//! Property-based tests for the Diebold-Mariano test.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated actual series and forecast errors.

use dm_test::loss::{loss_differential, LossFunction};
use dm_test::utils::stats::sample_variance;
use dm_test::validation::{dm_test, long_run_variance};
use dm_test::DmTestError;
use proptest::prelude::*;

/// Actual series with two forecast error vectors of the same length.
fn scenario_strategy(
    min_len: usize,
    max_len: usize,
) -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<f64>)> {
    (min_len..max_len).prop_flat_map(|len| {
        (
            prop::collection::vec(1.0..1000.0_f64, len),
            prop::collection::vec(-5.0..5.0_f64, len),
            prop::collection::vec(-5.0..5.0_f64, len),
        )
    })
}

/// Errors bounded away from zero, with random sign.
fn nonzero_errors_strategy(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0.1..5.0_f64, any::<bool>()), len)
        .prop_map(|v| v.into_iter().map(|(e, neg)| if neg { -e } else { e }).collect())
}

fn loss_strategy() -> impl Strategy<Value = LossFunction> {
    prop_oneof![
        Just(LossFunction::Mad),
        Just(LossFunction::Mse),
        (0.5..4.0_f64).prop_map(|power| LossFunction::Poly { power }),
    ]
}

fn add(base: &[f64], errors: &[f64]) -> Vec<f64> {
    base.iter().zip(errors.iter()).map(|(b, e)| b + e).collect()
}

// =============================================================================
// Property: Swapping forecasts negates the statistic
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn swapping_forecasts_negates_statistic(
        (actual, e1, e2) in scenario_strategy(10, 80),
        horizon in 1usize..6,
        loss in loss_strategy()
    ) {
        let pred1 = add(&actual, &e1);
        let pred2 = add(&actual, &e2);

        let forward = dm_test(&actual, &pred1, &pred2, horizon, loss);
        let backward = dm_test(&actual, &pred2, &pred1, horizon, loss);

        match (forward, backward) {
            (Ok(f), Ok(b)) => {
                prop_assert!((f.statistic + b.statistic).abs() <= 1e-9 * (1.0 + f.statistic.abs()));
                prop_assert!((f.p_value - b.p_value).abs() <= 1e-12);
            }
            (Err(f), Err(b)) => prop_assert_eq!(f, b),
            (f, b) => prop_assert!(false, "asymmetric outcome: {:?} vs {:?}", f, b),
        }
    }
}

// =============================================================================
// Property: Identical forecasts show no difference
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn identical_forecasts_give_zero_and_one(
        (actual, e1, _e2) in scenario_strategy(5, 60),
        horizon in 1usize..5,
        loss in loss_strategy()
    ) {
        let pred = add(&actual, &e1);
        let result = dm_test(&actual, &pred, &pred, horizon, loss).unwrap();

        prop_assert_eq!(result.statistic, 0.0);
        prop_assert_eq!(result.p_value, 1.0);
    }
}

// =============================================================================
// Property: A perfect first forecast is judged more accurate
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn perfect_first_forecast_has_negative_statistic(
        (actual, errors) in (10usize..60).prop_flat_map(|len| {
            (prop::collection::vec(1.0..1000.0_f64, len), nonzero_errors_strategy(len))
        }),
        horizon in 1usize..4,
        loss in loss_strategy()
    ) {
        let pred2 = add(&actual, &errors);

        match dm_test(&actual, &actual, &pred2, horizon, loss) {
            Ok(result) => prop_assert!(result.statistic < 0.0),
            // Truncated autocovariance sums can go non-positive
            Err(DmTestError::DegenerateVariance(v)) => prop_assert!(v <= 0.0 || !v.is_finite()),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }
}

// =============================================================================
// Property: P-values are probabilities and statistics are finite
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn p_value_in_unit_interval(
        (actual, e1, e2) in scenario_strategy(5, 80),
        horizon in 1usize..5,
        loss in loss_strategy()
    ) {
        let pred1 = add(&actual, &e1);
        let pred2 = add(&actual, &e2);

        match dm_test(&actual, &pred1, &pred2, horizon, loss) {
            Ok(result) => {
                prop_assert!(result.statistic.is_finite());
                prop_assert!(result.p_value >= 0.0 && result.p_value <= 1.0);
            }
            Err(DmTestError::DegenerateVariance(_)) => {}
            Err(DmTestError::InvalidHorizon { horizon: h, n }) => prop_assert!(h >= n),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }
}

// =============================================================================
// Property: Horizon one uses only the lag-0 autocovariance
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn horizon_one_is_scaled_sample_variance(
        (actual, e1, e2) in scenario_strategy(3, 80),
    ) {
        let pred1 = add(&actual, &e1);
        let pred2 = add(&actual, &e2);
        let d = loss_differential(&actual, &pred1, &pred2, LossFunction::Mse).unwrap();
        let n = d.len() as f64;

        let expected = sample_variance(&d) * (n - 1.0) / (n * n);
        let got = long_run_variance(&d, 1);

        prop_assert!((got - expected).abs() <= 1e-9 * expected.abs().max(1e-12));
        prop_assert!(got >= 0.0);
    }
}
