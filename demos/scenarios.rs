//! Diebold-Mariano Scenarios Example
//!
//! Compares synthetic forecasts of a linear series under MAD, MSE and
//! quartic loss, and classifies each pair.
//!
//! Run with: cargo run --example scenarios
//! Set RUST_LOG=debug to see the per-test events.

use dm_test::prelude::*;
use dm_test::utils::noise::perturb;

const SERIES_LEN: usize = 99;
const HORIZON: usize = 24;

fn report(
    title: &str,
    actual: &[f64],
    pred1: &[f64],
    pred2: &[f64],
    thresholds: &DecisionThresholds,
) {
    println!("--- {} ---", title);

    match compare_forecasts(
        actual,
        pred1,
        pred2,
        HORIZON,
        &LossFunction::standard_suite(),
        thresholds,
    ) {
        Ok(comparison) => {
            for (loss, result) in &comparison.results {
                match result {
                    Ok(test) => println!(
                        "{:>8}: DM = {:>9.4}  p = {:.4}",
                        loss.to_string(),
                        test.statistic,
                        test.p_value
                    ),
                    Err(e) => println!("{:>8}: skipped ({})", loss.to_string(), e),
                }
            }
            println!(
                "RMSE: first {:.4}, second {:.4}",
                comparison.first.rmse, comparison.second.rmse
            );
            println!(
                "== Decision: {} (mean DM: {:.2}, mean p: {:.4})\n",
                comparison.verdict, comparison.mean_statistic, comparison.mean_p_value
            );
        }
        Err(e) => println!("Comparison failed: {}\n", e),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Diebold-Mariano Test for Predictive Accuracy ===\n");
    println!("DM near zero -> the two forecasts are similar (p shows how confident)");
    println!("DM > 0       -> second forecast more accurate");
    println!("DM < 0       -> first forecast more accurate\n");

    let thresholds = DecisionThresholds::default();
    let actual: Vec<f64> = (1..=SERIES_LEN).map(|i| i as f64).collect();

    report("Identical", &actual, &actual, &actual, &thresholds);

    let pred1 = perturb(&actual, 0.0, 0.01, Some(123))?;
    let pred2 = perturb(&actual, 0.0, 0.01, Some(456))?;
    report("Similar", &actual, &pred1, &pred2, &thresholds);

    let slightly_worse = perturb(&pred1, 0.0, 0.01, Some(789))?;
    report("1st (slightly) better", &actual, &pred1, &slightly_worse, &thresholds);

    let much_worse = perturb(&pred1, 10.0, 3.0, Some(1011))?;
    report("1st (much) better", &actual, &pred1, &much_worse, &thresholds);
    report("2nd (much) better", &actual, &much_worse, &pred1, &thresholds);

    // Stricter policy: also require significance at 5%
    let strict = DecisionThresholds::new(2.0).with_significance(0.05);
    report(
        "1st (slightly) better, strict policy",
        &actual,
        &pred1,
        &slightly_worse,
        &strict,
    );

    Ok(())
}
