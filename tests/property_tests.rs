//! Property-based tests for the decomposition.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated series and period sets.

use mstl::seasonality::{MSTL, STL};
use mstl::smoothing::{Degree, Loess};
use mstl::{fit_f32, fit_f64, FitOptions};
use proptest::prelude::*;

/// Strategy for generating valid series values.
fn valid_values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| prop::collection::vec(-100.0..100.0_f64, len))
}

/// Strategy for a series together with one or two distinct periods below its length.
fn series_with_periods() -> impl Strategy<Value = (Vec<f64>, Vec<usize>)> {
    (10usize..80).prop_flat_map(|len| {
        let periods = prop::collection::btree_set(2..len, 1..3)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>());
        (prop::collection::vec(-100.0..100.0_f64, len), periods)
    })
}

/// Strategy for generating positive seasonal series.
fn seasonal_values_strategy(
    min_len: usize,
    max_len: usize,
    period: usize,
) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(move |len| {
        (50.0..100.0_f64, 5.0..20.0_f64).prop_map(move |(base, amplitude)| {
            (0..len)
                .map(|i| {
                    base + amplitude * (2.0 * std::f64::consts::PI * i as f64 / period as f64).sin()
                })
                .collect()
        })
    })
}

fn scale(values: &[f64]) -> f64 {
    values.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()))
}

// ============================================================================
// Additivity and shape
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn components_reconstruct_series((series, periods) in series_with_periods()) {
        let result = fit_f64(&series, &periods, &FitOptions::default()).unwrap();
        let tolerance = 1e-9 * scale(&series);

        for i in 0..series.len() {
            let total: f64 = result.seasonal.iter().map(|s| s[i]).sum();
            let reconstructed = result.trend[i] + total + result.remainder[i];
            prop_assert!(
                (reconstructed - series[i]).abs() <= tolerance,
                "index {}: {} vs {}", i, reconstructed, series[i]
            );
        }
    }

    #[test]
    fn output_shapes_match_input((series, periods) in series_with_periods()) {
        let result = fit_f64(&series, &periods, &FitOptions::default()).unwrap();

        prop_assert_eq!(result.trend.len(), series.len());
        prop_assert_eq!(result.remainder.len(), series.len());
        prop_assert_eq!(result.seasonal.len(), periods.len());
        for component in &result.seasonal {
            prop_assert_eq!(component.len(), series.len());
        }
        prop_assert_eq!(&result.periods, &periods);
    }

    #[test]
    fn robust_outputs_are_finite((series, periods) in series_with_periods()) {
        let options = FitOptions { robust: Some(true), ..FitOptions::default() };
        let result = fit_f64(&series, &periods, &options).unwrap();

        prop_assert!(result.trend.iter().all(|v| v.is_finite()));
        prop_assert!(result.remainder.iter().all(|v| v.is_finite()));
        prop_assert!(result.seasonal.iter().flatten().all(|v| v.is_finite()));
    }
}

// ============================================================================
// Determinism and precision
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fits_are_deterministic((series, periods) in series_with_periods()) {
        let first = fit_f64(&series, &periods, &FitOptions::default()).unwrap();
        let second = fit_f64(&series, &periods, &FitOptions::default()).unwrap();

        prop_assert_eq!(first.trend, second.trend);
        prop_assert_eq!(first.seasonal, second.seasonal);
        prop_assert_eq!(first.remainder, second.remainder);
    }

    #[test]
    fn single_precision_tracks_double(series in seasonal_values_strategy(30, 90, 7)) {
        let narrow: Vec<f32> = series.iter().map(|&v| v as f32).collect();
        let r64 = fit_f64(&series, &[7], &FitOptions::default()).unwrap();
        let r32 = fit_f32(&narrow, &[7], &FitOptions::default()).unwrap();

        for i in 0..series.len() {
            prop_assert!((r32.trend[i] as f64 - r64.trend[i]).abs() < 1e-2);
            prop_assert!((r32.seasonal[0][i] as f64 - r64.seasonal[0][i]).abs() < 1e-2);
        }
    }
}

// ============================================================================
// Building blocks
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stl_reconstructs_series(series in valid_values_strategy(12, 60), period in 2usize..6) {
        let result = STL::new(period).decompose(&series).unwrap();
        let tolerance = 1e-9 * scale(&series);

        for i in 0..series.len() {
            let reconstructed = result.trend[i] + result.seasonal[i] + result.remainder[i];
            prop_assert!((reconstructed - series[i]).abs() <= tolerance);
        }
    }

    #[test]
    fn robustness_weights_stay_in_unit_interval(series in valid_values_strategy(12, 60)) {
        let result = STL::new(4).robust().decompose(&series).unwrap();
        prop_assert!(result.weights.iter().all(|&w| (0.0..=1.0).contains(&w)));
    }

    #[test]
    fn loess_reproduces_lines(
        len in 3usize..60,
        window in 1usize..30,
        jump in 1usize..5,
        intercept in -50.0..50.0_f64,
        slope in -5.0..5.0_f64,
    ) {
        let line: Vec<f64> = (0..len).map(|i| intercept + slope * i as f64).collect();
        let fitted = Loess::new(window.max(3), Degree::Linear, jump).smooth(&line, None);

        for (f, y) in fitted.iter().zip(line.iter()) {
            prop_assert!((f - y).abs() < 1e-6 * (1.0 + y.abs()), "{} vs {}", f, y);
        }
    }

    #[test]
    fn period_order_is_preserved(series in valid_values_strategy(40, 80)) {
        let forward = MSTL::new(vec![5, 9]).decompose(&series).unwrap();
        let reversed = MSTL::new(vec![9, 5]).decompose(&series).unwrap();

        prop_assert_eq!(forward.periods, vec![5, 9]);
        prop_assert_eq!(reversed.periods, vec![9, 5]);
    }
}
