//! Tests for terminal-phase estimation through the public API

use approx::assert_relative_eq;
use pkcalc::nca::{compute_pk, terminal_phase, NcaError, NcaOptions};

#[test]
fn test_half_life_recovers_exact_exponential() {
    // C = 100 * e^(-0.1 t): t1/2 = ln(2)/0.1
    let times: [f64; 6] = [0.0, 4.0, 8.0, 12.0, 16.0, 24.0];
    let series: Vec<(f64, f64)> = times.iter().map(|&t| (t, 100.0 * (-0.1 * t).exp())).collect();

    let result = compute_pk(&series, &NcaOptions::default()).unwrap();
    let terminal = result.terminal.as_ref().expect("exponential decline");

    assert_relative_eq!(terminal.lambda_z, 0.1, epsilon = 1e-10);
    assert_relative_eq!(terminal.t_half, std::f64::consts::LN_2 / 0.1, epsilon = 1e-9);
    assert_relative_eq!(terminal.r_squared, 1.0, epsilon = 1e-10);
    assert_eq!(terminal.n_points, 3);
}

#[test]
fn test_declining_three_point_series_fully_defined() {
    let series = vec![(0.0, 8.0), (2.0, 4.0), (4.0, 2.0)];
    let result = compute_pk(&series, &NcaOptions::default()).unwrap();

    assert!(result.t_half().unwrap() > 0.0);
    assert!(result.auc0_inf().is_some());
    assert!(result.percent_extrap().is_some());
}

#[test]
fn test_flat_series_undefined_half_life() {
    let result = compute_pk(&[(0.0, 1.0), (1.0, 1.0)], &NcaOptions::default()).unwrap();

    assert_eq!(result.t_half(), None);
    assert_eq!(result.auc0_inf(), None);
    assert_eq!(result.percent_extrap(), None);
    // The rest of the result is still valid
    assert_eq!(result.c_max, 1.0);
    assert_eq!(result.t_max, 0.0);
}

#[test]
fn test_rising_series_undefined_half_life() {
    let result =
        compute_pk(&[(0.0, 1.0), (1.0, 2.0), (2.0, 4.0)], &NcaOptions::default()).unwrap();

    assert_eq!(result.t_half(), None);
    assert_eq!(result.c_max, 4.0);
}

#[test]
fn test_empty_series_hard_error() {
    let err = compute_pk(&[], &NcaOptions::default()).unwrap_err();
    assert_eq!(err, NcaError::InsufficientData { n: 0, required: 1 });
}

#[test]
fn test_terminal_phase_reports_reason() {
    let err = terminal_phase(&[(0.0, 1.0), (1.0, 1.0)], 3).unwrap_err();
    match err {
        NcaError::InsufficientTerminalData { reason } => {
            assert!(reason.contains("qualifying terminal points"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_terminal_points_configurable() {
    // C = 100 * e^(-0.1 t) with a distorted early phase; a wider window
    // still fits the clean tail
    let series = vec![
        (0.0, 20.0),
        (2.0, 60.0),
        (4.0, 67.03),
        (8.0, 44.93),
        (12.0, 30.12),
        (16.0, 20.19),
        (24.0, 9.07),
    ];

    let narrow = terminal_phase(&series, 3).unwrap();
    assert_eq!(narrow.n_points, 3);
    assert_eq!(narrow.time_first, 12.0);

    let wide = terminal_phase(&series, 4).unwrap();
    assert_eq!(wide.n_points, 4);
    assert_eq!(wide.time_first, 8.0);

    assert_relative_eq!(narrow.lambda_z, 0.1, epsilon = 1e-3);
    assert_relative_eq!(wide.lambda_z, 0.1, epsilon = 1e-3);
}

#[test]
fn test_terminal_selection_stops_at_rise() {
    // Rise at t=2 bounds the window even when more points were requested
    let series = vec![(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (4.0, 4.0), (8.0, 2.0)];
    let fit = terminal_phase(&series, 5).unwrap();
    assert_eq!(fit.n_points, 3);
    assert_eq!(fit.time_first, 2.0);
}

#[test]
fn test_trailing_zero_excluded_from_fit() {
    let series = vec![(0.0, 8.0), (1.0, 4.0), (2.0, 2.0), (4.0, 0.0)];
    let fit = terminal_phase(&series, 3).unwrap();
    assert_eq!(fit.time_last, 2.0);
    assert_eq!(fit.clast, 2.0);
}
