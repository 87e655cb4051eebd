//! Pure calculation functions for NCA parameters
//!
//! Stateless building blocks: trapezoidal AUC, log-linear regression of
//! the terminal phase, and the derived half-life/extrapolation values.

use super::error::NcaError;
use super::profile::Profile;
use super::types::AucMethod;

// ============================================================================
// AUC
// ============================================================================

/// Check if the log-linear rule applies to this segment
#[inline]
fn use_log_linear(c1: f64, c2: f64) -> bool {
    c2 < c1 && c1 > 0.0 && c2 > 0.0 && ((c1 / c2) - 1.0).abs() >= 1e-10
}

/// Calculate AUC for a single segment between two time points
///
/// Returns 0.0 for invalid intervals (t2 <= t1).
#[inline]
pub fn auc_segment(t1: f64, c1: f64, t2: f64, c2: f64, method: AucMethod) -> f64 {
    let dt = t2 - t1;
    if dt <= 0.0 {
        return 0.0;
    }

    match method {
        AucMethod::Linear => (c1 + c2) / 2.0 * dt,
        AucMethod::LinUpLogDown => {
            if use_log_linear(c1, c2) {
                (c1 - c2) * dt / (c1 / c2).ln()
            } else {
                (c1 + c2) / 2.0 * dt
            }
        }
    }
}

/// Calculate AUC from the first to the last observed time point
pub(crate) fn auc0_t(profile: &Profile, method: AucMethod) -> f64 {
    let mut auc = 0.0;
    for i in 1..profile.times.len() {
        auc += auc_segment(
            profile.times[i - 1],
            profile.concentrations[i - 1],
            profile.times[i],
            profile.concentrations[i],
            method,
        );
    }
    auc
}

// ============================================================================
// Terminal phase
// ============================================================================

/// Result of the terminal log-linear regression
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalFit {
    /// Terminal elimination rate constant (positive)
    pub lambda_z: f64,
    /// Coefficient of determination of the regression
    pub r_squared: f64,
    /// Number of points in the regression
    pub n_points: usize,
    /// Time of the first fitted point
    pub time_first: f64,
    /// Time of the last fitted point
    pub time_last: f64,
    /// Concentration at the last fitted point (last positive observation)
    pub clast: f64,
}

/// Fit the terminal phase by log-linear least squares
///
/// Selects up to `n_points` observations walking back from the last
/// strictly positive concentration, while the profile stays strictly
/// positive and strictly declining in time order.
///
/// # Errors
/// [`NcaError::InsufficientTerminalData`] if fewer than 2 points qualify
/// or the fitted slope is non-declining.
pub(crate) fn fit_terminal(profile: &Profile, n_points: usize) -> Result<TerminalFit, NcaError> {
    let last = profile
        .tlast_idx
        .ok_or_else(|| NcaError::InsufficientTerminalData {
            reason: "no positive concentrations".to_string(),
        })?;

    let mut first = last;
    while first > 0 && (last - first + 1) < n_points {
        let prev = first - 1;
        let qualifies = profile.concentrations[prev] > 0.0
            && profile.concentrations[prev] > profile.concentrations[first];
        if !qualifies {
            break;
        }
        first = prev;
    }

    let n = last - first + 1;
    if n < 2 {
        return Err(NcaError::InsufficientTerminalData {
            reason: format!("{} qualifying terminal points (2 required)", n),
        });
    }

    let times = &profile.times[first..=last];
    let log_concs: Vec<f64> = profile.concentrations[first..=last]
        .iter()
        .map(|c| c.ln())
        .collect();

    let (slope, _intercept, r_squared) =
        linear_regression(times, &log_concs).ok_or_else(|| NcaError::InsufficientTerminalData {
            reason: "degenerate terminal regression".to_string(),
        })?;

    let lambda_z = -slope;
    if lambda_z <= 0.0 {
        return Err(NcaError::InsufficientTerminalData {
            reason: "terminal slope is non-declining".to_string(),
        });
    }

    Ok(TerminalFit {
        lambda_z,
        r_squared,
        n_points: n,
        time_first: times[0],
        time_last: profile.times[last],
        clast: profile.concentrations[last],
    })
}

/// Simple linear regression `y = a + b*x`
///
/// Returns `(slope, intercept, r_squared)`, or `None` for degenerate input.
fn linear_regression(x: &[f64], y: &[f64]) -> Option<(f64, f64, f64)> {
    let n = x.len() as f64;
    if n < 2.0 {
        return None;
    }

    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(xi, yi)| xi * yi).sum();
    let sum_x2: f64 = x.iter().map(|xi| xi * xi).sum();
    let sum_y2: f64 = y.iter().map(|yi| yi * yi).sum();

    let denom = n * sum_x2 - sum_x * sum_x;
    if denom.abs() < 1e-15 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;

    let ss_tot = sum_y2 - sum_y * sum_y / n;
    let ss_res: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(xi, yi)| {
            let pred = intercept + slope * xi;
            (yi - pred).powi(2)
        })
        .sum();

    let r_squared = if ss_tot.abs() < 1e-15 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Some((slope, intercept, r_squared))
}

// ============================================================================
// Derived parameters
// ============================================================================

/// Terminal half-life from the elimination rate constant
#[inline]
pub(crate) fn half_life(lambda_z: f64) -> f64 {
    std::f64::consts::LN_2 / lambda_z
}

/// AUC extrapolated to infinity
#[inline]
pub(crate) fn auc_inf(auc0_t: f64, clast: f64, lambda_z: f64) -> f64 {
    auc0_t + clast / lambda_z
}

/// Percentage of AUC0-inf beyond the last observation
#[inline]
pub(crate) fn auc_extrap_pct(auc0_t: f64, auc0_inf: f64) -> f64 {
    (auc0_inf - auc0_t) / auc0_inf * 100.0
}
