//! NCA entry points
//!
//! [`compute_pk`] analyzes one subject's cleaned series; [`compute_pk_batch`]
//! fans a population out over rayon, one independent analysis per subject,
//! and reports results in subject-index order.

use rayon::prelude::*;

use super::calc;
use super::error::NcaError;
use super::profile::Profile;
use super::types::{NcaOptions, PkResult, TerminalPhase};

/// Compute the NCA summary statistics for one subject
///
/// The series is a cleaned `(time, concentration)` sequence with blanks
/// already stripped; input order does not matter. Cmax, Tmax and AUC0-t
/// are always computed; the half-life-dependent parameters are `None`
/// when the terminal phase does not qualify — that is expected real-world
/// input, not an error.
///
/// # Errors
/// [`NcaError::InsufficientData`] if the series is empty.
pub fn compute_pk(series: &[(f64, f64)], options: &NcaOptions) -> Result<PkResult, NcaError> {
    let profile = Profile::new(series)?;
    let auc0_t = calc::auc0_t(&profile, options.auc_method);

    let terminal = match calc::fit_terminal(&profile, options.terminal_points) {
        Ok(fit) => {
            let auc0_inf = calc::auc_inf(auc0_t, fit.clast, fit.lambda_z);
            Some(TerminalPhase {
                lambda_z: fit.lambda_z,
                t_half: calc::half_life(fit.lambda_z),
                auc0_inf,
                percent_extrap: calc::auc_extrap_pct(auc0_t, auc0_inf),
                r_squared: fit.r_squared,
                n_points: fit.n_points,
            })
        }
        Err(NcaError::InsufficientTerminalData { .. }) => None,
        Err(e) => return Err(e),
    };

    Ok(PkResult {
        c_max: profile.cmax(),
        t_max: profile.tmax(),
        auc0_t,
        terminal,
    })
}

/// Fit the terminal phase of one subject's series, signalling explicitly
/// why a half-life cannot be estimated
///
/// Unlike [`compute_pk`], which degrades to a partial result, this
/// returns [`NcaError::InsufficientTerminalData`] with the disqualifying
/// reason — fewer than 2 qualifying points, or a non-declining slope.
pub fn terminal_phase(
    series: &[(f64, f64)],
    terminal_points: usize,
) -> Result<calc::TerminalFit, NcaError> {
    let profile = Profile::new(series)?;
    calc::fit_terminal(&profile, terminal_points)
}

/// Compute NCA for every subject of a population in parallel
///
/// One independent [`compute_pk`] invocation per subject; the returned
/// vector is in subject-index order regardless of completion order.
pub fn compute_pk_batch(
    series: &[Vec<(f64, f64)>],
    options: &NcaOptions,
) -> Vec<Result<PkResult, NcaError>> {
    series
        .par_iter()
        .map(|s| compute_pk(s, options))
        .collect()
}
