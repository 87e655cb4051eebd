//! Noncompartmental analysis (NCA) of concentration-time data
//!
//! Computes the standard single-dose NCA summary statistics from one
//! subject's sparsely sampled concentration-time series, using trapezoidal
//! integration and log-linear terminal-phase regression.
//!
//! # Parameters
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | Cmax | Maximum observed concentration (ties keep the earliest time) |
//! | Tmax | Time of maximum concentration |
//! | AUC0-t | Area under the curve to the last observed time point |
//! | t½ | Terminal half-life, ln(2)/λz |
//! | AUC0-inf | AUC0-t plus the extrapolated tail Clast/λz |
//! | %Extrap | Percent of AUC0-inf beyond the last observation |
//!
//! Cmax, Tmax and AUC0-t are always defined for a non-empty series. The
//! half-life-dependent parameters require a usable terminal phase — at
//! least two strictly positive, strictly declining points at the end of
//! the profile — and are grouped in [`PkResult::terminal`], `None` when
//! the terminal fit does not qualify. Undefined values are never replaced
//! with zero or NaN.
//!
//! # Usage
//!
//! ```rust
//! use pkcalc::nca::{compute_pk, NcaOptions};
//!
//! let series = vec![(0.5, 4.85), (1.0, 3.93), (2.0, 2.01), (4.0, 1.02)];
//! let result = compute_pk(&series, &NcaOptions::default()).unwrap();
//!
//! println!("Cmax: {:.2} at t = {}", result.c_max, result.t_max);
//! if let Some(ref terminal) = result.terminal {
//!     println!("t1/2: {:.2}", terminal.t_half);
//! }
//! ```

mod analyze;
mod calc;
mod error;
mod profile;
mod summary;
mod types;

pub use analyze::{compute_pk, compute_pk_batch, terminal_phase};
pub use calc::{auc_segment, TerminalFit};
pub use error::NcaError;
pub use summary::{summarize, summary_to_csv, MetricSummary};
pub use types::{AucMethod, NcaOptions, PkResult, TerminalPhase};
