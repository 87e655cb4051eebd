//! Noncompartmental pharmacokinetic analysis and study-grid reconciliation.
//!
//! This crate provides the two computational cores behind a PK study
//! workbook:
//!
//! - [`nca`]: per-subject noncompartmental analysis of concentration-time
//!   series — Cmax, Tmax, AUC0-t, terminal half-life, AUC0-inf and percent
//!   extrapolated — plus cross-subject summary statistics and CSV export.
//! - [`grid`]: pure reconciliation of an editable wide-format data grid
//!   (one time column, one concentration column per subject) against a
//!   target subject count and row count, and the wide/long transforms
//!   between grid rows and per-subject series.
//!
//! Both components are pure and stateless; per-subject analysis is
//! embarrassingly parallel and [`nca::compute_pk_batch`] runs it on a
//! rayon thread pool, reporting results in subject-index order.
//!
//! # Example
//!
//! ```rust
//! use pkcalc::nca::{compute_pk, NcaOptions};
//!
//! let series = vec![
//!     (0.25, 3.04),
//!     (0.5, 4.85),
//!     (1.0, 3.93),
//!     (2.0, 2.01),
//!     (4.0, 1.02),
//!     (8.0, 0.25),
//! ];
//!
//! let result = compute_pk(&series, &NcaOptions::default()).unwrap();
//! assert_eq!(result.c_max, 4.85);
//! assert_eq!(result.t_max, 0.5);
//! assert!(result.t_half().is_some());
//! ```

pub mod error;
pub mod grid;
pub mod nca;

pub use error::PkcalcError;
pub use grid::{reconcile, Column, ColumnKey, GridError, Row, SubjectId};
pub use nca::{
    compute_pk, compute_pk_batch, summarize, AucMethod, MetricSummary, NcaError, NcaOptions,
    PkResult, TerminalPhase,
};
