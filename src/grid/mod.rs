//! Study data-grid reconciliation
//!
//! The study workbook presents entered concentrations as a wide editable
//! grid: one `time` column plus one concentration column per subject,
//! with blank cells for measurements not taken. This module owns the pure
//! structural side of that grid:
//!
//! - [`reconcile`]: given a target subject count and row count, produce
//!   the new column descriptors and row records, preserving entered
//!   values and padding new rows/columns with blanks. Idempotent, owns no
//!   state.
//! - [`series`]: the wide/long transforms between grid rows and the
//!   per-subject `(time, concentration)` series the NCA engine consumes.
//!
//! Cells are `Option<f64>`: `None` (or an absent key) is "no measurement"
//! and is dropped before analysis — never coerced to zero, since zero is
//! a valid measured concentration.

mod error;
mod reconcile;
pub mod series;

pub use error::GridError;
pub use reconcile::{reconcile, Column, ColumnKey, Row, SubjectId, MAX_ROWS, MAX_SUBJECTS};
