//! NCA error types

use thiserror::Error;

/// Errors that can occur during NCA analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NcaError {
    /// The series has no usable points; nothing can be computed
    #[error("insufficient data: {n} usable points ({required} required)")]
    InsufficientData { n: usize, required: usize },

    /// The terminal phase does not qualify for log-linear regression;
    /// only the half-life-dependent parameters are affected
    #[error("insufficient terminal data: {reason}")]
    InsufficientTerminalData { reason: String },

    /// CSV export of the results table failed
    #[error("csv export failed: {0}")]
    CsvExport(String),
}
