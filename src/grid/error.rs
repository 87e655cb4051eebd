//! Grid error types

use thiserror::Error;

/// Errors from grid reconciliation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A reconcile target exceeds the supported study size
    #[error("invalid reconcile request: {param} = {value} exceeds maximum {max}")]
    InvalidRequest {
        param: &'static str,
        value: usize,
        max: usize,
    },
}
