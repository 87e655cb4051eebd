use thiserror::Error;

use crate::grid::GridError;
use crate::nca::NcaError;

/// Top-level error type, wrapping the per-module errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PkcalcError {
    #[error(transparent)]
    Nca(#[from] NcaError),

    #[error(transparent)]
    Grid(#[from] GridError),
}
