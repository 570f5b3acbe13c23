//! Grid error type.

use thiserror::Error;

use mc_core::CellPos;

/// Errors produced by `mc-grid`.
///
/// Ordinary rejected edits (obstacle on an anchor, start onto goal) are not
/// errors; they return `Ok(false)`.  These variants are contract violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {pos} outside {rows}x{cols} grid")]
    OutOfBounds { pos: CellPos, rows: usize, cols: usize },

    #[error("grid {rows}x{cols} cannot hold distinct start and goal cells")]
    Dimensions { rows: usize, cols: usize },

    #[error("start and goal both at {0}")]
    AnchorConflict(CellPos),
}

pub type GridResult<T> = Result<T, GridError>;
