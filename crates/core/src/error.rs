//! Error types for board construction and mutation.
//!
//! Normal play never produces these: moves and spawns only ever see valid
//! boards. They report contract violations at the edges, e.g. a board built
//! from external data that is not 4x4 or holds a value that is not 0 or 2^k.

use crate::types::Tile;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must have 4 rows, found {found}")]
    RowCount { found: usize },
    #[error("row {row} must have 4 cells, found {found}")]
    RowLength { row: usize, found: usize },
    #[error("cell ({row}, {col}) holds {value}, expected 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: Tile },
    #[error("cell ({row}, {col}) is outside the 4x4 board")]
    OutOfBounds { row: usize, col: usize },
}
