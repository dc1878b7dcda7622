//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell is either empty (0) or holds a
//! power-of-two tile. Storage is a fixed-size array, so boards are `Copy` and
//! every move can produce a fresh board without touching the heap.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges
//! 0..3 (left to right).

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::BoardError;
use crate::types::{Tile, BOARD_SIZE, CELL_COUNT};

/// One row of the board
pub type Row = [Tile; BOARD_SIZE];

/// The game board - 4 rows x 4 columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    rows: [Row; BOARD_SIZE],
}

/// A tile value is valid when it is empty or a power of two of at least 2.
#[inline]
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Two cells merge when they hold the same tile and the doubled value still fits a `Tile`.
#[inline]
pub fn can_merge(a: Tile, b: Tile) -> bool {
    a != 0 && a == b && a.checked_mul(2).is_some()
}

impl Board {
    /// An empty board (all zeros).
    pub const EMPTY: Board = Board {
        rows: [[0; BOARD_SIZE]; BOARD_SIZE],
    };

    /// Create a new empty board
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Build a board from rows, rejecting any value that is not 0 or 2^k.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]).unwrap();
    /// assert_eq!(board.get(0, 0), Some(2));
    ///
    /// assert!(Board::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_rows(rows: [Row; BOARD_SIZE]) -> Result<Self, BoardError> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Build a board without validating tile values.
    ///
    /// Only used by the move resolver, whose inputs are already valid and whose
    /// transforms (pack, double, transpose, reverse) preserve validity.
    pub(crate) const fn from_rows_unchecked(rows: [Row; BOARD_SIZE]) -> Self {
        Self { rows }
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        BOARD_SIZE
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        BOARD_SIZE
    }

    /// Get the value at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set the value at (row, col)
    ///
    /// Fails on out-of-bounds coordinates or invalid tile values; the board is
    /// left untouched on failure.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> Result<(), BoardError> {
        if !is_valid_tile(value) {
            return Err(BoardError::InvalidTile { row, col, value });
        }
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(BoardError::OutOfBounds { row, col })?;
        *cell = value;
        Ok(())
    }

    /// Borrow the rows (top to bottom)
    pub fn rows(&self) -> &[Row; BOARD_SIZE] {
        &self.rows
    }

    /// Check if a cell is empty (false when out of bounds)
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(0)
    }

    /// All empty cells in row-major order.
    ///
    /// Stack-only; a 4x4 board never has more than 16 empty cells.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value == 0 {
                    out.push((row, col));
                }
            }
        }
        out
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v != 0)
    }

    /// Check whether any cell holds exactly `value`
    pub fn contains(&self, value: Tile) -> bool {
        self.rows.iter().flatten().any(|&v| v == value)
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> Tile {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Non-zero values, sorted ascending. Useful for comparing tile multisets.
    pub fn sorted_tiles(&self) -> ArrayVec<Tile, CELL_COUNT> {
        let mut out: ArrayVec<Tile, CELL_COUNT> =
            self.rows.iter().flatten().copied().filter(|&v| v != 0).collect();
        out.sort_unstable();
        out
    }

    /// Rows become columns: `out[r][c] = self[c][r]`
    pub fn transpose(&self) -> Self {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (r, out_row) in rows.iter_mut().enumerate() {
            for (c, cell) in out_row.iter_mut().enumerate() {
                *cell = self.rows[c][r];
            }
        }
        Self { rows }
    }

    /// Flip the element order of every row
    pub fn reverse_rows(&self) -> Self {
        let mut rows = self.rows;
        for row in &mut rows {
            row.reverse();
        }
        Self { rows }
    }
}

impl TryFrom<&[Vec<Tile>]> for Board {
    type Error = BoardError;

    /// Build a board from dynamically sized rows, rejecting anything that is
    /// not exactly 4x4 or that holds invalid tile values.
    fn try_from(rows: &[Vec<Tile>]) -> Result<Self, Self::Error> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount { found: rows.len() });
        }
        let mut out = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, (src, dst)) in rows.iter().zip(out.iter_mut()).enumerate() {
            if src.len() != BOARD_SIZE {
                return Err(BoardError::RowLength {
                    row,
                    found: src.len(),
                });
            }
            dst.copy_from_slice(src);
        }
        Self::from_rows(out)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [Row; BOARD_SIZE]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_valid_tile_values() {
        assert!(is_valid_tile(0));
        assert!(is_valid_tile(2));
        assert!(is_valid_tile(4));
        assert!(is_valid_tile(2048));
        assert!(is_valid_tile(1 << 17));
        assert!(!is_valid_tile(1));
        assert!(!is_valid_tile(3));
        assert!(!is_valid_tile(6));
        assert!(!is_valid_tile(2047));
    }

    #[test]
    fn test_can_merge_stops_at_tile_limit() {
        assert!(can_merge(2, 2));
        assert!(can_merge(1 << 30, 1 << 30));
        assert!(!can_merge(1 << 31, 1 << 31));
        assert!(!can_merge(0, 0));
        assert!(!can_merge(2, 4));
    }

    #[test]
    fn test_transpose_swaps_axes() {
        let b = board([[2, 4, 0, 0], [0, 8, 0, 0], [0, 0, 16, 0], [32, 0, 0, 64]]);
        let t = b.transpose();
        assert_eq!(t.rows()[0], [2, 0, 0, 32]);
        assert_eq!(t.rows()[1], [4, 8, 0, 0]);
        assert_eq!(t.rows()[3], [0, 0, 0, 64]);
        assert_eq!(t.transpose(), b);
    }

    #[test]
    fn test_reverse_rows_flips_each_row() {
        let b = board([[2, 4, 8, 16], [0, 0, 0, 2], [0; 4], [4, 0, 0, 0]]);
        let r = b.reverse_rows();
        assert_eq!(r.rows()[0], [16, 8, 4, 2]);
        assert_eq!(r.rows()[1], [2, 0, 0, 0]);
        assert_eq!(r.rows()[3], [0, 0, 0, 4]);
        assert_eq!(r.reverse_rows(), b);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let b = board([[2, 2, 2, 2], [2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0]]);
        let empty = b.empty_cells();
        assert_eq!(empty.as_slice(), &[(1, 1), (3, 3)]);
        assert_eq!(b.empty_count(), 2);
        assert_eq!(b.tile_count(), 14);
        assert!(!b.is_full());
    }

    #[test]
    fn test_set_rejects_bad_input_without_mutation() {
        let mut b = Board::new();
        assert_eq!(
            b.set(4, 0, 2),
            Err(BoardError::OutOfBounds { row: 4, col: 0 })
        );
        assert_eq!(
            b.set(0, 0, 6),
            Err(BoardError::InvalidTile {
                row: 0,
                col: 0,
                value: 6
            })
        );
        assert_eq!(b, Board::EMPTY);

        b.set(1, 2, 8).unwrap();
        assert_eq!(b.get(1, 2), Some(8));
    }

    #[test]
    fn test_display_grid() {
        let b = board([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]);
        let text = b.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "    2     .     .     .");
        assert_eq!(lines[3], "    .     .     .  2048");
    }
}
