//! Move resolver - slides and merges tiles in one of four directions
//!
//! Left is the canonical move: every row is compressed (stable left-pack),
//! merged (equal neighbours combine, scanning left to right), then compressed
//! again. The other directions are geometric rewrites of Left:
//!
//! - **Right**: reverse rows, move left, reverse rows
//! - **Up**: transpose, move left, transpose
//! - **Down**: transpose, move right, transpose
//!
//! Resolution is pure: the input board is never mutated and a new board is
//! returned in every case.

use crate::board::{can_merge, Board, Row};
use crate::types::{Direction, BOARD_SIZE};

/// Outcome of resolving one direction against a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Board after sliding and merging (no spawned tile)
    pub board: Board,
    /// True iff `board` differs from the input in at least one cell
    pub changed: bool,
    /// Number of merge pairs performed
    pub merges: u32,
}

/// Pack non-zero values to the left, keeping their order, and pad with zeros.
///
/// ```
/// use tui_2048_core::moves::compress_row;
///
/// assert_eq!(compress_row([0, 2, 0, 4]), [2, 4, 0, 0]);
/// assert_eq!(compress_row([4, 0, 2, 0]), [4, 2, 0, 0]);
/// ```
pub fn compress_row(row: Row) -> Row {
    let mut out = [0; BOARD_SIZE];
    let mut pos = 0;
    for value in row {
        if value != 0 {
            out[pos] = value;
            pos += 1;
        }
    }
    out
}

/// Merge equal neighbours left to right. Returns the row and the merge count.
///
/// After a merge at (c, c+1) the scan jumps to c+2, so a freshly merged tile
/// never takes part in a second merge during the same pass. A pair whose sum
/// would not fit a `Tile` is left as it is.
///
/// ```
/// use tui_2048_core::moves::merge_row;
///
/// assert_eq!(merge_row([2, 2, 4, 0]), ([4, 0, 4, 0], 1));
/// assert_eq!(merge_row([2, 2, 2, 2]), ([4, 0, 4, 0], 2));
/// ```
pub fn merge_row(row: Row) -> (Row, u32) {
    let mut out = row;
    let mut merges = 0;
    let mut c = 0;
    while c + 1 < BOARD_SIZE {
        if can_merge(out[c], out[c + 1]) {
            out[c] *= 2;
            out[c + 1] = 0;
            merges += 1;
            // skip the consumed cell
            c += 2;
        } else {
            c += 1;
        }
    }
    (out, merges)
}

/// compress → merge → compress for a single row.
pub fn slide_row_left(row: Row) -> (Row, u32) {
    let (merged, merges) = merge_row(compress_row(row));
    (compress_row(merged), merges)
}

fn move_left(board: &Board) -> (Board, u32) {
    let mut rows = *board.rows();
    let mut merges = 0;
    for row in &mut rows {
        let (slid, n) = slide_row_left(*row);
        *row = slid;
        merges += n;
    }
    (Board::from_rows_unchecked(rows), merges)
}

fn move_right(board: &Board) -> (Board, u32) {
    let (moved, merges) = move_left(&board.reverse_rows());
    (moved.reverse_rows(), merges)
}

fn move_up(board: &Board) -> (Board, u32) {
    let (moved, merges) = move_left(&board.transpose());
    (moved.transpose(), merges)
}

fn move_down(board: &Board) -> (Board, u32) {
    let (moved, merges) = move_right(&board.transpose());
    (moved.transpose(), merges)
}

/// Resolve `direction` against `board` without spawning a tile.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{resolve, Board};
/// use tui_2048_core::types::Direction;
///
/// let board = Board::from_rows([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let result = resolve(&board, Direction::Left);
/// assert!(result.changed);
/// assert_eq!(result.board.rows()[0], [4, 4, 0, 0]);
/// ```
pub fn resolve(board: &Board, direction: Direction) -> MoveResult {
    let (next, merges) = match direction {
        Direction::Left => move_left(board),
        Direction::Right => move_right(board),
        Direction::Up => move_up(board),
        Direction::Down => move_down(board),
    };
    MoveResult {
        board: next,
        changed: next != *board,
        merges,
    }
}

/// Whether sliding in `direction` would change the board
pub fn can_move(board: &Board, direction: Direction) -> bool {
    resolve(board, direction).changed
}

/// Directions that would change the board, in `Direction::ALL` order
pub fn available_moves(board: &Board) -> impl Iterator<Item = Direction> + '_ {
    Direction::ALL
        .into_iter()
        .filter(move |&dir| can_move(board, dir))
}
