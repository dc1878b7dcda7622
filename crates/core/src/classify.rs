//! Terminal-state classifier
//!
//! Win and loss are pure functions of the board. Win is checked first, so a
//! full, locked board that holds a 2048 tile is still a win.

use crate::board::{can_merge, Board};
use crate::types::{GameStatus, BOARD_SIZE, WIN_TILE};

/// True iff any cell holds the winning tile.
pub fn check_win(board: &Board) -> bool {
    board.contains(WIN_TILE)
}

/// True iff no cell is empty and no two orthogonal neighbours can merge.
///
/// A single empty cell or a single mergeable pair (horizontal or vertical)
/// keeps the game going. Equal tiles too large to double do not count.
pub fn is_game_over(board: &Board) -> bool {
    if !board.is_full() {
        return false;
    }
    let rows = board.rows();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE - 1 {
            if can_merge(rows[r][c], rows[r][c + 1]) {
                return false;
            }
        }
    }
    for r in 0..BOARD_SIZE - 1 {
        for c in 0..BOARD_SIZE {
            if can_merge(rows[r][c], rows[r + 1][c]) {
                return false;
            }
        }
    }
    true
}

/// Classify a board. Win takes priority over loss.
pub fn status(board: &Board) -> GameStatus {
    if check_win(board) {
        GameStatus::Won
    } else if is_game_over(board) {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}
