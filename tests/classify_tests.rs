//! Terminal-state classifier tests

use tui_2048::core::{check_win, is_game_over, status, Board};
use tui_2048::types::GameStatus;

fn checkerboard() -> Board {
    Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap()
}

#[test]
fn test_checkerboard_is_lost() {
    let board = checkerboard();
    assert!(is_game_over(&board));
    assert_eq!(status(&board), GameStatus::Lost);
}

#[test]
fn test_any_one_escape_keeps_the_game_alive() {
    // every single-cell edit of the checkerboard that opens a cell or a pair
    for row in 0..4 {
        for col in 0..4 {
            let mut opened = checkerboard();
            opened.set(row, col, 0).unwrap();
            assert!(!is_game_over(&opened), "empty at ({}, {})", row, col);

            let mut paired = checkerboard();
            let neighbour = if col < 3 { (row, col + 1) } else { (row, col - 1) };
            let value = paired.get(neighbour.0, neighbour.1).unwrap();
            paired.set(row, col, value).unwrap();
            assert!(!is_game_over(&paired), "pair at ({}, {})", row, col);
        }
    }
}

#[test]
fn test_win_detected_anywhere() {
    for row in 0..4 {
        for col in 0..4 {
            let mut board = Board::new();
            board.set(row, col, 2048).unwrap();
            assert!(check_win(&board));
            assert_eq!(status(&board), GameStatus::Won);
        }
    }
}

#[test]
fn test_bigger_tile_alone_is_not_a_win() {
    let mut board = Board::new();
    board.set(0, 0, 4096).unwrap();
    assert!(!check_win(&board));
    assert_eq!(status(&board), GameStatus::InProgress);
}

#[test]
fn test_win_takes_priority_over_loss() {
    let mut board = checkerboard();
    board.set(3, 3, 2048).unwrap();
    assert!(is_game_over(&board));
    assert_eq!(status(&board), GameStatus::Won);
}
