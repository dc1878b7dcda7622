//! Move resolver tests - concrete rows and whole-board properties

use rand::{rngs::StdRng, Rng, SeedableRng};

use tui_2048::core::{resolve, Board};
use tui_2048::types::{Direction, BOARD_SIZE};

fn row_board(row: [u32; 4]) -> Board {
    Board::from_rows([row, [0; 4], [0; 4], [0; 4]]).unwrap()
}

/// Boards with a mix of empty cells and small tiles, so merges are common.
fn random_board(rng: &mut StdRng) -> Board {
    let mut rows = [[0u32; BOARD_SIZE]; BOARD_SIZE];
    for row in &mut rows {
        for cell in row.iter_mut() {
            if rng.random_bool(0.7) {
                *cell = 1 << rng.random_range(1..=4u32);
            }
        }
    }
    Board::from_rows(rows).unwrap()
}

fn sum(board: &Board) -> u64 {
    board.rows().iter().flatten().map(|&v| v as u64).sum()
}

/// The board's lines in slide order: the first cell is the edge tiles move toward.
fn lines_toward(board: &Board, dir: Direction) -> Vec<Vec<u32>> {
    let rows = board.rows();
    (0..BOARD_SIZE)
        .map(|i| {
            (0..BOARD_SIZE)
                .map(|j| match dir {
                    Direction::Left => rows[i][j],
                    Direction::Right => rows[i][BOARD_SIZE - 1 - j],
                    Direction::Up => rows[j][i],
                    Direction::Down => rows[BOARD_SIZE - 1 - j][i],
                })
                .collect()
        })
        .collect()
}

/// Expected tiles (sorted) and merge count after sliding, by pairing equal
/// neighbours greedily from the leading edge.
fn expected_tiles(board: &Board, dir: Direction) -> (Vec<u32>, u32) {
    let mut tiles = Vec::new();
    let mut merges = 0;
    for line in lines_toward(board, dir) {
        let packed: Vec<u32> = line.into_iter().filter(|&v| v != 0).collect();
        let mut i = 0;
        while i < packed.len() {
            if i + 1 < packed.len() && packed[i] == packed[i + 1] {
                tiles.push(packed[i] * 2);
                merges += 1;
                i += 2;
            } else {
                tiles.push(packed[i]);
                i += 1;
            }
        }
    }
    tiles.sort_unstable();
    (tiles, merges)
}

#[test]
fn test_left_merge_concrete_case() {
    let result = resolve(&row_board([2, 2, 4, 0]), Direction::Left);
    assert_eq!(result.board.rows()[0], [4, 4, 0, 0]);
    assert!(result.changed);
    assert_eq!(result.merges, 1);
}

#[test]
fn test_no_double_merge() {
    let result = resolve(&row_board([2, 2, 2, 2]), Direction::Left);
    assert_eq!(result.board.rows()[0], [4, 4, 0, 0]);
    assert_ne!(result.board.rows()[0], [8, 0, 0, 0]);
    assert_eq!(result.merges, 2);
}

#[test]
fn test_right_merges_from_the_right_edge() {
    // Tie-break follows the reversed scan: the rightmost pair merges.
    let result = resolve(&row_board([2, 2, 2, 0]), Direction::Right);
    assert_eq!(result.board.rows()[0], [0, 0, 2, 4]);

    let result = resolve(&row_board([2, 2, 2, 2]), Direction::Right);
    assert_eq!(result.board.rows()[0], [0, 0, 4, 4]);
}

#[test]
fn test_up_and_down_work_on_columns() {
    let board = Board::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0]]).unwrap();

    let up = resolve(&board, Direction::Up).board;
    assert_eq!(
        *up.rows(),
        [[4, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
    );

    let down = resolve(&board, Direction::Down).board;
    assert_eq!(
        *down.rows(),
        [[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 0]]
    );
}

#[test]
fn test_blocked_direction_is_noop() {
    let board = Board::from_rows([
        [2, 4, 8, 16],
        [4, 8, 0, 0],
        [2, 0, 0, 0],
        [0, 0, 0, 0],
    ])
    .unwrap();
    let result = resolve(&board, Direction::Left);
    assert!(!result.changed);
    assert_eq!(result.merges, 0);
    assert_eq!(result.board, board);
}

#[test]
fn test_empty_board_never_changes() {
    for dir in Direction::ALL {
        let result = resolve(&Board::EMPTY, dir);
        assert!(!result.changed);
        assert_eq!(result.board, Board::EMPTY);
    }
}

#[test]
fn test_unchanged_flag_matches_board_equality() {
    let mut rng = StdRng::seed_from_u64(2048);
    for _ in 0..500 {
        let board = random_board(&mut rng);
        for dir in Direction::ALL {
            let result = resolve(&board, dir);
            assert_eq!(result.changed, result.board != board);
            if !result.changed {
                assert_eq!(result.board, board);
                assert_eq!(result.merges, 0);
            }
        }
    }
}

#[test]
fn test_value_conservation() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let board = random_board(&mut rng);
        for dir in Direction::ALL {
            let result = resolve(&board, dir);
            // merging two equal tiles keeps the total and removes one tile
            assert_eq!(sum(&result.board), sum(&board));
            assert_eq!(
                result.board.tile_count(),
                board.tile_count() - result.merges as usize
            );

            let (tiles, merges) = expected_tiles(&board, dir);
            assert_eq!(result.merges, merges, "{dir:?}\n{board}");
            assert_eq!(result.board.sorted_tiles().as_slice(), tiles.as_slice());
        }
    }
}

#[test]
fn test_largest_tile_pair_is_left_alone() {
    let top = 1 << 31;
    let board = Board::from_rows([[top, top, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();

    let left = resolve(&board, Direction::Left);
    assert!(!left.changed);
    assert_eq!(left.merges, 0);
    assert_eq!(left.board, board);

    let right = resolve(&board, Direction::Right);
    assert!(right.changed);
    assert_eq!(right.merges, 0);
    assert_eq!(right.board.rows()[0], [0, 0, top, top]);
}

#[test]
fn test_directional_symmetry() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let board = random_board(&mut rng);

        let right = resolve(&board, Direction::Right).board;
        let via_left = resolve(&board.reverse_rows(), Direction::Left)
            .board
            .reverse_rows();
        assert_eq!(right, via_left);

        let up = resolve(&board, Direction::Up).board;
        let via_left = resolve(&board.transpose(), Direction::Left).board.transpose();
        assert_eq!(up, via_left);

        let down = resolve(&board, Direction::Down).board;
        let via_right = resolve(&board.transpose(), Direction::Right)
            .board
            .transpose();
        assert_eq!(down, via_right);
    }
}

#[test]
fn test_resolve_is_pure() {
    let mut rng = StdRng::seed_from_u64(3);
    let board = random_board(&mut rng);
    let copy = board;
    for dir in Direction::ALL {
        let first = resolve(&board, dir);
        let second = resolve(&board, dir);
        assert_eq!(first, second);
    }
    assert_eq!(board, copy);
}
