//! Spawner - random tile insertion
//!
//! A new tile lands on an empty cell chosen uniformly at random. It is a 2
//! with probability 0.9 and a 4 with probability 0.1.
//!
//! All functions take the RNG explicitly so callers can seed it
//! (`StdRng::seed_from_u64`) for reproducible games and tests.

use rand::Rng;

use crate::board::Board;
use crate::types::{Tile, SPAWN_FOUR_PROBABILITY, START_TILES};

/// Draw the value of a newly spawned tile: 2 (90%) or 4 (10%).
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.random_bool(SPAWN_FOUR_PROBABILITY) {
        4
    } else {
        2
    }
}

/// Insert one tile into a uniformly chosen empty cell.
///
/// Returns false, leaving the board untouched, when there is no empty cell.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tui_2048_core::{spawn_tile, Board};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut board = Board::new();
/// assert!(spawn_tile(&mut board, &mut rng));
/// assert_eq!(board.tile_count(), 1);
/// ```
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> bool {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return false;
    }
    let (row, col) = empty[rng.random_range(0..empty.len())];
    let value = random_tile_value(rng);
    // (row, col) came from empty_cells and value is 2 or 4.
    board.set(row, col, value).is_ok()
}

/// A fresh game board: empty, then `START_TILES` spawns.
///
/// Each spawn consumes an empty cell, so the starting tiles always occupy
/// distinct positions.
pub fn seeded_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::new();
    for _ in 0..START_TILES {
        spawn_tile(&mut board, rng);
    }
    board
}
