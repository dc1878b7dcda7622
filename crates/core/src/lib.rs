//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board engine for 2048: the grid, the move
//! resolver, the tile spawner and the win/loss classifier, plus a small
//! session type that runs whole turns. It has **zero dependencies** on UI or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a pure function over a `Copy` board
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with validation, transpose and row reversal
//! - [`moves`]: compress/merge/compress for Left, derived transforms for the rest
//! - [`spawn`]: uniform empty-cell insertion of a 2 (90%) or 4 (10%)
//! - [`classify`]: win (any 2048) and loss (full board, no equal neighbours)
//! - [`game_state`]: one session; resolve → spawn on change → classify
//! - [`snapshot`]: plain-data view for renderers
//!
//! # Game Rules
//!
//! - A slide packs tiles toward one edge, merging equal neighbours once
//! - A tile produced by a merge cannot merge again in the same slide
//! - A slide that moves nothing is not a turn and spawns nothing
//! - A board holding 2048 is won, even when no move is left
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, TurnOutcome};
//! use tui_2048_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.board().tile_count(), 2);
//!
//! let outcome = game.apply_action(GameAction::MoveLeft);
//! assert!(matches!(
//!     outcome,
//!     TurnOutcome::Moved { .. } | TurnOutcome::Unchanged
//! ));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod classify;
pub mod error;
pub mod game_state;
pub mod moves;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{can_merge, is_valid_tile, Board, Row};
pub use classify::{check_win, is_game_over, status};
pub use error::BoardError;
pub use game_state::{GameState, TurnOutcome};
pub use moves::{available_moves, can_move, resolve, MoveResult};
pub use snapshot::GameSnapshot;
pub use spawn::{random_tile_value, seeded_board, spawn_tile};
