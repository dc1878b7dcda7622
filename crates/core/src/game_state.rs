//! Game state module - one play session
//!
//! This ties the board engine together: a turn resolves a direction, spawns a
//! tile only if the board changed, then reclassifies the board. Each call to
//! [`GameState::apply_action`] runs a whole turn to completion.

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::board::Board;
use crate::classify;
use crate::moves::resolve;
use crate::snapshot::GameSnapshot;
use crate::spawn::{seeded_board, spawn_tile};
use crate::types::{Direction, GameAction, GameStatus};

/// What a single action did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Tiles moved (and a new tile was spawned)
    Moved { merges: u32 },
    /// The direction had no legal move; not counted as a turn
    Unchanged,
    /// The game is not started or already over; the action was dropped
    Ignored,
    /// A new game replaced the board
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: StdRng,
    seed: u64,
    status: GameStatus,
    /// Turns that changed the board in the current episode.
    moves: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            rng: StdRng::seed_from_u64(seed),
            seed,
            status: GameStatus::InProgress,
            moves: 0,
            episode_id: 0,
            started: false,
        }
    }

    /// Start the game: place the opening tiles
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.board = seeded_board(&mut self.rng);
        self.status = classify::status(&self.board);
        info!(
            "game started (seed {}, episode {})",
            self.seed, self.episode_id
        );
    }

    /// Discard the current board and start a new episode.
    ///
    /// The RNG stream continues, so episodes within one session differ.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.moves = 0;
        self.started = false;
        self.start();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board directly (e.g. to resume from a known position).
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.started = true;
        self.status = classify::status(&self.board);
    }

    /// Apply a player action, running the full turn synchronously.
    pub fn apply_action(&mut self, action: GameAction) -> TurnOutcome {
        match action.direction() {
            Some(direction) => self.slide(direction),
            None => {
                self.restart();
                TurnOutcome::Restarted
            }
        }
    }

    /// resolve → spawn on change → classify
    pub fn slide(&mut self, direction: Direction) -> TurnOutcome {
        if !self.started || self.status.is_terminal() {
            return TurnOutcome::Ignored;
        }

        let result = resolve(&self.board, direction);
        if !result.changed {
            debug!("{} is not a legal move", direction.as_str());
            return TurnOutcome::Unchanged;
        }

        self.board = result.board;
        spawn_tile(&mut self.board, &mut self.rng);
        self.moves += 1;
        self.status = classify::status(&self.board);

        debug!(
            "move {} {}: {} merges, max tile {}",
            self.moves,
            direction.as_str(),
            result.merges,
            self.board.max_tile()
        );
        if self.status.is_terminal() {
            info!(
                "episode {} ended: {} after {} moves",
                self.episode_id,
                self.status.as_str(),
                self.moves
            );
        }

        TurnOutcome::Moved {
            merges: result.merges,
        }
    }

    /// Copy the renderer-facing view of this session
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.rows();
        out.status = self.status;
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.started = self.started;
    }
}
