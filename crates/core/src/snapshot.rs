use crate::types::{GameStatus, Tile, BOARD_SIZE};

/// Plain-data copy of a session, consumed by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Tile; BOARD_SIZE]; BOARD_SIZE],
    pub status: GameStatus,
    pub moves: u32,
    pub max_tile: Tile,
    pub episode_id: u32,
    pub seed: u64,
    pub started: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.started && !self.status.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_SIZE]; BOARD_SIZE],
            status: GameStatus::InProgress,
            moves: 0,
            max_tile: 0,
            episode_id: 0,
            seed: 0,
            started: false,
        }
    }
}
