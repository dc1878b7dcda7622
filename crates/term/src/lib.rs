//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend, instead of using a widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw every cell with its value (blank for 0) on a value-dependent color
//! - Show the terminal message when a game is won or lost

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use palette::{tile_bg, tile_style};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
