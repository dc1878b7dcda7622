//! Terminal 2048 runner (default binary).
//!
//! Each key press runs one whole turn (resolve → spawn on change → classify)
//! before the next event is read, then the board is redrawn.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::core::{GameSnapshot, GameState, TurnOutcome};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::Config;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config)?;

    let seed = config.seed_or_random();
    info!("starting tui-2048 with seed {}", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&config.log_filter);
    if let Some(path) = config.effective_log_file() {
        let file = File::create(&path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("logger already initialized")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, seed: u64) -> Result<()> {
    let mut game = GameState::new(seed);
    game.start();

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit after {} moves", game.moves());
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    if game.apply_action(action) == TurnOutcome::Restarted {
                        term.invalidate();
                    }
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
