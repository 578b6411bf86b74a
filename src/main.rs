//! Terminal snake runner (default binary).
//!
//! Single-threaded driver: it waits for key events until the next tick is
//! due, then advances the game once and redraws from a snapshot taken after
//! the tick. Event handling lives in `tui_snake::session`. Configuration
//! comes from `SNAKE_*` environment variables (see `tui_snake::core::config`).

use std::fs::File;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::terminal;

use tui_snake::core::GameConfig;
use tui_snake::session::{Flow, Session};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    config.validate().context("invalid SNAKE_* configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to `SNAKE_LOG_FILE` when set. Writing to stderr would corrupt the
/// alternate screen, so without a file logging stays off.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("SNAKE_LOG_FILE") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", path.to_string_lossy()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let view = GameView::new(config.tile_size);
    let env_seed = GameConfig::seed_from_env();
    let mut session = Session::new(config, Instant::now(), move || {
        env_seed.unwrap_or_else(rand::random)
    });
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        if session.take_redraw() {
            let (w, h) = terminal::size().unwrap_or((80, 24));
            view.render_into(session.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        // Input with timeout until next tick.
        if event::poll(session.timeout(Instant::now()))? {
            match session.handle_event(event::read()?, Instant::now()) {
                Flow::Quit => return Ok(()),
                Flow::Resized => term.invalidate(),
                Flow::Continue => {}
            }
        }

        session.advance(Instant::now());
    }
}
