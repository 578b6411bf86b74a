//! One play session: game, pending input, tick clock and the latest snapshot.
//!
//! The binary owns the terminal and the event source; everything that decides
//! what an event or an elapsed period does to the game lives here so it can be
//! driven with synthetic events and instants.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};

use crate::core::{GameConfig, GameSnapshot, GameState, TickClock};
use crate::input::InputController;
use crate::types::KeyCommand;

/// What the caller should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The terminal was resized; the next frame must be a full redraw.
    Resized,
    Quit,
}

pub struct Session {
    config: GameConfig,
    game: GameState,
    input: InputController,
    clock: TickClock,
    snap: GameSnapshot,
    dirty: bool,
    next_seed: Box<dyn FnMut() -> u64>,
}

impl Session {
    /// Start a session. `next_seed` is called once per game (start and every restart).
    pub fn new(config: GameConfig, now: Instant, mut next_seed: impl FnMut() -> u64 + 'static) -> Self {
        let game = new_game(config, &mut next_seed);
        let snap = game.snapshot();
        Self {
            config,
            game,
            input: InputController::new(),
            clock: TickClock::new(config.tick_duration(), now),
            snap,
            dirty: true,
            next_seed: Box::new(next_seed),
        }
    }

    /// How long the caller may wait for input before the next tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.clock.timeout(now)
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) -> Flow {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Resize(..) => {
                self.dirty = true;
                Flow::Resized
            }
            _ => Flow::Continue,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        if self.input.on_key(key) == Some(KeyCommand::Restart) {
            self.restart(now);
        }
        if self.input.quit_requested() {
            self.game.quit();
            self.game.snapshot_into(&mut self.snap);
            return Flow::Quit;
        }
        Flow::Continue
    }

    /// Throw the current game away and start a fresh one.
    pub fn restart(&mut self, now: Instant) {
        log::info!("restart, previous score {}", self.game.score());
        self.game = new_game(self.config, &mut self.next_seed);
        self.input.clear();
        self.clock.reset(now);
        self.game.snapshot_into(&mut self.snap);
        self.dirty = true;
    }

    /// Tick once if a period has elapsed. Returns true if the game advanced.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.clock.poll_due(now) || !self.game.running() {
            return false;
        }
        let requested = self.input.take_requested().unwrap_or(self.game.direction());
        self.game.tick(requested);
        self.game.snapshot_into(&mut self.snap);
        self.dirty = true;
        true
    }

    /// Returns true once after anything visible changed.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snap
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }
}

fn new_game(config: GameConfig, next_seed: &mut dyn FnMut() -> u64) -> GameState {
    let seed = next_seed();
    log::debug!("food seed {}", seed);
    GameState::new(config, seed)
}
