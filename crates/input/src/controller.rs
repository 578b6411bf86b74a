//! Pending-direction slot between key delivery and the tick driver.
//!
//! The driver is a single-threaded event loop: key events and ticks are
//! handled on the same thread, and the slot is only touched through `&mut
//! self`. A steering key overwrites any request the next tick has not consumed
//! yet (last write wins, no queue). Reversal is not checked here;
//! `GameState::tick` owns that rule.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{Direction, KeyCommand};

#[derive(Debug, Clone, Default)]
pub struct InputController {
    requested: Option<Direction>,
    quit: bool,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event. Returns the command it mapped to, if any.
    ///
    /// Release events are ignored. Auto-repeat is treated like a press since a
    /// repeated heading is harmless.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<KeyCommand> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let command = map_key(key)?;
        self.apply(command);
        Some(command)
    }

    /// Record a command that did not come from a key event.
    pub fn apply(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::Steer(direction) => {
                if let Some(prev) = self.requested.replace(direction) {
                    if prev != direction {
                        log::trace!("pending {:?} overwritten by {:?}", prev, direction);
                    }
                }
            }
            KeyCommand::Quit => self.quit = true,
            // Restart is acted on by the driver, which rebuilds the game.
            KeyCommand::Restart => {}
        }
    }

    /// Consume the pending direction. Called once per tick.
    pub fn take_requested(&mut self) -> Option<Direction> {
        self.requested.take()
    }

    pub fn peek_requested(&self) -> Option<Direction> {
        self.requested
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Drop any pending request (used when a fresh game starts).
    pub fn clear(&mut self) {
        self.requested = None;
    }
}
