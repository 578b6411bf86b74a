//! Core game logic module - pure and testable
//!
//! This module contains the game rules and state management. It has no
//! dependencies on terminal I/O, which makes it:
//!
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//! - **Reproducible**: food placement uses a seeded RNG
//!
//! # Module Structure
//!
//! - [`game_state`]: snake, food, heading and the `tick` step
//! - [`rng`]: food placement on a random free cell
//! - [`snapshot`]: read-only copy handed to renderers
//! - [`config`]: startup configuration and env overrides
//! - [`clock`]: fixed-period tick scheduling
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick in its current heading.
//! - A requested heading that is the exact reverse of the current one is ignored.
//! - Landing on food grows the snake by one cell and moves the food to a free cell.
//! - Leaving the grid or hitting the body ends the game. Ended games stay ended.
//! - Score is the number of cells grown since the start.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState, TickOutcome};
//! use tui_snake_types::{Cell, Direction};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//! assert_eq!(game.head(), Cell::new(4, 10));
//!
//! // Reversing straight into the neck is ignored.
//! game.place_food_at(Cell::new(0, 0));
//! assert_eq!(game.tick(Direction::Left), TickOutcome::Moved);
//! assert_eq!(game.head(), Cell::new(5, 10));
//! assert_eq!(game.score(), 0);
//! ```

pub mod clock;
pub mod config;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use clock::TickClock;
pub use config::GameConfig;
pub use game_state::{Collision, GameState, TickOutcome};
pub use rng::FoodRng;
pub use snapshot::GameSnapshot;
