//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::KeyCommand`] and keeps the
//! single pending-direction slot the tick driver consumes.

pub mod controller;
pub mod map;

pub use tui_snake_types as types;

pub use controller::InputController;
pub use map::{map_key, should_quit};
