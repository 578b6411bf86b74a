//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a plain framebuffer that is then flushed to the terminal.
//!
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure)
//! - [`TerminalRenderer`] owns the terminal and writes frames (I/O)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
