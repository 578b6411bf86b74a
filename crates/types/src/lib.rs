//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 30 columns (indexed 0-29)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn row**: `GRID_HEIGHT / 2`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 120 | Fixed timestep interval, one cell per tick |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GRID_HEIGHT, GRID_WIDTH};
//!
//! let head = Cell::new(4, 10);
//! assert_eq!(head.step(Direction::Right), Cell::new(5, 10));
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! assert_eq!(GRID_WIDTH, 30);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (30 columns)
pub const GRID_WIDTH: u16 = 30;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u16 = 20;

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u32 = 120;

/// Number of cells in a freshly spawned snake
pub const INITIAL_SNAKE_LEN: u16 = 5;

/// Terminal columns per grid cell (cosmetic only)
pub const TILE_SIZE: u16 = 2;


/// A position on the game grid.
///
/// Coordinates are signed so that a head stepping off the grid is still a
/// representable value (it is what collision detection looks at).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the cell lies inside a `width x height` grid.
    pub fn in_bounds(self, width: u16, height: u16) -> bool {
        self.x >= 0 && self.x < width as i32 && self.y >= 0 && self.y < height as i32
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Direction of travel.
///
/// Screen coordinates: `y` grows downwards, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from `self` to `other` would be a 180-degree turn.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Label shown in the side panel.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// What a recognised key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    /// Request a new heading for the next tick.
    Steer(Direction),
    /// End the game immediately.
    Quit,
    /// Throw the current game away and start a fresh one.
    Restart,
}
