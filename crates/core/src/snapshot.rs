use crate::types::{Cell, Direction, GRID_HEIGHT, GRID_WIDTH};

/// Read-only copy of a [`GameState`](crate::GameState) taken after a tick.
///
/// Renderers only ever see this type, so they cannot observe a half-applied
/// tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid_width: u16,
    pub grid_height: u16,
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub direction: Direction,
    pub running: bool,
    pub score: u32,
    pub ticks: u32,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn game_over(&self) -> bool {
        !self.running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            snake: Vec::new(),
            food: None,
            direction: Direction::Right,
            running: true,
            score: 0,
            ticks: 0,
        }
    }
}
