//! Game state module - owns the snake, the food and the running flag
//!
//! [`GameState::tick`] is the only operation that advances the simulation. One
//! call moves the snake one cell, handles eating, and checks for collisions.

use std::collections::VecDeque;

use anyhow::{bail, Result};

use crate::config::GameConfig;
use crate::rng::FoodRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Direction};

/// What ended a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// The head left the grid.
    Wall,
    /// The head ran into the body.
    Body,
}

/// Result of a single [`GameState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto the food and will be one cell longer.
    Ate,
    /// The move ended the game.
    Collided(Collision),
    /// The game had already ended; nothing changed.
    Ended,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    /// Body segments, head first.
    snake: VecDeque<Cell>,
    /// `None` only once the snake covers every cell.
    food: Option<Cell>,
    direction: Direction,
    running: bool,
    grow_pending: bool,
    rng: FoodRng,
    ticks: u32,
}

impl GameState {
    /// Create a new game: a horizontal snake along the middle row, tail at
    /// `x = 0`, heading right, and food on a random free cell.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let len = config.initial_len.max(1) as i32;
        let row = (config.grid_height / 2) as i32;
        let snake = (0..len).rev().map(|x| Cell::new(x, row)).collect();
        let state = Self::from_parts(config, seed, snake, Direction::Right);
        log::info!(
            "new game: {}x{} grid, snake length {}, food at {:?}",
            config.grid_width,
            config.grid_height,
            state.snake.len(),
            state.food
        );
        state
    }

    /// Create a game from an explicit body (head first) and heading.
    ///
    /// Useful for scripted scenarios. The body must be non-empty.
    pub fn with_snake(
        config: GameConfig,
        seed: u64,
        body: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Result<Self> {
        let snake: VecDeque<Cell> = body.into_iter().collect();
        if snake.is_empty() {
            bail!("snake body must contain at least one cell");
        }
        Ok(Self::from_parts(config, seed, snake, direction))
    }

    fn from_parts(
        config: GameConfig,
        seed: u64,
        snake: VecDeque<Cell>,
        direction: Direction,
    ) -> Self {
        let mut state = Self {
            config,
            snake,
            food: None,
            direction,
            running: true,
            grow_pending: false,
            rng: FoodRng::new(seed),
            ticks: 0,
        };
        state.relocate_food();
        state
    }

    /// Advance the simulation by one step.
    ///
    /// `requested` replaces the current heading unless it is the exact
    /// reverse of it, in which case the current heading is kept.
    pub fn tick(&mut self, requested: Direction) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ended;
        }
        self.ticks = self.ticks.wrapping_add(1);

        if !self.direction.is_opposite(requested) {
            self.direction = requested;
        }

        let new_head = self.head().step(self.direction);
        self.snake.push_front(new_head);

        let ate = self.food == Some(new_head);
        if ate {
            self.grow_pending = true;
            self.relocate_food();
        }

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.snake.pop_back();
        }

        if let Some(collision) = self.collision() {
            self.running = false;
            log::info!(
                "game over after {} ticks: {:?} at {:?}, score {}",
                self.ticks,
                collision,
                new_head,
                self.score()
            );
            return TickOutcome::Collided(collision);
        }

        if ate {
            log::debug!("ate food at {:?}, length {}", new_head, self.snake.len());
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// End the game without a collision (quit key).
    pub fn quit(&mut self) {
        if self.running {
            log::info!("quit requested, score {}", self.score());
        }
        self.running = false;
    }

    /// Put the food on a specific cell.
    ///
    /// Returns false (and leaves the food where it was) if the cell is off the
    /// grid or on the snake.
    pub fn place_food_at(&mut self, cell: Cell) -> bool {
        if !self.in_bounds(cell) || self.snake.contains(&cell) {
            return false;
        }
        self.food = Some(cell);
        true
    }

    fn relocate_food(&mut self) {
        let snake = &self.snake;
        self.food = self.rng.place(
            self.config.grid_width,
            self.config.grid_height,
            |c| snake.contains(&c),
        );
        if self.food.is_none() {
            log::info!("board full: no free cell left for food");
        }
    }

    fn collision(&self) -> Option<Collision> {
        let head = self.head();
        if !self.in_bounds(head) {
            return Some(Collision::Wall);
        }
        if self.snake.iter().skip(1).any(|&c| c == head) {
            return Some(Collision::Body);
        }
        None
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.in_bounds(self.config.grid_width, self.config.grid_height)
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Cells grown since the start of the game.
    pub fn score(&self) -> u32 {
        (self.snake.len() as u32).saturating_sub(self.config.initial_len as u32)
    }

    /// Fill an existing snapshot, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid_width = self.config.grid_width;
        out.grid_height = self.config.grid_height;
        out.snake.clear();
        out.snake.extend(self.snake.iter().copied());
        out.food = self.food;
        out.direction = self.direction;
        out.running = self.running;
        out.score = self.score();
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
