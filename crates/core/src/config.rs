//! Startup configuration.
//!
//! Values are fixed for the lifetime of a game. They come from compile-time
//! defaults in [`crate::types`] and can be overridden with environment variables:
//!
//! - `SNAKE_GRID_WIDTH`: grid width in cells (default: 30)
//! - `SNAKE_GRID_HEIGHT`: grid height in cells (default: 20)
//! - `SNAKE_TICK_MS`: tick period in milliseconds (default: 120)
//! - `SNAKE_INITIAL_LEN`: initial snake length (default: 5)
//! - `SNAKE_TILE_SIZE`: terminal columns per cell (default: 2)
//! - `SNAKE_SEED`: food RNG seed (default: random)
//!
//! Unparsable values fall back to the default.

use std::time::Duration;

use anyhow::{bail, Result};

use crate::types::{GRID_HEIGHT, GRID_WIDTH, INITIAL_SNAKE_LEN, TICK_MS, TILE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub tick_ms: u32,
    pub initial_len: u16,
    /// Terminal columns per grid cell. Cosmetic only.
    pub tile_size: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            tick_ms: TICK_MS,
            initial_len: INITIAL_SNAKE_LEN,
            tile_size: TILE_SIZE,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size.
    pub fn new(grid_width: u16, grid_height: u16) -> Self {
        Self {
            grid_width,
            grid_height,
            ..Default::default()
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            grid_width: parse_or(&lookup, "SNAKE_GRID_WIDTH", d.grid_width),
            grid_height: parse_or(&lookup, "SNAKE_GRID_HEIGHT", d.grid_height),
            tick_ms: parse_or(&lookup, "SNAKE_TICK_MS", d.tick_ms),
            initial_len: parse_or(&lookup, "SNAKE_INITIAL_LEN", d.initial_len),
            tile_size: parse_or(&lookup, "SNAKE_TILE_SIZE", d.tile_size),
        }
    }

    /// Seed override from `SNAKE_SEED`, if set and numeric.
    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SNAKE_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }

    /// Reject configurations the game cannot start from.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            bail!(
                "grid must be at least 1x1 (got {}x{})",
                self.grid_width,
                self.grid_height
            );
        }
        if self.initial_len == 0 {
            bail!("initial snake length must be at least 1");
        }
        if self.initial_len > self.grid_width {
            bail!(
                "initial snake length {} does not fit in a grid {} cells wide",
                self.initial_len,
                self.grid_width
            );
        }
        if self.tick_ms == 0 {
            bail!("tick period must be non-zero");
        }
        if self.tile_size == 0 {
            bail!("tile size must be at least one column");
        }
        // The bordered field must fit in terminal (u16) coordinates.
        let frame_w = self.grid_width as u32 * self.tile_size as u32 + 2;
        let frame_h = self.grid_height as u32 + 2;
        if frame_w > u16::MAX as u32 || frame_h > u16::MAX as u32 {
            bail!(
                "grid {}x{} with tile size {} is too large to draw",
                self.grid_width,
                self.grid_height,
                self.tile_size
            );
        }
        Ok(())
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
