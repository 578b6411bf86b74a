//! RNG module - food placement
//!
//! Food goes to a uniformly random free cell. Placement first tries plain
//! rejection sampling; once that has missed [`MAX_SAMPLE_ATTEMPTS`] times in a
//! row (a crowded board) it enumerates the free cells and picks one of them.
//! Both paths are uniform over free cells, and the second one terminates even
//! when the board is completely full.
//!
//! The generator is a seeded PCG so tests and benches are reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::Cell;

/// Rejection-sampling misses tolerated before enumerating free cells.
pub const MAX_SAMPLE_ATTEMPTS: u32 = 64;

#[derive(Debug, Clone)]
pub struct FoodRng {
    rng: Pcg32,
}

impl FoodRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// A uniformly random cell of a `width x height` grid.
    pub fn random_cell(&mut self, width: u16, height: u16) -> Cell {
        Cell::new(
            self.rng.random_range(0..width as i32),
            self.rng.random_range(0..height as i32),
        )
    }

    /// Pick a free cell, or `None` if every cell is occupied.
    pub fn place(
        &mut self,
        width: u16,
        height: u16,
        occupied: impl Fn(Cell) -> bool,
    ) -> Option<Cell> {
        if width == 0 || height == 0 {
            return None;
        }

        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let cell = self.random_cell(width, height);
            if !occupied(cell) {
                return Some(cell);
            }
        }

        log::debug!(
            "food placement: {} samples missed, enumerating free cells",
            MAX_SAMPLE_ATTEMPTS
        );
        let free: Vec<Cell> = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Cell::new(x, y)))
            .filter(|&c| !occupied(c))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.random_range(0..free.len())])
    }
}
