//! RNG module - obstacle generation
//!
//! Obstacles are drawn with a small seedable LCG so that a seed reproduces the same
//! sequence of boards (useful for tests and for sharing a puzzle).

use crate::config::GameConfig;
use crate::types::{Coord, GRID_HEIGHT, GRID_WIDTH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    /// Uses the high bits, which cycle far slower than the low bits of an LCG.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in the inclusive range [lo, hi]
    pub fn next_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_range(hi - lo + 1)
    }
}

/// Draw a round's obstacle coordinates.
///
/// The count is uniform over `[config.min_obstacles, config.max_obstacles]` and each
/// coordinate is uniform over the grid. Repeats are kept; the grid collapses them.
pub fn random_obstacles(rng: &mut SimpleRng, config: &GameConfig) -> Vec<Coord> {
    let count = rng.next_inclusive(config.min_obstacles as u32, config.max_obstacles as u32);
    (0..count)
        .map(|_| {
            let row = rng.next_range(GRID_HEIGHT as u32) as i32;
            let col = rng.next_range(GRID_WIDTH as u32) as i32;
            Coord::new(row, col)
        })
        .collect()
}
