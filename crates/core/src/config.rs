//! Game configuration, read from environment variables.
//!
//! - `BLOCKFILL_SEED`: obstacle RNG seed (default: derived from the clock by the caller)
//! - `BLOCKFILL_MIN_OBSTACLES` / `BLOCKFILL_MAX_OBSTACLES`: inclusive obstacle count range
//!   (default 1..=10)
//! - `BLOCKFILL_KEEP_ROTATION`: "1" or "true" to carry shape rotations into the next round

use std::env;

use crate::types::{GRID_SIZE, MAX_OBSTACLES, MIN_OBSTACLES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u32>,
    pub min_obstacles: u8,
    pub max_obstacles: u8,
    pub keep_rotation: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_obstacles: MIN_OBSTACLES,
            max_obstacles: MAX_OBSTACLES,
            keep_rotation: false,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults for unset or unparsable values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (used by `from_env` and tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFILL_SEED").and_then(|s| s.trim().parse().ok());

        let min_obstacles = lookup("BLOCKFILL_MIN_OBSTACLES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.min_obstacles);

        let max_obstacles = lookup("BLOCKFILL_MAX_OBSTACLES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_obstacles);

        let keep_rotation = lookup("BLOCKFILL_KEEP_ROTATION")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(defaults.keep_rotation);

        Self {
            seed,
            min_obstacles,
            max_obstacles,
            keep_rotation,
        }
        .normalized()
    }

    /// Clamp the obstacle range so that `min <= max <= GRID_SIZE`
    pub fn normalized(mut self) -> Self {
        let cap = GRID_SIZE.min(u8::MAX as usize) as u8;
        self.max_obstacles = self.max_obstacles.min(cap);
        self.min_obstacles = self.min_obstacles.min(self.max_obstacles);
        self
    }
}
