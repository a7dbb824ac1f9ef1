//! Game module - one puzzle round at a time
//!
//! `Game` owns the grid, this round's shape instances and the obstacle RNG.
//! A round is `Active` until a placement covers the last empty cell, then `Won`
//! until [`Game::new_round`] draws a fresh board.

use log::{debug, info};

use crate::catalog::ShapeSet;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::grid::{Grid, Placement};
use crate::rng::{random_obstacles, SimpleRng};
use crate::shape::Shape;
use crate::snapshot::{GameSnapshot, RoundStatus};
use crate::types::{Coord, Direction, ShapeKind};

#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    shapes: ShapeSet,
    rng: SimpleRng,
    config: GameConfig,
    status: RoundStatus,
    round: u32,
    placements: u32,
}

impl Game {
    /// Start round 1 with default config and the given obstacle seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Start round 1 with a random board drawn from `seed`
    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        let config = config.normalized();
        let mut rng = SimpleRng::new(seed);
        let grid = Grid::new(random_obstacles(&mut rng, &config));
        Self::start(grid, rng, config)
    }

    /// Start round 1 on a prepared grid. Later rounds draw from `seed`.
    pub fn from_grid(grid: Grid, config: GameConfig, seed: u32) -> Self {
        Self::start(grid, SimpleRng::new(seed), config.normalized())
    }

    fn start(grid: Grid, rng: SimpleRng, config: GameConfig) -> Self {
        let mut game = Self {
            grid,
            shapes: ShapeSet::new(),
            rng,
            config,
            status: RoundStatus::Active,
            round: 1,
            placements: 0,
        };
        game.update_status();
        info!(
            "round {} started with {} obstacles",
            game.round,
            game.grid.obstacles().len()
        );
        game
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn shapes(&self) -> &ShapeSet {
        &self.shapes
    }

    pub fn shape(&self, kind: ShapeKind) -> &Shape {
        self.shapes.get(kind)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    /// 1-based round number
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Successful placements this round
    pub fn placements(&self) -> u32 {
        self.placements
    }

    /// Rotate this round's instance of `kind` a quarter turn
    pub fn rotate(&mut self, kind: ShapeKind, direction: Direction) {
        self.shapes.get_mut(kind).rotate(direction);
        debug!("rotated {} {}", kind, direction.as_str());
    }

    /// Check a placement without committing it
    pub fn preview(&self, kind: ShapeKind, anchor: Coord) -> Result<Placement, GameError> {
        if self.is_won() {
            return Err(GameError::RoundOver);
        }
        Ok(self.grid.check(anchor, self.shapes.get(kind))?)
    }

    /// Place this round's instance of `kind` with its top-left corner at `anchor`
    pub fn place(&mut self, kind: ShapeKind, anchor: Coord) -> Result<Placement, GameError> {
        if self.is_won() {
            return Err(GameError::RoundOver);
        }

        let placement = self.grid.place(anchor, self.shapes.get(kind))?;
        self.placements += 1;
        self.update_status();
        Ok(placement)
    }

    fn update_status(&mut self) {
        if self.status == RoundStatus::Active && self.grid.is_filled() {
            self.status = RoundStatus::Won;
            info!(
                "round {} won after {} placements",
                self.round, self.placements
            );
        }
    }

    /// Draw a fresh board and begin the next round.
    ///
    /// Shapes return to their catalog orientation unless `config.keep_rotation` is set.
    pub fn new_round(&mut self) {
        let obstacles = random_obstacles(&mut self.rng, &self.config);
        self.grid.reset(obstacles);
        if !self.config.keep_rotation {
            self.shapes.reset();
        }
        self.round += 1;
        self.placements = 0;
        self.status = RoundStatus::Active;
        info!(
            "round {} started with {} obstacles",
            self.round,
            self.grid.obstacles().len()
        );
        self.update_status();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.grid.to_array(),
            shapes: *self.shapes.as_array(),
            status: self.status,
            round: self.round,
            placements: self.placements,
            obstacle_count: self.grid.obstacles().len() as u8,
            empty_count: self.grid.empty_count() as u8,
        }
    }
}
