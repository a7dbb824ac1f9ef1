use crate::catalog::ShapeSet;
use crate::shape::Shape;
use crate::types::{CellState, ShapeKind, GRID_HEIGHT, GRID_WIDTH};

/// Round progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundStatus {
    /// Accepting placements
    #[default]
    Active,
    /// Every cell is covered; terminal for this round
    Won,
}

/// Plain-data copy of everything a front-end needs to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[CellState; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub shapes: [Shape; 5],
    pub status: RoundStatus,
    pub round: u32,
    pub placements: u32,
    pub obstacle_count: u8,
    pub empty_count: u8,
}

impl GameSnapshot {
    pub fn shape(&self, kind: ShapeKind) -> &Shape {
        &self.shapes[kind.index()]
    }

    pub fn won(&self) -> bool {
        self.status == RoundStatus::Won
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[CellState::Empty; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            shapes: *ShapeSet::new().as_array(),
            status: RoundStatus::Active,
            round: 0,
            placements: 0,
            obstacle_count: 0,
            empty_count: GRID_WIDTH * GRID_HEIGHT,
        }
    }
}
