//! Grid module - the 6x6 playing surface
//!
//! Each cell is Empty, an Obstacle, or Filled with the label of the shape that covers it.
//! Uses a flat array for cache locality and zero allocation on the placement path.
//! Coordinates: (row, col), row 0..5 top to bottom, col 0..5 left to right.

use arrayvec::ArrayVec;
use log::debug;

use crate::error::PlaceError;
use crate::shape::Shape;
use crate::types::{
    CellState, Coord, ShapeKind, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH, MAX_SHAPE_CELLS,
};

/// Absolute cells covered by a validated footprint
pub type Footprint = ArrayVec<Coord, MAX_SHAPE_CELLS>;

/// Outcome of a successful placement (or a successful dry run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub kind: ShapeKind,
    pub anchor: Coord,
    /// Cells covered, row-major in footprint order
    pub cells: Footprint,
}

/// The puzzle grid - 6 columns x 6 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [CellState; GRID_SIZE],
    /// Distinct in-bounds obstacle coordinates, sorted
    obstacles: Vec<Coord>,
}

impl Grid {
    /// Create a grid with the given obstacles.
    ///
    /// Out-of-bounds coordinates are ignored and duplicates collapse onto one cell.
    pub fn new(obstacles: impl IntoIterator<Item = Coord>) -> Self {
        let mut grid = Self {
            cells: [CellState::Empty; GRID_SIZE],
            obstacles: Vec::new(),
        };
        grid.apply_obstacles(obstacles);
        grid
    }

    /// Create a grid with no obstacles
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    fn apply_obstacles(&mut self, obstacles: impl IntoIterator<Item = Coord>) {
        for coord in obstacles {
            if let Some(idx) = Self::index(coord) {
                self.cells[idx] = CellState::Obstacle;
                self.obstacles.push(coord);
            }
        }
        self.obstacles.sort_unstable();
        self.obstacles.dedup();
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(coord: Coord) -> Option<usize> {
        if !coord.in_bounds() {
            return None;
        }
        Some((coord.row as usize) * (GRID_WIDTH as usize) + (coord.col as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at a coordinate.
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        Self::index(coord).map(|idx| self.cells[idx])
    }

    /// Check if a coordinate is on the grid and empty
    pub fn is_free(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(CellState::Empty))
    }

    /// Obstacle coordinates for this round, sorted and distinct
    pub fn obstacles(&self) -> &[Coord] {
        &self.obstacles
    }

    /// Validate a placement without mutating the grid.
    ///
    /// Walks the footprint row-major and stops at the first cell that is off the grid
    /// (`OutOfBounds`) or not empty (`Occupied`).
    pub fn check(&self, anchor: Coord, shape: &Shape) -> Result<Placement, PlaceError> {
        let mut cells = Footprint::new();

        for (dr, dc) in shape.footprint() {
            let coord = anchor
                .offset(dr as i32, dc as i32)
                .ok_or(PlaceError::OutOfBounds)?;
            match self.get(coord) {
                None => return Err(PlaceError::OutOfBounds),
                Some(CellState::Empty) => cells.push(coord),
                Some(_) => return Err(PlaceError::Occupied),
            }
        }

        Ok(Placement {
            kind: shape.kind(),
            anchor,
            cells,
        })
    }

    /// Place a shape with its bounding box's top-left corner at `anchor`.
    ///
    /// All or nothing: on error the grid is untouched; on success every footprint
    /// cell becomes `Filled(shape.kind())`.
    pub fn place(&mut self, anchor: Coord, shape: &Shape) -> Result<Placement, PlaceError> {
        // First validate the whole footprint
        let placement = match self.check(anchor, shape) {
            Ok(placement) => placement,
            Err(err) => {
                debug!(
                    "rejected {} at {}: {}",
                    shape.label(),
                    anchor,
                    err.code()
                );
                return Err(err);
            }
        };

        // Then commit all cells
        for &coord in &placement.cells {
            if let Some(idx) = Self::index(coord) {
                self.cells[idx] = CellState::Filled(placement.kind);
            }
        }

        debug!(
            "placed {} at {} ({} empty left)",
            shape.label(),
            anchor,
            self.empty_count()
        );
        Ok(placement)
    }

    /// True when no cell is Empty; obstacles count as covered
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, CellState::Filled(_)))
            .count()
    }

    /// Clear the grid for a new round with a fresh obstacle set
    pub fn reset(&mut self, obstacles: impl IntoIterator<Item = Coord>) {
        self.cells = [CellState::Empty; GRID_SIZE];
        self.obstacles.clear();
        self.apply_obstacles(obstacles);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Rows top to bottom, each a slice of `GRID_WIDTH` cells
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(GRID_WIDTH as usize)
    }

    /// Copy into a 2D array (row-major)
    pub fn to_array(&self) -> [[CellState; GRID_WIDTH as usize]; GRID_HEIGHT as usize] {
        let mut out = [[CellState::Empty; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}
