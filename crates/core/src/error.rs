//! Error types for placement and input validation.
//!
//! Every error is recoverable and scoped to a single attempt: callers report
//! `message()` to the player and prompt again.

use std::fmt;

/// Why a footprint could not be placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Some footprint cell falls outside the grid
    OutOfBounds,
    /// Some footprint cell is an obstacle or already filled
    Occupied,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::OutOfBounds => "out_of_bounds",
            PlaceError::Occupied => "occupied",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::OutOfBounds => "shape would extend past the edge of the grid",
            PlaceError::Occupied => "shape would cover an obstacle or a filled cell",
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Any rejected player request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    UnknownShape,
    InvalidDirection,
    MalformedCoordinate,
    OutOfBounds,
    Occupied,
    /// The grid is already covered; start a new round first
    RoundOver,
}

impl GameError {
    pub fn code(self) -> &'static str {
        match self {
            GameError::UnknownShape => "unknown_shape",
            GameError::InvalidDirection => "invalid_direction",
            GameError::MalformedCoordinate => "malformed_coordinate",
            GameError::OutOfBounds => PlaceError::OutOfBounds.code(),
            GameError::Occupied => PlaceError::Occupied.code(),
            GameError::RoundOver => "round_over",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GameError::UnknownShape => "invalid shape selected, choose from T, S, L, D or Z",
            GameError::InvalidDirection => "invalid direction, enter L, R or an empty line",
            GameError::MalformedCoordinate => "coordinates must look like row,col (e.g. 0,0)",
            GameError::OutOfBounds => PlaceError::OutOfBounds.message(),
            GameError::Occupied => PlaceError::Occupied.message(),
            GameError::RoundOver => "the grid is already full, start a new round",
        }
    }

    /// Whether the error came from grid validation (as opposed to input parsing)
    pub fn is_placement(self) -> bool {
        matches!(self, GameError::OutOfBounds | GameError::Occupied)
    }
}

impl From<PlaceError> for GameError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::OutOfBounds => GameError::OutOfBounds,
            PlaceError::Occupied => GameError::Occupied,
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for GameError {}
