//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the puzzle rules: the grid model, the shape rotation
//! transform and the collision-checked placement algorithm.
//! It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same sequence of boards
//! - **Testable**: Unit tests beside every rule
//! - **Portable**: Drives both the full-screen and the line-prompt front-ends
//!
//! # Module Structure
//!
//! - [`shape`]: rotatable footprints stored as fixed 3x3 boolean matrices
//! - [`catalog`]: the five catalog shapes and the per-round [`ShapeSet`]
//! - [`grid`]: 6x6 grid with obstacles and all-or-nothing placement
//! - [`game`]: round state machine (`Active` → `Won`) and new-round handling
//! - [`rng`]: seedable LCG and obstacle generation
//! - [`config`]: environment-driven [`GameConfig`]
//! - [`error`]: [`PlaceError`] and [`GameError`]
//!
//! # Rules
//!
//! - A placement puts a shape's bounding-box top-left corner on the anchor cell
//! - Every covered cell must be on the grid and empty; obstacles and earlier
//!   placements block it
//! - A rejected placement leaves the grid untouched
//! - The round is won as soon as no cell is empty (obstacles count as covered)
//!
//! # Example
//!
//! ```
//! use tui_blockfill_core::{Game, GameConfig, Grid, GameError};
//! use tui_blockfill_types::{Coord, Direction, ShapeKind};
//!
//! let grid = Grid::new([Coord::new(0, 0), Coord::new(0, 1)]);
//! let mut game = Game::from_grid(grid, GameConfig::default(), 12345);
//!
//! // The bar would cover both obstacles
//! assert_eq!(game.place(ShapeKind::L, Coord::new(0, 0)), Err(GameError::Occupied));
//!
//! // One row down it fits
//! let placement = game.place(ShapeKind::L, Coord::new(1, 0)).unwrap();
//! assert_eq!(placement.cells.len(), 3);
//!
//! // Stand the bar up and drop it in the last column
//! game.rotate(ShapeKind::L, Direction::Right);
//! game.place(ShapeKind::L, Coord::new(3, 5)).unwrap();
//! assert!(!game.is_won());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use tui_blockfill_types as types;

// Re-export commonly used types for convenience
pub use catalog::ShapeSet;
pub use config::GameConfig;
pub use error::{GameError, PlaceError};
pub use game::Game;
pub use grid::{Footprint, Grid, Placement};
pub use rng::{random_obstacles, SimpleRng};
pub use shape::{Shape, ShapeToken};
pub use snapshot::{GameSnapshot, RoundStatus};
