//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, line prompts).
//!
//! # Grid Dimensions
//!
//! The puzzle is played on a 6x6 grid:
//!
//! - **Width**: 6 columns (indexed 0-5)
//! - **Height**: 6 rows (indexed 0-5)
//! - **Coordinates**: `(row, col)`, row 0 at the top, col 0 at the left
//!
//! # Obstacles
//!
//! Every round draws between `MIN_OBSTACLES` and `MAX_OBSTACLES` random obstacle
//! coordinates (inclusive). Duplicates collapse onto the same cell, so the number of
//! blocked cells can be lower than the number drawn.
//!
//! # Examples
//!
//! ```
//! use tui_blockfill_types::{CellState, Coord, Direction, ShapeKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! // Parse a shape label (case-insensitive)
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(kind.label(), 'T');
//!
//! // Rotation directions
//! assert_eq!(Direction::from_str("r"), Some(Direction::Right));
//!
//! // Cells
//! assert!(CellState::Empty.is_empty());
//! assert!(!CellState::Filled(ShapeKind::Z).is_empty());
//!
//! // Grid dimensions
//! assert_eq!(GRID_WIDTH, 6);
//! assert_eq!(GRID_HEIGHT, 6);
//! assert!(Coord::new(5, 5).in_bounds());
//! assert!(!Coord::new(6, 0).in_bounds());
//! ```

use std::fmt;

/// Grid width in cells (6 columns)
pub const GRID_WIDTH: u8 = 6;

/// Grid height in cells (6 rows)
pub const GRID_HEIGHT: u8 = 6;

/// Total number of cells on the grid
pub const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Default lower bound for obstacles drawn per round
pub const MIN_OBSTACLES: u8 = 1;

/// Default upper bound for obstacles drawn per round
pub const MAX_OBSTACLES: u8 = 10;

/// Largest bounding box side of any catalog shape, in every rotation
pub const MAX_SHAPE_SIDE: u8 = 3;

/// Cell capacity of a shape's bounding box (3x3)
pub const MAX_SHAPE_CELLS: usize = (MAX_SHAPE_SIDE as usize) * (MAX_SHAPE_SIDE as usize);

/// Shape kinds offered to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// T-shaped tetromino
    T,
    /// 2x2 square
    S,
    /// 1x3 bar
    L,
    /// Single dot
    D,
    /// S/Z tetromino
    Z,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::L,
        ShapeKind::D,
        ShapeKind::Z,
    ];

    /// Parse shape kind from string (case-insensitive, surrounding whitespace ignored)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "l" => Some(ShapeKind::L),
            "d" => Some(ShapeKind::D),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Parse shape kind from its single-character label (case-insensitive)
    pub fn from_label(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'T' => Some(ShapeKind::T),
            'S' => Some(ShapeKind::S),
            'L' => Some(ShapeKind::L),
            'D' => Some(ShapeKind::D),
            'Z' => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Single-character label drawn on filled cells
    pub fn label(&self) -> char {
        match self {
            ShapeKind::T => 'T',
            ShapeKind::S => 'S',
            ShapeKind::L => 'L',
            ShapeKind::D => 'D',
            ShapeKind::Z => 'Z',
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::L => "l",
            ShapeKind::D => "d",
            ShapeKind::Z => "z",
        }
    }

    /// Position in [`ShapeKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::T => 0,
            ShapeKind::S => 1,
            ShapeKind::L => 2,
            ShapeKind::D => 3,
            ShapeKind::Z => 4,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Quarter-turn rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Counter-clockwise
    Left,
    /// Clockwise
    Right,
}

impl Direction {
    /// Parse from string ("l"/"left", "r"/"right", case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "l" | "left" => Some(Direction::Left),
            "r" | "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Display color attached to a shape.
///
/// Core logic never interprets it; front-ends map it to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
}

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    /// Permanently blocked for the round
    Obstacle,
    /// Covered by a placed shape
    Filled(ShapeKind),
}

impl CellState {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// Shape that filled this cell, if any
    pub fn shape(&self) -> Option<ShapeKind> {
        match self {
            CellState::Filled(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Grid coordinate as `(row, col)`.
///
/// Signed so that any integer a front-end parses can be handed to the core and
/// rejected as out of bounds rather than failing a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset by `(dr, dc)`; `None` on integer overflow
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(dr)?,
            col: self.col.checked_add(dc)?,
        })
    }

    /// Check if the coordinate lies on the 6x6 grid
    pub fn in_bounds(&self) -> bool {
        self.row >= 0
            && self.row < GRID_HEIGHT as i32
            && self.col >= 0
            && self.col < GRID_WIDTH as i32
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Player actions in the full-screen front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Select(ShapeKind),
    RotateLeft,
    RotateRight,
    Place,
    NewRound,
}

impl GameAction {
    /// Parse action from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "rotateleft" => Some(GameAction::RotateLeft),
            "rotateright" => Some(GameAction::RotateRight),
            "place" => Some(GameAction::Place),
            "newround" => Some(GameAction::NewRound),
            other => other
                .strip_prefix("select")
                .and_then(ShapeKind::from_str)
                .map(GameAction::Select),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Select(ShapeKind::T) => "selectT",
            GameAction::Select(ShapeKind::S) => "selectS",
            GameAction::Select(ShapeKind::L) => "selectL",
            GameAction::Select(ShapeKind::D) => "selectD",
            GameAction::Select(ShapeKind::Z) => "selectZ",
            GameAction::RotateLeft => "rotateLeft",
            GameAction::RotateRight => "rotateRight",
            GameAction::Place => "place",
            GameAction::NewRound => "newRound",
        }
    }
}
