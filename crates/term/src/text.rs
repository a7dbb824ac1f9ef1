//! Plain-text rendering for line-oriented terminals.
//!
//! Produces strings meant to be printed as-is: a numbered board and the shape tray,
//! optionally colored with ANSI escapes via `crossterm::style`.

use std::fmt::Write;

use crossterm::style::Stylize;

use crate::core::{GameSnapshot, Shape, ShapeToken};
use crate::palette;
use crate::types::{CellState, ColorTag, GRID_WIDTH};

pub const EMPTY_MARK: char = '-';
pub const OBSTACLE_MARK: char = 'o';
pub const SHAPE_MARK: char = '#';

/// Text rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Emit ANSI color escapes
    pub color: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { color: true }
    }
}

impl TextStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, out: &mut String, ch: char, tag: ColorTag) {
        if self.color {
            let _ = write!(out, "{}", ch.with(palette::ansi_color(tag)));
        } else {
            out.push(ch);
        }
    }

    /// The board with column numbers on top and row numbers on the left:
    ///
    /// ```text
    ///     0 1 2 3 4 5
    ///   ------------
    /// 0 | o - T T T -
    /// ```
    pub fn board(&self, snap: &GameSnapshot) -> String {
        let mut out = String::from("    ");
        for col in 0..GRID_WIDTH {
            let _ = write!(out, "{} ", col);
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
        out.push_str("  ");
        out.push_str(&"-".repeat(GRID_WIDTH as usize * 2 + 1));
        out.push('\n');

        for (row, cells) in snap.board.iter().enumerate() {
            let _ = write!(out, "{} |", row);
            for cell in cells {
                out.push(' ');
                match cell {
                    CellState::Empty => out.push(EMPTY_MARK),
                    CellState::Obstacle => out.push(OBSTACLE_MARK),
                    CellState::Filled(kind) => {
                        self.paint(&mut out, kind.label(), snap.shape(*kind).color())
                    }
                }
            }
            out.push('\n');
        }
        out
    }

    /// One shape's bounding box, `#` for covered cells and `-` for gaps
    pub fn shape(&self, shape: &Shape) -> String {
        let mut out = String::new();
        for row in shape.rows() {
            let mut first = true;
            for token in row {
                if !first {
                    out.push(' ');
                }
                first = false;
                match token {
                    ShapeToken::Filled(tag) => self.paint(&mut out, SHAPE_MARK, tag),
                    ShapeToken::Empty => out.push(EMPTY_MARK),
                }
            }
            out.push('\n');
        }
        out
    }

    /// Every shape in the snapshot, each under a `Shape: X` heading
    pub fn shapes(&self, snap: &GameSnapshot) -> String {
        let mut out = String::new();
        for shape in snap.shapes.iter() {
            let _ = writeln!(out, "Shape: {}", shape.label());
            out.push_str(&self.shape(shape));
        }
        out
    }
}
