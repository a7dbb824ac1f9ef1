//! Shape module - tile footprints and quarter-turn rotation
//!
//! A shape is a small rectangular boolean matrix (at most 3x3) stored row-major in a
//! fixed array, so shapes are `Copy` and rotation never allocates.
//! Cell (r, c) lives at index `r * width + c`.

use crate::catalog;
use crate::types::{ColorTag, Direction, ShapeKind, MAX_SHAPE_CELLS};

/// Display token for one cell of a shape's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeToken {
    Filled(ColorTag),
    Empty,
}

/// A rotatable tile footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    color: ColorTag,
    width: u8,
    height: u8,
    /// Row-major footprint; only the first `width * height` entries are meaningful
    cells: [bool; MAX_SHAPE_CELLS],
}

impl Shape {
    /// Fresh shape in its catalog orientation
    pub fn new(kind: ShapeKind) -> Self {
        let template = catalog::template(kind);
        let height = template.rows.len();
        let width = template.rows[0].len();
        debug_assert!(width * height <= MAX_SHAPE_CELLS);

        let mut cells = [false; MAX_SHAPE_CELLS];
        for (r, row) in template.rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r * width + c] = v == 1;
            }
        }

        Self {
            kind,
            color: template.color,
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Single-character label, e.g. 'T'
    pub fn label(&self) -> char {
        self.kind.label()
    }

    pub fn color(&self) -> ColorTag {
        self.color
    }

    /// Number of columns in the bounding box
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows in the bounding box
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether local cell (r, c) is part of the footprint.
    /// Returns false outside the bounding box.
    pub fn get(&self, r: u8, c: u8) -> bool {
        r < self.height && c < self.width && self.cells[self.index(r, c)]
    }

    #[inline(always)]
    fn index(&self, r: u8, c: u8) -> usize {
        (r as usize) * (self.width as usize) + (c as usize)
    }

    /// Number of cells the shape covers
    pub fn cell_count(&self) -> usize {
        self.footprint().count()
    }

    /// Local `(dr, dc)` offsets of covered cells, row-major
    pub fn footprint(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.height)
            .flat_map(move |r| (0..self.width).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.get(r, c))
    }

    /// Rotate a quarter turn in place.
    ///
    /// Right: new(i, j) = old(h - 1 - j, i). Left: new(i, j) = old(j, w - 1 - i).
    /// Width and height swap.
    pub fn rotate(&mut self, direction: Direction) {
        let (old_w, old_h) = (self.width, self.height);
        let (new_w, new_h) = (old_h, old_w);
        let mut next = [false; MAX_SHAPE_CELLS];

        for i in 0..new_h {
            for j in 0..new_w {
                let (r, c) = match direction {
                    Direction::Right => (old_h - 1 - j, i),
                    Direction::Left => (j, old_w - 1 - i),
                };
                next[(i as usize) * (new_w as usize) + (j as usize)] = self.get(r, c);
            }
        }

        self.cells = next;
        self.width = new_w;
        self.height = new_h;
    }

    /// Lazy view of the bounding box as display tokens, row by row.
    ///
    /// Pure function of the current orientation, so it can be iterated any number of times.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = ShapeToken> + '_> + '_ {
        (0..self.height).map(move |r| {
            (0..self.width).map(move |c| {
                if self.get(r, c) {
                    ShapeToken::Filled(self.color)
                } else {
                    ShapeToken::Empty
                }
            })
        })
    }

    /// Footprint as nested vectors, for tests and debugging
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        (0..self.height)
            .map(|r| (0..self.width).map(|c| self.get(r, c)).collect())
            .collect()
    }
}
