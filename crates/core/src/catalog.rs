//! Catalog module - the fixed set of shapes offered each round
//!
//! Templates are immutable; every round works on fresh [`Shape`] copies held in a
//! [`ShapeSet`], so rotations never leak from one round into the next unless the
//! caller asks for it.

use crate::shape::Shape;
use crate::types::{ColorTag, ShapeKind};

/// Catalog entry: footprint rows (1 = covered) and display color
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub rows: &'static [&'static [u8]],
    pub color: ColorTag,
}

const T_TEMPLATE: Template = Template {
    rows: &[&[1, 1, 1], &[0, 1, 0]],
    color: ColorTag::Red,
};

const S_TEMPLATE: Template = Template {
    rows: &[&[1, 1], &[1, 1]],
    color: ColorTag::Green,
};

const L_TEMPLATE: Template = Template {
    rows: &[&[1, 1, 1]],
    color: ColorTag::Blue,
};

const D_TEMPLATE: Template = Template {
    rows: &[&[1]],
    color: ColorTag::Yellow,
};

const Z_TEMPLATE: Template = Template {
    rows: &[&[1, 1, 0], &[0, 1, 1]],
    color: ColorTag::Magenta,
};

/// Get the catalog template for a shape kind
pub fn template(kind: ShapeKind) -> &'static Template {
    match kind {
        ShapeKind::T => &T_TEMPLATE,
        ShapeKind::S => &S_TEMPLATE,
        ShapeKind::L => &L_TEMPLATE,
        ShapeKind::D => &D_TEMPLATE,
        ShapeKind::Z => &Z_TEMPLATE,
    }
}

/// One live instance of every catalog shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSet {
    shapes: [Shape; 5],
}

impl ShapeSet {
    pub fn new() -> Self {
        Self {
            shapes: ShapeKind::ALL.map(Shape::new),
        }
    }

    pub fn get(&self, kind: ShapeKind) -> &Shape {
        &self.shapes[kind.index()]
    }

    pub fn get_mut(&mut self, kind: ShapeKind) -> &mut Shape {
        &mut self.shapes[kind.index()]
    }

    /// Shapes in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Restore every shape to its catalog orientation
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn as_array(&self) -> &[Shape; 5] {
        &self.shapes
    }
}

impl Default for ShapeSet {
    fn default() -> Self {
        Self::new()
    }
}
