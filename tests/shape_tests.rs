//! Shape tests - catalog footprints and the rotation transform

use tui_blockfill::core::{Shape, ShapeSet, ShapeToken};
use tui_blockfill::types::{ColorTag, Direction, ShapeKind};

fn matrix(rows: &[&[u8]]) -> Vec<Vec<bool>> {
    rows.iter()
        .map(|row| row.iter().map(|&v| v == 1).collect())
        .collect()
}

// ============== Catalog Tests ==============

#[test]
fn test_catalog_footprints() {
    assert_eq!(
        Shape::new(ShapeKind::T).to_matrix(),
        matrix(&[&[1, 1, 1], &[0, 1, 0]])
    );
    assert_eq!(
        Shape::new(ShapeKind::S).to_matrix(),
        matrix(&[&[1, 1], &[1, 1]])
    );
    assert_eq!(Shape::new(ShapeKind::L).to_matrix(), matrix(&[&[1, 1, 1]]));
    assert_eq!(Shape::new(ShapeKind::D).to_matrix(), matrix(&[&[1]]));
    assert_eq!(
        Shape::new(ShapeKind::Z).to_matrix(),
        matrix(&[&[1, 1, 0], &[0, 1, 1]])
    );
}

#[test]
fn test_catalog_colors_and_labels() {
    let expected = [
        (ShapeKind::T, 'T', ColorTag::Red),
        (ShapeKind::S, 'S', ColorTag::Green),
        (ShapeKind::L, 'L', ColorTag::Blue),
        (ShapeKind::D, 'D', ColorTag::Yellow),
        (ShapeKind::Z, 'Z', ColorTag::Magenta),
    ];
    for (kind, label, color) in expected {
        let shape = Shape::new(kind);
        assert_eq!(shape.label(), label);
        assert_eq!(shape.color(), color);
        assert!(shape.cell_count() > 0, "{:?} must not be empty", kind);
    }
}

#[test]
fn test_catalog_cell_counts() {
    let counts: Vec<usize> = ShapeSet::new().iter().map(|s| s.cell_count()).collect();
    assert_eq!(counts, vec![4, 4, 3, 1, 4]);
}

// ============== Rotation Tests ==============

#[test]
fn test_four_right_rotations_are_identity() {
    for kind in ShapeKind::ALL {
        let original = Shape::new(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape.rotate(Direction::Right);
        }
        assert_eq!(shape, original, "{:?} after 4x right", kind);
    }
}

#[test]
fn test_four_left_rotations_are_identity() {
    for kind in ShapeKind::ALL {
        let original = Shape::new(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape.rotate(Direction::Left);
        }
        assert_eq!(shape, original, "{:?} after 4x left", kind);
    }
}

#[test]
fn test_right_then_left_is_identity() {
    for kind in ShapeKind::ALL {
        let original = Shape::new(kind);

        let mut shape = original;
        shape.rotate(Direction::Right);
        shape.rotate(Direction::Left);
        assert_eq!(shape, original, "{:?} right+left", kind);

        let mut shape = original;
        shape.rotate(Direction::Left);
        shape.rotate(Direction::Right);
        assert_eq!(shape, original, "{:?} left+right", kind);
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in ShapeKind::ALL {
        let original = Shape::new(kind);
        for direction in [Direction::Left, Direction::Right] {
            let mut shape = original;
            shape.rotate(direction);
            assert_eq!(shape.width(), original.height());
            assert_eq!(shape.height(), original.width());
            assert_eq!(shape.cell_count(), original.cell_count());
        }
    }
}

#[test]
fn test_rotation_formula_right() {
    // new(i, j) == old(h - 1 - j, i)
    for kind in ShapeKind::ALL {
        let old = Shape::new(kind);
        let mut new = old;
        new.rotate(Direction::Right);
        for i in 0..new.height() {
            for j in 0..new.width() {
                assert_eq!(new.get(i, j), old.get(old.height() - 1 - j, i));
            }
        }
    }
}

#[test]
fn test_rotation_formula_left() {
    // new(i, j) == old(j, w - 1 - i)
    for kind in ShapeKind::ALL {
        let old = Shape::new(kind);
        let mut new = old;
        new.rotate(Direction::Left);
        for i in 0..new.height() {
            for j in 0..new.width() {
                assert_eq!(new.get(i, j), old.get(j, old.width() - 1 - i));
            }
        }
    }
}

#[test]
fn test_z_rotations() {
    let mut z = Shape::new(ShapeKind::Z);
    z.rotate(Direction::Right);
    assert_eq!(z.to_matrix(), matrix(&[&[0, 1], &[1, 1], &[1, 0]]));

    let mut z = Shape::new(ShapeKind::Z);
    z.rotate(Direction::Left);
    assert_eq!(z.to_matrix(), matrix(&[&[0, 1], &[1, 1], &[1, 0]]));

    // Half turn of a Z is itself
    z.rotate(Direction::Left);
    assert_eq!(z, Shape::new(ShapeKind::Z));
}

#[test]
fn test_square_and_dot_are_rotation_invariant() {
    for kind in [ShapeKind::S, ShapeKind::D] {
        let mut shape = Shape::new(kind);
        shape.rotate(Direction::Right);
        assert_eq!(shape, Shape::new(kind));
    }
}

// ============== Render Tests ==============

#[test]
fn test_rows_follow_rotation() {
    let mut l = Shape::new(ShapeKind::L);
    l.rotate(Direction::Left);
    let rows: Vec<Vec<ShapeToken>> = l.rows().map(|r| r.collect()).collect();
    let f = ShapeToken::Filled(ColorTag::Blue);
    assert_eq!(rows, vec![vec![f], vec![f], vec![f]]);
}
