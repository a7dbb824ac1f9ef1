//! Grid tests - bounds, occupancy and all-or-nothing placement

use tui_blockfill::core::{Grid, PlaceError, Shape, SimpleRng};
use tui_blockfill::types::{
    CellState, Coord, Direction, ShapeKind, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH,
};

fn grid_with(obstacles: &[(i32, i32)]) -> Grid {
    Grid::new(obstacles.iter().copied().map(Coord::from))
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::empty();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);

    for row in 0..GRID_HEIGHT as i32 {
        for col in 0..GRID_WIDTH as i32 {
            let coord = Coord::new(row, col);
            assert!(grid.is_free(coord), "Cell {} should be free", coord);
            assert_eq!(grid.get(coord), Some(CellState::Empty));
        }
    }
    assert_eq!(grid.empty_count(), 36);
    assert!(!grid.is_filled());
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::empty();

    assert_eq!(grid.get(Coord::new(-1, 0)), None);
    assert_eq!(grid.get(Coord::new(0, -1)), None);
    assert_eq!(grid.get(Coord::new(GRID_HEIGHT as i32, 0)), None);
    assert_eq!(grid.get(Coord::new(0, GRID_WIDTH as i32)), None);
}

#[test]
fn test_obstacles_are_marked_and_deduplicated() {
    let grid = grid_with(&[(2, 3), (0, 0), (2, 3), (9, 9)]);

    assert_eq!(grid.obstacles(), &[Coord::new(0, 0), Coord::new(2, 3)]);
    assert_eq!(grid.get(Coord::new(0, 0)), Some(CellState::Obstacle));
    assert_eq!(grid.get(Coord::new(2, 3)), Some(CellState::Obstacle));
    assert_eq!(grid.empty_count(), 34);
}

// ============== Placement Tests ==============

#[test]
fn test_place_over_obstacle_is_occupied() {
    let mut grid = grid_with(&[(0, 0), (0, 1)]);
    let l = Shape::new(ShapeKind::L);

    assert_eq!(grid.place(Coord::new(0, 0), &l), Err(PlaceError::Occupied));
}

#[test]
fn test_place_fills_footprint() {
    let mut grid = grid_with(&[(0, 0), (0, 1)]);
    let l = Shape::new(ShapeKind::L);

    let placement = grid.place(Coord::new(1, 0), &l).unwrap();
    assert_eq!(placement.kind, ShapeKind::L);
    assert_eq!(placement.anchor, Coord::new(1, 0));
    assert_eq!(
        placement.cells.as_slice(),
        &[Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)]
    );

    for col in 0..3 {
        assert_eq!(
            grid.get(Coord::new(1, col)),
            Some(CellState::Filled(ShapeKind::L))
        );
    }
    assert_eq!(grid.get(Coord::new(1, 3)), Some(CellState::Empty));
    assert_eq!(grid.filled_count(), 3);
}

#[test]
fn test_place_past_bottom_edge_is_out_of_bounds() {
    let mut grid = Grid::empty();
    let d = Shape::new(ShapeKind::D);

    assert_eq!(grid.place(Coord::new(6, 0), &d), Err(PlaceError::OutOfBounds));
    assert_eq!(grid.place(Coord::new(0, 6), &d), Err(PlaceError::OutOfBounds));
    assert_eq!(grid.place(Coord::new(-1, 0), &d), Err(PlaceError::OutOfBounds));
}

#[test]
fn test_place_partially_off_grid_is_out_of_bounds() {
    let mut grid = Grid::empty();
    let l = Shape::new(ShapeKind::L);

    // Cells (0,4) and (0,5) fit, (0,6) does not
    assert_eq!(grid.place(Coord::new(0, 4), &l), Err(PlaceError::OutOfBounds));
    assert_eq!(grid.empty_count(), 36);
}

#[test]
fn test_place_on_filled_cell_is_occupied() {
    let mut grid = Grid::empty();
    let d = Shape::new(ShapeKind::D);

    grid.place(Coord::new(3, 3), &d).unwrap();
    assert_eq!(grid.place(Coord::new(3, 3), &d), Err(PlaceError::Occupied));
}

#[test]
fn test_extreme_anchor_does_not_overflow() {
    let mut grid = Grid::empty();
    let s = Shape::new(ShapeKind::S);

    assert_eq!(
        grid.place(Coord::new(i32::MAX, i32::MAX), &s),
        Err(PlaceError::OutOfBounds)
    );
    assert_eq!(
        grid.place(Coord::new(i32::MIN, 0), &s),
        Err(PlaceError::OutOfBounds)
    );
}

#[test]
fn test_first_violation_wins() {
    // T at (0,4): (0,4) is an obstacle, (0,6) is off the grid.
    // Row-major footprint order reaches the obstacle first.
    let mut grid = grid_with(&[(0, 4)]);
    let t = Shape::new(ShapeKind::T);
    assert_eq!(grid.place(Coord::new(0, 4), &t), Err(PlaceError::Occupied));

    // T at (0,3) with an obstacle under the stem: bounds are fine, (1,4) is taken
    let mut grid = grid_with(&[(1, 4)]);
    assert_eq!(grid.place(Coord::new(0, 3), &t), Err(PlaceError::Occupied));

    // Edge reached before any obstacle
    let mut grid = grid_with(&[(1, 5)]);
    assert_eq!(grid.place(Coord::new(0, 5), &t), Err(PlaceError::OutOfBounds));
}

#[test]
fn test_failed_place_leaves_grid_unchanged() {
    let mut grid = grid_with(&[(2, 2)]);
    let d = Shape::new(ShapeKind::D);
    grid.place(Coord::new(5, 5), &d).unwrap();
    let before = grid.clone();

    let z = Shape::new(ShapeKind::Z);
    // (1,1) and (1,2) are free, (2,2) is the obstacle
    assert_eq!(grid.place(Coord::new(1, 1), &z), Err(PlaceError::Occupied));
    assert_eq!(grid, before);

    let s = Shape::new(ShapeKind::S);
    assert_eq!(grid.place(Coord::new(5, 4), &s), Err(PlaceError::OutOfBounds));
    assert_eq!(grid, before);
}

#[test]
fn test_check_matches_place_without_mutation() {
    let grid = grid_with(&[(0, 0)]);
    let mut t = Shape::new(ShapeKind::T);
    t.rotate(Direction::Right);

    let checked = grid.check(Coord::new(1, 0), &t).unwrap();
    assert_eq!(grid.empty_count(), 35);

    let mut placed_grid = grid.clone();
    let placed = placed_grid.place(Coord::new(1, 0), &t).unwrap();
    assert_eq!(checked, placed);
}

#[test]
fn test_rotated_footprint_is_placed() {
    let mut grid = Grid::empty();
    let mut l = Shape::new(ShapeKind::L);
    l.rotate(Direction::Right);

    grid.place(Coord::new(3, 5), &l).unwrap();
    for row in 3..6 {
        assert_eq!(
            grid.get(Coord::new(row, 5)),
            Some(CellState::Filled(ShapeKind::L))
        );
    }
}

// ============== Fill / Reset Tests ==============

#[test]
fn test_is_filled_counts_obstacles_as_covered() {
    let obstacles = [(0, 0), (2, 4), (5, 5)];
    let mut grid = grid_with(&obstacles);
    let d = Shape::new(ShapeKind::D);

    for row in 0..GRID_HEIGHT as i32 {
        for col in 0..GRID_WIDTH as i32 {
            let coord = Coord::new(row, col);
            if grid.is_free(coord) {
                assert!(!grid.is_filled());
                grid.place(coord, &d).unwrap();
            }
        }
    }

    assert!(grid.is_filled());
    assert_eq!(grid.empty_count(), 0);
    assert_eq!(grid.filled_count(), 33);
}

#[test]
fn test_reset_replaces_obstacles_and_clears_fills() {
    let mut grid = grid_with(&[(0, 0)]);
    grid.place(Coord::new(4, 4), &Shape::new(ShapeKind::S)).unwrap();

    grid.reset([Coord::new(3, 3)]);

    assert_eq!(grid.obstacles(), &[Coord::new(3, 3)]);
    assert_eq!(grid.get(Coord::new(0, 0)), Some(CellState::Empty));
    assert_eq!(grid.get(Coord::new(4, 4)), Some(CellState::Empty));
    assert_eq!(grid.filled_count(), 0);
    assert_eq!(grid.empty_count(), 35);
}

#[test]
fn test_to_array_is_row_major() {
    let mut grid = grid_with(&[(1, 2)]);
    grid.place(Coord::new(4, 0), &Shape::new(ShapeKind::D)).unwrap();

    let board = grid.to_array();
    assert_eq!(board[1][2], CellState::Obstacle);
    assert_eq!(board[4][0], CellState::Filled(ShapeKind::D));
    assert_eq!(board[0][4], CellState::Empty);
}

// ============== Randomized Placement Tests ==============

fn random_shape(rng: &mut SimpleRng) -> Shape {
    let mut shape = Shape::new(ShapeKind::ALL[rng.next_range(5) as usize]);
    for _ in 0..rng.next_range(4) {
        let direction = if rng.next_range(2) == 0 {
            Direction::Left
        } else {
            Direction::Right
        };
        shape.rotate(direction);
    }
    shape
}

#[test]
fn test_random_placements_touch_only_footprint() {
    let mut rng = SimpleRng::new(4242);

    for _ in 0..500 {
        let obstacles: Vec<Coord> = (0..rng.next_inclusive(0, 12))
            .map(|_| Coord::new(rng.next_range(6) as i32, rng.next_range(6) as i32))
            .collect();
        let mut grid = Grid::new(obstacles.iter().copied());

        for _ in 0..30 {
            let shape = random_shape(&mut rng);
            // Anchors reach one cell past every edge
            let anchor = Coord::new(
                rng.next_range(8) as i32 - 1,
                rng.next_range(8) as i32 - 1,
            );
            let before = grid.clone();

            match grid.place(anchor, &shape) {
                Ok(placement) => {
                    let expected: Vec<Coord> = shape
                        .footprint()
                        .map(|(dr, dc)| Coord::new(anchor.row + dr as i32, anchor.col + dc as i32))
                        .collect();
                    assert_eq!(placement.cells.as_slice(), expected.as_slice());

                    for row in 0..GRID_HEIGHT as i32 {
                        for col in 0..GRID_WIDTH as i32 {
                            let coord = Coord::new(row, col);
                            if expected.contains(&coord) {
                                assert_eq!(before.get(coord), Some(CellState::Empty));
                                assert_eq!(grid.get(coord), Some(CellState::Filled(shape.kind())));
                            } else {
                                assert_eq!(grid.get(coord), before.get(coord), "cell {}", coord);
                            }
                        }
                    }
                }
                Err(_) => assert_eq!(grid, before),
            }

            for &coord in &obstacles {
                assert_eq!(grid.get(coord), Some(CellState::Obstacle));
            }
            assert_eq!(grid.cells().len(), GRID_SIZE);
            assert_eq!(grid.is_filled(), !grid.cells().contains(&CellState::Empty));
        }
    }
}
