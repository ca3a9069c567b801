//! Grid tests - placement, movement and line clearing

use matrix_tetris::core::{Grid, Piece};
use matrix_tetris::types::{Direction, ShapeKind, Spin, COLS, GRID_HEIGHT, GRID_WIDTH, ROWS};

fn filled_count(grid: &Grid) -> usize {
    grid.cells().iter().filter(|&&c| c).count()
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);
    assert_eq!(grid.cleared_rows(), 0);

    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert_eq!(grid.get(x, y), Some(false), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_grid_out_of_bounds() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_WIDTH as i8, 0), None);
    assert_eq!(grid.get(0, GRID_HEIGHT as i8), None);

    assert!(!grid.set(-1, 0, true));
    assert!(!grid.set(0, GRID_HEIGHT as i8, true));
    assert!(grid.set(4, 6, true));
    assert!(grid.is_filled(4, 6));
}

#[test]
fn test_can_place_checks_only_in_bounds_cells() {
    let grid = Grid::from_rows(&["", "", "", "", "", "", "#...."]);

    // Hanging off the left edge: nothing filled underneath, but out of bounds.
    let off_edge = Piece::at(ShapeKind::I, 0, 3);
    assert!(grid.can_place(&off_edge));
    assert!(grid.collides_with_bounds(&off_edge));

    let on_block = Piece::at(ShapeKind::I, 1, 6);
    assert!(!grid.can_place(&on_block));
    assert!(!grid.collides_with_bounds(&on_block));
}

#[test]
fn test_spawn_displays_piece_at_anchor() {
    let mut grid = Grid::new();
    assert!(grid.try_spawn(ShapeKind::T));

    let bitmap = grid.bitmap();
    assert_eq!(bitmap[0], [true, true, true, false, false]);
    assert_eq!(bitmap[1], [false, true, false, false, false]);
    assert_eq!(filled_count(&grid), 4);
    assert_eq!(grid.active().kind, ShapeKind::T);
}

#[test]
fn test_spawn_keeps_previous_piece_as_locked_cells() {
    let mut grid = Grid::new();
    assert!(grid.try_spawn(ShapeKind::O));
    for _ in 0..5 {
        assert!(grid.try_move(Direction::Down));
    }
    assert!(!grid.try_move(Direction::Down));

    assert!(grid.try_spawn(ShapeKind::I));
    assert_eq!(filled_count(&grid), 8);
    assert!(grid.is_filled(1, 6) && grid.is_filled(2, 5));
}

#[test]
fn test_rejected_move_is_a_no_op() {
    let mut grid = Grid::new();
    grid.try_spawn(ShapeKind::I);
    let before = grid.clone();

    // The line spans x 0..=3, so it cannot go further left.
    assert!(!grid.try_move(Direction::Left));
    assert_eq!(grid, before);

    assert!(grid.try_move(Direction::Right));
    assert!(!grid.try_move(Direction::Right));
    assert_eq!(grid.active().x, 2);
}

#[test]
fn test_move_blocked_by_filled_cell() {
    let mut grid = Grid::from_rows(&["", "", "..#.."]);
    grid.try_spawn(ShapeKind::O);
    let before = grid.clone();

    // Square occupies rows 0..=1 at x 1..=2; (2, 2) is filled below it.
    assert!(!grid.try_move(Direction::Down));
    assert_eq!(grid, before);
}

#[test]
fn test_rejected_rotation_is_a_no_op() {
    let mut grid = Grid::new();
    grid.try_spawn(ShapeKind::I);
    let before = grid.clone();

    // Standing the line up at the top would reach above row 0.
    assert!(!grid.try_rotate(Spin::Clockwise));
    assert_eq!(grid, before);

    grid.try_move(Direction::Down);
    grid.try_move(Direction::Down);
    assert!(grid.try_rotate(Spin::Clockwise));
    assert_eq!(grid.bitmap().iter().filter(|row| row[1]).count(), 4);
}

#[test]
fn test_rotation_blocked_by_filled_cell() {
    let mut grid = Grid::new();
    grid.try_spawn(ShapeKind::T);
    grid.try_move(Direction::Down);
    grid.try_move(Direction::Down);

    // Turning the T about (1, 2) needs (1, 1).
    grid.set(1, 1, true);
    let before = grid.clone();
    assert!(!grid.try_rotate(Spin::Clockwise));
    assert_eq!(grid, before);

    grid.set(1, 1, false);
    assert!(grid.try_rotate(Spin::Clockwise));
    assert!(grid.is_filled(1, 1));
}

#[test]
fn test_single_full_row_shifts_rows_above() {
    let mut grid = Grid::from_rows(&["", "#....", ".#...", "#####", "..#..", "", ""]);
    let cleared = grid.check_and_clear_full_lines();

    assert_eq!(cleared.as_slice(), &[3]);
    assert_eq!(grid.cleared_rows(), 1);
    let bitmap = grid.bitmap();
    assert_eq!(bitmap[0], [false; COLS]);
    assert_eq!(bitmap[1], [false; COLS]);
    assert_eq!(bitmap[2], [true, false, false, false, false]);
    assert_eq!(bitmap[3], [false, true, false, false, false]);
    // Rows below the cleared one are untouched.
    assert_eq!(bitmap[4], [false, false, true, false, false]);
}

#[test]
fn test_two_separate_full_rows_cleared_in_one_call() {
    let mut grid = Grid::from_rows(&["", "", "#####", "#.#.#", "#####", "....#", ""]);
    let cleared = grid.check_and_clear_full_lines();

    assert_eq!(cleared.len(), 2);
    assert_eq!(grid.cleared_rows(), 2);
    let bitmap = grid.bitmap();
    assert_eq!(bitmap[4], [true, false, true, false, true]);
    assert_eq!(bitmap[5], [false, false, false, false, true]);
    assert!(bitmap[..4].iter().all(|row| row.iter().all(|&c| !c)));
}

#[test]
fn test_no_full_rows_leaves_grid_alone() {
    let mut grid = Grid::from_rows(&["", "", "", "", "", "####.", ".####"]);
    let before = grid.clone();
    assert!(grid.check_and_clear_full_lines().is_empty());
    assert_eq!(grid, before);
}

#[test]
fn test_counter_accumulates_until_reset() {
    let mut grid = Grid::from_rows(&["", "", "", "", "", "", "#####"]);
    grid.check_and_clear_full_lines();
    for x in 0..COLS as i8 {
        grid.set(x, (ROWS - 1) as i8, true);
    }
    grid.check_and_clear_full_lines();
    assert_eq!(grid.cleared_rows(), 2);

    grid.reset();
    assert_eq!(grid.cleared_rows(), 0);
    assert_eq!(filled_count(&grid), 0);
}
