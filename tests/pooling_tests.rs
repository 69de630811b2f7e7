//! Tests for the windowed max-reduction
use pool_grid::{compute_max, PoolCursor, PoolError};

fn grid_from(rows: &[&[i32]]) -> Vec<Vec<i32>> {
    rows.iter().map(|r| r.to_vec()).collect()
}

/// 8x8 grid whose top-left 2x2 window is [[3,7],[7,2]]; everything else 0
fn scenario_grid() -> Vec<Vec<i32>> {
    let mut grid = vec![vec![0i32; 8]; 8];
    grid[0][0] = 3;
    grid[0][1] = 7;
    grid[1][0] = 7;
    grid[1][1] = 2;
    grid
}

#[test]
fn test_tie_break_reports_first_in_row_major_order() {
    let grid = scenario_grid();
    let cursor = PoolCursor::new(4);

    let computation = compute_max(&grid, &cursor, 2, 2).unwrap();
    assert_eq!(computation.max_value, 7);
    // Two 7s tie; the (0,1) one is scanned first in row-major order
    assert_eq!(computation.max_position, (0, 1));
    assert_eq!(computation.values, vec![3, 7, 7, 2]);
    assert_eq!(computation.origin, (0, 0));
    assert_eq!(computation.output_cell, (0, 0));
}

#[test]
fn test_all_equal_window_reports_origin() {
    let grid = grid_from(&[&[5, 5], &[5, 5]]);
    let cursor = PoolCursor::new(1);

    let computation = compute_max(&grid, &cursor, 2, 2).unwrap();
    assert_eq!(computation.max_value, 5);
    assert_eq!(computation.max_position, (0, 0));
}

#[test]
fn test_exact_max_over_distinct_values() {
    let grid = grid_from(&[
        &[1, 2, 9, 4],
        &[5, 6, 7, 8],
        &[13, 10, 11, 12],
        &[3, 14, 15, 16],
    ]);
    let mut cursor = PoolCursor::new(2);

    let top_left = compute_max(&grid, &cursor, 2, 2).unwrap();
    assert_eq!(top_left.max_value, 6);
    assert_eq!(top_left.max_position, (1, 1));

    assert!(cursor.move_by((0, 1)));
    let top_right = compute_max(&grid, &cursor, 2, 2).unwrap();
    assert_eq!(top_right.max_value, 9);
    assert_eq!(top_right.max_position, (0, 2));
    assert_eq!(top_right.origin, (0, 2));
    assert_eq!(top_right.values, vec![9, 4, 7, 8]);

    assert!(cursor.move_by((1, 0)));
    let bottom_right = compute_max(&grid, &cursor, 2, 2).unwrap();
    assert_eq!(bottom_right.max_value, 16);
    assert_eq!(bottom_right.max_position, (3, 3));
}

#[test]
fn test_negative_values() {
    let grid = grid_from(&[&[-9, -2], &[-5, -7]]);
    let cursor = PoolCursor::new(1);

    let computation = compute_max(&grid, &cursor, 2, 2).unwrap();
    assert_eq!(computation.max_value, -2);
    assert_eq!(computation.max_position, (0, 1));
}

#[test]
fn test_idempotent_for_unchanged_state() {
    let grid = scenario_grid();
    let cursor = PoolCursor::new(4);

    let first = compute_max(&grid, &cursor, 2, 2).unwrap();
    let second = compute_max(&grid, &cursor, 2, 2).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_window_exceeding_input_is_an_error() {
    let grid = scenario_grid(); // 8x8
    let mut cursor = PoolCursor::new(5); // wider bounds than 8/2 allows
    for _ in 0..4 {
        assert!(cursor.move_by((1, 1)));
    }
    // origin (8, 8) with a 2x2 window lies outside the 8x8 input
    let result = compute_max(&grid, &cursor, 2, 2);
    assert!(matches!(result, Err(PoolError::WindowOutOfBounds { .. })));
}

#[test]
fn test_window_size_one_is_identity() {
    let grid = grid_from(&[&[4, 8], &[1, 6]]);
    let mut cursor = PoolCursor::new(2);
    assert!(cursor.move_by((1, 1)));

    let computation = compute_max(&grid, &cursor, 1, 1).unwrap();
    assert_eq!(computation.max_value, 6);
    assert_eq!(computation.max_position, (1, 1));
    assert_eq!(computation.values, vec![6]);
}
