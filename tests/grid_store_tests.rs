//! Tests for the grid store
use pool_grid::{GridStore, PoolConfig, PoolError};

#[test]
fn test_generate_dimensions_and_range() {
    let grid = GridStore::generate(8, 1, 20);
    assert_eq!(grid.len(), 8);
    for row in &grid {
        assert_eq!(row.len(), 8);
        for &value in row {
            assert!((1..=20).contains(&value), "value {} out of range", value);
        }
    }
}

#[test]
fn test_generate_degenerate_range() {
    let grid = GridStore::generate(3, 7, 7);
    assert!(grid.iter().flatten().all(|&v| v == 7));
}

#[test]
fn test_blank_output_is_fully_sentinel() {
    let output = GridStore::blank_output(4);
    assert_eq!(output.len(), 4);
    for row in &output {
        assert_eq!(row.len(), 4);
        assert!(row.iter().all(|cell| cell.is_none()));
    }
}

#[test]
fn test_new_builds_both_grids_from_config() {
    let config = PoolConfig::default();
    let store = GridStore::new(&config).unwrap();
    assert_eq!(store.input_size(), 8);
    assert_eq!(store.output_size(), 4);
    assert_eq!(store.filled_cells(), 0);
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = PoolConfig::new(8, 3, 1, 20); // 3 does not divide 8
    assert!(matches!(
        GridStore::new(&config),
        Err(PoolError::ConfigurationError(_))
    ));
}

#[test]
fn test_set_output_writes_in_bounds() {
    let config = PoolConfig::default();
    let mut store = GridStore::new(&config).unwrap();
    store.set_output(2, 3, 17).unwrap();
    assert_eq!(store.output()[2][3], Some(17));
    assert_eq!(store.filled_cells(), 1);
}

#[test]
fn test_set_output_rejects_out_of_bounds() {
    let config = PoolConfig::default();
    let mut store = GridStore::new(&config).unwrap();
    let result = store.set_output(4, 0, 1);
    assert_eq!(
        result,
        Err(PoolError::InvalidCoordinates {
            row: 4,
            col: 0,
            max_row: 3,
            max_col: 3,
        })
    );
}

#[test]
fn test_clear_output_keeps_input() {
    let config = PoolConfig::default();
    let mut store = GridStore::new(&config).unwrap();
    let input_before = store.input().clone();
    store.set_output(0, 0, 9).unwrap();
    store.set_output(1, 1, 12).unwrap();

    store.clear_output();
    assert_eq!(store.filled_cells(), 0);
    assert_eq!(store.input(), &input_before);
}

#[test]
fn test_randomize_replaces_input_and_blanks_output() {
    let config = PoolConfig::default();
    let mut store = GridStore::new(&config).unwrap();
    store.set_output(0, 0, 9).unwrap();

    store.randomize(&config);
    assert_eq!(store.input_size(), 8);
    assert_eq!(store.filled_cells(), 0);
    for &value in store.input().iter().flatten() {
        assert!((config.value_min..=config.value_max).contains(&value));
    }
}
