// Grid store - owns the input grid and the incrementally-filled output grid
// The input is immutable between regenerations; the output is written one
// cell at a time as the pooling window visits it.

use crate::config::PoolConfig;
use crate::grid::traits::{PoolError, PoolResult};
use rand::Rng;

pub struct GridStore {
    input: Vec<Vec<i32>>,
    output: Vec<Vec<Option<i32>>>,
}

impl GridStore {
    /// Build a store from a validated configuration. Fails before any grid
    /// is stored if the configuration is malformed.
    pub fn new(config: &PoolConfig) -> PoolResult<Self> {
        config.validate()?;
        Ok(Self {
            input: Self::generate(config.input_size, config.value_min, config.value_max),
            output: Self::blank_output(config.output_size()),
        })
    }

    /// Generate an n x n grid of independent uniform-random integers in
    /// [value_min, value_max] inclusive.
    pub fn generate(n: usize, value_min: i32, value_max: i32) -> Vec<Vec<i32>> {
        let mut rng = rand::thread_rng();
        (0..n)
            .map(|_| (0..n).map(|_| rng.gen_range(value_min..=value_max)).collect())
            .collect()
    }

    /// An m x m output grid with every cell set to the unset sentinel
    pub fn blank_output(m: usize) -> Vec<Vec<Option<i32>>> {
        vec![vec![None; m]; m]
    }

    /// Write a computed maximum into the output grid
    pub fn set_output(&mut self, row: usize, col: usize, value: i32) -> PoolResult<()> {
        self.validate_output_coordinates(row, col)?;
        self.output[row][col] = Some(value);
        Ok(())
    }

    /// Replace the input grid wholesale and blank the output
    pub fn randomize(&mut self, config: &PoolConfig) {
        self.input = Self::generate(config.input_size, config.value_min, config.value_max);
        self.output = Self::blank_output(config.output_size());
    }

    /// Reset every output cell to the sentinel; the input is untouched
    pub fn clear_output(&mut self) {
        let m = self.output.len();
        self.output = Self::blank_output(m);
    }

    /// Number of output cells holding a computed value
    pub fn filled_cells(&self) -> usize {
        self.output
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    // Public getter methods for accessing private fields
    pub fn input(&self) -> &Vec<Vec<i32>> {
        &self.input
    }

    pub fn output(&self) -> &Vec<Vec<Option<i32>>> {
        &self.output
    }

    pub fn input_size(&self) -> usize {
        self.input.len()
    }

    pub fn output_size(&self) -> usize {
        self.output.len()
    }

    fn validate_output_coordinates(&self, row: usize, col: usize) -> PoolResult<()> {
        let m = self.output.len();
        if row >= m || col >= m {
            return Err(PoolError::InvalidCoordinates {
                row,
                col,
                max_row: m.saturating_sub(1),
                max_col: m.saturating_sub(1),
            });
        }
        Ok(())
    }
}
