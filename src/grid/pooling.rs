// Max-pooling reduction - reduce the window under the cursor to its maximum
// Scans in row-major order with a strict greater-than comparison, so when the
// maximum is duplicated the first-encountered position (smallest row, then
// smallest col) is the one reported.

use crate::grid::cursor::PoolCursor;
use crate::grid::traits::{PoolError, PoolResult};

/// The full result of reducing one window, kept for display and logging
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PoolComputation {
    /// The maximum value found in the window
    pub max_value: i32,
    /// Absolute (row, col) of that maximum in the input grid
    pub max_position: (usize, usize),
    /// Every scanned value, in row-major scan order
    pub values: Vec<i32>,
    /// Window origin in the input grid
    pub origin: (usize, usize),
    /// The output cell this result lands in (the cursor position)
    pub output_cell: (usize, usize),
}

/// Reduce the window addressed by `cursor` over `input` to its maximum.
/// Repeated calls with unchanged input and cursor return identical results.
pub fn compute_max(
    input: &[Vec<i32>],
    cursor: &PoolCursor,
    window_size: usize,
    stride: usize,
) -> PoolResult<PoolComputation> {
    let (start_row, start_col) = cursor.window_origin(stride);
    let input_size = input.len();

    // Unreachable while the cursor invariant holds, but checked so a bad
    // caller fails loudly instead of panicking on an index.
    if start_row + window_size > input_size || start_col + window_size > input_size {
        return Err(PoolError::WindowOutOfBounds {
            origin_row: start_row,
            origin_col: start_col,
            window_size,
            input_size,
        });
    }

    let mut max_value = i32::MIN;
    let mut max_position = (start_row, start_col);
    let mut values = Vec::with_capacity(window_size * window_size);

    for i in 0..window_size {
        for j in 0..window_size {
            let input_row = start_row + i;
            let input_col = start_col + j;
            let value = input[input_row][input_col];
            values.push(value);

            if value > max_value {
                max_value = value;
                max_position = (input_row, input_col);
            }
        }
    }

    Ok(PoolComputation {
        max_value,
        max_position,
        values,
        origin: (start_row, start_col),
        output_cell: cursor.position(),
    })
}
