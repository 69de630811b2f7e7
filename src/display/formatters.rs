// Display formatting utilities
// Renderers only consume the session's snapshot accessors; they never touch
// the core state directly. All lines end in \r\n so the same formatters work
// inside and outside raw mode.

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::Write;

use crate::grid::{CellDisplay, PoolComputation};

/// Print column headers for a grid
pub fn write_column_headers<W: Write>(w: &mut W, cols: usize) -> std::io::Result<()> {
    queue!(w, Print("    "))?;
    for col in 0..cols {
        queue!(w, Print(format!("{:3}", col)))?;
    }
    queue!(w, Print("\r\n"))
}

/// Print the input grid, highlighting the active pooling window when a
/// (window origin, window size) pair is supplied.
pub fn write_input_grid<W: Write>(
    w: &mut W,
    input: &[Vec<i32>],
    highlight: Option<((usize, usize), usize)>,
) -> std::io::Result<()> {
    write_column_headers(w, input.len())?;

    for (row, grid_row) in input.iter().enumerate() {
        queue!(w, Print(format!("{:2}: ", row)))?;
        for (col, value) in grid_row.iter().enumerate() {
            if in_highlight(row, col, highlight) {
                queue!(
                    w,
                    SetForegroundColor(Color::Yellow),
                    Print(format!("{:3}", value)),
                    ResetColor
                )?;
            } else {
                queue!(w, Print(format!("{:3}", value)))?;
            }
        }
        queue!(w, Print("\r\n"))?;
    }
    Ok(())
}

/// Print the output grid; unset cells show the sentinel dash, the cell at
/// the cursor is colored.
pub fn write_output_grid<W: Write>(
    w: &mut W,
    output: &[Vec<Option<i32>>],
    cursor: Option<(usize, usize)>,
) -> std::io::Result<()> {
    write_column_headers(w, output.len())?;

    for (row, grid_row) in output.iter().enumerate() {
        queue!(w, Print(format!("{:2}: ", row)))?;
        for (col, cell) in grid_row.iter().enumerate() {
            if cursor == Some((row, col)) {
                queue!(
                    w,
                    SetForegroundColor(Color::Green),
                    Print(cell.display_cell()),
                    ResetColor
                )?;
            } else {
                queue!(w, Print(cell.display_cell()))?;
            }
        }
        queue!(w, Print("\r\n"))?;
    }
    Ok(())
}

/// Print the calculation panel for the last computed window
pub fn write_computation<W: Write>(
    w: &mut W,
    computation: &PoolComputation,
    window_size: usize,
) -> std::io::Result<()> {
    let (out_row, out_col) = computation.output_cell;
    let (origin_row, origin_col) = computation.origin;
    let (max_row, max_col) = computation.max_position;
    let values: Vec<String> = computation.values.iter().map(|v| v.to_string()).collect();

    queue!(
        w,
        Print(format!("Position ({}, {}):\r\n", out_row, out_col)),
        Print(format!(
            "Input region: rows {}-{}, cols {}-{}\r\n",
            origin_row,
            origin_row + window_size - 1,
            origin_col,
            origin_col + window_size - 1
        )),
        Print(format!("Values: [{}]\r\n", values.join(", "))),
        SetForegroundColor(Color::Green),
        Print(format!(
            "Max Value: {} at position ({}, {})\r\n",
            computation.max_value, max_row, max_col
        )),
        ResetColor
    )
}

fn in_highlight(row: usize, col: usize, highlight: Option<((usize, usize), usize)>) -> bool {
    match highlight {
        Some(((origin_row, origin_col), size)) => {
            row >= origin_row && row < origin_row + size && col >= origin_col && col < origin_col + size
        }
        None => false,
    }
}
