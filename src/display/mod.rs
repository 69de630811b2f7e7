// Display module for grid formatting and visualization
pub mod formatters;

// Re-export main functions
pub use formatters::{
    write_column_headers, write_computation, write_input_grid, write_output_grid,
};
