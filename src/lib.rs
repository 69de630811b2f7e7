// Pool-Grid: interactive max-pooling grid visualization
// The computational core (grids, cursor, windowed max-reduction) is pure and
// headless; terminal rendering lives in the display module and the demo bins.

// Modular structure
pub mod config;
pub mod display;
pub mod grid;
pub mod session;

// Re-export main types for convenience
pub use config::PoolConfig;
pub use grid::{
    compute_max, CellDisplay, GridStore, NavDirection, PoolComputation, PoolCursor, PoolError,
    PoolResult,
};
pub use session::PoolSession;

// Default demo geometry: an 8x8 input pooled by a 2x2 window (stride 2)
// collapses to a 4x4 output.
pub const DEFAULT_INPUT_SIZE: usize = 8;
pub const DEFAULT_WINDOW_SIZE: usize = 2;

// Default inclusive value range for generated input cells.
pub const DEFAULT_VALUE_MIN: i32 = 1;
pub const DEFAULT_VALUE_MAX: i32 = 20;
