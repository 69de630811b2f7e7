// Grid module - storage, cursor state machine, and the pooling reduction
// Each piece is pure and headless; rendering lives in the display module.

pub mod cursor;
pub mod pooling;
pub mod store;
pub mod traits;

// Re-export the main grid types for easy access
pub use cursor::{NavDirection, PoolCursor};
pub use pooling::{compute_max, PoolComputation};
pub use store::GridStore;
pub use traits::{CellDisplay, PoolError, PoolResult};

// Re-export common types used by all grid pieces
pub use crate::config::PoolConfig;
