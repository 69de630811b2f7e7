// Common error types and display traits for the pooling core

/// Result type for pooling operations
pub type PoolResult<T> = Result<T, PoolError>;

/// Errors that can occur during pooling operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    InvalidCoordinates {
        row: usize,
        col: usize,
        max_row: usize,
        max_col: usize,
    },
    WindowOutOfBounds {
        origin_row: usize,
        origin_col: usize,
        window_size: usize,
        input_size: usize,
    },
    ConfigurationError(String),
}

impl std::fmt::Display for PoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolError::InvalidCoordinates {
                row,
                col,
                max_row,
                max_col,
            } => {
                write!(
                    f,
                    "Invalid coordinates ({}, {}), max is ({}, {})",
                    row, col, max_row, max_col
                )
            }
            PoolError::WindowOutOfBounds {
                origin_row,
                origin_col,
                window_size,
                input_size,
            } => {
                write!(
                    f,
                    "Window of size {} at origin ({}, {}) exceeds {}x{} input grid",
                    window_size, origin_row, origin_col, input_size, input_size
                )
            }
            PoolError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PoolError {}

/// Trait for displaying grid cells
pub trait CellDisplay {
    /// Get the display string for this cell
    fn display_cell(&self) -> String;

    /// Check if this cell holds a computed value (vs. the unset sentinel)
    fn is_filled(&self) -> bool;
}

/// Output cells: `None` is the unset sentinel, `Some` a computed maximum.
impl CellDisplay for Option<i32> {
    fn display_cell(&self) -> String {
        match self {
            Some(value) => format!("{:3}", value),
            None => "  -".to_string(),
        }
    }

    fn is_filled(&self) -> bool {
        self.is_some()
    }
}
