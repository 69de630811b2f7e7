// Pooling demo configuration
use crate::grid::{PoolError, PoolResult};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PoolConfig {
    /// Side length of the square input grid
    pub input_size: usize,
    /// Side length of the pooling window; must divide input_size evenly
    pub window_size: usize,
    /// Inclusive lower bound for generated cell values
    pub value_min: i32,
    /// Inclusive upper bound for generated cell values
    pub value_max: i32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            input_size: crate::DEFAULT_INPUT_SIZE,
            window_size: crate::DEFAULT_WINDOW_SIZE,
            value_min: crate::DEFAULT_VALUE_MIN,
            value_max: crate::DEFAULT_VALUE_MAX,
        }
    }
}

impl PoolConfig {
    pub fn new(input_size: usize, window_size: usize, value_min: i32, value_max: i32) -> Self {
        Self {
            input_size,
            window_size,
            value_min,
            value_max,
        }
    }

    /// Side length of the output grid (non-overlapping pooling)
    pub fn output_size(&self) -> usize {
        self.input_size / self.window_size
    }

    /// Distance between successive window origins; equal to the window size
    pub fn stride(&self) -> usize {
        self.window_size
    }

    pub fn cell_count(&self) -> usize {
        self.input_size * self.input_size
    }

    /// Validate the configuration before any grid is built.
    /// Construction either fully succeeds or fails here; no partial state.
    pub fn validate(&self) -> PoolResult<()> {
        if self.input_size == 0 || self.window_size == 0 {
            return Err(PoolError::ConfigurationError(format!(
                "grid and window sizes must be non-zero (got {}x{} input, {}x{} window)",
                self.input_size, self.input_size, self.window_size, self.window_size
            )));
        }
        if self.input_size % self.window_size != 0 {
            return Err(PoolError::ConfigurationError(format!(
                "window size {} does not divide input size {} evenly",
                self.window_size, self.input_size
            )));
        }
        if self.value_min > self.value_max {
            return Err(PoolError::ConfigurationError(format!(
                "value range is inverted: {}..={}",
                self.value_min, self.value_max
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PoolResult<Self> {
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            PoolError::ConfigurationError(format!(
                "failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config: PoolConfig = serde_json::from_str(&contents)
            .map_err(|e| PoolError::ConfigurationError(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> PoolResult<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PoolError::ConfigurationError(format!("serialize failed: {}", e)))?;
        std::fs::write(&path, contents).map_err(|e| {
            PoolError::ConfigurationError(format!(
                "failed to write config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }
}
