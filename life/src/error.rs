// error.rs - Errors raised while building a game or touching its grid

use thiserror::Error;

/// Rejected startup configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error(
        "window size {window_size} is smaller than grid size {grid_size}, \
         cells would be 0 pixels wide"
    )]
    CellTooSmall { window_size: u32, grid_size: usize },

    #[error("evolution rate must be a positive number of evolutions per second, got {0}")]
    InvalidEvolutionRate(f64),

    #[error("frame rate must be a positive number of frames per second, got {0}")]
    InvalidFps(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}
