// error.rs - Error types for board construction and cell access

use thiserror::Error;

/// Errors raised by the board and the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A board needs at least one row and one column.
    #[error("invalid board dimensions: {rows} rows x {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Direct cell access outside `[0, cols) x [0, rows)`.
    #[error("cell ({x}, {y}) is outside a {cols}x{rows} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },

    /// No preset pattern carries this name.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
