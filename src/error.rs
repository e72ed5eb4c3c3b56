//! Error types for the gridlab crate

use thiserror::Error;

/// Main error type for the gridlab crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("hyperparameter {name} = {value} is out of range (expected {expected})")]
    HyperparameterOutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("epsilon cannot be edited while the trainer is running (pause first)")]
    EpsilonLocked,

    #[error("grid dimensions {width}x{height} are invalid (both must be non-zero)")]
    EmptyGrid { width: usize, height: usize },

    #[error("layout has {got} rows but the grid height is {expected}")]
    LayoutRowCount { expected: usize, got: usize },

    #[error("layout row {row} has {got} cells but the grid width is {expected}")]
    LayoutRowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("start position ({x}, {y}) is outside the grid")]
    StartOutOfBounds { x: i32, y: i32 },

    #[error("start position ({x}, {y}) is a wall cell")]
    StartOnWall { x: i32, y: i32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
