use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("no labels to vote on")]
    EmptyInput,

    #[error("k must be at least 1, got {0}")]
    InvalidK(usize),

    #[error("row {row} is invalid: {reason}")]
    InvalidRow { row: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
