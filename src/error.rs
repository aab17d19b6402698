// src/error.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid policy: password length must be at least 1 (got {length})")]
    InvalidPolicy { length: usize },

    #[error("Random source returned index {index} for an alphabet of {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Sequence source needs at least one index")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

// Errors raised by the command line front end
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
