//! Error types for erfcx

use thiserror::Error;

/// Main error type for erfcx operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("non-finite input: {0}")]
    NonFiniteInput(f64),

    #[error("invalid precision: {0}")]
    InvalidPrecision(String),

    #[error("unknown format: {0}")]
    UnknownFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for erfcx operations
pub type Result<T> = std::result::Result<T, Error>;
