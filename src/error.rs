//! Error types for docstring generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    /// Signature with nothing before its first `(`
    #[error("malformed signature, no name before '(': {0:?}")]
    MalformedSignature(String),

    /// IR document that does not match the expected JSON shape
    #[error("invalid documentation IR: {0}")]
    InvalidIr(#[from] serde_json::Error),

    /// Link matcher that could not be built from the known class names
    #[error("invalid class name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Output sink failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DocError>;
