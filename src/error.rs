//! Error types
//!
//! The calculation pipeline itself is infallible; errors only arise at the
//! input boundary and when writing exports.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    #[error("Unknown {kind}: '{value}'")]
    UnknownOption { kind: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for input handling and export
pub type CalcResult<T> = Result<T, CalcError>;

impl CalcError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    pub fn unknown(kind: &'static str, value: &str) -> Self {
        CalcError::UnknownOption {
            kind,
            value: value.to_string(),
        }
    }
}
