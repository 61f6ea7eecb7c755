//! Error types for the fridge inventory.

use thiserror::Error;

/// Main error type for inventory operations.
#[derive(Debug, Error)]
pub enum FridgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed table: {0}")]
    Csv(String),

    #[error("Invalid table format: {0}")]
    InvalidFormat(String),

    #[error("Invalid date for {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDateFormat { field: String, value: String },

    #[error("Failed to replace table: {0}")]
    Persist(String),
}

impl From<csv::Error> for FridgeError {
    fn from(e: csv::Error) -> Self {
        if e.is_io_error() {
            match e.into_kind() {
                csv::ErrorKind::Io(io) => FridgeError::Io(io),
                other => FridgeError::Csv(format!("{:?}", other)),
            }
        } else {
            FridgeError::Csv(e.to_string())
        }
    }
}

impl From<tempfile::PersistError> for FridgeError {
    fn from(e: tempfile::PersistError) -> Self {
        FridgeError::Persist(e.error.to_string())
    }
}

/// Result type for inventory operations.
pub type Result<T> = std::result::Result<T, FridgeError>;
