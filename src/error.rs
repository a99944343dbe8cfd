//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Malformed rows in the durable stores are deliberately not represented
//! here: a row that fails to parse is logged and skipped during scans, so
//! one corrupt line never aborts a report.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal and other non-store I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for caller-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Signup collision: a profile with this name is already registered
    #[error("Profile already exists: {0}")]
    AlreadyExists(String),

    /// Login rejected. Unknown user and wrong password are indistinguishable.
    #[error("Login failed: unknown user or wrong password")]
    AuthFailed,

    /// A caller-supplied date bound is not YYYY-MM-DD
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// A durable store could not be opened or rewritten
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl FintrackError {
    /// Create a storage failure carrying the store path and the underlying cause
    pub fn storage(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Self::StorageUnavailable(format!("{}: {}", path.display(), err))
    }

    /// Check if this is an auth failure
    pub fn is_auth_failed(&self) -> bool {
        matches!(self, Self::AuthFailed)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;
