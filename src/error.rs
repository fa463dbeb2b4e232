//! Error types for the shift tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the tracker, its storage and its HTTP surface
//! can report.

use thiserror::Error;

/// The main error type for the shift tracker.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_tracker::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tracker.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tracker.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The underlying persistence layer failed to read or write.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// No shift (stored or pending) exists with the given id.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The id that was looked up.
        shift_id: String,
    },

    /// User-supplied input was rejected before any calculation ran.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A shift-ended notification could not be delivered.
    #[error("Notification failed: {message}")]
    Notification {
        /// A description of the delivery failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for a [`EngineError::Storage`] built from any displayable cause.
    pub fn storage(cause: impl std::fmt::Display) -> Self {
        EngineError::Storage {
            message: cause.to_string(),
        }
    }

    /// Shorthand for a [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
