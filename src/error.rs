//! Custom error types for Monity
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant maps to a stable error code
//! so callers and scripts can match on `error[CODE]` output.

use thiserror::Error;

/// The main error type for Monity operations
#[derive(Error, Debug)]
pub enum MonityError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed input that never reached model validation (bad dates,
    /// amounts, colors, pagination bounds)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A row references an entity that does not exist, or is itself still
    /// referenced and cannot be removed
    #[error("{0}")]
    ForeignKey(String),

    /// A required value was missing or empty
    #[error("Missing required value: {0}")]
    MissingValue(String),

    /// Login failed. The message never reveals whether the email or the
    /// password was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// An operation that needs a logged-in user ran without one
    #[error("Not logged in. Run 'monity login' first")]
    Unauthorized,

    /// The stored session has passed its expiry
    #[error("Session expired. Run 'monity login' to start a new one")]
    SessionExpired,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MonityError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Stable machine-readable code for this error, printed as
    /// `error[CODE]: message` and matched on by scripts.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) | Self::Json(_) | Self::Storage(_) => "DATABASE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Duplicate { .. } => "DUPLICATE_ENTRY",
            Self::ForeignKey(_) => "FOREIGN_KEY_VIOLATION",
            Self::MissingValue(_) => "NOT_NULL_VIOLATION",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::Export(_) => "EXPORT_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an authentication failure (any variety)
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::Unauthorized | Self::SessionExpired
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for MonityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MonityError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Monity operations
pub type MonityResult<T> = Result<T, MonityError>;
