//! Custom error types for gastos
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The aggregation core never produces these;
//! they come from configuration, local storage, export and the remote store.

use thiserror::Error;

/// The main error type for gastos operations
#[derive(Error, Debug)]
pub enum GastosError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The remote store answered with a non-success status
    #[error("Remote store returned {status}: {message}")]
    Remote { status: u16, message: String },

    /// The remote store rejected the credential
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// Transport-level failure talking to the remote store
    #[error("Network error: {0}")]
    Network(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl GastosError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for users on the remote store
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
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

    /// Check if this error came from talking to the remote store
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Remote { .. } | Self::Unauthorized(_) | Self::Network(_)
        )
    }
}

impl From<std::io::Error> for GastosError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GastosError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for GastosError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<reqwest::Error> for GastosError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if status.as_u16() == 401 || status.as_u16() == 403 => {
                Self::Unauthorized(err.to_string())
            }
            Some(status) => Self::Remote {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => Self::Network(err.to_string()),
        }
    }
}

/// Result type alias for gastos operations
pub type GastosResult<T> = Result<T, GastosError>;
