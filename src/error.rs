//! Error types and handling for the MoveNest quote engine

use thiserror::Error;

/// Main error type for the quote engine
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Caller supplied a value outside the accepted domain
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl QuoteError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller rather than the service
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, QuoteError::InvalidInput { .. } | QuoteError::Config { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            QuoteError::Config { message } => {
                format!("Configuration error: {message}. Please check your pricing settings.")
            }
            QuoteError::InvalidInput { message } => {
                format!("Invalid input: {message}")
            }
            QuoteError::General { message } => message.clone(),
        }
    }
}
