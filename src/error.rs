//! Custom error types for Quotedesk
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! The core wizard operations are deliberately "soft": mutations either
//! succeed or no-op. Errors only surface at the seams where the user must be
//! told something (blank rejection reason, unknown quote number, terminal
//! failures).

use thiserror::Error;

/// The main error type for Quotedesk operations
#[derive(Error, Debug)]
pub enum QuotedeskError {
    /// Validation errors (missing required field, blank rejection reason)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Quote workflow errors
    #[error("Quote error: {0}")]
    Quote(String),

    /// I/O errors (terminal setup, stdout)
    #[error("I/O error: {0}")]
    Io(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl QuotedeskError {
    /// Create a "not found" error for quotes
    pub fn quote_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Quote",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for materials
    pub fn material_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Material",
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
}

impl From<std::io::Error> for QuotedeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Quotedesk operations
pub type QuotedeskResult<T> = Result<T, QuotedeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuotedeskError::Validation("rejection reason is required".into());
        assert_eq!(
            err.to_string(),
            "Validation error: rejection reason is required"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = QuotedeskError::quote_not_found("QTE-042");
        assert_eq!(err.to_string(), "Quote not found: QTE-042");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: QuotedeskError = io_err.into();
        assert!(matches!(err, QuotedeskError::Io(_)));
    }
}
