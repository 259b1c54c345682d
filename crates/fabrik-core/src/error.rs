//! Unified error handling for Fabrik Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Fabrik Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FabrikError {
    /// Errors from the domain layer (dispatch and geometry rules).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl FabrikError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type FabrikResult<T> = Result<T, FabrikError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_categories_map_through() {
        let err: FabrikError = DomainError::UnrecognizedShapeKind { tag: "blob".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn missing_adapter_is_configuration() {
        let err: FabrikError = ApplicationError::AdapterNotConfigured { name: "canvas" }.into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn domain_message_is_not_wrapped() {
        let err: FabrikError = DomainError::UnrecognizedComputerKind { tag: "x".into() }.into();
        assert_eq!(err.to_string(), "unrecognized computer type 'x'");
    }
}
