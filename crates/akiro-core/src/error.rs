//! Unified error handling for Akiro Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Akiro Core operations.
///
/// This enum wraps all possible errors that can occur when using akiro-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum AkiroError {
    /// Errors from the domain layer (expansion rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (loading/orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl AkiroError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Akiro".into(),
                "Please report this issue at: https://github.com/cosecruz/akiro/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::error::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::error::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad specification content (template, parse, schema, scope).
    Validation,
    /// A required input file was not found.
    NotFound,
    /// Bad tool configuration.
    Configuration,
    /// The wrapped package manager failed.
    External,
    /// Bugs and I/O surprises.
    Internal,
}

/// Convenient result type alias.
pub type AkiroResult<T> = Result<T, AkiroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_surface_as_validation() {
        let err = AkiroError::from(DomainError::UnknownScope { scope: "x".into() });
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn command_failures_are_external() {
        let err = AkiroError::from(ApplicationError::CommandFailed {
            command: "conan install".into(),
            status: 6,
        });
        assert_eq!(err.category(), ErrorCategory::External);
    }

    #[test]
    fn every_error_offers_suggestions() {
        let errors = [
            AkiroError::from(DomainError::UnknownScope { scope: "x".into() }),
            AkiroError::Configuration {
                message: "bad profile".into(),
            },
            AkiroError::Internal {
                message: "oops".into(),
            },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty());
        }
    }
}
