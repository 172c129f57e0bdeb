//! Application layer errors.
//!
//! These errors represent failures in loading and orchestration, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading a specification or driving the
/// package manager.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template referenced a substitution variable that does not exist.
    ///
    /// Only `os` and `build_type` are defined; anything else fails the
    /// render before any expansion happens.
    #[error("template render failed: {reason}")]
    TemplateRender { reason: String },

    /// The rendered template is not valid YAML.
    #[error("specification parse failed: {reason}")]
    SpecParse { reason: String },

    /// The document parsed but does not have the expected shape
    /// (missing `packages`, version value that is neither null nor a
    /// sequence of mappings, ...).
    #[error("specification schema error: {message}")]
    Schema { message: String },

    /// A package-manager invocation exited with a failure status.
    #[error("conan {command} exited with status {status}")]
    CommandFailed { command: String, status: i32 },

    /// The package-manager binary could not be launched at all.
    #[error("failed to launch '{program}': {reason}")]
    SpawnFailed { program: String, reason: String },

    /// A filesystem operation in the orchestration pipeline failed.
    #[error("I/O error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateRender { reason } => vec![
                format!("Template rendering failed: {}", reason),
                "Only {{ os }} and {{ build_type }} are available in templates".into(),
                "Check the spelling of the variable in your specification file".into(),
            ],
            Self::SpecParse { reason } => vec![
                format!("The rendered specification is not valid YAML: {}", reason),
                "Try: akiro check <file> to see the failing document".into(),
            ],
            Self::Schema { message } => vec![
                format!("Unexpected document shape: {}", message),
                "The top level must be a 'packages' mapping".into(),
                "Each version maps to null or to a list of configuration blocks".into(),
            ],
            Self::CommandFailed { status, .. } => vec![
                format!("Conan exited with status {}", status),
                "Check the Conan output above for the underlying failure".into(),
                "Remaining commands were not run".into(),
            ],
            Self::SpawnFailed { program, .. } => vec![
                format!("Could not start '{}'", program),
                "Ensure Conan is installed and on your PATH".into(),
                "Or set the program path in your configuration (conan.program)".into(),
            ],
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateRender { .. } | Self::SpecParse { .. } | Self::Schema { .. } => {
                ErrorCategory::Validation
            }
            Self::CommandFailed { .. } | Self::SpawnFailed { .. } => ErrorCategory::External,
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }
}
