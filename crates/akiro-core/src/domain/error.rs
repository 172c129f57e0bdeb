//! Domain-layer errors.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A configuration block named a scope outside {all, build, host}.
    ///
    /// Fatal: the whole expansion aborts, no partial requirement list is
    /// ever returned.
    #[error("unknown scope '{scope}' (expected one of: all, build, host)")]
    UnknownScope { scope: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownScope { scope } => vec![
                format!("'{}' is not a valid scope", scope),
                "Valid scopes:".into(),
                "  • all    - both build and host contexts".into(),
                "  • build  - build machine only".into(),
                "  • host   - target machine only".into(),
                "Or omit the scope key entirely to default to 'all'".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownScope { .. } => ErrorCategory::Validation,
        }
    }
}

/// Domain error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
