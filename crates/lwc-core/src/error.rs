//! Unified error handling for the core crate.
//!
//! Wraps domain and application errors behind one type so callers only
//! match on [`LwcError`].

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::ValidationFailure;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum LwcError {
    /// The raw input was rejected.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    /// Dispatching the request failed.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl LwcError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in create-lwc-app".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The validation failure behind this error, if any.
    pub fn as_validation(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Validation(v) => Some(v),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type LwcResult<T> = Result<T, LwcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_keep_their_category() {
        let err: LwcError = ValidationFailure::NoSilentWithOptions.into();
        assert_eq!(err.category(), ErrorCategory::Compatibility);
        assert!(err.as_validation().is_some());
    }

    #[test]
    fn executor_failure_is_internal() {
        let err: LwcError = ApplicationError::ExecutorFailed {
            executor: "manifest".into(),
            reason: "disk full".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.as_validation().is_none());
        assert!(err.to_string().contains("disk full"));
    }
}
