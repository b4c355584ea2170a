//! Application layer errors.
//!
//! These errors represent failures while handing a request off, not
//! validation failures. Those are `ValidationFailure` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while dispatching a request to an executor.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The executor ran and reported failure.
    #[error("Executor '{executor}' failed: {reason}")]
    ExecutorFailed { executor: String, reason: String },

    /// The executor could not be started at all.
    #[error("Executor '{executor}' could not be started: {reason}")]
    ExecutorUnavailable { executor: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A shared adapter lock was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,

    /// The project name cannot be used as a directory name.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// A project was already scaffolded at the target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ExecutorFailed { executor, .. } => vec![
                format!("The '{executor}' generator reported an error"),
                "Check the generator output above for details".into(),
            ],
            Self::ExecutorUnavailable { executor, .. } => vec![
                format!("Ensure '{executor}' is installed and in your PATH"),
                "Or unset generator.command to write a manifest instead".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Use a plain directory name without path separators".into(),
                "Examples: my-app, my_app, app123".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already contains a project: {}", path.display()),
                "Choose a different project name".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ExecutorFailed { .. } | Self::FilesystemError { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
            Self::ExecutorUnavailable { .. } => ErrorCategory::Configuration,
            Self::InvalidProjectName { .. } | Self::ProjectExists { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}
