//! Error handling for the create-lwc-app CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping (one code per validation failure)

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use lwc_core::{
    domain::ValidationFailure,
    error::{ErrorCategory as CoreCategory, LwcError},
};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `lwc-core` or an executor adapter.
    #[error(transparent)]
    Core(#[from] LwcError),

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<ValidationFailure> for CliError {
    fn from(err: ValidationFailure) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Locate your config file: create-lwc-app --config-path".into(),
                "Create a default one with: create-lwc-app --config-init".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Compatibility => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Error                  | Code |
    /// |------------------------|------|
    /// | NoSilentWithOptions    |  10  |
    /// | NonCompliantAppTypes   |  11  |
    /// | MixedAppTypes          |  12  |
    /// | NonCompliantOptions    |  13  |
    /// | Other user error       |  2   |
    /// | Configuration          |  4   |
    /// | Internal / executor    |  1   |
    pub fn exit_code(&self) -> u8 {
        if let Self::Core(core) = self {
            if let Some(failure) = core.as_validation() {
                return validation_exit_code(failure);
            }
        }
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

fn validation_exit_code(failure: &ValidationFailure) -> u8 {
    match failure {
        ValidationFailure::NoSilentWithOptions => 10,
        ValidationFailure::NonCompliantAppTypes { .. } => 11,
        ValidationFailure::MixedAppTypes { .. } => 12,
        ValidationFailure::NonCompliantOptions { .. } => 13,
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lwc_core::application::ApplicationError;
    use std::io;

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn each_validation_failure_has_its_own_exit_code() {
        let codes: Vec<u8> = [
            ValidationFailure::NoSilentWithOptions,
            ValidationFailure::NonCompliantAppTypes { types: "x".into() },
            ValidationFailure::MixedAppTypes { types: "x".into() },
            ValidationFailure::NonCompliantOptions { options: "x".into() },
        ]
        .into_iter()
        .map(|f| CliError::from(f).exit_code())
        .collect();
        assert_eq!(codes, vec![10, 11, 12, 13]);
    }

    #[test]
    fn executor_failure_is_internal() {
        let err = CliError::Core(
            ApplicationError::ExecutorFailed {
                executor: "gen".into(),
                reason: "crashed".into(),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn missing_generator_is_configuration() {
        let err = CliError::Core(
            ApplicationError::ExecutorUnavailable {
                executor: "gen".into(),
                reason: "not found".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn existing_project_is_user_error() {
        let err = CliError::Core(
            ApplicationError::ProjectExists {
                path: "/tmp/x".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_io() {
        assert_eq!(CliError::from(io::Error::other("e")).exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_lists_offending_tokens_and_vocabulary() {
        let err = CliError::from(ValidationFailure::NonCompliantAppTypes {
            types: "desktop".into(),
        });
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("desktop"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("cordova-ios"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::from(ValidationFailure::NoSilentWithOptions);
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
