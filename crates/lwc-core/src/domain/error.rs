use thiserror::Error;

use crate::domain::value_objects::{FeatureOption, ProjectType};

/// Reasons a raw request is rejected.
///
/// Variants are ordered the way the validator checks them. Token lists are
/// comma-joined in input order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("options can only be set together with silent mode (--yes)")]
    NoSilentWithOptions,

    #[error("unknown app type(s): {types}")]
    NonCompliantAppTypes { types: String },

    #[error("cordova app types cannot be mixed with other types: {types}")]
    MixedAppTypes { types: String },

    #[error("unknown option(s): {options}")]
    NonCompliantOptions { options: String },
}

impl ValidationFailure {
    /// Get user-actionable suggestions for fixing this failure.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoSilentWithOptions => vec![
                "Add --yes to run without prompts".into(),
                "Or drop --options and pick them interactively".into(),
            ],
            Self::NonCompliantAppTypes { types } => {
                let mut out = vec![format!("'{types}' is not a valid app type"), "Valid types:".into()];
                out.extend(ProjectType::ALL.iter().map(|t| format!("  • {t}")));
                out
            }
            Self::MixedAppTypes { .. } => vec![
                "Cordova platforms can be combined with each other only".into(),
                "Example: --type cordova-ios,cordova-android".into(),
            ],
            Self::NonCompliantOptions { options } => {
                let mut out = vec![
                    format!("'{options}' is not a valid option"),
                    "Valid options:".into(),
                ];
                out.extend(FeatureOption::ALL.iter().map(|o| format!("  • {o}")));
                out
            }
        }
    }
}

/// Domain error category for CLI display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
}

impl ValidationFailure {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MixedAppTypes { .. } | Self::NoSilentWithOptions => ErrorCategory::Compatibility,
            Self::NonCompliantAppTypes { .. } | Self::NonCompliantOptions { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_suggestions_list_vocabulary() {
        let s = ValidationFailure::NonCompliantAppTypes {
            types: "desktop".into(),
        }
        .suggestions();
        assert!(s.iter().any(|l| l.contains("desktop")));
        assert!(s.iter().any(|l| l.contains("cordova-electron")));
    }

    #[test]
    fn unknown_option_suggestions_list_vocabulary() {
        let s = ValidationFailure::NonCompliantOptions {
            options: "cobol".into(),
        }
        .suggestions();
        assert!(s.iter().any(|l| l.contains("rollup")));
    }

    #[test]
    fn messages_carry_tokens() {
        let err = ValidationFailure::MixedAppTypes {
            types: "standard,cordova-ios".into(),
        };
        assert!(err.to_string().contains("standard,cordova-ios"));
    }

    #[test]
    fn categories() {
        assert_eq!(
            ValidationFailure::NoSilentWithOptions.category(),
            ErrorCategory::Compatibility
        );
        assert_eq!(
            ValidationFailure::NonCompliantOptions { options: "x".into() }.category(),
            ErrorCategory::Validation
        );
    }
}
