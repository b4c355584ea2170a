//! Domain value objects: ProjectType, FeatureOption, ResolvedType.
//!
//! # Design
//!
//! These are the two closed vocabularies a request is checked against, plus
//! the type a validated request resolves to. They are `Copy`, compared by
//! value, and fixed at compile time: there is no way to register a new type
//! or option at runtime.
//!
//! Token matching is exact and case-sensitive. `"Standard"` is not a project
//! type.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and extend `ALL`
//! 3. Done - `FromStr`, `Display` and serde all go through `as_str`

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::ValidationFailure;

/// Prefix shared by every native-wrapper project type.
pub const CORDOVA_PREFIX: &str = "cordova";

// ── ProjectType ───────────────────────────────────────────────────────────────

/// The kind of application skeleton to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectType {
    #[default]
    Standard,
    Pwa,
    CordovaIos,
    CordovaElectron,
    CordovaAndroid,
    CordovaMac,
}

impl ProjectType {
    /// Every project type, in documentation order.
    pub const ALL: [ProjectType; 6] = [
        Self::Standard,
        Self::Pwa,
        Self::CordovaIos,
        Self::CordovaElectron,
        Self::CordovaAndroid,
        Self::CordovaMac,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Pwa => "pwa",
            Self::CordovaIos => "cordova-ios",
            Self::CordovaElectron => "cordova-electron",
            Self::CordovaAndroid => "cordova-android",
            Self::CordovaMac => "cordova-mac",
        }
    }

    /// Whether this type wraps the app in a Cordova native shell.
    pub const fn is_cordova(&self) -> bool {
        matches!(
            self,
            Self::CordovaIos | Self::CordovaElectron | Self::CordovaAndroid | Self::CordovaMac
        )
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationFailure::NonCompliantAppTypes { types: s.into() })
    }
}

impl Serialize for ProjectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// True if a raw type token names a Cordova platform.
///
/// Classification is by prefix, so it also holds for tokens outside the
/// vocabulary such as `cordova-windows`.
pub fn is_cordova_token(token: &str) -> bool {
    token.starts_with(CORDOVA_PREFIX)
}

// ── FeatureOption ─────────────────────────────────────────────────────────────

/// An optional tooling choice layered onto a project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureOption {
    /// Use yarn instead of npm.
    Yarn,
    TypeScript,
    /// Target the Edge browser.
    Edge,
    /// Bundle with rollup instead of webpack.
    Rollup,
    /// Serve the app with an express server.
    Express,
}

impl FeatureOption {
    pub const ALL: [FeatureOption; 5] = [
        Self::Yarn,
        Self::TypeScript,
        Self::Edge,
        Self::Rollup,
        Self::Express,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::TypeScript => "typescript",
            Self::Edge => "edge",
            Self::Rollup => "rollup",
            Self::Express => "express",
        }
    }
}

impl fmt::Display for FeatureOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureOption {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ValidationFailure::NonCompliantOptions { options: s.into() })
    }
}

impl Serialize for FeatureOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ── ResolvedType ──────────────────────────────────────────────────────────────

/// The single type a validated request generates.
///
/// Any number of Cordova platforms collapse into [`ResolvedType::Cordova`];
/// the platforms themselves travel separately on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedType {
    Single(ProjectType),
    Cordova,
}

impl ResolvedType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single(t) => t.as_str(),
            Self::Cordova => CORDOVA_PREFIX,
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResolvedType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_round_trips_through_str() {
        for t in ProjectType::ALL {
            assert_eq!(t.as_str().parse::<ProjectType>().unwrap(), t);
        }
    }

    #[test]
    fn project_type_is_case_sensitive() {
        assert!("Standard".parse::<ProjectType>().is_err());
        assert!("PWA".parse::<ProjectType>().is_err());
    }

    #[test]
    fn unknown_project_type_carries_token() {
        let err = "desktop".parse::<ProjectType>().unwrap_err();
        assert_eq!(
            err,
            ValidationFailure::NonCompliantAppTypes {
                types: "desktop".into()
            }
        );
    }

    #[test]
    fn cordova_variants_are_flagged() {
        let cordova: Vec<_> = ProjectType::ALL
            .into_iter()
            .filter(ProjectType::is_cordova)
            .collect();
        assert_eq!(cordova.len(), 4);
        assert!(!ProjectType::Standard.is_cordova());
        assert!(!ProjectType::Pwa.is_cordova());
    }

    #[test]
    fn cordova_token_classification_is_prefix_based() {
        assert!(is_cordova_token("cordova-ios"));
        assert!(is_cordova_token("cordova-windows"));
        assert!(is_cordova_token("cordova"));
        assert!(!is_cordova_token("pwa"));
        assert!(!is_cordova_token("my-cordova"));
    }

    #[test]
    fn feature_option_vocabulary() {
        assert_eq!("yarn".parse::<FeatureOption>().unwrap(), FeatureOption::Yarn);
        assert_eq!(
            "typescript".parse::<FeatureOption>().unwrap(),
            FeatureOption::TypeScript
        );
        assert!("cobol".parse::<FeatureOption>().is_err());
        assert!("ts".parse::<FeatureOption>().is_err());
    }

    #[test]
    fn resolved_type_display() {
        assert_eq!(ResolvedType::Cordova.to_string(), "cordova");
        assert_eq!(ResolvedType::Single(ProjectType::Pwa).to_string(), "pwa");
    }

    #[test]
    fn default_project_type_is_standard() {
        assert_eq!(ProjectType::default(), ProjectType::Standard);
    }
}
