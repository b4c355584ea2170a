//! The validated request handed to an executor.

use serde::Serialize;
use std::fmt;

use crate::domain::value_objects::{FeatureOption, ProjectType, ResolvedType};

/// A normalized, validated scaffold configuration.
///
/// Only [`RequestValidator`](crate::domain::RequestValidator) can build one,
/// so holding a `ScaffoldRequest` proves every validation rule passed. Fields
/// are read-only.
///
/// Serializes to the executor payload shape:
///
/// ```json
/// { "options": ["yarn"], "name": "my-app", "silent": true,
///   "type": "cordova", "cordova": ["cordova-ios"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldRequest {
    options: Vec<FeatureOption>,
    name: String,
    silent: bool,
    #[serde(rename = "type")]
    resolved_type: ResolvedType,
    #[serde(rename = "cordova")]
    cordova_platforms: Vec<ProjectType>,
}

impl ScaffoldRequest {
    pub(crate) fn new(
        name: String,
        options: Vec<FeatureOption>,
        silent: bool,
        resolved_type: ResolvedType,
        cordova_platforms: Vec<ProjectType>,
    ) -> Self {
        Self {
            options,
            name,
            silent,
            resolved_type,
            cordova_platforms,
        }
    }

    /// Project name; may be empty, in which case the executor decides.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[FeatureOption] {
        &self.options
    }

    pub fn silent(&self) -> bool {
        self.silent
    }

    pub fn resolved_type(&self) -> ResolvedType {
        self.resolved_type
    }

    /// Requested Cordova platforms, in input order. Empty unless
    /// `resolved_type` is [`ResolvedType::Cordova`].
    pub fn cordova_platforms(&self) -> &[ProjectType] {
        &self.cordova_platforms
    }
}

impl fmt::Display for ScaffoldRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "<unnamed>"
        } else {
            self.name.as_str()
        };
        write!(f, "{name} ({})", self.resolved_type)?;
        if !self.cordova_platforms.is_empty() {
            let platforms: Vec<_> = self.cordova_platforms.iter().map(|p| p.as_str()).collect();
            write!(f, " [{}]", platforms.join(","))?;
        }
        Ok(())
    }
}
