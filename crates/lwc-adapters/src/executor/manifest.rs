//! Hand-off manifest executor.
//!
//! Writes the validated request as JSON into the project directory so a
//! downstream generator can pick it up:
//!
//! ```text
//! <root>/<name>/lwc-app.json
//! ```
//!
//! An empty project name targets `<root>` itself.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use lwc_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, ScaffoldExecutor},
    },
    domain::ScaffoldRequest,
    error::{LwcError, LwcResult},
};

/// File name of the hand-off manifest.
pub const MANIFEST_FILE: &str = "lwc-app.json";

const GENERATOR_NAME: &str = "create-lwc-app";

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generator: &'static str,
    version: &'static str,
    generated_at: DateTime<Utc>,
    request: &'a ScaffoldRequest,
}

/// Executor that records the request on disk instead of generating files.
pub struct ManifestExecutor<F: Filesystem> {
    filesystem: F,
    root: PathBuf,
}

impl<F: Filesystem> ManifestExecutor<F> {
    pub fn new(filesystem: F, root: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            root: root.into(),
        }
    }

    /// Where the manifest for `request` is written.
    pub fn manifest_path(&self, request: &ScaffoldRequest) -> LwcResult<PathBuf> {
        Ok(self.project_dir(request.name())?.join(MANIFEST_FILE))
    }

    fn project_dir(&self, name: &str) -> LwcResult<PathBuf> {
        if name.is_empty() {
            return Ok(self.root.clone());
        }
        validate_project_name(name)?;
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl<F: Filesystem> ScaffoldExecutor for ManifestExecutor<F> {
    fn name(&self) -> &str {
        "manifest"
    }

    #[instrument(skip_all, fields(root = %self.root.display()))]
    async fn run(&self, request: &ScaffoldRequest) -> LwcResult<()> {
        let dir = self.project_dir(request.name())?;
        let path = dir.join(MANIFEST_FILE);

        if self.filesystem.exists(&path) {
            return Err(ApplicationError::ProjectExists { path: dir }.into());
        }

        let manifest = Manifest {
            generator: GENERATOR_NAME,
            version: lwc_core::VERSION,
            generated_at: Utc::now(),
            request,
        };
        let json = serde_json::to_string_pretty(&manifest).map_err(|e| LwcError::Internal {
            message: format!("failed to serialise manifest: {e}"),
        })?;

        debug!(path = %path.display(), bytes = json.len(), "Writing manifest");
        self.filesystem.create_dir_all(&dir)?;
        self.filesystem.write_file(&path, &json)?;

        info!(path = %path.display(), "Manifest written");
        Ok(())
    }
}

/// Reject names that would escape `root` or nest directories.
fn validate_project_name(name: &str) -> LwcResult<()> {
    let invalid = |reason: &str| -> LwcError {
        ApplicationError::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        }
        .into()
    };

    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    match Path::new(name).components().next() {
        Some(Component::Normal(_)) => Ok(()),
        _ => Err(invalid("name must be a plain directory name")),
    }
}
