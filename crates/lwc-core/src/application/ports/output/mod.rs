//! Driven (output) ports - implemented by infrastructure.
//!
//! The `lwc-adapters` crate provides implementations.

use async_trait::async_trait;
use std::path::Path;

use crate::domain::ScaffoldRequest;
use crate::error::LwcResult;

/// Port for the engine that turns a request into a project.
///
/// Implemented by:
/// - `lwc_adapters::executor::ManifestExecutor` (hand-off manifest, default)
/// - `lwc_adapters::executor::CommandExecutor` (external generator process)
/// - `lwc_adapters::executor::MemoryExecutor` (testing)
///
/// `run` is awaited to completion exactly once per request. Implementations
/// report failure through the returned error and must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScaffoldExecutor: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    /// `true` when `run` hands stdin/stdout/stderr to something that may
    /// prompt the user; callers must not draw on the terminal meanwhile.
    fn owns_terminal(&self) -> bool {
        false
    }

    /// Generate the project described by `request`.
    async fn run(&self, request: &ScaffoldRequest) -> LwcResult<()>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `lwc_adapters::filesystem::LocalFilesystem` (production)
/// - `lwc_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> LwcResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> LwcResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
