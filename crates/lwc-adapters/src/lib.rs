//! Infrastructure adapters for create-lwc-app.
//!
//! This crate implements the ports defined in `lwc-core::application::ports`.
//! It contains all process spawning and I/O.

pub mod executor;
pub mod filesystem;

// Re-export commonly used adapters
pub use executor::{CommandExecutor, MANIFEST_FILE, ManifestExecutor, MemoryExecutor};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
