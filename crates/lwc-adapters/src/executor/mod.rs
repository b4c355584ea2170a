//! Scaffold executor adapters.

mod command;
mod manifest;
mod memory;

pub use command::{CommandExecutor, REQUEST_ENV};
pub use manifest::{MANIFEST_FILE, ManifestExecutor};
pub use memory::MemoryExecutor;
