//! Application layer.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`ScaffoldService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! All request rules live in `crate::domain`; this layer only sequences them
//! with the executor.

pub mod error;
pub mod ports;
pub mod services;

pub use services::ScaffoldService;

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ScaffoldExecutor};

pub use error::ApplicationError;
