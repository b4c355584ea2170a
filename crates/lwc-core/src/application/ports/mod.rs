//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `lwc-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by infrastructure
//!   - `ScaffoldExecutor`: performs generation for a validated request
//!   - `Filesystem`: file operations for executors that write locally

pub mod output;

pub use output::{Filesystem, ScaffoldExecutor};
