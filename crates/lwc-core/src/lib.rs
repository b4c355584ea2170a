//! create-lwc-app core - request validation and dispatch.
//!
//! This crate turns raw command-line values into a validated
//! [`ScaffoldRequest`](domain::ScaffoldRequest) and hands it to an executor
//! through a port, following the same ports-and-adapters split as the rest
//! of the workspace.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          lwc-cli (create-lwc-app)       │
//! │   parses flags, builds RawInput         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            ScaffoldService              │
//! │   prepare (validate) → dispatch         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Traits)          │
//! │   (ScaffoldExecutor, Filesystem)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     lwc-adapters (Infrastructure)       │
//! │ (ManifestExecutor, CommandExecutor ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lwc_core::domain::{RawInput, RequestValidator, ResolvedType};
//!
//! let raw = RawInput::new()
//!     .with_type_csv("cordova-ios,cordova-android")
//!     .silent(true);
//!
//! let request = RequestValidator::validate(&raw).unwrap();
//! assert_eq!(request.resolved_type(), ResolvedType::Cordova);
//! assert_eq!(request.cordova_platforms().len(), 2);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{Filesystem, ScaffoldExecutor},
    };
    pub use crate::domain::{
        FeatureOption, ProjectType, RawInput, RequestValidator, ResolvedType, ScaffoldRequest,
        ValidationFailure,
    };
    pub use crate::error::{LwcError, LwcResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
