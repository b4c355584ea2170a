//! Core domain layer.
//!
//! Pure request logic with no I/O:
//!
//! - **No async**: validation is synchronous
//! - **No state**: the vocabularies are compile-time enums
//! - **Immutable output**: a [`ScaffoldRequest`] cannot be edited once built
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{RawInput, ScaffoldRequest};

pub use error::{ErrorCategory, ValidationFailure};

pub use value_objects::{
    CORDOVA_PREFIX, FeatureOption, ProjectType, ResolvedType, is_cordova_token,
};

pub use validation::RequestValidator;
