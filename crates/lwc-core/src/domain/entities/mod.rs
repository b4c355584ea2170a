//! Domain entities.

pub mod raw_input;
pub mod scaffold_request;

pub use raw_input::RawInput;
pub use scaffold_request::ScaffoldRequest;
