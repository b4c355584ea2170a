//! Command handlers. Each one turns parsed arguments into calls on the core
//! service or the config layer; none of them holds request rules.

pub mod completions;
pub mod config;
pub mod create;
