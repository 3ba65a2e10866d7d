//! tofinv-exec: Child-process execution abstraction
//!
//! Provides the `CommandRunner` trait and a local implementation used to
//! invoke external tooling and capture its output

pub mod error;
pub mod local;
pub mod result;
pub mod traits;
