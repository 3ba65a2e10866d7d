//! tofinv-state: OpenTofu state integration
//!
//! Reads the declared outputs of the current OpenTofu state by running
//! `tofu output -json` and parsing its stdout.

pub mod client;
pub mod error;
pub mod outputs;
