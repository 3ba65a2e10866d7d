//! Error types for tofinv-state

use thiserror::Error;

/// Errors that can occur while reading state outputs
#[derive(Error, Debug, Clone)]
pub enum StateError {
    /// The tofu binary is not installed on this machine
    #[error("'{0}' command not found, is OpenTofu installed?")]
    CommandNotFound(String),

    /// The output command ran but did not succeed
    #[error("tofu output failed: {0}")]
    CommandFailed(String),

    /// stdout was not the expected JSON output map
    #[error("malformed tofu output: {0}")]
    MalformedOutput(String),
}
