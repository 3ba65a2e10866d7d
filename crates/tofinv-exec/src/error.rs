//! Error types for tofinv-exec

use thiserror::Error;

/// Errors that can occur while spawning a local command
#[derive(Error, Debug, Clone)]
pub enum ExecError {
    /// Program is not present on the search path
    #[error("command not found: {0}")]
    NotFound(String),

    /// Process spawn error
    #[error("failed to spawn process: {0}")]
    SpawnError(String),

    /// I/O error while collecting process output
    #[error("I/O error: {0}")]
    IoError(String),
}

impl ExecError {
    /// Check if the error means the binary is not installed
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExecError::NotFound(_))
    }
}
