//! Error types for tofinv-ansible

use thiserror::Error;

/// Errors that can occur while building the inventory document
#[derive(Error, Debug, Clone)]
pub enum BuildError {
    /// A required state output is absent or empty
    #[error("required output '{0}' is missing or empty")]
    MissingRequiredField(String),
}
