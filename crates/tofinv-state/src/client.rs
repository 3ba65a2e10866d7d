//! Client for querying OpenTofu state outputs

use std::sync::Arc;

use tracing::{debug, instrument};

use tofinv_exec::error::ExecError;
use tofinv_exec::traits::CommandRunner;

use crate::error::StateError;
use crate::outputs::StateOutputs;

/// Program queried for state outputs
const TOFU_PROGRAM: &str = "tofu";
/// Arguments producing the JSON output map
const TOFU_ARGS: &[&str] = &["output", "-json"];

/// OpenTofu state client
///
/// Runs `tofu output -json` through a [`CommandRunner`] and parses the
/// result. One child process per call, no retry, no timeout.
pub struct TofuClient {
    /// Runner used to spawn the tofu binary
    runner: Arc<dyn CommandRunner>,
}

impl TofuClient {
    /// Create a new client
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Fetch the declared outputs from the current state
    ///
    /// # Errors
    /// Returns `CommandNotFound` if the tofu binary is missing,
    /// `CommandFailed` if the command exits non-zero (the tool's own stderr
    /// text is surfaced in the message), and `MalformedOutput` if stdout is
    /// not the expected JSON map.
    #[instrument(skip(self))]
    pub async fn fetch_outputs(&self) -> Result<StateOutputs, StateError> {
        debug!(program = TOFU_PROGRAM, runner = self.runner.runner_type(), "querying state outputs");

        let result = self
            .runner
            .run(TOFU_PROGRAM, TOFU_ARGS)
            .await
            .map_err(|e| match e {
                ExecError::NotFound(program) => StateError::CommandNotFound(program),
                other => StateError::CommandFailed(other.to_string()),
            })?;

        if !result.success() {
            return Err(StateError::CommandFailed(format!(
                "exit status {}: {}",
                result.status,
                result.stderr.trim()
            )));
        }

        let outputs: StateOutputs = serde_json::from_str(&result.stdout)
            .map_err(|e| StateError::MalformedOutput(e.to_string()))?;

        debug!(outputs = outputs.len(), "state outputs parsed");

        Ok(outputs)
    }
}
