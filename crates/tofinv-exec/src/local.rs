//! Local command execution using `tokio::process`

use std::io;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, instrument};

use crate::error::ExecError;
use crate::result::CommandResult;
use crate::traits::CommandRunner;

/// Local command runner
///
/// Spawns programs on the local machine using `tokio::process::Command`.
#[derive(Debug, Clone)]
pub struct LocalRunner;

impl LocalRunner {
    /// Create a new local runner
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for LocalRunner {
    #[instrument(skip(self), level = "debug")]
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult, ExecError> {
        let start = Instant::now();

        debug!(program, ?args, "spawning local command");

        // argv spawn, no shell: a missing binary has to surface as NotFound
        // instead of the shell's exit 127
        let child = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    ExecError::NotFound(program.to_string())
                } else {
                    ExecError::SpawnError(e.to_string())
                }
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ExecError::IoError(e.to_string()))?;

        let duration = start.elapsed();

        let status = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        debug!(
            program,
            status,
            duration = ?duration,
            "command completed"
        );

        if !output.status.success() {
            error!(
                program,
                status,
                stderr = %stderr,
                "command failed"
            );
        }

        Ok(CommandResult {
            status,
            stdout,
            stderr,
            duration,
        })
    }

    fn runner_type(&self) -> &'static str {
        "local"
    }
}
