//! Command runner trait

use async_trait::async_trait;

use crate::error::ExecError;
use crate::result::CommandResult;

/// Runs a program and captures its output
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and wait for it to finish.
    ///
    /// A non-zero exit status is an `Ok` result carrying that status; only
    /// spawn and I/O failures are errors.
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult, ExecError>;

    /// Short identifier used in log fields
    fn runner_type(&self) -> &'static str;
}
