use async_trait::async_trait;
use tokio::process::Command;
use crate::runners::runner_trait::ToolRunner;
use crate::utils::{
    error::{DispatchError, DispatchResult},
    types::InvocationResult,
};

/// Runs the external tool as a real child process.
///
/// The program is spawned directly, never through a shell, so nothing in the
/// argument vector is subject to shell expansion. Both output streams are
/// buffered in full and returned once the child exits.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolRunner for ProcessRunner {
    async fn execute(&self, argv: &[String]) -> DispatchResult<InvocationResult> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            DispatchError::Internal("Cannot execute an empty command line".to_string())
        })?;

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| DispatchError::launch_failure(program, e))?;

        Ok(InvocationResult::from_output(&output))
    }
}
