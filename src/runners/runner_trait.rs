use async_trait::async_trait;
use std::sync::Arc;
use crate::utils::{error::DispatchResult, types::InvocationResult};

/// Executes a fully built command line and captures its outcome
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Run `argv` (program name first) to completion.
    ///
    /// A non-zero exit is reported through [`InvocationResult::exit_code`];
    /// only a failure to start the program is an error.
    async fn execute(&self, argv: &[String]) -> DispatchResult<InvocationResult>;
}

#[async_trait]
impl<T: ToolRunner + ?Sized> ToolRunner for Arc<T> {
    async fn execute(&self, argv: &[String]) -> DispatchResult<InvocationResult> {
        (**self).execute(argv).await
    }
}
