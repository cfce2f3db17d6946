use crate::engine::command_builder::CommandBuilder;
use crate::runners::{ProcessRunner, ToolRunner};
use crate::utils::{
    config::DispatcherConfig,
    error::DispatchResult,
    types::{InvocationRequest, InvocationResult},
};

/// Central component: builds the command line for a request and hands it to a runner
pub struct CommandDispatcher {
    builder: CommandBuilder,
    runner: Box<dyn ToolRunner>,
}

impl CommandDispatcher {
    /// Create a dispatcher that spawns real processes
    pub fn new(config: &DispatcherConfig) -> Self {
        Self::with_runner(config, Box::new(ProcessRunner::new()))
    }

    /// Create a dispatcher with a custom runner
    pub fn with_runner(config: &DispatcherConfig, runner: Box<dyn ToolRunner>) -> Self {
        Self {
            builder: CommandBuilder::new(&config.binary),
            runner,
        }
    }

    /// Full command line that [`execute`](Self::execute) will run for `request`
    pub fn command_line(&self, request: &InvocationRequest) -> Vec<String> {
        self.builder.command_line(request)
    }

    /// Run the external tool for `request` and wait for it to exit.
    ///
    /// A tool that runs but exits non-zero is still `Ok`; only a launch
    /// failure is an error. There is no retry.
    pub async fn execute(&self, request: &InvocationRequest) -> DispatchResult<InvocationResult> {
        let argv = self.command_line(request);
        self.runner.execute(&argv).await
    }
}
