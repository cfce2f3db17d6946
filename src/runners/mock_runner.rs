use async_trait::async_trait;
use std::io;
use std::sync::Mutex;
use crate::runners::runner_trait::ToolRunner;
use crate::utils::{
    error::{DispatchError, DispatchResult},
    types::InvocationResult,
};

/// Canned outcome returned by [`MockRunner`]
#[derive(Debug, Clone)]
enum MockOutcome {
    Finished(InvocationResult),
    LaunchFailure(io::ErrorKind, String),
}

/// Runner for tests: returns a fixed outcome and records every command line
#[derive(Debug)]
pub struct MockRunner {
    outcome: MockOutcome,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockRunner {
    /// A runner whose tool exits 0 with empty output
    pub fn new() -> Self {
        Self::finishing(InvocationResult::new(0, "", ""))
    }

    /// A runner whose tool finishes with `result`
    pub fn finishing(result: InvocationResult) -> Self {
        Self {
            outcome: MockOutcome::Finished(result),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A runner whose tool cannot be spawned
    pub fn failing_to_launch(kind: io::ErrorKind, message: &str) -> Self {
        Self {
            outcome: MockOutcome::LaunchFailure(kind, message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Command lines received so far, in call order
    pub fn calls(&self) -> Vec<Vec<String>> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolRunner for MockRunner {
    async fn execute(&self, argv: &[String]) -> DispatchResult<InvocationResult> {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(argv.to_vec()),
            Err(poisoned) => poisoned.into_inner().push(argv.to_vec()),
        }

        match &self.outcome {
            MockOutcome::Finished(result) => Ok(result.clone()),
            MockOutcome::LaunchFailure(kind, message) => {
                let program = argv.first().map(String::as_str).unwrap_or_default();
                Err(DispatchError::launch_failure(
                    program,
                    io::Error::new(*kind, message.clone()),
                ))
            }
        }
    }
}
