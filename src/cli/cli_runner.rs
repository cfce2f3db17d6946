use chrono::Local;
use crate::cli::{CliArgs, OutputFormatter, Report};
use crate::engine::CommandDispatcher;
use crate::runners::ToolRunner;
use crate::utils::{config::DispatcherConfig, types::InvocationRequest};

/// Main CLI runner that dispatches one request and builds its report
pub struct CliRunner {
    dispatcher: CommandDispatcher,
}

impl CliRunner {
    /// Create a runner that spawns the configured binary
    pub fn new(config: &DispatcherConfig) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(config),
        }
    }

    /// Create a runner around a custom tool runner
    pub fn with_runner(config: &DispatcherConfig, runner: Box<dyn ToolRunner>) -> Self {
        Self {
            dispatcher: CommandDispatcher::with_runner(config, runner),
        }
    }

    /// Run the tool for `request` and report the outcome.
    ///
    /// Launch failures become a failure report rather than an error, so the
    /// caller never has to abort.
    pub async fn run_request(&self, request: &InvocationRequest) -> Report {
        if request.verbose {
            let argv = self.dispatcher.command_line(request);
            eprintln!("{}", OutputFormatter::format_info(&format!(
                "Running: {}", OutputFormatter::format_command_line(&argv))));
        }

        match self.dispatcher.execute(request).await {
            Ok(result) => {
                if request.verbose {
                    eprintln!("{}", OutputFormatter::format_info(&format!(
                        "Findomain exited with code {}", result.exit_code)));
                }
                OutputFormatter::format_report(&result, request)
            }
            Err(e) => OutputFormatter::format_dispatch_error(&e),
        }
    }
}

/// Main entry point for CLI execution.
///
/// Always returns `Ok` once arguments parse: tool failures, launch failures
/// and configuration errors are printed, not turned into an exit status.
pub async fn run_cli() -> anyhow::Result<()> {
    let args = CliArgs::parse_args();
    let started_at = Local::now();

    let config = match DispatcherConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", OutputFormatter::format_error(&e));
            return Ok(());
        }
    };

    let request = args.into_request(started_at);
    if request.verbose {
        eprintln!("{}", OutputFormatter::format_info(&format!("Using binary: {}", config.binary)));
    }

    let runner = CliRunner::new(&config);
    runner.run_request(&request).await.emit();

    Ok(())
}
