use colored::*;
use crate::utils::error::DispatchError;
use crate::utils::types::{InvocationRequest, InvocationResult};

/// Console report for one dispatch, routed to the matching stream
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Printed to stdout
    Success(String),
    /// Printed to stderr
    Failure(String),
}

impl Report {
    pub fn text(&self) -> &str {
        match self {
            Report::Success(text) | Report::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Report::Success(_))
    }

    /// Write the report to the console
    pub fn emit(&self) {
        match self {
            Report::Success(text) => println!("{}", text),
            Report::Failure(text) => eprintln!("{}", text),
        }
    }
}

/// Formats dispatcher outcomes for CLI output
pub struct OutputFormatter;

impl OutputFormatter {
    /// Report a finished tool run.
    ///
    /// Exit code 0 names the output file and, in verbose mode, appends the
    /// tool's stdout. Any other code reports the code and the tool's stderr.
    pub fn format_report(result: &InvocationResult, request: &InvocationRequest) -> Report {
        if result.is_success() {
            let mut output = Self::format_success(&format!(
                "Findomain completed successfully. Output saved to {}",
                request.output_path
            ));
            if request.verbose {
                output.push('\n');
                output.push_str(result.stdout.trim_end_matches('\n'));
            }
            Report::Success(output)
        } else {
            let mut output = format!(
                "{} Findomain failed with return code {}",
                "Failure:".red().bold(),
                result.exit_code
            );
            output.push('\n');
            output.push_str(&format!(
                "{} {}",
                "Error:".red().bold(),
                result.stderr.trim_end_matches('\n')
            ));
            Report::Failure(output)
        }
    }

    /// Report an error that prevented the tool from running
    pub fn format_dispatch_error(error: &DispatchError) -> Report {
        Report::Failure(Self::format_error(error))
    }

    /// Render a command line for display, quoting arguments with whitespace
    pub fn format_command_line(argv: &[String]) -> String {
        argv.iter()
            .map(|arg| {
                if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                    format!("{:?}", arg)
                } else {
                    arg.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Format error message for CLI display
    pub fn format_error(error: &DispatchError) -> String {
        format!("{} {}", "Error:".red().bold(), error.to_string().red())
    }

    /// Format success message for CLI display
    pub fn format_success(message: &str) -> String {
        format!("{} {}", "Success:".green().bold(), message)
    }

    /// Format info message for CLI display
    pub fn format_info(message: &str) -> String {
        format!("{} {}", "Info:".blue().bold(), message)
    }
}
