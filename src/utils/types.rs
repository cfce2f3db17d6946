use chrono::{DateTime, Local};
use std::process::{ExitStatus, Output};

/// Timestamp layout used in derived output file names
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Validated, immutable set of options for one findomain run
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    pub domain: String,
    pub output_path: String,
    pub resolve_to_ip: bool,
    pub enable_port_scan: bool,
    pub verbose: bool,
    pub show_ip: bool,
    pub ipv6_only: bool,
    pub screenshots_path: Option<String>,
}

impl InvocationRequest {
    /// Create a request with every flag off and the output path derived from `started_at`
    pub fn new(domain: &str, started_at: DateTime<Local>) -> Self {
        Self {
            domain: domain.to_string(),
            output_path: default_output_path(domain, started_at),
            resolve_to_ip: false,
            enable_port_scan: false,
            verbose: false,
            show_ip: false,
            ipv6_only: false,
            screenshots_path: None,
        }
    }

    /// Replace the derived output path. `None` and empty paths keep the derived one.
    pub fn with_output_path(mut self, output_path: Option<String>) -> Self {
        if let Some(path) = output_path.filter(|p| !p.is_empty()) {
            self.output_path = path;
        }
        self
    }

    pub fn with_resolve_to_ip(mut self, enabled: bool) -> Self {
        self.resolve_to_ip = enabled;
        self
    }

    pub fn with_port_scan(mut self, enabled: bool) -> Self {
        self.enable_port_scan = enabled;
        self
    }

    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    pub fn with_show_ip(mut self, enabled: bool) -> Self {
        self.show_ip = enabled;
        self
    }

    pub fn with_ipv6_only(mut self, enabled: bool) -> Self {
        self.ipv6_only = enabled;
        self
    }

    /// Set the screenshots directory. Empty paths count as unset.
    pub fn with_screenshots_path(mut self, path: Option<String>) -> Self {
        self.screenshots_path = path.filter(|p| !p.is_empty());
        self
    }
}

/// Derive `<domain>_<YYYYMMDD_HHMMSS>.txt` from the invocation start time
pub fn default_output_path(domain: &str, started_at: DateTime<Local>) -> String {
    format!("{}_{}.txt", domain, started_at.format(OUTPUT_TIMESTAMP_FORMAT))
}

/// Exit code and captured streams of one child-process execution
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl InvocationResult {
    pub fn new(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            exit_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    /// Build a result from a finished child process
    pub fn from_output(output: &Output) -> Self {
        Self {
            exit_code: exit_code_of(&output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Exit code of a finished process. Signal terminations map to `-signal`.
pub fn exit_code_of(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}
