use chrono::{DateTime, Local};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use crate::utils::types::InvocationRequest;

/// findomain-auto - run findomain with timestamped output files
#[derive(Parser, Debug)]
#[command(name = "findomain-auto")]
#[command(about = "Automate Findomain with various options.", long_about = None)]
#[command(version)]
pub struct CliArgs {
    /// The target domain
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    /// Output file path (default: <DOMAIN>_<YYYYMMDD_HHMMSS>.txt)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Resolve subdomains to IP addresses (also accepted as -resolved)
    #[arg(long)]
    pub resolved: bool,

    /// Enable port scanner (also accepted as -pscan)
    #[arg(long)]
    pub pscan: bool,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Show/write the IP address of resolved subdomains (also accepted as -ip)
    #[arg(long)]
    pub ip: bool,

    /// Perform an IPv6 lookup only (also accepted as -ipv6)
    #[arg(long = "ipv6_only", visible_alias = "ipv6")]
    pub ipv6_only: bool,

    /// Path to save screenshots of HTTP(S) websites
    #[arg(short = 's', long = "screenshots_path", value_name = "PATH")]
    pub screenshots_path: Option<String>,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Single-dash long flags and their canonical spelling
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-resolved", "--resolved"),
    ("-pscan", "--pscan"),
    ("-ip", "--ip"),
    ("-ipv6", "--ipv6_only"),
];

/// Options whose next token is a value and must not be rewritten
const VALUE_OPTIONS: &[&str] = &["-o", "--output", "-s", "--screenshots_path", "--config"];

impl CliArgs {
    /// Parse the process arguments, accepting the single-dash long flags
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    /// Convert parsed arguments into an invocation request started at `started_at`
    pub fn into_request(self, started_at: DateTime<Local>) -> InvocationRequest {
        InvocationRequest::new(&self.domain, started_at)
            .with_output_path(self.output)
            .with_resolve_to_ip(self.resolved)
            .with_port_scan(self.pscan)
            .with_verbose(self.verbose)
            .with_show_ip(self.ip)
            .with_ipv6_only(self.ipv6_only)
            .with_screenshots_path(self.screenshots_path)
    }
}

/// Rewrite `-resolved`, `-pscan`, `-ip` and `-ipv6` into their `--` forms.
///
/// clap only supports single-character short flags, so these tokens would
/// otherwise be read as clusters (`-ip` as `-i -p`). Values of options and
/// everything after `--` are left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for arg in args.into_iter().map(Into::into) {
        if passthrough || expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|token| {
            if token == "--" {
                passthrough = true;
            }
            expect_value = VALUE_OPTIONS.contains(&token);
            LEGACY_FLAGS
                .iter()
                .find(|(legacy, _)| *legacy == token)
                .map(|(_, canonical)| OsString::from(*canonical))
        });
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse(args: &[&str]) -> CliArgs {
        let mut argv = vec!["findomain-auto"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(normalize_legacy_flags(argv)).unwrap()
    }

    fn started_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap()
    }

    #[test]
    fn test_domain_only() {
        let args = parse(&["example.com"]);

        assert_eq!(args.domain, "example.com");
        assert!(args.output.is_none());
        assert!(!args.resolved && !args.pscan && !args.verbose && !args.ip && !args.ipv6_only);
        assert!(args.screenshots_path.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_single_dash_long_flags() {
        let args = parse(&["example.com", "-resolved", "-pscan", "-ip", "-ipv6"]);

        assert!(args.resolved);
        assert!(args.pscan);
        assert!(args.ip);
        assert!(args.ipv6_only);
    }

    #[test]
    fn test_double_dash_long_flags() {
        let args = parse(&["--ip", "--ipv6_only", "--verbose", "example.com"]);

        assert!(args.ip);
        assert!(args.ipv6_only);
        assert!(args.verbose);
        assert_eq!(args.domain, "example.com");
    }

    #[test]
    fn test_short_options() {
        let args = parse(&["example.com", "-o", "out.txt", "-v", "-s", "shots"]);

        assert_eq!(args.output.as_deref(), Some("out.txt"));
        assert!(args.verbose);
        assert_eq!(args.screenshots_path.as_deref(), Some("shots"));
    }

    #[test]
    fn test_long_value_options() {
        let args = parse(&[
            "example.com",
            "--output=results.txt",
            "--screenshots_path",
            "/tmp/shots",
            "--config",
            "findomain.json",
        ]);

        assert_eq!(args.output.as_deref(), Some("results.txt"));
        assert_eq!(args.screenshots_path.as_deref(), Some("/tmp/shots"));
        assert_eq!(args.config, Some(PathBuf::from("findomain.json")));
    }

    #[test]
    fn test_missing_domain_is_rejected() {
        let result = CliArgs::try_parse_from(["findomain-auto", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_leaves_option_values_alone() {
        let normalized = normalize_legacy_flags(["findomain-auto", "-o", "-ip", "example.com", "-ip"]);
        assert_eq!(
            normalized,
            vec!["findomain-auto", "-o", "-ip", "example.com", "--ip"]
                .into_iter()
                .map(OsString::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_normalize_stops_after_double_dash() {
        let normalized = normalize_legacy_flags(["findomain-auto", "--", "-pscan"]);
        assert_eq!(normalized[2], OsString::from("-pscan"));
    }

    #[test]
    fn test_into_request_defaults_output_path() {
        let request = parse(&["example.com"]).into_request(started_at());
        assert_eq!(request.output_path, "example.com_20231231_235958.txt");
    }

    #[test]
    fn test_into_request_maps_every_flag() {
        let request = parse(&[
            "example.com", "-o", "out.txt", "-resolved", "-pscan", "-v", "-ip", "-ipv6", "-s", "shots",
        ])
        .into_request(started_at());

        assert_eq!(request.domain, "example.com");
        assert_eq!(request.output_path, "out.txt");
        assert!(request.resolve_to_ip);
        assert!(request.enable_port_scan);
        assert!(request.verbose);
        assert!(request.show_ip);
        assert!(request.ipv6_only);
        assert_eq!(request.screenshots_path.as_deref(), Some("shots"));
    }
}
