use crate::utils::types::InvocationRequest;

/// Target domain flag
pub const TARGET_FLAG: &str = "-t";
/// Output file flag
pub const OUTPUT_FLAG: &str = "-u";
pub const RESOLVED_FLAG: &str = "--resolved";
pub const PORT_SCAN_FLAG: &str = "--pscan";
pub const VERBOSE_FLAG: &str = "--verbose";
pub const IP_FLAG: &str = "--ip";
pub const IPV6_ONLY_FLAG: &str = "--ipv6-only";
/// Screenshots directory flag, followed by its path
pub const SCREENSHOTS_FLAG: &str = "-s";

/// Translates an [`InvocationRequest`] into the external tool's command line
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    binary: String,
}

impl CommandBuilder {
    pub fn new(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }

    /// Build the tool's argument vector, without the program name.
    ///
    /// The order is fixed: target and output first, then `--resolved`,
    /// `--pscan`, `--verbose`, `--ip`, `--ipv6-only` and finally
    /// `-s <path>`, each only when requested. An empty screenshots path
    /// counts as unset.
    pub fn build_args(&self, request: &InvocationRequest) -> Vec<String> {
        let mut args = vec![
            TARGET_FLAG.to_string(),
            request.domain.clone(),
            OUTPUT_FLAG.to_string(),
            request.output_path.clone(),
        ];

        let switches = [
            (request.resolve_to_ip, RESOLVED_FLAG),
            (request.enable_port_scan, PORT_SCAN_FLAG),
            (request.verbose, VERBOSE_FLAG),
            (request.show_ip, IP_FLAG),
            (request.ipv6_only, IPV6_ONLY_FLAG),
        ];
        args.extend(
            switches
                .iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, flag)| flag.to_string()),
        );

        if let Some(path) = request.screenshots_path.as_deref().filter(|p| !p.is_empty()) {
            args.push(SCREENSHOTS_FLAG.to_string());
            args.push(path.to_string());
        }

        args
    }

    /// Full command line with the program name first
    pub fn command_line(&self, request: &InvocationRequest) -> Vec<String> {
        let mut argv = vec![self.binary.clone()];
        argv.extend(self.build_args(request));
        argv
    }
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(crate::utils::config::DEFAULT_BINARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn request() -> InvocationRequest {
        let started_at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        InvocationRequest::new("example.com", started_at)
    }

    #[test]
    fn test_no_flags_produces_prefix_only() {
        let builder = CommandBuilder::default();
        assert_eq!(
            builder.command_line(&request()),
            vec!["findomain", "-t", "example.com", "-u", "example.com_20240102_030405.txt"]
        );
    }

    #[test]
    fn test_resolved_and_ip_with_explicit_output() {
        let builder = CommandBuilder::default();
        let request = request()
            .with_output_path(Some("out.txt".to_string()))
            .with_resolve_to_ip(true)
            .with_show_ip(true);

        assert_eq!(
            builder.build_args(&request),
            vec!["-t", "example.com", "-u", "out.txt", "--resolved", "--ip"]
        );
    }

    #[test]
    fn test_all_flags_in_fixed_order() {
        let builder = CommandBuilder::new("/opt/findomain");
        let request = request()
            .with_output_path(Some("out.txt".to_string()))
            .with_ipv6_only(true)
            .with_show_ip(true)
            .with_verbose(true)
            .with_port_scan(true)
            .with_resolve_to_ip(true)
            .with_screenshots_path(Some("shots".to_string()));

        assert_eq!(
            builder.command_line(&request),
            vec![
                "/opt/findomain", "-t", "example.com", "-u", "out.txt",
                "--resolved", "--pscan", "--verbose", "--ip", "--ipv6-only",
                "-s", "shots",
            ]
        );
    }

    #[test]
    fn test_screenshots_path_is_last() {
        let builder = CommandBuilder::default();
        let request = request()
            .with_port_scan(true)
            .with_screenshots_path(Some("dir with spaces".to_string()));

        let args = builder.build_args(&request);
        assert_eq!(&args[args.len() - 3..], &["--pscan", "-s", "dir with spaces"]);
    }

    #[test]
    fn test_domain_passed_verbatim() {
        let builder = CommandBuilder::default();
        let started_at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let request = InvocationRequest::new("a.com; rm -rf /", started_at);

        let args = builder.build_args(&request);
        assert_eq!(args[1], "a.com; rm -rf /");
    }
}
