use clap::{Parser, ValueEnum};

/// Install a Lazarus IDE / Free Pascal release onto a CI runner.
///
/// Every option can also come from the environment, so the binary runs
/// unchanged as a GitHub Actions step (`INPUT_LAZARUS-VERSION`).
#[derive(Debug, Parser)]
#[command(name = "lazarus-setup", version, about)]
pub struct Cli {
    /// A cataloged version (e.g. 2.0.6), "stable" or "dist".
    #[arg(
        long = "lazarus-version",
        env = "INPUT_LAZARUS-VERSION",
        default_value = "dist"
    )]
    pub lazarus_version: String,

    /// Extra attempts after a failed HTTP request.
    #[arg(long, env = "LAZARUS_SETUP_DOWNLOAD_RETRIES", default_value_t = 3)]
    pub download_retries: u32,

    /// Per-request HTTP timeout in seconds.
    #[arg(
        long = "http-timeout",
        env = "LAZARUS_SETUP_HTTP_TIMEOUT",
        default_value_t = 600
    )]
    pub http_timeout_secs: u64,

    /// Print the versions available on this platform and exit.
    #[arg(long)]
    pub list_versions: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Debug logging for every crate, not just this one.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags() {
        let cli = Cli::try_parse_from([
            "lazarus-setup",
            "--lazarus-version",
            "1.8.4",
            "--download-retries",
            "0",
            "--http-timeout",
            "30",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.lazarus_version, "1.8.4");
        assert_eq!(cli.download_retries, 0);
        assert_eq!(cli.http_timeout_secs, 30);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(!cli.list_versions);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["lazarus-setup", "--format", "yaml"]).is_err());
    }
}
