use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::core::catalog::{self, STABLE_VERSION};
use crate::core::downloader::Downloader;
use crate::core::environment::{ActionsEnvironment, RunnerEnvironment, RUNNER_TEMP};
use crate::core::error::SetupResult;
use crate::core::http::build_http_client;
use crate::core::installer::{InstallContext, InstallOutcome, Installer};
use crate::core::platform::Platform;
use crate::core::process::ProcessRunner;
use crate::core::version::validate_request;

/// Install the requested version with the real collaborators.
pub async fn install(cli: &Cli) -> SetupResult<InstallOutcome> {
    // A typo in the version is reported as such on any runner.
    validate_request(&cli.lazarus_version)?;
    let platform = Platform::current()?;
    let environment = ActionsEnvironment::new();

    let download_dir = environment
        .require_var(RUNNER_TEMP)
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir());

    let client = build_http_client(Duration::from_secs(cli.http_timeout_secs))?;
    let downloader = Downloader::new(client, download_dir).with_retries(cli.download_retries);
    debug!("Downloads go to {:?}", downloader.dest_dir());
    let runner = ProcessRunner::new();

    let mut installer = Installer::new(InstallContext {
        platform,
        fetcher: &downloader,
        runner: &runner,
        environment: &environment,
    });
    installer.install(&cli.lazarus_version).await
}

/// Catalog versions for the current platform, newest first.
pub fn list_versions() -> SetupResult<Vec<String>> {
    let platform = Platform::current()?;
    info!("Versions available on {}", platform);
    Ok(version_lines(platform))
}

fn version_lines(platform: Platform) -> Vec<String> {
    catalog::versions(platform)
        .into_iter()
        .map(|v| {
            if v == STABLE_VERSION {
                format!("{v} (stable)")
            } else {
                v.to_string()
            }
        })
        .collect()
}

pub fn render_outcome(outcome: &InstallOutcome, format: OutputFormat) -> SetupResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            match &outcome.version {
                Some(version) => lines.push(format!(
                    "Installed Lazarus {version} ({}) on {}",
                    outcome.requested, outcome.platform
                )),
                None => lines.push(format!(
                    "Installed Lazarus from the {} package repository",
                    outcome.platform
                )),
            }
            for artifact in &outcome.artifacts {
                lines.push(format!("  {}: {}", artifact.role, artifact.url));
            }
            if let Some(dir) = &outcome.path_registered {
                lines.push(format!("  PATH += {}", dir.display()));
            }
            Ok(lines.join("\n"))
        }
    }
}
