use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::core::catalog::ArtifactRole;
use crate::core::environment::RUNNER_TEMP;
use crate::core::error::{SetupError, SetupResult};
use crate::core::platform::Platform;

use super::context::InstallContext;
use super::plan::{self, InstallPlan, InstallStep};

/// Where an install currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    Resolving,
    PreparingSystem,
    Downloading(ArtifactRole),
    Installing(ArtifactRole),
    PathRegistered,
    Done,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstalledArtifact {
    pub role: ArtifactRole,
    pub url: String,
    /// The file handed to the installer (after any rename).
    pub path: PathBuf,
}

/// Summary of a finished install.
#[derive(Debug, Clone, Serialize)]
pub struct InstallOutcome {
    pub requested: String,
    /// `None` when the OS repository decided the version.
    pub version: Option<String>,
    pub platform: Platform,
    pub native_repository: bool,
    pub artifacts: Vec<InstalledArtifact>,
    pub path_registered: Option<PathBuf>,
}

/// Runs an [`InstallPlan`] step by step, stopping at the first failure.
///
/// Nothing is retried and nothing already installed is rolled back.
pub struct Installer<'a> {
    ctx: InstallContext<'a>,
    state: InstallState,
}

impl<'a> Installer<'a> {
    pub fn new(ctx: InstallContext<'a>) -> Self {
        Self {
            ctx,
            state: InstallState::Resolving,
        }
    }

    pub fn state(&self) -> InstallState {
        self.state
    }

    fn transition(&mut self, next: InstallState) {
        debug!("install state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub async fn install(&mut self, requested: &str) -> SetupResult<InstallOutcome> {
        info!("Installing Lazarus {} on {}", requested, self.ctx.platform);
        self.transition(InstallState::Resolving);

        match self.run(requested).await {
            Ok(outcome) => {
                self.transition(InstallState::Done);
                Ok(outcome)
            }
            Err(e) => {
                self.transition(InstallState::Failed);
                Err(e)
            }
        }
    }

    async fn run(&mut self, requested: &str) -> SetupResult<InstallOutcome> {
        let plan = plan::plan(requested, self.ctx.platform)?;
        debug!(
            "{} step(s) planned, {} artifact(s): {:?}",
            plan.steps.len(),
            plan.artifact_count(),
            plan.steps
        );

        let install_dir = if plan.needs_install_dir() {
            let temp_root = self.ctx.environment.require_var(RUNNER_TEMP)?;
            Some(plan::windows_install_dir(&temp_root))
        } else {
            None
        };

        let mut outcome = InstallOutcome {
            requested: requested.to_string(),
            version: (!plan.native_repository).then(|| plan.resolved.version.to_string()),
            platform: plan.platform,
            native_repository: plan.native_repository,
            artifacts: Vec::new(),
            path_registered: None,
        };

        self.execute(&plan, install_dir.as_deref(), &mut outcome).await?;

        match &outcome.version {
            Some(version) => info!("Lazarus {} installed successfully", version),
            None => info!("Lazarus installed from the {} package repository", plan.platform),
        }
        Ok(outcome)
    }

    async fn execute(
        &mut self,
        plan: &InstallPlan,
        install_dir: Option<&Path>,
        outcome: &mut InstallOutcome,
    ) -> SetupResult<()> {
        for step in &plan.steps {
            match step {
                InstallStep::RefreshPackageIndex => {
                    self.transition(InstallState::PreparingSystem);
                    self.ctx.runner.run(&plan::refresh_index_command()).await?;
                }
                InstallStep::InstallSystemPackage(name) => {
                    self.transition(InstallState::PreparingSystem);
                    self.ctx
                        .runner
                        .run(&plan::system_package_command(name))
                        .await?;
                }
                InstallStep::Artifact { role, url } => {
                    let artifact = self.install_artifact(*role, url, install_dir).await?;
                    outcome.artifacts.push(artifact);
                }
                InstallStep::RegisterPath => {
                    let dir = install_dir.ok_or_else(|| {
                        SetupError::MissingEnvironment(RUNNER_TEMP.to_string())
                    })?;
                    self.ctx.environment.add_to_path(dir)?;
                    self.transition(InstallState::PathRegistered);
                    outcome.path_registered = Some(dir.to_path_buf());
                }
            }
        }
        Ok(())
    }

    async fn install_artifact(
        &mut self,
        role: ArtifactRole,
        url: &str,
        install_dir: Option<&Path>,
    ) -> SetupResult<InstalledArtifact> {
        self.transition(InstallState::Downloading(role));
        let downloaded = self.ctx.fetcher.download(url).await?;

        self.transition(InstallState::Installing(role));
        let path = match self.ctx.platform {
            Platform::Windows => {
                let dir = install_dir.ok_or_else(|| {
                    SetupError::MissingEnvironment(RUNNER_TEMP.to_string())
                })?;
                // The download has no extension and Windows will not run it as-is.
                let installer = with_exe_extension(&downloaded);
                tokio::fs::rename(&downloaded, &installer)
                    .await
                    .map_err(|source| SetupError::Io {
                        path: downloaded.clone(),
                        source,
                    })?;
                self.ctx
                    .runner
                    .run(&plan::silent_install_command(&installer, dir))
                    .await?;
                installer
            }
            Platform::LinuxAmd64 => {
                self.ctx
                    .runner
                    .run(&plan::deb_install_command(&downloaded))
                    .await?;
                downloaded
            }
        };

        Ok(InstalledArtifact {
            role,
            url: url.to_string(),
            path,
        })
    }
}

/// `name` -> `name.exe`, keeping any existing extension.
fn with_exe_extension(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(".exe");
    PathBuf::from(name)
}
