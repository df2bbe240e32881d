//! Pure planning: which steps an install request needs, in order.

use std::path::{Path, PathBuf};

use crate::core::catalog::{resolve_download_url, ArtifactRole};
use crate::core::error::SetupResult;
use crate::core::platform::Platform;
use crate::core::process::CommandLine;
use crate::core::version::{self, ResolvedVersion};

/// GUI toolkit headers the Linux IDE package links against.
// TODO: move to libgtk-3-dev once the catalog carries gtk3 IDE builds.
pub const GTK_DEV_PACKAGE: &str = "libgtk2.0-dev";
/// Umbrella package in the Ubuntu repository.
pub const DIST_PACKAGE: &str = "lazarus";
/// Directory under the runner temp root the Windows installer targets.
pub const WINDOWS_INSTALL_DIR: &str = "lazarus";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStep {
    /// `apt update`
    RefreshPackageIndex,
    /// `apt install -y <name>`
    InstallSystemPackage(&'static str),
    /// Download one catalog file and hand it to the platform installer.
    Artifact { role: ArtifactRole, url: String },
    /// Put the install directory on PATH.
    RegisterPath,
}

#[derive(Debug, Clone)]
pub struct InstallPlan {
    pub platform: Platform,
    pub resolved: ResolvedVersion,
    /// Served entirely from the OS package repository.
    pub native_repository: bool,
    pub steps: Vec<InstallStep>,
}

impl InstallPlan {
    /// Whether executing the plan needs the runner temp directory.
    pub fn needs_install_dir(&self) -> bool {
        self.steps.contains(&InstallStep::RegisterPath)
    }

    pub fn artifact_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, InstallStep::Artifact { .. }))
            .count()
    }
}

/// Resolve `requested` and lay out every step for `platform`.
///
/// All URLs are resolved here so a catalog gap fails before any side effect.
pub fn plan(requested: &str, platform: Platform) -> SetupResult<InstallPlan> {
    let resolved = version::resolve(requested, platform)?;

    if resolved.is_alias_dist && platform.has_native_repository() {
        return Ok(InstallPlan {
            platform,
            resolved,
            native_repository: true,
            steps: vec![
                InstallStep::RefreshPackageIndex,
                InstallStep::InstallSystemPackage(DIST_PACKAGE),
            ],
        });
    }

    let mut steps = Vec::new();
    if platform == Platform::LinuxAmd64 {
        steps.push(InstallStep::RefreshPackageIndex);
        steps.push(InstallStep::InstallSystemPackage(GTK_DEV_PACKAGE));
    }

    for role in ArtifactRole::install_order(platform) {
        steps.push(InstallStep::Artifact {
            role: *role,
            url: resolve_download_url(platform, resolved.version, *role)?,
        });
    }

    // dpkg puts the binaries on the system PATH itself.
    if platform == Platform::Windows {
        steps.push(InstallStep::RegisterPath);
    }

    Ok(InstallPlan {
        platform,
        resolved,
        native_repository: false,
        steps,
    })
}

// ── Commands ────────────────────────────────────────────

pub fn refresh_index_command() -> CommandLine {
    CommandLine::sudo("apt").arg("update")
}

pub fn system_package_command(name: &str) -> CommandLine {
    CommandLine::sudo("apt").args(["install", "-y", name])
}

pub fn deb_install_command(package: &Path) -> CommandLine {
    CommandLine::sudo("dpkg")
        .arg("-i")
        .arg(package.to_string_lossy())
}

pub fn silent_install_command(installer: &Path, install_dir: &Path) -> CommandLine {
    CommandLine::new(installer.to_string_lossy())
        .arg("/VERYSILENT")
        .arg(format!("/DIR={}", install_dir.display()))
}

/// `<temp root>/lazarus`
pub fn windows_install_dir(temp_root: &str) -> PathBuf {
    PathBuf::from(temp_root).join(WINDOWS_INSTALL_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::STABLE_VERSION;
    use crate::core::error::SetupError;

    fn artifact_files(plan: &InstallPlan) -> Vec<(ArtifactRole, String)> {
        plan.steps
            .iter()
            .filter_map(|s| match s {
                InstallStep::Artifact { role, url } => {
                    Some((*role, url.rsplit('/').next().unwrap_or_default().to_string()))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn linux_release_plan() {
        let plan = plan("2.0.6", Platform::LinuxAmd64).unwrap();
        assert!(!plan.native_repository);
        assert!(!plan.needs_install_dir());
        assert_eq!(plan.steps[0], InstallStep::RefreshPackageIndex);
        assert_eq!(
            plan.steps[1],
            InstallStep::InstallSystemPackage(GTK_DEV_PACKAGE)
        );
        assert_eq!(
            artifact_files(&plan),
            vec![
                (
                    ArtifactRole::CompilerSourcePackage,
                    "fpc-src_3.0.4-2_amd64.deb".to_string()
                ),
                (
                    ArtifactRole::CompilerPackage,
                    "fpc-laz_3.0.4-1_amd64.deb".to_string()
                ),
                (
                    ArtifactRole::IdePackage,
                    "lazarus-project_2.0.6-0_amd64.deb".to_string()
                ),
            ]
        );
        assert_eq!(plan.steps.len(), 5);
    }

    #[test]
    fn linux_dist_uses_repository() {
        let plan = plan("dist", Platform::LinuxAmd64).unwrap();
        assert!(plan.native_repository);
        assert_eq!(plan.artifact_count(), 0);
        assert_eq!(
            plan.steps,
            vec![
                InstallStep::RefreshPackageIndex,
                InstallStep::InstallSystemPackage(DIST_PACKAGE),
            ]
        );
    }

    #[test]
    fn windows_dist_matches_stable() {
        let dist = plan("dist", Platform::Windows).unwrap();
        let stable = plan("stable", Platform::Windows).unwrap();
        assert!(!dist.native_repository);
        assert_eq!(dist.steps, stable.steps);
        assert_eq!(dist.resolved.version, STABLE_VERSION);
    }

    #[test]
    fn windows_plan_registers_path_last() {
        let plan = plan("1.0.12", Platform::Windows).unwrap();
        assert!(plan.needs_install_dir());
        assert_eq!(plan.artifact_count(), 1);
        assert_eq!(plan.steps.last(), Some(&InstallStep::RegisterPath));
        assert_eq!(
            artifact_files(&plan),
            vec![(
                ArtifactRole::IdePackage,
                "lazarus-1.0.12-fpc-2.6.2-win32.exe".to_string()
            )]
        );
    }

    #[test]
    fn unknown_version_has_no_plan() {
        let err = plan("0.0.1", Platform::Windows).unwrap_err();
        assert!(matches!(err, SetupError::UnknownVersion(_)));
    }

    #[test]
    fn command_lines() {
        assert_eq!(refresh_index_command().to_string(), "sudo apt update");
        assert_eq!(
            system_package_command("libgtk2.0-dev").to_string(),
            "sudo apt install -y libgtk2.0-dev"
        );
        assert_eq!(
            deb_install_command(Path::new("/tmp/abc")).to_string(),
            "sudo dpkg -i /tmp/abc"
        );
        let dir = windows_install_dir("/runner/temp");
        assert_eq!(dir, Path::new("/runner/temp").join("lazarus"));
        let cmd = silent_install_command(Path::new("/runner/temp/x.exe"), &dir);
        assert_eq!(cmd.args[0], "/VERYSILENT");
        assert_eq!(cmd.args[1], format!("/DIR={}", dir.display()));
    }
}
