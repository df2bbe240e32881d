//! Known Lazarus releases and their per-platform package files.

pub mod releases;
pub mod url;

use serde::{Deserialize, Serialize};

use crate::core::error::{SetupError, SetupResult};
use crate::core::platform::Platform;

use releases::{DebPackages, LINUX_PACKAGES, WINDOWS_INSTALLERS};

pub use url::resolve_download_url;

/// Latest known good release, used by the "stable" alias.
///
/// Maintained by hand alongside the release tables.
pub static STABLE_VERSION: &str = "2.0.6";

/// What kind of package a catalog file is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactRole {
    /// The Lazarus IDE package (or the all-in-one Windows installer).
    IdePackage,
    /// The Free Pascal compiler package.
    CompilerPackage,
    /// The Free Pascal sources package.
    CompilerSourcePackage,
}

impl ArtifactRole {
    /// Packages needed on `platform`, in installation order.
    pub fn install_order(platform: Platform) -> &'static [ArtifactRole] {
        match platform {
            Platform::Windows => &[ArtifactRole::IdePackage],
            Platform::LinuxAmd64 => &[
                ArtifactRole::CompilerSourcePackage,
                ArtifactRole::CompilerPackage,
                ArtifactRole::IdePackage,
            ],
        }
    }
}

impl std::fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactRole::IdePackage => write!(f, "ide-package"),
            ArtifactRole::CompilerPackage => write!(f, "compiler-package"),
            ArtifactRole::CompilerSourcePackage => write!(f, "compiler-source-package"),
        }
    }
}

/// One row of the catalog, flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub platform: Platform,
    pub version: &'static str,
    pub role: ArtifactRole,
    pub filename: &'static str,
}

/// Versions available on `platform`, newest first.
pub fn versions(platform: Platform) -> Vec<&'static str> {
    match platform {
        Platform::Windows => WINDOWS_INSTALLERS.iter().map(|(v, _)| *v).collect(),
        Platform::LinuxAmd64 => LINUX_PACKAGES.iter().map(|p| p.version).collect(),
    }
}

/// Exact, case-sensitive membership test. Returns the catalog's own copy.
pub fn find_version(platform: Platform, version: &str) -> Option<&'static str> {
    versions(platform).into_iter().find(|v| *v == version)
}

pub fn contains(platform: Platform, version: &str) -> bool {
    find_version(platform, version).is_some()
}

/// Look up the package file for an alias-expanded version.
///
/// `role` is ignored on Windows where the installer is the only artifact.
pub fn lookup(platform: Platform, version: &str, role: ArtifactRole) -> SetupResult<&'static str> {
    let not_found = || SetupError::ArtifactNotFound {
        platform,
        version: version.to_string(),
        role,
    };

    match platform {
        Platform::Windows => WINDOWS_INSTALLERS
            .iter()
            .find(|(v, _)| *v == version)
            .map(|(_, file)| *file)
            .ok_or_else(not_found),
        Platform::LinuxAmd64 => {
            let packages = LINUX_PACKAGES
                .iter()
                .find(|p| p.version == version)
                .ok_or_else(not_found)?;
            Ok(deb_for_role(packages, role))
        }
    }
}

fn deb_for_role(packages: &DebPackages, role: ArtifactRole) -> &'static str {
    match role {
        ArtifactRole::IdePackage => packages.ide,
        ArtifactRole::CompilerPackage => packages.compiler,
        ArtifactRole::CompilerSourcePackage => packages.compiler_source,
    }
}

/// Every (platform, version, role) row in the catalog.
pub fn entries() -> impl Iterator<Item = CatalogEntry> {
    let windows = WINDOWS_INSTALLERS
        .iter()
        .map(|&(version, filename)| CatalogEntry {
            platform: Platform::Windows,
            version,
            role: ArtifactRole::IdePackage,
            filename,
        });

    let linux = LINUX_PACKAGES.iter().flat_map(|packages| {
        ArtifactRole::install_order(Platform::LinuxAmd64)
            .iter()
            .map(move |role| CatalogEntry {
                platform: Platform::LinuxAmd64,
                version: packages.version,
                role: *role,
                filename: deb_for_role(packages, *role),
            })
    });

    windows.chain(linux)
}
