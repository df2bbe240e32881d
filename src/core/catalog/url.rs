//! Download URLs for catalog files.

use crate::core::error::SetupResult;
use crate::core::platform::Platform;

use super::{lookup, ArtifactRole};

const SOURCEFORGE_FILES: &str = "https://sourceforge.net/projects/lazarus/files";

/// Folder holding every release for a platform.
fn base_url(platform: Platform) -> String {
    let folder = match platform {
        Platform::Windows => "Lazarus%20Windows%2032%20bits",
        Platform::LinuxAmd64 => "Lazarus%20Linux%20amd64%20DEB",
    };
    format!("{SOURCEFORGE_FILES}/{folder}")
}

/// Release folder name, e.g. `Lazarus%202.0.6`.
fn version_segment(version: &str) -> String {
    format!("Lazarus%20{version}")
}

/// Construct the download URL for a package file.
///
/// `https://sourceforge.net/projects/lazarus/files/<platform folder>/Lazarus%20<version>/<file>`
pub fn resolve_download_url(
    platform: Platform,
    version: &str,
    role: ArtifactRole,
) -> SetupResult<String> {
    let filename = lookup(platform, version, role)?;
    Ok(format!(
        "{base}/{segment}/{filename}",
        base = base_url(platform),
        segment = version_segment(version),
    ))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::core::catalog::entries;
    use crate::core::error::SetupError;

    #[test]
    fn windows_url() {
        let url = resolve_download_url(Platform::Windows, "1.0.12", ArtifactRole::IdePackage)
            .unwrap();
        assert_eq!(
            url,
            "https://sourceforge.net/projects/lazarus/files/Lazarus%20Windows%2032%20bits/Lazarus%201.0.12/lazarus-1.0.12-fpc-2.6.2-win32.exe"
        );
    }

    #[test]
    fn linux_url() {
        let url = resolve_download_url(
            Platform::LinuxAmd64,
            "2.0.6",
            ArtifactRole::CompilerSourcePackage,
        )
        .unwrap();
        assert_eq!(
            url,
            "https://sourceforge.net/projects/lazarus/files/Lazarus%20Linux%20amd64%20DEB/Lazarus%202.0.6/fpc-src_3.0.4-2_amd64.deb"
        );
    }

    #[test]
    fn urls_are_deterministic_and_distinct() {
        let mut seen = HashSet::new();
        for entry in entries() {
            let first = resolve_download_url(entry.platform, entry.version, entry.role).unwrap();
            let second = resolve_download_url(entry.platform, entry.version, entry.role).unwrap();
            assert_eq!(first, second);
            assert!(first.ends_with(entry.filename));
            assert!(seen.insert(first), "duplicate url for {entry:?}");
        }
    }

    #[test]
    fn unknown_version_bubbles_not_found() {
        let err = resolve_download_url(Platform::Windows, "0.9", ArtifactRole::IdePackage)
            .unwrap_err();
        assert!(matches!(err, SetupError::ArtifactNotFound { .. }));
    }
}
