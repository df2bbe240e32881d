//! Runner platform detection.

use serde::{Deserialize, Serialize};

use super::error::{SetupError, SetupResult};

/// Platforms the setup flow knows how to provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// Any Windows runner (the installers are 32-bit and run everywhere).
    Windows,
    /// x86_64 Linux with apt/dpkg (Ubuntu runners).
    LinuxAmd64,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Windows, Platform::LinuxAmd64];

    /// Detect the platform of the running process.
    pub fn current() -> SetupResult<Self> {
        Self::from_parts(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Map an `(os, arch)` pair as reported by `std::env::consts`.
    pub fn from_parts(os: &str, arch: &str) -> SetupResult<Self> {
        match (os, arch) {
            ("windows", _) => Ok(Self::Windows),
            ("linux", "x86_64") => Ok(Self::LinuxAmd64),
            _ => Err(SetupError::UnsupportedPlatform(format!("{os}/{arch}"))),
        }
    }

    /// Whether the "dist" alias can be served from the OS package repository.
    pub fn has_native_repository(&self) -> bool {
        matches!(self, Self::LinuxAmd64)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::LinuxAmd64 => "linux-amd64",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_supported_pairs() {
        assert_eq!(
            Platform::from_parts("linux", "x86_64").unwrap(),
            Platform::LinuxAmd64
        );
        assert_eq!(
            Platform::from_parts("windows", "x86_64").unwrap(),
            Platform::Windows
        );
        assert_eq!(
            Platform::from_parts("windows", "aarch64").unwrap(),
            Platform::Windows
        );
    }

    #[test]
    fn rejects_unknown_pairs() {
        let err = Platform::from_parts("macos", "aarch64").unwrap_err();
        assert!(matches!(err, SetupError::UnsupportedPlatform(ref p) if p == "macos/aarch64"));
        assert!(Platform::from_parts("linux", "aarch64").is_err());
    }

    #[test]
    fn only_linux_has_native_repository() {
        assert!(Platform::LinuxAmd64.has_native_repository());
        assert!(!Platform::Windows.has_native_repository());
    }

    #[test]
    fn detection_matches_host() {
        let platform = Platform::current();
        if cfg!(windows) || cfg!(all(target_os = "linux", target_arch = "x86_64")) {
            assert!(platform.is_ok());
        }
    }
}
