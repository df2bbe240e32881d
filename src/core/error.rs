use std::path::PathBuf;
use thiserror::Error;

use super::catalog::ArtifactRole;
use super::platform::Platform;

/// Central error type for the whole setup flow.
/// Every module returns `Result<T, SetupError>`.
#[derive(Debug, Error)]
pub enum SetupError {
    // ── Request ─────────────────────────────────────────
    #[error("Lazarus version not available: {0}")]
    UnknownVersion(String),

    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),

    // ── Catalog ─────────────────────────────────────────
    #[error("No {role} package for Lazarus {version} on {platform}")]
    ArtifactNotFound {
        platform: Platform,
        version: String,
        role: ArtifactRole,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    // ── Process ─────────────────────────────────────────
    #[error("Command `{command}` failed{}: {stderr}", exit_suffix(.exit_code))]
    Exec {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    // ── Environment ─────────────────────────────────────
    #[error("Expected {0} to be defined")]
    MissingEnvironment(String),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Output ──────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn exit_suffix(exit_code: &Option<i32>) -> String {
    exit_code
        .map(|code| format!(" with exit code {code}"))
        .unwrap_or_default()
}

/// Convenience alias used throughout the crate.
pub type SetupResult<T> = Result<T, SetupError>;

impl From<std::io::Error> for SetupError {
    fn from(source: std::io::Error) -> Self {
        SetupError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

impl SetupError {
    /// True for failures caused by the request itself rather than by the runner.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SetupError::UnknownVersion(_) | SetupError::UnsupportedPlatform(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_version_names_the_request() {
        let err = SetupError::UnknownVersion("9.9.9".into());
        assert_eq!(err.to_string(), "Lazarus version not available: 9.9.9");
        assert!(err.is_configuration_error());
    }

    #[test]
    fn exec_error_keeps_command_line() {
        let err = SetupError::Exec {
            command: "sudo dpkg -i /tmp/pkg".into(),
            exit_code: Some(1),
            stderr: "dpkg: error".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sudo dpkg -i /tmp/pkg"));
        assert!(msg.contains("exit code 1"));
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn exec_error_without_exit_code() {
        let err = SetupError::Exec {
            command: "apt".into(),
            exit_code: None,
            stderr: "not found".into(),
        };
        assert_eq!(err.to_string(), "Command `apt` failed: not found");
    }
}
