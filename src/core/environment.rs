//! Access to the CI runner's environment.
//!
//! `add_to_path` rewrites the process `PATH`. It is only reached from the
//! `RegisterPath` step, after every download and installer process has
//! finished, and the binary runs on a single-threaded runtime.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::core::error::{SetupError, SetupResult};

/// Runner scratch directory, also the Windows install root.
pub const RUNNER_TEMP: &str = "RUNNER_TEMP";
/// File whose lines are prepended to PATH for later steps of the job.
pub const GITHUB_PATH: &str = "GITHUB_PATH";

pub trait RunnerEnvironment: Send + Sync {
    /// Read a required variable. Empty counts as unset.
    fn require_var(&self, name: &str) -> SetupResult<String>;

    /// Make `dir` visible on the executable search path. Idempotent.
    fn add_to_path(&self, dir: &Path) -> SetupResult<()>;
}

/// The real process environment of a GitHub Actions step.
#[derive(Debug, Default)]
pub struct ActionsEnvironment {
    path_file: Option<PathBuf>,
    registered: Mutex<Vec<PathBuf>>,
}

impl ActionsEnvironment {
    /// Picks up the job's `GITHUB_PATH` file, if the runner provides one.
    pub fn new() -> Self {
        let path_file = std::env::var_os(GITHUB_PATH)
            .filter(|f| !f.is_empty())
            .map(PathBuf::from);
        Self {
            path_file,
            registered: Mutex::default(),
        }
    }

    pub fn with_path_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.path_file = Some(file.into());
        self
    }

    fn append_to_path_file(file: &Path, dir: &Path) -> SetupResult<()> {
        let mut handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .map_err(|source| SetupError::Io {
                path: file.to_path_buf(),
                source,
            })?;
        writeln!(handle, "{}", dir.display()).map_err(|source| SetupError::Io {
            path: file.to_path_buf(),
            source,
        })
    }

    fn prepend_to_process_path(dir: &Path) -> SetupResult<()> {
        let current = std::env::var_os("PATH").unwrap_or_default();
        let mut entries = vec![dir.to_path_buf()];
        entries.extend(std::env::split_paths(&current));
        let joined: OsString = std::env::join_paths(entries).map_err(|e| SetupError::Io {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
        })?;
        std::env::set_var("PATH", joined);
        Ok(())
    }
}

impl RunnerEnvironment for ActionsEnvironment {
    fn require_var(&self, name: &str) -> SetupResult<String> {
        match std::env::var(name) {
            Ok(value) if !value.is_empty() => Ok(value),
            _ => Err(SetupError::MissingEnvironment(name.to_string())),
        }
    }

    fn add_to_path(&self, dir: &Path) -> SetupResult<()> {
        let mut registered = self
            .registered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if registered.iter().any(|d| d == dir) {
            debug!("{:?} already on PATH", dir);
            return Ok(());
        }

        if let Some(file) = &self.path_file {
            Self::append_to_path_file(file, dir)?;
        }
        Self::prepend_to_process_path(dir)?;

        info!("Added {:?} to PATH", dir);
        registered.push(dir.to_path_buf());
        Ok(())
    }
}
