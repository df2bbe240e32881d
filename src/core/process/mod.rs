//! Command execution.

use std::ffi::OsString;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, instrument};

use crate::core::error::{SetupError, SetupResult};

/// A program plus its arguments, run without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// `sudo <program> <args…>`
    pub fn sudo(program: impl Into<String>) -> Self {
        Self::new("sudo").arg(program)
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Output of a command that exited successfully.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs commands, failing with [`SetupError::Exec`] on a non-zero exit.
#[async_trait]
pub trait Run: Send + Sync {
    async fn run(&self, command: &CommandLine) -> SetupResult<CommandOutput>;
}

/// Spawns real processes with stdin closed and output captured.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Run for ProcessRunner {
    #[instrument(skip(self), fields(program = %command.program))]
    async fn run(&self, command: &CommandLine) -> SetupResult<CommandOutput> {
        info!("Running {}", command);

        let args: Vec<OsString> = command.args.iter().map(OsString::from).collect();
        let start = Instant::now();
        let output = Command::new(&command.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| SetupError::Exec {
                command: command.to_string(),
                exit_code: None,
                stderr: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code();

        debug!(
            exit_code = ?exit_code,
            duration_ms = start.elapsed().as_millis(),
            "Command completed"
        );

        match exit_code {
            Some(0) => Ok(CommandOutput {
                exit_code: 0,
                stdout,
                stderr,
            }),
            // None: terminated by a signal.
            code => Err(SetupError::Exec {
                command: command.to_string(),
                exit_code: code,
                stderr,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_display() {
        let cmd = CommandLine::sudo("apt").args(["install", "-y", "lazarus"]);
        assert_eq!(cmd.to_string(), "sudo apt install -y lazarus");
        assert_eq!(cmd.program, "sudo");
    }

    #[tokio::test]
    async fn missing_program_is_exec_error() {
        let runner = ProcessRunner::new();
        let cmd = CommandLine::new("definitely-not-a-real-program-4b1c").arg("--help");
        let err = runner.run(&cmd).await.unwrap_err();
        match err {
            SetupError::Exec {
                command, exit_code, ..
            } => {
                assert_eq!(command, "definitely-not-a-real-program-4b1c --help");
                assert_eq!(exit_code, None);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_exec_error() {
        let runner = ProcessRunner::new();
        let cmd = CommandLine::new("sh").args(["-c", "echo boom >&2; exit 3"]);
        let err = runner.run(&cmd).await.unwrap_err();
        match err {
            SetupError::Exec {
                exit_code, stderr, ..
            } => {
                assert_eq!(exit_code, Some(3));
                assert_eq!(stderr.trim(), "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_stdout() {
        let runner = ProcessRunner::new();
        let out = runner
            .run(&CommandLine::new("echo").arg("hello"))
            .await
            .unwrap();
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout.trim(), "hello");
    }
}
