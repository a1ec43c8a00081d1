//! External tool invocation
//!
//! Materialization shells out to exactly three commands: `go mod init`,
//! `git init` and `go mod tidy`. They run through the [`CommandRunner`] trait
//! so the materializer can be exercised without a Go toolchain.

use std::fmt;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// A fully specified external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// Binary to execute, resolved through PATH
    pub program: &'static str,
    pub args: Vec<String>,
}

impl ToolCommand {
    /// `go mod init <module_path>`
    pub fn module_init(module_path: &str) -> Self {
        Self {
            program: "go",
            args: vec!["mod".to_string(), "init".to_string(), module_path.to_string()],
        }
    }

    /// `git init`
    pub fn vcs_init() -> Self {
        Self {
            program: "git",
            args: vec!["init".to_string()],
        }
    }

    /// `go mod tidy`
    pub fn dependency_tidy() -> Self {
        Self {
            program: "go",
            args: vec!["mod".to_string(), "tidy".to_string()],
        }
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Failure of a single external command
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` {}", exit_description(*code, stderr))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_description(code: Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    };
    if stderr.is_empty() {
        status
    } else {
        format!("{}: {}", status, stderr)
    }
}

/// Runs external commands to completion
pub trait CommandRunner {
    /// Run `command` with `dir` as working directory, blocking until it exits
    fn run(&self, command: &ToolCommand, dir: &Path) -> Result<(), ToolError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &ToolCommand, dir: &Path) -> Result<(), ToolError> {
        (**self).run(command, dir)
    }
}

/// Runs commands as child processes of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ToolCommand, dir: &Path) -> Result<(), ToolError> {
        tracing::debug!(command = %command, dir = %dir.display(), "running external tool");

        // Output is captured so it does not tear through the spinner
        let output = Command::new(command.program)
            .args(&command.args)
            .current_dir(dir)
            .output()
            .map_err(|source| ToolError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if output.status.success() {
            tracing::debug!(command = %command, "external tool finished");
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::warn!(
            command = %command,
            status = ?output.status.code(),
            %stderr,
            "external tool failed"
        );

        Err(ToolError::Failed {
            command: command.to_string(),
            code: output.status.code(),
            stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_shapes() {
        assert_eq!(
            ToolCommand::module_init("github.com/alice/demo1").to_string(),
            "go mod init github.com/alice/demo1"
        );
        assert_eq!(ToolCommand::vcs_init().to_string(), "git init");
        assert_eq!(ToolCommand::dependency_tidy().to_string(), "go mod tidy");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let command = ToolCommand {
            program: "gostarter-definitely-not-installed",
            args: vec![],
        };
        let err = SystemRunner.run(&command, Path::new(".")).unwrap_err();
        assert!(matches!(err, ToolError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_reported() {
        let command = ToolCommand {
            program: "sh",
            args: vec!["-c".to_string(), "echo broken >&2; exit 3".to_string()],
        };
        let err = SystemRunner.run(&command, Path::new(".")).unwrap_err();
        match &err {
            ToolError::Failed { code, stderr, .. } => {
                assert_eq!(*code, Some(3));
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("exited with status 3: broken"));
    }

    #[cfg(unix)]
    #[test]
    fn test_success_runs_in_working_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let command = ToolCommand {
            program: "sh",
            args: vec!["-c".to_string(), "touch marker".to_string()],
        };
        SystemRunner.run(&command, dir.path()).unwrap();
        assert!(dir.path().join("marker").exists());
    }
}
