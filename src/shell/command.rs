//! External command execution.
//!
//! Commands are spawned directly from an argv ([`Invocation`]) rather than
//! through a shell string, so package names never pass through shell
//! quoting.

use crate::error::{Result, TessupError};
use std::fmt;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A single external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path.
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,

    /// Whether the command modifies system state and needs root.
    pub privileged: bool,
}

impl Invocation {
    /// Create an unprivileged invocation.
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            privileged: false,
        }
    }

    /// Mark the invocation as requiring root.
    pub fn privileged(mut self) -> Self {
        self.privileged = true;
        self
    }

    /// Wrap the invocation in `sudo`.
    pub fn with_sudo(&self) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program.clone());
        args.extend(self.args.iter().cloned());
        Self {
            program: "sudo".to_string(),
            args,
            privileged: self.privileged,
        }
    }

    /// Render as a shell-style command line for display.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandOptions {
    /// Capture stdout and stderr instead of inheriting the terminal.
    pub capture: bool,

    /// Send the child's stdout to our stderr (keeps our stdout clean for JSON).
    /// Ignored when `capture` is set.
    pub stdout_to_stderr: bool,
}

impl CommandOptions {
    /// Options that capture all output.
    pub fn captured() -> Self {
        Self {
            capture: true,
            stdout_to_stderr: false,
        }
    }

    /// Options that pass output through to the terminal.
    pub fn passthrough(stdout_to_stderr: bool) -> Self {
        Self {
            capture: false,
            stdout_to_stderr,
        }
    }
}

/// Execute a command.
///
/// Returns `Err(CommandFailed)` with no exit code if the process could not
/// be spawned. A process that runs and exits non-zero is an `Ok` result
/// with `success == false`.
pub fn execute(invocation: &Invocation, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args);

    let spawn_failed = |e: std::io::Error| {
        tracing::debug!("Failed to spawn {}: {}", invocation, e);
        TessupError::CommandFailed {
            command: invocation.command_line(),
            code: None,
        }
    };

    if options.capture {
        cmd.stdin(Stdio::null());
        let output = cmd.output().map_err(spawn_failed)?;
        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        return if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        };
    }

    // Inherit stdin so sudo and package managers can prompt on the terminal.
    cmd.stdin(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    if options.stdout_to_stderr {
        cmd.stdout(Stdio::from(std::io::stderr()));
    } else {
        cmd.stdout(Stdio::inherit());
    }

    let status = cmd.status().map_err(spawn_failed)?;
    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(String::new(), String::new(), duration))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            String::new(),
            String::new(),
            duration,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_command_line_joins_args() {
        let inv = Invocation::new("apt-get", &["install", "-y", "tesseract-ocr"]);
        assert_eq!(inv.command_line(), "apt-get install -y tesseract-ocr");
        assert_eq!(inv.to_string(), "apt-get install -y tesseract-ocr");
    }

    #[test]
    fn with_sudo_prefixes_program() {
        let inv = Invocation::new("yum", &["install", "-y", "tesseract"]).privileged();
        let wrapped = inv.with_sudo();
        assert_eq!(wrapped.program, "sudo");
        assert_eq!(wrapped.args, vec!["yum", "install", "-y", "tesseract"]);
        assert!(wrapped.privileged);
        assert_eq!(wrapped.command_line(), "sudo yum install -y tesseract");
    }

    #[test]
    fn new_invocations_are_unprivileged() {
        assert!(!Invocation::new("brew", &["install", "tesseract"]).privileged);
    }

    #[cfg(unix)]
    #[test]
    fn execute_captures_stdout() {
        let inv = Invocation::new("sh", &["-c", "echo hello"]);
        let result = execute(&inv, &CommandOptions::captured()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_reports_nonzero_exit() {
        let inv = Invocation::new("sh", &["-c", "exit 3"]);
        let result = execute(&inv, &CommandOptions::captured()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn execute_passthrough_reports_status() {
        let inv = Invocation::new("sh", &["-c", "exit 0"]);
        let result = execute(&inv, &CommandOptions::passthrough(true)).unwrap();

        assert!(result.success);
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn execute_missing_program_is_command_failed() {
        let inv = Invocation::new("this-command-does-not-exist-12345", &[]);
        let err = execute(&inv, &CommandOptions::captured()).unwrap_err();

        assert!(matches!(
            err,
            TessupError::CommandFailed { code: None, .. }
        ));
    }
}
