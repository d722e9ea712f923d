//! Command runner abstraction.
//!
//! The installer never spawns processes directly. It goes through
//! [`CommandRunner`], so tests can substitute [`MockRunner`](super::MockRunner)
//! and exercise the whole decision tree without touching the host.

use std::path::PathBuf;

use crate::error::Result;

use super::command::{execute, CommandOptions, CommandResult, Invocation};
use super::path::{parse_system_path, resolve_tool_path};
use super::platform::is_elevated;

/// Trait for probing and running external commands.
pub trait CommandRunner {
    /// Whether `program` can be found on the execution path.
    fn is_available(&self, program: &str) -> bool;

    /// Whether the process already has root privileges.
    fn is_elevated(&self) -> bool;

    /// Run an invocation to completion.
    fn run(&mut self, invocation: &Invocation, options: &CommandOptions) -> Result<CommandResult>;
}

/// Runner backed by the real system.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    path: Vec<PathBuf>,
    elevated: bool,
}

impl SystemRunner {
    /// Create a runner using the process PATH and effective user.
    pub fn from_env() -> Self {
        Self {
            path: parse_system_path(),
            elevated: is_elevated(),
        }
    }

    /// Create a runner with an explicit search path.
    pub fn with_path(path: Vec<PathBuf>) -> Self {
        Self {
            path,
            elevated: is_elevated(),
        }
    }

    /// The PATH entries this runner searches.
    pub fn path(&self) -> &[PathBuf] {
        &self.path
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::from_env()
    }
}

impl CommandRunner for SystemRunner {
    fn is_available(&self, program: &str) -> bool {
        let found = resolve_tool_path(program, &self.path);
        tracing::debug!("Lookup {}: {:?}", program, found);
        found.is_some()
    }

    fn is_elevated(&self) -> bool {
        self.elevated
    }

    fn run(&mut self, invocation: &Invocation, options: &CommandOptions) -> Result<CommandResult> {
        tracing::debug!("Running: {}", invocation);

        // Spawn the copy found on our search path so probing and running agree.
        let result = match resolve_tool_path(&invocation.program, &self.path) {
            Some(resolved) => {
                let mut resolved_invocation = invocation.clone();
                resolved_invocation.program = resolved.to_string_lossy().into_owned();
                execute(&resolved_invocation, options)?
            }
            None => execute(invocation, options)?,
        };
        tracing::debug!(
            "Finished {} with {:?} in {:?}",
            invocation,
            result.exit_code,
            result.duration
        );
        Ok(result)
    }
}
