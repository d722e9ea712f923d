//! The install command.
//!
//! Wires parsed arguments to an [`Installer`], turns its outcome into an
//! exit code and writes the JSON report when asked.

use std::io::Write;

use crate::error::Result;
use crate::install::{InstallOptions, Installer};
use crate::platform::default_indicator;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::args::Cli;

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The install command implementation.
pub struct InstallCommand {
    options: InstallOptions,
}

impl InstallCommand {
    /// Create a command from explicit options.
    pub fn new(options: InstallOptions) -> Self {
        Self { options }
    }

    /// Create a command from parsed arguments.
    ///
    /// An empty or missing `--os-type` falls back to the build target.
    pub fn from_cli(cli: &Cli) -> Self {
        let os_type = cli
            .os_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(default_indicator);

        Self::new(InstallOptions {
            os_type,
            language: cli.lang.clone(),
            dry_run: cli.dry_run,
            strict: cli.strict,
            json: cli.json,
        })
    }

    /// Get the command options.
    pub fn options(&self) -> &InstallOptions {
        &self.options
    }

    /// Run the installer.
    ///
    /// Installer errors are reported through `ui` and become exit code 1.
    /// With `--json` the report is written to `out` whatever the outcome.
    pub fn execute(
        &self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        tracing::debug!("Install options: {:?}", self.options);

        let mut installer = Installer::new(runner, self.options.clone());
        let outcome = installer.run(ui);
        let mut report = installer.into_report();

        let result = match outcome {
            Ok(()) => CommandResult::success(),
            Err(e) => {
                ui.error(&e.to_string());
                report.error = Some(e.to_string());
                CommandResult::failure(1)
            }
        };
        report.exit_code = result.exit_code;

        if self.options.json {
            report.write_json(out)?;
        }

        Ok(result)
    }
}
