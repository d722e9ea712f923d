//! Machine-readable run report.
//!
//! Emitted on stdout with `--json` once the run ends, including runs that
//! end in a fatal error.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::platform::Platform;
use crate::shell::{CommandResult, Invocation};

use super::verify::VerificationReport;

/// One package-manager invocation and how it went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRecord {
    /// The command line as run (including any `sudo`).
    pub command: String,
    /// False in a dry run.
    pub executed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    pub success: bool,
}

impl CommandRecord {
    /// A command that was only planned.
    pub fn planned(invocation: &Invocation) -> Self {
        Self {
            command: invocation.command_line(),
            executed: false,
            exit_code: None,
            success: false,
        }
    }

    /// A command that ran to completion.
    pub fn finished(invocation: &Invocation, result: &CommandResult) -> Self {
        Self {
            command: invocation.command_line(),
            executed: true,
            exit_code: result.exit_code,
            success: result.success,
        }
    }

    /// A command that could not be started.
    pub fn not_started(invocation: &Invocation) -> Self {
        Self {
            command: invocation.command_line(),
            executed: false,
            exit_code: None,
            success: false,
        }
    }
}

/// Summary of an installer run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallReport {
    pub platform: Option<Platform>,
    pub dry_run: bool,
    pub commands: Vec<CommandRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationReport>,
    pub warnings: Vec<String>,
    pub exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InstallReport {
    /// Write the report as pretty-printed JSON followed by a newline.
    pub fn write_json<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self).context("Failed to write JSON report")?;
        writeln!(writer).context("Failed to write JSON report")?;
        writer.flush().context("Failed to flush JSON report")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn planned_record_is_not_executed() {
        let record = CommandRecord::planned(&Invocation::new("brew", &["install", "tesseract"]));
        assert!(!record.executed);
        assert_eq!(record.command, "brew install tesseract");
    }

    #[test]
    fn finished_record_keeps_exit_code() {
        let inv = Invocation::new("apt-get", &["update"]);
        let result = CommandResult::failure(Some(100), String::new(), String::new(), Duration::ZERO);
        let record = CommandRecord::finished(&inv, &result);
        assert!(record.executed);
        assert_eq!(record.exit_code, Some(100));
        assert!(!record.success);
    }

    #[test]
    fn json_shape() {
        let report = InstallReport {
            platform: Some(Platform::LinuxYum),
            commands: vec![CommandRecord::planned(&Invocation::new(
                "yum",
                &["install", "-y", "tesseract"],
            ))],
            dry_run: true,
            ..Default::default()
        };

        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["platform"], "linux-yum");
        assert_eq!(value["dry_run"], true);
        assert_eq!(value["commands"][0]["command"], "yum install -y tesseract");
        assert_eq!(value["exit_code"], 0);
        assert!(value.get("error").is_none());
        assert!(value.get("verification").is_none());
        assert!(value["commands"][0].get("exit_code").is_none());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_carries_context() {
        let err = InstallReport::default()
            .write_json(&mut ClosedPipe)
            .unwrap_err();
        assert!(err.to_string().contains("JSON report"));
        assert!(format!("{:#}", err).contains("closed"));
    }
}
