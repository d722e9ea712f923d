//! The installer run: detect, install, verify.

use std::time::Instant;

use crate::error::{Result, TessupError};
use crate::platform::detect_platform;
use crate::shell::{CommandOptions, CommandRunner, Invocation};
use crate::ui::{format_duration, UserInterface};

use super::language::Language;
use super::plan::{Elevation, InstallPlan};
use super::report::{CommandRecord, InstallReport};
use super::verify::{self, VerificationReport};

/// Options controlling an installer run.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// OS-type indicator, e.g. `darwin23` or `linux-gnu`.
    pub os_type: String,

    /// Language pack to install alongside the engine.
    pub language: Language,

    /// Print the plan without running it.
    pub dry_run: bool,

    /// Treat command and verification failures as fatal.
    pub strict: bool,

    /// Keep stdout free for the JSON report.
    pub json: bool,
}

/// Drives one installation against a [`CommandRunner`].
pub struct Installer<'a> {
    runner: &'a mut dyn CommandRunner,
    options: InstallOptions,
    report: InstallReport,
}

impl<'a> Installer<'a> {
    /// Create an installer.
    pub fn new(runner: &'a mut dyn CommandRunner, options: InstallOptions) -> Self {
        let report = InstallReport {
            dry_run: options.dry_run,
            ..Default::default()
        };
        Self {
            runner,
            options,
            report,
        }
    }

    /// The report so far.
    pub fn report(&self) -> &InstallReport {
        &self.report
    }

    /// Consume the installer, returning its report.
    pub fn into_report(self) -> InstallReport {
        self.report
    }

    /// Run the installation.
    ///
    /// Detection errors are always returned. Command and verification
    /// failures are returned only in strict mode; otherwise they become
    /// warnings and the run carries on.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_header("Tesseract OCR");

        let platform = detect_platform(&self.options.os_type, &*self.runner)?;
        self.report.platform = Some(platform);
        ui.message(&format!("Detected {}", platform));

        let plan = InstallPlan::for_platform(platform, &self.options.language);
        let elevation = Elevation::detect(&*self.runner);
        tracing::debug!("Elevation: {:?}", elevation);

        if elevation == Elevation::Unavailable && plan.needs_privileges() {
            self.warn(
                ui,
                "sudo not found and not running as root; package installs may fail",
            );
            ui.show_hint("Re-run as root or install sudo");
        }

        let steps: Vec<Invocation> = plan.steps().iter().map(|s| elevation.apply(s)).collect();

        if self.options.dry_run {
            ui.message("Dry run; these commands would be run:");
            for step in &steps {
                ui.show_command(&step.command_line());
                self.report.commands.push(CommandRecord::planned(step));
            }
            ui.show_hint("Run again without --dry-run to install");
            return Ok(());
        }

        for step in &steps {
            self.install_step(step, ui)?;
        }
        ui.success(&plan.success_message());

        self.verify(ui)?;

        ui.success("Tesseract installation complete");
        Ok(())
    }

    fn install_step(&mut self, step: &Invocation, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_command(&step.command_line());
        tracing::debug!("Running {}", step);

        let start = Instant::now();
        let options = CommandOptions::passthrough(self.options.json);
        match self.runner.run(step, &options) {
            Ok(result) => {
                if ui.output_mode().shows_timings() {
                    ui.message(&format!("  finished in {}", format_duration(start.elapsed())));
                }
                self.report
                    .commands
                    .push(CommandRecord::finished(step, &result));

                if result.success {
                    Ok(())
                } else {
                    self.soft_fail(
                        ui,
                        TessupError::CommandFailed {
                            command: step.command_line(),
                            code: result.exit_code,
                        },
                    )
                }
            }
            Err(e) => {
                self.report.commands.push(CommandRecord::not_started(step));
                self.soft_fail(ui, e)
            }
        }
    }

    fn verify(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let language = self.options.language.clone();
        let mut verification = VerificationReport::new(&language);

        ui.show_header("Verifying installation");

        let outcome = self.verify_into(&mut verification, &language, ui);
        self.report.verification = Some(verification);
        outcome
    }

    fn verify_into(
        &mut self,
        verification: &mut VerificationReport,
        language: &Language,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        match verify::query(&mut *self.runner, &verify::version_invocation()) {
            Ok(result) => {
                let output = verify::combined_output(&result);
                ui.show_output(&output);
                verification.record_version(&output);
                if let Some(version) = &verification.version {
                    tracing::debug!("Tesseract version {}", version);
                }
            }
            Err(e) => self.soft_fail(ui, e)?,
        }

        match verify::query(&mut *self.runner, &verify::list_langs_invocation()) {
            Ok(result) => {
                let output = verify::combined_output(&result);
                ui.show_output(&output);
                verification.record_languages(&output, language);

                if verification.language_available {
                    ui.message(&format!(
                        "Recommended OCR languages: {}",
                        verification.ocr_languages
                    ));
                } else {
                    self.soft_fail(
                        ui,
                        TessupError::VerificationFailed {
                            message: format!(
                                "language '{}' is not listed by tesseract --list-langs",
                                language
                            ),
                        },
                    )?;
                }
            }
            Err(e) => self.soft_fail(ui, e)?,
        }

        Ok(())
    }

    /// Return the error in strict mode, otherwise downgrade it to a warning.
    fn soft_fail(&mut self, ui: &mut dyn UserInterface, error: TessupError) -> Result<()> {
        if self.options.strict {
            return Err(error);
        }
        tracing::debug!("Continuing past failure: {}", error);
        self.warn(ui, &error.to_string());
        Ok(())
    }

    fn warn(&mut self, ui: &mut dyn UserInterface, message: &str) {
        ui.warning(message);
        self.report.warnings.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    fn options(os_type: &str) -> InstallOptions {
        InstallOptions {
            os_type: os_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn detection_failure_leaves_report_without_platform() {
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();
        let mut installer = Installer::new(&mut runner, options("freebsd"));

        let err = installer.run(&mut ui).unwrap_err();
        assert!(err.is_detection_error());
        assert!(installer.report().platform.is_none());
    }

    #[test]
    fn missing_engine_warns_in_lenient_mode() {
        let mut runner = MockRunner::with_programs(&["apt-get", "sudo"]);
        runner.set_elevated(true);
        let mut ui = MockUI::new();
        let mut installer = Installer::new(&mut runner, options("linux-gnu"));

        installer.run(&mut ui).unwrap();
        let report = installer.into_report();

        // tesseract is not on the mock PATH, so verification warns twice.
        assert_eq!(report.commands.len(), 3);
        assert!(report.commands.iter().all(|c| c.executed));
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn dry_run_records_planned_commands_with_sudo() {
        let mut runner = MockRunner::with_programs(&["yum", "sudo"]);
        let mut ui = MockUI::new();
        let mut installer = Installer::new(
            &mut runner,
            InstallOptions {
                dry_run: true,
                ..options("linux-gnu")
            },
        );

        installer.run(&mut ui).unwrap();
        let report = installer.into_report();

        assert!(report.dry_run);
        assert_eq!(
            report.commands[0].command,
            "sudo yum install -y tesseract"
        );
        assert!(report.commands.iter().all(|c| !c.executed));
        assert_eq!(ui.commands().len(), 2);
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn missing_sudo_warns_once() {
        let mut runner = MockRunner::with_programs(&["apt-get", "tesseract"]);
        runner.set_stdout("tesseract --list-langs", "fra\n");
        let mut ui = MockUI::new();
        let mut installer = Installer::new(&mut runner, options("linux-gnu"));

        installer.run(&mut ui).unwrap();
        assert!(ui.has_warning("sudo not found"));
        assert!(ui.has_hint("install sudo"));
        assert_eq!(ui.warnings().len(), 1);
        assert_eq!(runner.count_matching("sudo"), 0);
    }

    #[test]
    fn strict_verification_failure_keeps_partial_report() {
        let mut runner = MockRunner::with_programs(&["brew", "tesseract"]);
        runner.set_stdout("tesseract --version", "tesseract 5.3.0\n");
        runner.set_stdout("tesseract --list-langs", "List of available languages (1):\neng\n");
        let mut ui = MockUI::new();
        let mut installer = Installer::new(
            &mut runner,
            InstallOptions {
                strict: true,
                ..options("darwin")
            },
        );

        let err = installer.run(&mut ui).unwrap_err();
        assert!(matches!(err, TessupError::VerificationFailed { .. }));

        let verification = installer.into_report().verification.unwrap();
        assert_eq!(verification.version.as_deref(), Some("5.3.0"));
        assert!(!verification.language_available);
    }

    #[test]
    fn json_mode_sends_install_output_to_stderr() {
        let mut runner = MockRunner::with_programs(&["brew", "tesseract"]);
        let mut ui = MockUI::new();
        let mut installer = Installer::new(
            &mut runner,
            InstallOptions {
                json: true,
                ..options("darwin")
            },
        );

        installer.run(&mut ui).unwrap();
        let opts = runner.options();
        assert!(opts[0].stdout_to_stderr && !opts[0].capture);
        assert!(opts[1].stdout_to_stderr);
        assert!(opts[2].capture);
    }
}
