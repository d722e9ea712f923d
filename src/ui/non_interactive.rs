//! Non-interactive UI for CI/headless environments.

use std::io::Write;

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Plain text, no colors. Status goes to stdout; warnings and errors go to
/// stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_detail() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_detail() {
            println!("  {}", hint);
        }
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_detail() {
            println!("$ {}", command);
        }
    }

    fn show_output(&mut self, output: &str) {
        let needs_newline = !output.is_empty() && !output.ends_with('\n');
        if self.mode.shows_status() {
            let mut out = std::io::stdout().lock();
            let _ = out.write_all(output.as_bytes());
            if needs_newline {
                let _ = writeln!(out);
            }
            let _ = out.flush();
        } else {
            let mut err = std::io::stderr().lock();
            let _ = err.write_all(output.as_bytes());
            if needs_newline {
                let _ = writeln!(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_requested_mode() {
        let ui = NonInteractiveUI::new(OutputMode::Silent);
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }

    #[test]
    fn silent_mode_does_not_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        ui.message("hidden");
        ui.show_output("raw output");
        ui.error("still shown");
    }
}
