//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything. It
//! answers availability checks from a configured set of programs, returns
//! canned results, and records every invocation for later assertion.
//!
//! # Example
//!
//! ```
//! use tessup::shell::{CommandOptions, CommandRunner, Invocation, MockRunner};
//!
//! let mut runner = MockRunner::with_programs(&["brew"]);
//! assert!(runner.is_available("brew"));
//! assert!(!runner.is_available("apt-get"));
//!
//! runner.run(&Invocation::new("brew", &["install", "tesseract"]), &CommandOptions::default()).unwrap();
//! assert_eq!(runner.command_lines(), vec!["brew install tesseract"]);
//! ```

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::error::{Result, TessupError};

use super::command::{CommandOptions, CommandResult, Invocation};
use super::runner::CommandRunner;

/// Mock runner implementation for testing.
///
/// Running a program that is not in the available set fails the same way a
/// real spawn would: `Err(CommandFailed { code: None })`.
#[derive(Debug, Default)]
pub struct MockRunner {
    available: HashSet<String>,
    elevated: bool,
    responses: HashMap<String, CommandResult>,
    invocations: Vec<Invocation>,
    options: Vec<CommandOptions>,
}

impl MockRunner {
    /// Create a runner where nothing is installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner where the given programs are on PATH.
    pub fn with_programs(programs: &[&str]) -> Self {
        let mut runner = Self::new();
        for program in programs {
            runner.add_program(program);
        }
        runner
    }

    /// Put a program on the mock PATH.
    pub fn add_program(&mut self, program: &str) {
        self.available.insert(program.to_string());
    }

    /// Set whether the mock reports root privileges.
    pub fn set_elevated(&mut self, elevated: bool) {
        self.elevated = elevated;
    }

    /// Set the result returned for an exact command line.
    pub fn set_response(&mut self, command_line: &str, result: CommandResult) {
        self.responses.insert(command_line.to_string(), result);
    }

    /// Make a command line succeed with the given stdout.
    pub fn set_stdout(&mut self, command_line: &str, stdout: &str) {
        self.set_response(
            command_line,
            CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO),
        );
    }

    /// Make a command line exit with the given code.
    pub fn set_exit_code(&mut self, command_line: &str, code: i32) {
        self.set_response(
            command_line,
            CommandResult::failure(Some(code), String::new(), String::new(), Duration::ZERO),
        );
    }

    /// Get all recorded invocations in order.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Get the options each invocation was run with.
    pub fn options(&self) -> &[CommandOptions] {
        &self.options
    }

    /// Get all recorded invocations rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations.iter().map(|i| i.command_line()).collect()
    }

    /// Count recorded command lines containing `needle`.
    pub fn count_matching(&self, needle: &str) -> usize {
        self.invocations
            .iter()
            .filter(|i| i.command_line().contains(needle))
            .count()
    }
}

impl CommandRunner for MockRunner {
    fn is_available(&self, program: &str) -> bool {
        self.available.contains(program)
    }

    fn is_elevated(&self) -> bool {
        self.elevated
    }

    fn run(&mut self, invocation: &Invocation, options: &CommandOptions) -> Result<CommandResult> {
        self.invocations.push(invocation.clone());
        self.options.push(*options);

        if !self.available.contains(&invocation.program) {
            return Err(TessupError::CommandFailed {
                command: invocation.command_line(),
                code: None,
            });
        }

        Ok(self
            .responses
            .get(&invocation.command_line())
            .cloned()
            .unwrap_or_else(|| {
                CommandResult::success(String::new(), String::new(), Duration::ZERO)
            }))
    }
}
