//! tessup - Install the Tesseract OCR engine and a language pack.
//!
//! tessup detects the host platform from an OS-type indicator, installs
//! Tesseract and a language pack (French by default) with Homebrew, apt or
//! yum, then verifies the result with `tesseract --version` and
//! `tesseract --list-langs`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`install`] - Install plans, the installer run and verification
//! - [`platform`] - Platform detection
//! - [`shell`] - External command probing and execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use tessup::install::{InstallOptions, Installer};
//! use tessup::shell::MockRunner;
//! use tessup::ui::MockUI;
//!
//! let mut runner = MockRunner::with_programs(&["apt-get"]);
//! let mut ui = MockUI::new();
//! let options = InstallOptions {
//!     os_type: "linux-gnu".to_string(),
//!     dry_run: true,
//!     ..Default::default()
//! };
//!
//! let mut installer = Installer::new(&mut runner, options);
//! installer.run(&mut ui).unwrap();
//! assert_eq!(installer.report().commands[0].command, "apt-get update");
//! ```

pub mod cli;
pub mod error;
pub mod install;
pub mod platform;
pub mod shell;
pub mod ui;

pub use error::{Result, TessupError};
