//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::builder::BoolishValueParser;
use clap::Parser;

use crate::install::{Language, DEFAULT_LANGUAGE};
use crate::ui::OutputMode;

/// tessup - Install Tesseract OCR and a language pack.
#[derive(Debug, Parser)]
#[command(name = "tessup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// OS-type indicator (e.g. darwin23, linux-gnu); derived from the build target when unset
    #[arg(long, env = "OSTYPE")]
    pub os_type: Option<String>,

    /// Tesseract language code to install
    #[arg(short, long, env = "TESSUP_LANG", default_value = DEFAULT_LANGUAGE)]
    pub lang: Language,

    /// Print the commands that would run, then exit
    #[arg(long)]
    pub dry_run: bool,

    /// Treat install and verification failures as fatal
    #[arg(long, env = "TESSUP_STRICT", value_parser = BoolishValueParser::new())]
    pub strict: bool,

    /// Print a JSON report on stdout
    #[arg(long)]
    pub json: bool,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode implied by the flags. `--json` silences status output.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Silent
        } else if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_french() {
        let cli = Cli::try_parse_from(["tessup"]).unwrap();
        assert_eq!(cli.lang.code(), "fra");
        assert!(!cli.dry_run);
        assert_eq!(cli.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "tessup",
            "--os-type",
            "darwin23",
            "--lang",
            "chi_sim",
            "--dry-run",
            "--strict",
        ])
        .unwrap();
        assert_eq!(cli.os_type.as_deref(), Some("darwin23"));
        assert_eq!(cli.lang.code(), "chi_sim");
        assert!(cli.dry_run);
        assert!(cli.strict);
    }

    #[test]
    fn rejects_bad_language() {
        let err = Cli::try_parse_from(["tessup", "--lang", "French"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn json_wins_over_verbosity() {
        let cli = Cli::try_parse_from(["tessup", "--json", "-v"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Silent);

        let cli = Cli::try_parse_from(["tessup", "-q"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["tessup", "-v", "-q"]).is_err());
    }
}
