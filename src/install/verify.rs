//! Post-install verification.
//!
//! Runs `tesseract --version` and `tesseract --list-langs`. Their output is
//! shown verbatim and then parsed for the engine version and the installed
//! language list.

use serde::Serialize;

use crate::error::{Result, TessupError};
use crate::shell::{CommandOptions, CommandResult, CommandRunner, Invocation};

use super::language::Language;

/// The installed OCR engine executable.
pub const ENGINE: &str = "tesseract";

/// Language Tesseract ships with and the consuming app pairs with others.
const FALLBACK_LANGUAGE: &str = "eng";

/// `tesseract --version`
pub fn version_invocation() -> Invocation {
    Invocation::new(ENGINE, &["--version"])
}

/// `tesseract --list-langs`
pub fn list_langs_invocation() -> Invocation {
    Invocation::new(ENGINE, &["--list-langs"])
}

/// Run a verification query, capturing its output.
///
/// Spawn failures and non-zero exits become `VerificationFailed`. The
/// failed result's output is still returned inside the message so it is
/// not lost.
pub fn query(runner: &mut dyn CommandRunner, invocation: &Invocation) -> Result<CommandResult> {
    let result = runner
        .run(invocation, &CommandOptions::captured())
        .map_err(|e| TessupError::VerificationFailed {
            message: format!("could not run '{}': {}", invocation, e),
        })?;

    if result.success {
        Ok(result)
    } else {
        let output = combined_output(&result);
        Err(TessupError::VerificationFailed {
            message: format!(
                "'{}' exited with code {:?}{}",
                invocation,
                result.exit_code,
                if output.trim().is_empty() {
                    String::new()
                } else {
                    format!(": {}", output.trim())
                }
            ),
        })
    }
}

/// stdout followed by stderr. Tesseract 3.x printed its version on stderr.
pub fn combined_output(result: &CommandResult) -> String {
    let mut out = result.stdout.clone();
    if !result.stderr.is_empty() {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&result.stderr);
    }
    out
}

/// Extract the first `major.minor[.patch]` version number.
///
/// Only the earliest match counts: the banner lists library versions
/// (leptonica, libjpeg) after the engine's own.
pub fn extract_version(output: &str) -> Option<String> {
    let re = regex::Regex::new(r"(\d+\.\d+(?:\.\d+)?)").ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parse `--list-langs` output into language codes.
///
/// The first line is a header such as
/// `List of available languages in "/usr/share/tesseract-ocr/5/tessdata/" (3):`.
pub fn parse_languages(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("List of available languages"))
        .map(str::to_string)
        .collect()
}

/// The `-l` argument to hand to Tesseract: `<lang>+eng` when both are present.
pub fn ocr_language_string(language: &Language, installed: &[String]) -> String {
    let has = |code: &str| installed.iter().any(|l| l == code);
    if language.code() != FALLBACK_LANGUAGE && has(language.code()) && has(FALLBACK_LANGUAGE) {
        format!("{}+{}", language, FALLBACK_LANGUAGE)
    } else {
        language.code().to_string()
    }
}

/// What verification found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Parsed engine version, if `--version` ran.
    pub version: Option<String>,
    /// Installed languages, if `--list-langs` ran.
    pub languages: Vec<String>,
    /// The requested language code.
    pub language: String,
    /// Whether the requested language is installed.
    pub language_available: bool,
    /// Suggested OCR language argument.
    pub ocr_languages: String,
}

impl VerificationReport {
    /// Start a report for the requested language.
    pub fn new(language: &Language) -> Self {
        Self {
            language: language.code().to_string(),
            ocr_languages: language.code().to_string(),
            ..Default::default()
        }
    }

    /// Record the output of `--version`.
    pub fn record_version(&mut self, output: &str) {
        self.version = extract_version(output);
    }

    /// Record the output of `--list-langs`.
    pub fn record_languages(&mut self, output: &str, language: &Language) {
        self.languages = parse_languages(output);
        self.language_available = self.languages.iter().any(|l| l == language.code());
        self.ocr_languages = ocr_language_string(language, &self.languages);
    }
}
