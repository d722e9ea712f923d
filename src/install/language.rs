//! Tesseract language codes and their package names.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Language installed when none is requested.
pub const DEFAULT_LANGUAGE: &str = "fra";

/// A Tesseract traineddata language code such as `fra` or `chi_sim`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// The default language pack (French).
    pub fn french() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }

    /// The raw language code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Debian/Ubuntu package name. apt uses dashes where Tesseract uses underscores.
    pub fn apt_package(&self) -> String {
        format!("tesseract-ocr-{}", self.0.replace('_', "-"))
    }

    /// CentOS/RHEL package name.
    pub fn yum_package(&self) -> String {
        format!("tesseract-langpack-{}", self.0)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::french()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let valid = regex::Regex::new(r"^[a-z]{3}(_[a-z]+)?$")
            .map(|re| re.is_match(code))
            .unwrap_or(false);

        if valid {
            Ok(Self(code.to_string()))
        } else {
            Err(format!(
                "invalid language code '{}': expected a Tesseract code like 'fra' or 'chi_sim'",
                s
            ))
        }
    }
}
