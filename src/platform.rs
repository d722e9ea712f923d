//! Platform detection.
//!
//! Detection runs in two stages. The OS-type indicator (the shell's
//! `$OSTYPE`, e.g. `darwin23` or `linux-gnu`) gives an [`OsFamily`]. On
//! Linux, probing for `apt-get` and then `yum` picks the [`Platform`]. The
//! result is decided once, before any install command runs.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, TessupError};
use crate::shell::CommandRunner;

/// Where to send users when Homebrew is missing.
pub const HOMEBREW_URL: &str = "https://brew.sh";

/// Manual install instructions for unsupported distributions.
pub const MANUAL_INSTALL_URL: &str = "https://tesseract-ocr.github.io/tessdoc/Installation.html";

/// Operating system family derived from the OS-type indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Linux,
    Other(String),
}

impl OsFamily {
    /// Classify an OS-type indicator by prefix.
    ///
    /// Surrounding whitespace and ASCII case are ignored. `Other` keeps the
    /// indicator exactly as given so diagnostics can quote it.
    pub fn from_indicator(indicator: &str) -> Self {
        let normalized = indicator.trim().to_ascii_lowercase();

        if normalized.starts_with("darwin") {
            OsFamily::MacOs
        } else if normalized.starts_with("linux") {
            OsFamily::Linux
        } else {
            OsFamily::Other(indicator.to_string())
        }
    }
}

/// OS-type indicator for the compile target, used when `OSTYPE` is unset.
///
/// Mirrors the values bash reports so prefix matching behaves the same.
pub fn default_indicator() -> String {
    match std::env::consts::OS {
        "macos" => "darwin".to_string(),
        "linux" => "linux-gnu".to_string(),
        other => other.to_string(),
    }
}

/// A supported installation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    /// macOS with Homebrew.
    #[serde(rename = "macos")]
    MacOs,
    /// Debian/Ubuntu family with apt.
    #[serde(rename = "linux-apt")]
    LinuxApt,
    /// CentOS/RHEL family with yum.
    #[serde(rename = "linux-yum")]
    LinuxYum,
}

impl Platform {
    /// Package manager executable for this platform.
    pub fn package_manager(&self) -> &'static str {
        match self {
            Platform::MacOs => "brew",
            Platform::LinuxApt => "apt-get",
            Platform::LinuxYum => "yum",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Platform::MacOs => "macOS (Homebrew)",
            Platform::LinuxApt => "Linux (apt)",
            Platform::LinuxYum => "Linux (yum)",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Decide the platform from an OS-type indicator and the available tools.
///
/// Fails with `UnsupportedPlatform`, `MissingPackageManager` or
/// `UnsupportedDistribution`; none of them run any command.
pub fn detect_platform(indicator: &str, runner: &dyn CommandRunner) -> Result<Platform> {
    let family = OsFamily::from_indicator(indicator);
    tracing::debug!("OS indicator {:?} classified as {:?}", indicator, family);

    match family {
        OsFamily::MacOs => {
            if runner.is_available("brew") {
                Ok(Platform::MacOs)
            } else {
                Err(TessupError::MissingPackageManager {
                    manager: "Homebrew".to_string(),
                    hint: format!("Install it from {} and run this installer again.", HOMEBREW_URL),
                })
            }
        }
        OsFamily::Linux => {
            if runner.is_available("apt-get") {
                Ok(Platform::LinuxApt)
            } else if runner.is_available("yum") {
                Ok(Platform::LinuxYum)
            } else {
                Err(TessupError::UnsupportedDistribution {
                    hint: format!(
                        "Install tesseract and its language data manually: {}",
                        MANUAL_INSTALL_URL
                    ),
                })
            }
        }
        OsFamily::Other(indicator) => Err(TessupError::UnsupportedPlatform { indicator }),
    }
}
