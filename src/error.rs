//! Error types for tessup operations.
//!
//! This module defines [`TessupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Detection errors (`UnsupportedPlatform`, `MissingPackageManager`,
//!   `UnsupportedDistribution`) always abort the run
//! - `CommandFailed` and `VerificationFailed` abort only in strict mode;
//!   otherwise they are reported as warnings
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for tessup operations.
#[derive(Debug, Error)]
pub enum TessupError {
    /// The OS-type indicator matches no supported platform.
    #[error("Unsupported operating system: {indicator}")]
    UnsupportedPlatform { indicator: String },

    /// The package manager required on this platform is not installed.
    #[error("{manager} is not installed. {hint}")]
    MissingPackageManager { manager: String, hint: String },

    /// Linux host with neither apt-get nor yum.
    #[error("Linux distribution not automatically supported. {hint}")]
    UnsupportedDistribution { hint: String },

    /// An external command could not be started or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Post-install verification did not confirm a working engine.
    #[error("Verification failed: {message}")]
    VerificationFailed { message: String },

    /// Generic wrapped error for anyhow interop (report output).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TessupError {
    /// Whether this error ends the run regardless of strict mode.
    pub fn is_detection_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedPlatform { .. }
                | Self::MissingPackageManager { .. }
                | Self::UnsupportedDistribution { .. }
        )
    }
}

/// Result type alias for tessup operations.
pub type Result<T> = std::result::Result<T, TessupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_displays_indicator() {
        let err = TessupError::UnsupportedPlatform {
            indicator: "freebsd13.2".into(),
        };
        assert_eq!(err.to_string(), "Unsupported operating system: freebsd13.2");
    }

    #[test]
    fn missing_package_manager_displays_manager_and_hint() {
        let err = TessupError::MissingPackageManager {
            manager: "Homebrew".into(),
            hint: "Install it from https://brew.sh".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Homebrew"));
        assert!(msg.contains("https://brew.sh"));
    }

    #[test]
    fn unsupported_distribution_displays_hint() {
        let err = TessupError::UnsupportedDistribution {
            hint: "Install tesseract manually".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("not automatically supported"));
        assert!(msg.contains("Install tesseract manually"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = TessupError::CommandFailed {
            command: "sudo apt-get update".into(),
            code: Some(100),
        };
        let msg = err.to_string();
        assert!(msg.contains("sudo apt-get update"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn detection_errors_are_classified() {
        assert!(TessupError::UnsupportedPlatform {
            indicator: "x".into()
        }
        .is_detection_error());
        assert!(TessupError::UnsupportedDistribution { hint: "x".into() }.is_detection_error());
        assert!(!TessupError::VerificationFailed {
            message: "x".into()
        }
        .is_detection_error());
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: TessupError = anyhow::anyhow!("Failed to write JSON report").into();
        assert!(matches!(err, TessupError::Other(_)));
        assert_eq!(err.to_string(), "Failed to write JSON report");
    }
}
