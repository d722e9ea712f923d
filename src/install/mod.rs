//! Tesseract installation.
//!
//! - [`plan`] - per-platform package-manager commands
//! - [`language`] - language codes and package names
//! - [`installer`] - the detect/install/verify run
//! - [`verify`] - parsing of `tesseract` output
//! - [`report`] - JSON run report

pub mod installer;
pub mod language;
pub mod plan;
pub mod report;
pub mod verify;

pub use installer::{InstallOptions, Installer};
pub use language::{Language, DEFAULT_LANGUAGE};
pub use plan::{Elevation, InstallPlan};
pub use report::{CommandRecord, InstallReport};
pub use verify::VerificationReport;
