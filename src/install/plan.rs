//! Per-platform installation plans.
//!
//! Each [`Platform`] maps to a fixed sequence of package-manager
//! invocations. Linux invocations are marked privileged; [`Elevation`]
//! decides at run time whether they get a `sudo` prefix.

use crate::platform::Platform;
use crate::shell::{CommandRunner, Invocation};

use super::language::Language;

/// Homebrew formula for the engine.
pub const BREW_ENGINE: &str = "tesseract";
/// Homebrew formula carrying every language pack.
pub const BREW_LANGUAGES: &str = "tesseract-lang";
/// apt package for the engine.
pub const APT_ENGINE: &str = "tesseract-ocr";
/// yum package for the engine.
pub const YUM_ENGINE: &str = "tesseract";

/// The ordered commands that install the engine and a language pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    platform: Platform,
    language: Language,
    steps: Vec<Invocation>,
}

impl InstallPlan {
    /// Build the plan for a platform.
    pub fn for_platform(platform: Platform, language: &Language) -> Self {
        let steps = match platform {
            Platform::MacOs => vec![
                Invocation::new("brew", &["install", BREW_ENGINE]),
                Invocation::new("brew", &["install", BREW_LANGUAGES]),
            ],
            Platform::LinuxApt => vec![
                Invocation::new("apt-get", &["update"]).privileged(),
                Invocation::new("apt-get", &["install", "-y", APT_ENGINE]).privileged(),
                Invocation::new("apt-get", &["install", "-y", &language.apt_package()])
                    .privileged(),
            ],
            Platform::LinuxYum => vec![
                Invocation::new("yum", &["install", "-y", YUM_ENGINE]).privileged(),
                Invocation::new("yum", &["install", "-y", &language.yum_package()]).privileged(),
            ],
        };

        Self {
            platform,
            language: language.clone(),
            steps,
        }
    }

    /// The invocations, in execution order.
    pub fn steps(&self) -> &[Invocation] {
        &self.steps
    }

    /// Whether any step needs root.
    pub fn needs_privileges(&self) -> bool {
        self.steps.iter().any(|s| s.privileged)
    }

    /// Message shown once every step has run.
    pub fn success_message(&self) -> String {
        match self.platform {
            Platform::MacOs => "Tesseract and language data installed with Homebrew".to_string(),
            Platform::LinuxApt | Platform::LinuxYum => format!(
                "Tesseract and the '{}' language pack installed with {}",
                self.language,
                self.platform.package_manager()
            ),
        }
    }
}

/// How privileged invocations are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elevation {
    /// Already root; run as-is.
    Root,
    /// Prefix with `sudo`.
    Sudo,
    /// Not root and no `sudo`; run as-is and let the package manager complain.
    Unavailable,
}

impl Elevation {
    /// Decide from the runner's view of the host.
    pub fn detect(runner: &dyn CommandRunner) -> Self {
        if runner.is_elevated() {
            Elevation::Root
        } else if runner.is_available("sudo") {
            Elevation::Sudo
        } else {
            Elevation::Unavailable
        }
    }

    /// Produce the invocation to actually run.
    pub fn apply(&self, invocation: &Invocation) -> Invocation {
        if invocation.privileged && *self == Elevation::Sudo {
            invocation.with_sudo()
        } else {
            invocation.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    fn lines(plan: &InstallPlan) -> Vec<String> {
        plan.steps().iter().map(|s| s.command_line()).collect()
    }

    #[test]
    fn homebrew_plan_installs_engine_then_languages() {
        let plan = InstallPlan::for_platform(Platform::MacOs, &Language::french());
        assert_eq!(
            lines(&plan),
            vec!["brew install tesseract", "brew install tesseract-lang"]
        );
        assert!(!plan.needs_privileges());
    }

    #[test]
    fn apt_plan_updates_first() {
        let plan = InstallPlan::for_platform(Platform::LinuxApt, &Language::french());
        assert_eq!(
            lines(&plan),
            vec![
                "apt-get update",
                "apt-get install -y tesseract-ocr",
                "apt-get install -y tesseract-ocr-fra",
            ]
        );
        assert!(plan.steps().iter().all(|s| s.privileged));
    }

    #[test]
    fn yum_plan_has_no_update() {
        let plan = InstallPlan::for_platform(Platform::LinuxYum, &Language::french());
        assert_eq!(
            lines(&plan),
            vec![
                "yum install -y tesseract",
                "yum install -y tesseract-langpack-fra",
            ]
        );
    }

    #[test]
    fn language_flows_into_package_names() {
        let lang: Language = "deu".parse().unwrap();
        let plan = InstallPlan::for_platform(Platform::LinuxApt, &lang);
        assert_eq!(
            plan.steps()[2].command_line(),
            "apt-get install -y tesseract-ocr-deu"
        );
        assert!(plan.success_message().contains("'deu'"));
    }

    #[test]
    fn elevation_prefers_root() {
        let mut runner = MockRunner::with_programs(&["sudo"]);
        runner.set_elevated(true);
        assert_eq!(Elevation::detect(&runner), Elevation::Root);
    }

    #[test]
    fn elevation_uses_sudo_when_present() {
        let runner = MockRunner::with_programs(&["sudo"]);
        assert_eq!(Elevation::detect(&runner), Elevation::Sudo);
        assert_eq!(Elevation::detect(&MockRunner::new()), Elevation::Unavailable);
    }

    #[test]
    fn sudo_only_wraps_privileged_steps() {
        let privileged = Invocation::new("apt-get", &["update"]).privileged();
        let plain = Invocation::new("brew", &["install", "tesseract"]);

        assert_eq!(
            Elevation::Sudo.apply(&privileged).command_line(),
            "sudo apt-get update"
        );
        assert_eq!(Elevation::Sudo.apply(&plain), plain);
        assert_eq!(Elevation::Root.apply(&privileged), privileged);
        assert_eq!(Elevation::Unavailable.apply(&privileged), privileged);
    }
}
