//! Host environment checks.

/// Check if running in a CI environment.
///
/// Used by `main()` to pick the non-interactive UI. Checks common CI
/// environment variables: `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`, `CIRCLECI`,
/// `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    is_ci_with(|name| std::env::var_os(name).is_some())
}

const CI_VARIABLES: [&str; 6] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// [`is_ci`] against an arbitrary variable lookup.
fn is_ci_with(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARIABLES.iter().any(|name| is_set(name))
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}
