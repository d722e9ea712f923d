//! Output verbosity and formatting helpers.

use std::time::Duration;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including command timings.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show status lines only (no headers, hints or echoed commands).
    Quiet,
    /// Show nothing except errors. Raw tool output moves to stderr.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows command timings.
    pub fn shows_timings(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows headers, hints and echoed commands.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

/// Format a duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = secs / 60.0;
        format!("{:.1}m", mins)
    }
}
