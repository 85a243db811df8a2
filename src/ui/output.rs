//! Output mode and writer.

use super::theme::Theme;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Report plus detail lines (matched rule, written files).
    Verbose,
    /// The resolution report.
    #[default]
    Normal,
    /// Nothing except errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows detail lines.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows the report.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: Theme,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode, theme: Theme) -> Self {
        Self { mode, theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Write a line if the mode allows status messages.
    pub fn println(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a detail line in verbose mode.
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_details() {
            println!("{}", self.theme.dim.apply_to(msg));
        }
    }

    /// Write an error to stderr. Errors are shown in every mode.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_details() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
        assert!(!OutputMode::Quiet.shows_details());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
