// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Terminal styles

use owo_colors::Style;

/// Whether stdout can show ANSI colors
///
/// Honours `NO_COLOR`, `FORCE_COLOR` and whether stdout is a terminal.
#[must_use]
pub fn stdout_supports_color() -> bool {
    supports_color::on_cached(supports_color::Stream::Stdout).is_some()
}

/// Styles used by the terminal renderer
///
/// The default is plain text; call [`Styles::colorize`] to enable ANSI
/// styling.
#[derive(Debug, Default, Clone, Copy)]
pub struct Styles {
    /// Target headings and suite names
    pub heading: Style,
    /// `[Target]` prefixes
    pub target: Style,
    /// Passed cases and successful results
    pub success: Style,
    /// Failed cases, errors and failed results
    pub failure: Style,
    /// Warnings
    pub warning: Style,
    /// Skipped and pending cases
    pub skipped: Style,
    /// Timings and supplementary detail
    pub dimmed: Style,
}

impl Styles {
    /// Plain or colored styles
    #[must_use]
    pub fn new(colored: bool) -> Self {
        let mut styles = Self::default();
        if colored {
            styles.colorize();
        }
        styles
    }

    /// Switch every style to its ANSI form
    pub fn colorize(&mut self) {
        self.heading = Style::new().bold();
        self.target = Style::new().cyan();
        self.success = Style::new().green().bold();
        self.failure = Style::new().red().bold();
        self.warning = Style::new().yellow().bold();
        self.skipped = Style::new().yellow();
        self.dimmed = Style::new().dimmed();
    }
}
