// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Verbosity filtering
//!
//! In the quiet modes, build steps are not printed as they happen. The most
//! recent one is held instead, and printed only if a warning or error
//! follows it, so each problem appears with one line of context.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use xclog_parser::OutputCategory;

/// How much output to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Everything
    #[default]
    Full,
    /// Warnings, errors and results
    Quiet,
    /// Errors and results only
    Quieter,
}

impl Verbosity {
    /// Verbosity for a repeated `-q` flag count
    #[must_use]
    pub fn from_quiet_count(count: u8) -> Self {
        match count {
            0 => Self::Full,
            1 => Self::Quiet,
            _ => Self::Quieter,
        }
    }

    /// Get the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Quiet => "quiet",
            Self::Quieter => "quieter",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "quiet" => Ok(Self::Quiet),
            "quieter" => Ok(Self::Quieter),
            other => Err(format!("unknown verbosity: {other}")),
        }
    }
}

/// Filter state between lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterState {
    /// Nothing held
    #[default]
    Idle,
    /// The most recent suppressed line, kept as context
    Holding(String),
}

/// Decides which formatted lines reach the output
#[derive(Debug)]
pub struct OutputFilter {
    verbosity: Verbosity,
    ci: bool,
    state: FilterState,
}

impl OutputFilter {
    /// Create a filter
    ///
    /// `ci` shows test progress that is otherwise held in the quiet modes.
    #[must_use]
    pub fn new(verbosity: Verbosity, ci: bool) -> Self {
        Self {
            verbosity,
            ci,
            state: FilterState::Idle,
        }
    }

    /// Configured verbosity
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Offer one formatted line; returns the lines to emit, in order
    ///
    /// At most two lines are returned: a flushed context line and `text`.
    pub fn offer(&mut self, category: OutputCategory, text: String) -> Vec<String> {
        if self.verbosity == Verbosity::Full {
            return vec![text];
        }
        match category {
            OutputCategory::Task => self.hold(text),
            OutputCategory::Test if self.ci => self.emit(text),
            OutputCategory::Test => self.hold(text),
            OutputCategory::Error => self.flush_with(text),
            OutputCategory::Warning if self.verbosity == Verbosity::Quiet => self.flush_with(text),
            OutputCategory::Warning => Vec::new(),
            OutputCategory::Result | OutputCategory::Issue | OutputCategory::NonContextualError => {
                vec![text]
            }
            OutputCategory::TestCase if self.ci => vec![text],
            OutputCategory::TestCase | OutputCategory::Undefined => Vec::new(),
        }
    }

    /// End of stream
    ///
    /// A line still held is discarded; it is returned for logging only.
    pub fn finish(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            FilterState::Holding(text) => {
                tracing::debug!(line = %text, "discarding held line at end of stream");
                Some(text)
            }
            FilterState::Idle => None,
        }
    }

    fn hold(&mut self, text: String) -> Vec<String> {
        self.state = FilterState::Holding(text);
        Vec::new()
    }

    /// Emit `text` and drop any held line without flushing it
    fn emit(&mut self, text: String) -> Vec<String> {
        self.state = FilterState::Idle;
        vec![text]
    }

    fn flush_with(&mut self, text: String) -> Vec<String> {
        match std::mem::take(&mut self.state) {
            FilterState::Holding(held) => vec![held, text],
            FilterState::Idle => vec![text],
        }
    }
}
