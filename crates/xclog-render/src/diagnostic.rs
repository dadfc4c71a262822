// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Diagnostics shared by all renderers
//!
//! Every renderer formats a warning or error from the same [`Diagnostic`], so
//! the path, position, message and context lines are identical across sinks
//! and only the markup differs.

use serde::Serialize;

use crate::location::FileLocation;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// An error
    Error,
    /// A warning
    Warning,
    /// Informational
    Notice,
}

impl Severity {
    /// Lowercase name, as used in annotation commands
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
        }
    }
}

/// What produced the diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// The compiler, pointing into a source file
    Source,
    /// A failing test or recorded test issue
    Test,
    /// The linker, code signing or the build tool itself
    Tool,
}

/// A warning or error with an optional position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity
    pub severity: Severity,
    /// Producer
    pub origin: Origin,
    /// File position, when the line names one
    pub location: Option<FileLocation>,
    /// Message text
    pub message: String,
    /// Lines that follow the message (source line, caret)
    pub context: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic with no position or context
    #[must_use]
    pub fn new(severity: Severity, origin: Origin, message: impl Into<String>) -> Self {
        Self {
            severity,
            origin,
            location: None,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Attach a position parsed from `path[:line[:col]]`
    #[must_use]
    pub fn at(mut self, location: &str) -> Self {
        self.location = Some(FileLocation::parse(location));
        self
    }

    /// Attach context lines
    #[must_use]
    pub fn with_context(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.context = lines.into_iter().collect();
        self
    }

    /// Message followed by the context lines, newline separated
    #[must_use]
    pub fn details(&self) -> String {
        let mut details = self.message.clone();
        for line in &self.context {
            details.push('\n');
            details.push_str(line);
        }
        details
    }

    /// `path:line:col: ` prefix, or an empty string without a position
    #[must_use]
    pub fn location_prefix(&self) -> String {
        self.location
            .as_ref()
            .map(|loc| format!("{loc}: "))
            .unwrap_or_default()
    }
}
