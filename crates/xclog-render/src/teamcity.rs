// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! TeamCity renderer
//!
//! Problems are reported as build log service messages followed by the plain
//! terminal text, so they show up both in the build problems panel and in
//! the raw log.

use xclog_parser::TestSummary;

use crate::diagnostic::{Diagnostic, Origin, Severity};
use crate::renderer::Renderer;
use crate::terminal::TerminalRenderer;
use crate::view::{CaseStatus, View};

/// Escape a value for use inside a service message attribute
///
/// The pipe is escaped first so that the escapes added for the other
/// characters are not doubled.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '|' => out.push_str("||"),
            '\'' => out.push_str("|'"),
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            '[' => out.push_str("|["),
            ']' => out.push_str("|]"),
            c => out.push(c),
        }
    }
    out
}

/// Service-message output for TeamCity
#[derive(Debug, Clone, Default)]
pub struct TeamCityRenderer {
    plain: TerminalRenderer,
}

impl TeamCityRenderer {
    /// Create a renderer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a `message` service message
    #[must_use]
    pub fn service_message(&self, diag: &Diagnostic) -> String {
        let status = match diag.severity {
            Severity::Error => "FAILURE",
            Severity::Warning => "WARNING",
            Severity::Notice => "NORMAL",
        };
        format!(
            "##teamcity[message text='{}' errorDetails='{}' status='{status}']",
            escape(title(diag)),
            escape(&format!("{}{}", diag.location_prefix(), diag.details())),
        )
    }
}

fn title(diag: &Diagnostic) -> &'static str {
    match (diag.origin, diag.severity) {
        (Origin::Source, Severity::Error) => "Compile error",
        (Origin::Source, Severity::Warning) => "Compile warning",
        (Origin::Test, _) => "Test failure",
        (_, Severity::Error) => "Error",
        (_, Severity::Warning) => "Warning",
        (_, Severity::Notice) => "Notice",
    }
}

impl Renderer for TeamCityRenderer {
    fn render_view(&self, view: &View) -> Option<String> {
        let text = self.plain.render_view(view)?;
        match view {
            View::Diagnostic(diag) => Some(format!("{}\n{text}", self.service_message(diag))),
            View::Case(case) if case.status == CaseStatus::Failed => {
                let diag = Diagnostic::new(Severity::Error, Origin::Test, text.trim_start());
                Some(format!("{}\n{text}", self.service_message(&diag)))
            }
            _ => Some(text),
        }
    }

    fn render_summary(&self, summary: &TestSummary) -> String {
        self.plain.render_summary(summary)
    }
}
