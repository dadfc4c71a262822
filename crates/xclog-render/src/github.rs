// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! GitHub Actions renderer
//!
//! Warnings and errors become workflow commands, which the Actions UI turns
//! into annotations on the pull request diff:
//!
//! ```text
//! ::error file=/a/b.c,line=10,col=4::missing semicolon
//! ```
//!
//! Everything else is rendered as plain terminal text.

use xclog_parser::TestSummary;

use crate::diagnostic::{Diagnostic, Severity};
use crate::renderer::Renderer;
use crate::terminal::TerminalRenderer;
use crate::view::{CaseStatus, View};

/// Workflow-command output for GitHub Actions
#[derive(Debug, Clone, Default)]
pub struct GithubActionsRenderer {
    plain: TerminalRenderer,
}

impl GithubActionsRenderer {
    /// Create a renderer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a diagnostic as an annotation command
    #[must_use]
    pub fn annotation(&self, diag: &Diagnostic) -> String {
        let mut out = format!("::{}", diag.severity.as_str());
        if let Some(location) = &diag.location {
            out.push_str(&format!(" file={}", location.path));
            if let Some(line) = location.line {
                out.push_str(&format!(",line={line}"));
                if let Some(column) = location.column {
                    out.push_str(&format!(",col={column}"));
                }
            }
        }
        out.push_str("::");
        out.push_str(&diag.details());
        out
    }
}

impl Renderer for GithubActionsRenderer {
    fn render_view(&self, view: &View) -> Option<String> {
        match view {
            View::Diagnostic(diag) => Some(self.annotation(diag)),
            View::Case(case) if case.status == CaseStatus::Failed => {
                let text = self.plain.render_view(view)?;
                Some(format!("::error::{}", text.trim_start()))
            }
            _ => self.plain.render_view(view),
        }
    }

    fn render_summary(&self, summary: &TestSummary) -> String {
        let severity = if summary.is_success() {
            Severity::Notice
        } else {
            Severity::Error
        };
        format!("::{}::{}", severity.as_str(), summary.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Origin;
    use similar_asserts::assert_eq;

    #[test]
    fn test_annotation_without_position() {
        let diag = Diagnostic::new(Severity::Warning, Origin::Tool, "no rule to process file");
        assert_eq!(
            GithubActionsRenderer::new().annotation(&diag),
            "::warning::no rule to process file"
        );
    }

    #[test]
    fn test_annotation_with_line_only() {
        let diag = Diagnostic::new(Severity::Error, Origin::Test, "testFailure, boom")
            .at("/Users/dev/AppTests.swift:42");
        assert_eq!(
            GithubActionsRenderer::new().annotation(&diag),
            "::error file=/Users/dev/AppTests.swift,line=42::testFailure, boom"
        );
    }

    #[test]
    fn test_summary_is_notice_or_error() {
        let renderer = GithubActionsRenderer::new();
        let passed = TestSummary {
            tests_count: 2,
            ..TestSummary::default()
        };
        assert!(renderer.render_summary(&passed).starts_with("::notice::Tests Passed"));

        let failed = TestSummary {
            failures_count: 1,
            ..passed
        };
        assert!(renderer.render_summary(&failed).starts_with("::error::Tests Failed"));
    }
}
