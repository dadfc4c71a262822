// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Terminal renderer

use owo_colors::OwoColorize;
use xclog_parser::TestSummary;

use crate::diagnostic::{Diagnostic, Origin, Severity};
use crate::renderer::Renderer;
use crate::styles::Styles;
use crate::view::{CaseLine, CaseStatus, View};

const PASSED: &str = "✔";
const FAILED: &str = "✖";
const SKIPPED: &str = "⊘";
const PENDING: &str = "⧖";
const MEASURED: &str = "◷";
const ERROR: &str = "❌";
const WARNING: &str = "⚠️ ";
const NOTICE: &str = "ℹ️ ";
const CASE_INDENT: &str = "    ";

/// Human readable output, plain or ANSI colored
#[derive(Debug, Clone, Default)]
pub struct TerminalRenderer {
    styles: Styles,
}

impl TerminalRenderer {
    /// Create a renderer
    #[must_use]
    pub fn new(colored: bool) -> Self {
        Self {
            styles: Styles::new(colored),
        }
    }

    /// A renderer that never emits escape codes
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    fn task(&self, verb: &str, subject: Option<&str>, target: Option<&str>) -> String {
        let mut out = String::new();
        if let Some(target) = target {
            out.push_str(&format!("{} ", format!("[{target}]").style(self.styles.target)));
        }
        out.push_str(verb);
        if let Some(subject) = subject {
            out.push(' ');
            out.push_str(subject);
        }
        out
    }

    fn case(&self, case: &CaseLine) -> String {
        let (symbol, style) = match case.status {
            CaseStatus::Passed => (PASSED, self.styles.success),
            CaseStatus::Failed => (FAILED, self.styles.failure),
            CaseStatus::Skipped => (SKIPPED, self.styles.skipped),
            CaseStatus::Pending => (PENDING, self.styles.skipped),
            CaseStatus::Measured => (MEASURED, self.styles.dimmed),
        };
        let mut out = format!("{CASE_INDENT}{} ", symbol.style(style));
        if let Some(suite) = &case.suite {
            out.push_str(&format!("[{suite}] "));
        }
        out.push_str(&case.name);
        if let Some(detail) = &case.detail {
            out.push(' ');
            out.push_str(detail);
        }
        if let Some(duration) = &case.duration {
            out.push_str(&format!(" {}", format!("({duration})").style(self.styles.dimmed)));
        }
        out
    }

    fn diagnostic(&self, diag: &Diagnostic) -> String {
        let style = match diag.severity {
            Severity::Error => self.styles.failure,
            Severity::Warning => self.styles.warning,
            Severity::Notice => self.styles.dimmed,
        };
        let lead = match (diag.origin, diag.severity) {
            (Origin::Test, _) => format!("{CASE_INDENT}{}", FAILED.style(self.styles.failure)),
            (_, Severity::Error) => ERROR.to_string(),
            (_, Severity::Warning) => WARNING.to_string(),
            (_, Severity::Notice) => NOTICE.to_string(),
        };
        let mut out = format!(
            "{lead} {}{}",
            diag.location_prefix(),
            diag.message.style(style)
        );
        for line in &diag.context {
            out.push('\n');
            out.push_str(line);
        }
        out
    }
}

impl Renderer for TerminalRenderer {
    fn render_view(&self, view: &View) -> Option<String> {
        let text = match view {
            View::Heading(text) | View::Suite(text) => text.style(self.styles.heading).to_string(),
            View::Task {
                verb,
                subject,
                target,
            } => self.task(verb, subject.as_deref(), target.as_deref()),
            View::Info(text) => text.clone(),
            View::Case(case) => self.case(case),
            View::Diagnostic(diag) => self.diagnostic(diag),
            View::Detail(text) => text.clone(),
            View::Result { success, text } => {
                let style = if *success {
                    self.styles.success
                } else {
                    self.styles.failure
                };
                text.style(style).to_string()
            }
            View::Suppressed => return None,
        };
        Some(text)
    }

    fn render_summary(&self, summary: &TestSummary) -> String {
        let style = if summary.is_success() {
            self.styles.success
        } else {
            self.styles.failure
        };
        summary.describe().style(style).to_string()
    }
}
