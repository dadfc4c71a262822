// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Renderer trait and selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use xclog_parser::{Event, TestSummary};

use crate::github::GithubActionsRenderer;
use crate::teamcity::TeamCityRenderer;
use crate::terminal::TerminalRenderer;
use crate::view::{View, view};

/// Formats events for one output sink
///
/// Renderers hold no state between lines.
pub trait Renderer {
    /// Format one presentation shape
    ///
    /// Returns `None` when this sink shows nothing for it.
    fn render_view(&self, view: &View) -> Option<String>;

    /// Format one classified event
    fn render(&self, event: &Event) -> Option<String> {
        self.render_view(&view(event))
    }

    /// Format a line no rule matched
    fn render_unclassified(&self, line: &str) -> String {
        line.to_string()
    }

    /// Format the end-of-run test summary
    fn render_summary(&self, summary: &TestSummary) -> String;
}

/// Available renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RendererKind {
    /// Human readable, optionally colored
    #[default]
    Terminal,
    /// GitHub Actions workflow commands
    GithubActions,
    /// TeamCity service messages
    #[serde(rename = "teamcity")]
    TeamCity,
}

impl RendererKind {
    /// Get the flag spelling
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::GithubActions => "github-actions",
            Self::TeamCity => "teamcity",
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RendererKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "github-actions" | "github" => Ok(Self::GithubActions),
            "teamcity" => Ok(Self::TeamCity),
            other => Err(format!("unknown renderer: {other}")),
        }
    }
}

/// Any of the built-in renderers
#[derive(Debug, Clone)]
pub enum AnyRenderer {
    /// Terminal
    Terminal(TerminalRenderer),
    /// GitHub Actions
    GithubActions(GithubActionsRenderer),
    /// TeamCity
    TeamCity(TeamCityRenderer),
}

impl AnyRenderer {
    /// Build the renderer for `kind`
    ///
    /// `colored` applies to the terminal renderer only; CI sinks are plain.
    #[must_use]
    pub fn new(kind: RendererKind, colored: bool) -> Self {
        match kind {
            RendererKind::Terminal => Self::Terminal(TerminalRenderer::new(colored)),
            RendererKind::GithubActions => Self::GithubActions(GithubActionsRenderer::new()),
            RendererKind::TeamCity => Self::TeamCity(TeamCityRenderer::new()),
        }
    }

    /// Which renderer this is
    #[must_use]
    pub fn kind(&self) -> RendererKind {
        match self {
            Self::Terminal(_) => RendererKind::Terminal,
            Self::GithubActions(_) => RendererKind::GithubActions,
            Self::TeamCity(_) => RendererKind::TeamCity,
        }
    }

    fn inner(&self) -> &dyn Renderer {
        match self {
            Self::Terminal(r) => r,
            Self::GithubActions(r) => r,
            Self::TeamCity(r) => r,
        }
    }
}

impl Renderer for AnyRenderer {
    fn render_view(&self, view: &View) -> Option<String> {
        self.inner().render_view(view)
    }

    fn render_unclassified(&self, line: &str) -> String {
        self.inner().render_unclassified(line)
    }

    fn render_summary(&self, summary: &TestSummary) -> String {
        self.inner().render_summary(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_kind_parse() {
        assert_eq!("github-actions".parse::<RendererKind>(), Ok(RendererKind::GithubActions));
        assert_eq!("TeamCity".parse::<RendererKind>(), Ok(RendererKind::TeamCity));
        assert!("html".parse::<RendererKind>().is_err());
    }

    #[test]
    fn test_any_renderer_reports_kind() {
        for kind in [
            RendererKind::Terminal,
            RendererKind::GithubActions,
            RendererKind::TeamCity,
        ] {
            assert_eq!(AnyRenderer::new(kind, false).kind(), kind);
        }
    }
}
