// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line classification
//!
//! The [`Classifier`] resolves each line to the first rule, in canonical
//! order, whose pattern matches. In [`ScanOrder::MostRecentlyUsed`] mode it
//! scans the most recently winning rules first and then confirms the
//! candidate against its competitors, so the winner is always the same as a
//! plain ordered scan would pick.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParserError;
use crate::event::Event;
use crate::lookahead::{IntoLineSource, LineSource, pull};
use crate::registry::{Platform, Registry};
use crate::rules::Fields;

/// Order in which the classifier tries rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanOrder {
    /// Always scan in canonical order
    Canonical,
    /// Scan recent winners first, then verify against competitors
    #[default]
    MostRecentlyUsed,
}

impl ScanOrder {
    /// Get the flag spelling for this scan order
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::MostRecentlyUsed => "mru",
        }
    }
}

impl fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "mru" | "most-recently-used" => Ok(Self::MostRecentlyUsed),
            other => Err(format!("unknown scan order: {other}")),
        }
    }
}

/// Counters describing how much work classification did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Lines classified (continuation lines excluded)
    pub lines: u64,
    /// Lines that produced an event
    pub matched: u64,
    /// Pattern evaluations performed
    pub evaluations: u64,
}

/// Resolves lines to events
#[derive(Debug)]
pub struct Classifier {
    registry: Registry,
    scan: ScanOrder,
    /// Canonical rule positions, most recent winner first
    order: Vec<usize>,
    stats: ScanStats,
}

impl Classifier {
    /// Create a classifier over a compiled registry
    #[must_use]
    pub fn new(registry: Registry, scan: ScanOrder) -> Self {
        let order = (0..registry.len()).collect();
        Self {
            registry,
            scan,
            order,
            stats: ScanStats::default(),
        }
    }

    /// Compile the full catalog for `platform` and wrap it
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidPattern`] if any pattern fails to compile.
    pub fn for_platform(platform: Platform, scan: ScanOrder) -> Result<Self, ParserError> {
        Ok(Self::new(Registry::new(platform)?, scan))
    }

    /// The underlying registry
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The configured scan order
    #[must_use]
    pub fn scan_order(&self) -> ScanOrder {
        self.scan
    }

    /// Work counters so far
    #[must_use]
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Current scan order as canonical rule positions
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Canonical position of the rule that wins for `line`
    ///
    /// In MRU mode the winner is promoted to the front of the scan order.
    pub fn winner(&mut self, line: &str) -> Option<usize> {
        self.stats.lines += 1;
        let winner = match self.scan {
            ScanOrder::Canonical => self.scan_canonical(line),
            ScanOrder::MostRecentlyUsed => self.scan_recent(line),
        }?;
        self.stats.matched += 1;
        if self.scan == ScanOrder::MostRecentlyUsed {
            self.promote(winner);
        }
        Some(winner)
    }

    /// Classify `line`, pulling continuation lines from `source` as needed
    ///
    /// Returns `None` for lines no rule matches.
    pub fn classify<S: LineSource + ?Sized>(&mut self, line: &str, source: &mut S) -> Option<Event> {
        let index = self.winner(line)?;
        let rule = self.registry.rule(index);
        let continuation = pull(source, rule.continuation());

        let captures = rule.captures(line)?;
        let fields = Fields::new(captures, &continuation);
        match rule.extract(&fields) {
            Some(event) => Some(event),
            None => {
                tracing::error!(
                    kind = ?rule.kind(),
                    pattern = rule.pattern(),
                    line,
                    "rule matched but field extraction failed"
                );
                if cfg!(debug_assertions) {
                    panic!(
                        "rule {:?} matched {line:?} but field extraction failed",
                        rule.kind()
                    );
                }
                None
            }
        }
    }

    /// Classify a single line with no following input
    ///
    /// Continuation fields of multi-line events are empty.
    pub fn classify_line(&mut self, line: &str) -> Option<Event> {
        self.classify(line, &mut std::iter::empty::<String>().into_source())
    }

    fn scan_canonical(&mut self, line: &str) -> Option<usize> {
        for (index, rule) in self.registry.rules().iter().enumerate() {
            self.stats.evaluations += 1;
            if rule.is_match(line) {
                return Some(index);
            }
        }
        None
    }

    fn scan_recent(&mut self, line: &str) -> Option<usize> {
        let mut candidate = None;
        for &index in &self.order {
            self.stats.evaluations += 1;
            if self.registry.rule(index).is_match(line) {
                candidate = Some(index);
                break;
            }
        }
        let candidate = candidate?;

        // Any earlier rule that also matches must share the candidate's
        // literal prefix, so checking competitors in ascending order finds
        // the canonical winner.
        for &earlier in self.registry.competitors(candidate) {
            self.stats.evaluations += 1;
            if self.registry.rule(earlier).is_match(line) {
                return Some(earlier);
            }
        }
        Some(candidate)
    }

    fn promote(&mut self, index: usize) {
        if let Some(position) = self.order.iter().position(|&i| i == index) {
            self.order[..=position].rotate_right(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventKind, SourceDiagnostic};
    use similar_asserts::assert_eq;

    fn classifier(scan: ScanOrder) -> Classifier {
        Classifier::for_platform(Platform::Apple, scan).expect("catalog compiles")
    }

    #[test]
    fn test_unmatched_line_is_unclassified() {
        let mut c = classifier(ScanOrder::MostRecentlyUsed);
        assert_eq!(c.classify_line("just some chatter"), None);
        assert_eq!(c.stats().lines, 1);
        assert_eq!(c.stats().matched, 0);
    }

    #[test]
    fn test_compile_error_pulls_two_lines() {
        let mut c = classifier(ScanOrder::Canonical);
        let mut source = ["int x", "    ^", "next"].into_iter().into_source();
        let event = c.classify("/a/b.c:10:4: error: missing semicolon", &mut source);
        assert_eq!(
            event,
            Some(Event::CompileError(SourceDiagnostic {
                location: "/a/b.c:10:4".to_string(),
                reason: "missing semicolon".to_string(),
                source_line: "int x".to_string(),
                cursor: "    ^".to_string(),
            }))
        );
        assert_eq!(source.next_line().as_deref(), Some("next"));
    }

    #[test]
    fn test_lookahead_at_end_of_stream_is_empty() {
        let mut c = classifier(ScanOrder::Canonical);
        let mut source = ["int x"].into_iter().into_source();
        let Some(Event::CompileWarning(diag)) =
            c.classify("/a/b.c:3: warning: unused variable", &mut source)
        else {
            panic!("expected compile warning");
        };
        assert_eq!(diag.source_line, "int x");
        assert_eq!(diag.cursor, "");
    }

    #[test]
    fn test_single_line_events_pull_nothing() {
        let mut c = classifier(ScanOrder::Canonical);
        let mut source = ["keep me"].into_iter().into_source();
        let event = c.classify("Check dependencies", &mut source);
        assert_eq!(event, Some(Event::CheckDependencies));
        assert_eq!(source.next_line().as_deref(), Some("keep me"));
    }

    #[test]
    fn test_mru_promotes_winner_to_front() {
        let mut c = classifier(ScanOrder::MostRecentlyUsed);
        let event = c.classify_line("Touch /tmp/App.app");
        assert_eq!(event.map(|e| e.kind()), Some(EventKind::Touch));
        let front = c.order()[0];
        assert_eq!(c.registry().rule(front).kind(), EventKind::Touch);
    }

    #[test]
    fn test_mru_keeps_specific_rule_ahead_of_promoted_broad_rule() {
        let mut c = classifier(ScanOrder::MostRecentlyUsed);
        let broad = c.classify_line("CodeSign build/Release/App.app");
        assert_eq!(broad.map(|e| e.kind()), Some(EventKind::Codesign));

        // Codesign now scans first, yet the framework line still resolves to
        // the more specific rule.
        let specific = c.classify_line("CodeSign build/Release/Lib.framework/Versions/A");
        assert_eq!(
            specific,
            Some(Event::CodesignFramework {
                path: "build/Release/Lib.framework".to_string()
            })
        );
    }

    #[test]
    fn test_mru_reduces_evaluations_on_repetitive_input() {
        let line = "Test Case '-[AppTests.AppTests testExample]' passed (0.001 seconds).";
        let mut canonical = classifier(ScanOrder::Canonical);
        let mut recent = classifier(ScanOrder::MostRecentlyUsed);
        for _ in 0..50 {
            canonical.classify_line(line);
            recent.classify_line(line);
        }
        assert!(recent.stats().evaluations < canonical.stats().evaluations);
    }

    #[test]
    fn test_scan_order_parse() {
        assert_eq!("mru".parse::<ScanOrder>(), Ok(ScanOrder::MostRecentlyUsed));
        assert_eq!("Canonical".parse::<ScanOrder>(), Ok(ScanOrder::Canonical));
        assert!("random".parse::<ScanOrder>().is_err());
    }
}
