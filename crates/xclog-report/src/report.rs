// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report tree
//!
//! Suite and report counts are always summed from their children when asked
//! for; nothing stores them.

use serde::Serialize;

/// How a test case ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "message", rename_all = "lowercase")]
pub enum Outcome {
    /// Test passed
    Passed,
    /// Test failed with a message
    Failed(String),
    /// Test was skipped, with an optional reason
    Skipped(Option<String>),
}

impl Outcome {
    /// Check if this outcome counts as a failure
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Case {
    /// Class (suite) the case was reported under
    pub classname: String,
    /// Test name
    pub name: String,
    /// Duration in seconds, verbatim from the log
    pub time: Option<String>,
    /// Outcome
    pub outcome: Outcome,
}

impl Case {
    /// A passed case
    #[must_use]
    pub fn passed(classname: impl Into<String>, name: impl Into<String>, time: Option<String>) -> Self {
        Self {
            classname: classname.into(),
            name: name.into(),
            time,
            outcome: Outcome::Passed,
        }
    }

    /// A failed case
    #[must_use]
    pub fn failed(
        classname: impl Into<String>,
        name: impl Into<String>,
        time: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            classname: classname.into(),
            name: name.into(),
            time,
            outcome: Outcome::Failed(message.into()),
        }
    }

    /// A skipped case
    #[must_use]
    pub fn skipped(
        classname: impl Into<String>,
        name: impl Into<String>,
        time: Option<String>,
        reason: Option<String>,
    ) -> Self {
        Self {
            classname: classname.into(),
            name: name.into(),
            time,
            outcome: Outcome::Skipped(reason),
        }
    }
}

/// A named group of cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suite {
    /// Suite name
    pub name: String,
    /// Cases in arrival order
    pub cases: Vec<Case>,
}

impl Suite {
    /// Create an empty suite
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    /// Number of cases
    #[must_use]
    pub fn tests(&self) -> usize {
        self.cases.len()
    }

    /// Number of failed cases
    #[must_use]
    pub fn failures(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_failure()).count()
    }

    /// Number of skipped cases
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.cases
            .iter()
            .filter(|c| matches!(c.outcome, Outcome::Skipped(_)))
            .count()
    }
}

/// The whole report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Name of the first suite started, if any
    pub name: Option<String>,
    /// Suites in first-seen order
    pub suites: Vec<Suite>,
}

impl Report {
    /// Number of cases across all suites
    #[must_use]
    pub fn tests(&self) -> usize {
        self.suites.iter().map(Suite::tests).sum()
    }

    /// Number of failed cases across all suites
    #[must_use]
    pub fn failures(&self) -> usize {
        self.suites.iter().map(Suite::failures).sum()
    }

    /// Check if the report has no cases
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suites.iter().all(|s| s.cases.is_empty())
    }

    /// Find a suite by name
    #[must_use]
    pub fn suite(&self, name: &str) -> Option<&Suite> {
        self.suites.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_follow_children() {
        let mut suite = Suite::new("AppTests");
        suite.cases.push(Case::passed("AppTests", "testA", None));
        suite
            .cases
            .push(Case::failed("AppTests", "testB", None, "boom"));
        suite
            .cases
            .push(Case::skipped("AppTests", "testC", None, None));
        assert_eq!(suite.tests(), 3);
        assert_eq!(suite.failures(), 1);
        assert_eq!(suite.skipped(), 1);

        let mut report = Report {
            name: Some("AppTests".to_string()),
            suites: vec![suite],
        };
        assert_eq!(report.failures(), 1);

        report.suites[0].cases.retain(|c| !c.outcome.is_failure());
        assert_eq!(report.tests(), 2);
        assert_eq!(report.failures(), 0);
    }

    #[test]
    fn test_empty_report() {
        let report = Report::default();
        assert!(report.is_empty());
        assert_eq!(report.tests(), 0);
        assert!(report.suite("missing").is_none());
    }
}
