// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test run summary
//!
//! Xcode prints an `Executed …` line after every suite, nested suites
//! included, so only the line that follows the `All tests` suite result is
//! folded into the summary.

use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::event::{Event, HasTestCounts};

/// Aggregate test counts for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TestSummary {
    /// Tests executed
    pub tests_count: u32,
    /// Tests skipped
    pub skipped_count: u32,
    /// Failures
    pub failures_count: u32,
    /// Unexpected failures
    pub unexpected_count: u32,
    /// Total time in seconds
    pub time_seconds: f64,
}

impl TestSummary {
    /// Build a summary from any payload carrying test counts
    #[must_use]
    pub fn from_counts<C: HasTestCounts + ?Sized>(counts: &C) -> Self {
        Self {
            tests_count: counts.tests(),
            skipped_count: counts.skipped(),
            failures_count: counts.failures(),
            unexpected_count: counts.unexpected(),
            time_seconds: counts.seconds(),
        }
    }

    /// Whether any test failed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures_count == 0 && self.unexpected_count == 0
    }

    /// Human readable one-line summary
    #[must_use]
    pub fn describe(&self) -> String {
        let verdict = if self.is_success() {
            "Tests Passed"
        } else {
            "Tests Failed"
        };
        format!(
            "{verdict}: {} failed, {} skipped, {} total ({:.3} seconds)",
            self.failures_count, self.skipped_count, self.tests_count, self.time_seconds
        )
    }
}

impl Add for TestSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            tests_count: self.tests_count.saturating_add(rhs.tests_count),
            skipped_count: self.skipped_count.saturating_add(rhs.skipped_count),
            failures_count: self.failures_count.saturating_add(rhs.failures_count),
            unexpected_count: self.unexpected_count.saturating_add(rhs.unexpected_count),
            time_seconds: self.time_seconds + rhs.time_seconds,
        }
    }
}

impl AddAssign for TestSummary {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Folds the event stream into a [`TestSummary`]
#[derive(Debug, Default)]
pub struct SummaryTracker {
    armed: bool,
    summary: Option<TestSummary>,
}

impl SummaryTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one classified event
    pub fn observe(&mut self, event: &Event) {
        match event {
            Event::TestSuiteAllTestsPassed | Event::TestSuiteAllTestsFailed => {
                self.armed = true;
            }
            Event::Executed(counts) | Event::ExecutedWithSkipped(counts) if self.armed => {
                self.armed = false;
                self.record(TestSummary::from_counts(counts));
            }
            Event::SwiftTestingRunCompleted(run) | Event::SwiftTestingRunFailed(run) => {
                self.record(TestSummary::from_counts(run));
            }
            _ => {}
        }
    }

    fn record(&mut self, summary: TestSummary) {
        tracing::debug!(
            tests = summary.tests_count,
            failures = summary.failures_count,
            "recorded test summary"
        );
        self.summary = Some(match self.summary {
            Some(existing) => existing + summary,
            None => summary,
        });
    }

    /// The summary so far, if any run completed
    #[must_use]
    pub fn summary(&self) -> Option<TestSummary> {
        self.summary
    }
}
