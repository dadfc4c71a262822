// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report aggregation
//!
//! Test events arrive on two streams. Sequential XCTest output names its
//! suites reliably, so its cases are grouped by class name. Parallel test
//! output interleaves runners, so its cases are all collected under one
//! synthetic suite instead.
//!
//! # Example
//!
//! ```
//! use xclog_parser::Event;
//! use xclog_parser::event::TimedTestCase;
//! use xclog_report::ReportAggregator;
//!
//! let mut aggregator = ReportAggregator::new();
//! aggregator.observe(&Event::TestSuiteStart { suite: "AppTests".to_string() });
//! aggregator.observe(&Event::TestCasePassed(TimedTestCase {
//!     suite: "AppTests".to_string(),
//!     name: "testExample".to_string(),
//!     time: "0.001".to_string(),
//! }));
//!
//! let report = aggregator.report();
//! assert_eq!(report.name.as_deref(), Some("AppTests"));
//! assert_eq!(report.tests(), 1);
//! ```

use xclog_parser::event::{Event, FailingTest, HasTestCase, ParallelTestCase};

use crate::report::{Case, Outcome, Report, Suite};

/// Name of the suite that collects parallel test cases
pub const PARALLEL_SUITE_NAME: &str = "Parallel tests";

// ============================================================================
// Streams
// ============================================================================

/// One folded event stream
#[derive(Debug, Clone, Default)]
struct Stream {
    /// Fixed by the first suite start
    name: Option<String>,
    cases: Vec<Case>,
}

impl Stream {
    fn start_suite(&mut self, name: &str) {
        if self.name.is_none() {
            self.name = Some(name.to_string());
        }
    }

    fn push(&mut self, case: Case) {
        self.cases.push(case);
    }
}

// ============================================================================
// Aggregator
// ============================================================================

/// Folds classified test events into a [`Report`]
#[derive(Debug, Clone)]
pub struct ReportAggregator {
    sequential: Stream,
    parallel: Stream,
}

impl ReportAggregator {
    /// Create an empty aggregator
    #[must_use]
    pub fn new() -> Self {
        let mut parallel = Stream::default();
        parallel.start_suite(PARALLEL_SUITE_NAME);
        Self {
            sequential: Stream::default(),
            parallel,
        }
    }

    /// Feed one classified event
    ///
    /// Events that do not describe test progress are ignored. Returns `true`
    /// if the event was recorded.
    pub fn observe(&mut self, event: &Event) -> bool {
        match event {
            Event::TestSuiteStart { suite } | Event::TestSuiteStarted { suite, .. } => {
                self.sequential.start_suite(suite);
            }
            Event::TestCasePassed(c) => {
                self.sequential
                    .push(Case::passed(c.suite(), c.name(), Some(c.time.clone())));
            }
            Event::TestCaseSkipped(c) => {
                self.sequential
                    .push(Case::skipped(c.suite(), c.name(), Some(c.time.clone()), None));
            }
            Event::FailingTest(t) => self.sequential.push(failure(t)),
            Event::RestartingTest(r) => {
                self.sequential
                    .push(Case::failed(r.suite(), r.name(), None, r.message.clone()));
            }
            Event::ParallelTestCasePassed(c) | Event::ParallelTestCaseAppKitPassed(c) => {
                self.parallel.push(parallel_case(c, Outcome::Passed));
            }
            Event::ParallelTestCaseFailed(c) => {
                let message = format!("failed on '{}'", c.device);
                self.parallel.push(parallel_case(c, Outcome::Failed(message)));
            }
            Event::ParallelTestCaseSkipped(c) => {
                self.parallel.push(parallel_case(c, Outcome::Skipped(None)));
            }
            _ => return false,
        }
        true
    }

    /// Number of cases recorded so far
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.sequential.cases.len() + self.parallel.cases.len()
    }

    /// Build the report tree
    ///
    /// Sequential cases are grouped into suites by class name in first-seen
    /// order. Parallel cases follow in a single suite, omitted when empty.
    #[must_use]
    pub fn report(&self) -> Report {
        let mut suites: Vec<Suite> = Vec::new();
        for case in &self.sequential.cases {
            match suites.iter_mut().find(|s| s.name == case.classname) {
                Some(suite) => suite.cases.push(case.clone()),
                None => {
                    let mut suite = Suite::new(case.classname.clone());
                    suite.cases.push(case.clone());
                    suites.push(suite);
                }
            }
        }

        if !self.parallel.cases.is_empty() {
            let name = self
                .parallel
                .name
                .clone()
                .unwrap_or_else(|| PARALLEL_SUITE_NAME.to_string());
            suites.push(Suite {
                name,
                cases: self.parallel.cases.clone(),
            });
        }

        tracing::debug!(
            suites = suites.len(),
            cases = self.case_count(),
            "built test report"
        );
        Report {
            name: self.sequential.name.clone(),
            suites,
        }
    }
}

impl Default for ReportAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn failure(test: &FailingTest) -> Case {
    Case::failed(
        test.suite(),
        test.name(),
        None,
        format!("{}: {}", test.location, test.reason),
    )
}

fn parallel_case(c: &ParallelTestCase, outcome: Outcome) -> Case {
    Case {
        classname: c.suite().to_string(),
        name: c.name().to_string(),
        time: Some(c.time.clone()),
        outcome,
    }
}
