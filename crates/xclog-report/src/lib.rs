// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xclog-report: Test reports from classified xcodebuild output
//!
//! This library crate folds test events produced by `xclog-parser` into a
//! suite/case tree and writes it as JUnit XML.
//!
//! # Example
//!
//! ```
//! use xclog_parser::Event;
//! use xclog_parser::event::FailingTest;
//! use xclog_report::prelude::*;
//!
//! let mut aggregator = ReportAggregator::new();
//! aggregator.observe(&Event::FailingTest(FailingTest {
//!     location: "/src/AppTests.swift:12".to_string(),
//!     suite: "AppTests".to_string(),
//!     name: "testBroken".to_string(),
//!     reason: "XCTAssertTrue failed".to_string(),
//! }));
//!
//! let xml = to_junit_string(&aggregator.report()).unwrap();
//! assert!(xml.contains(r#"<testsuite name="AppTests" tests="1" failures="1">"#));
//! ```

pub mod aggregator;
pub mod error;
pub mod junit;
pub mod report;

pub use aggregator::{PARALLEL_SUITE_NAME, ReportAggregator};
pub use error::ReportError;
pub use junit::{to_junit_string, write_junit};
pub use report::{Case, Outcome, Report, Suite};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::aggregator::ReportAggregator;
    pub use crate::error::ReportError;
    pub use crate::junit::{to_junit_string, write_junit};
    pub use crate::report::{Case, Outcome, Report, Suite};
}
