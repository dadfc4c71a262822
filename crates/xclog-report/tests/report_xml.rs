// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for xclog-report
//!
//! These tests classify captured test logs and check the resulting report
//! tree and its XML.

use std::io::BufReader;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use similar_asserts::assert_eq;
use xclog_parser::event::{FailingTest, ParallelTestCase, TimedTestCase};
use xclog_parser::prelude::*;
use xclog_report::prelude::*;
use xclog_report::PARALLEL_SUITE_NAME;

/// Get the fixtures directory for test data
fn fixtures_dir() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir).join("tests/fixtures")
}

fn aggregate_fixture(name: &str) -> ReportAggregator {
    let file = std::fs::File::open(fixtures_dir().join(name)).expect("fixture exists");
    let mut source = ReaderSource::new(BufReader::new(file));
    let mut classifier = Classifier::for_platform(Platform::Apple, ScanOrder::default())
        .expect("catalog compiles");
    let mut aggregator = ReportAggregator::new();
    while let Some(line) = source.next_line() {
        if let Some(event) = classifier.classify(&line, &mut source) {
            aggregator.observe(&event);
        }
    }
    aggregator
}

#[test]
fn test_report_from_captured_log() {
    let report = aggregate_fixture("xctest.log").report();

    assert_eq!(report.name.as_deref(), Some("All tests"));
    let names: Vec<&str> = report.suites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["AppTests.AppTests", PARALLEL_SUITE_NAME]);

    let sequential = &report.suites[0];
    assert_eq!(sequential.tests(), 3);
    assert_eq!(sequential.failures(), 1);
    assert_eq!(sequential.skipped(), 1);

    let parallel = &report.suites[1];
    assert_eq!(parallel.tests(), 2);
    assert_eq!(parallel.failures(), 1);

    assert_eq!(report.tests(), 5);
    assert_eq!(report.failures(), 2);
}

#[test]
fn test_captured_log_xml() {
    let report = aggregate_fixture("xctest.log").report();
    let xml = to_junit_string(&report).expect("serialized");

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(r#"<testsuites name="All tests" tests="5" failures="2">"#));
    assert!(xml.contains(
        r#"<testcase classname="AppTests.AppTests" name="testExample" time="0.001"/>"#
    ));
    assert!(xml.contains("XCTAssertEqual failed: (&quot;1&quot;) is not equal to (&quot;2&quot;)"));
    assert!(xml.contains(r#"<testsuite name="Parallel tests" tests="2" failures="1">"#));
}

#[test]
fn test_two_suite_report_xml() {
    let mut aggregator = ReportAggregator::new();
    let events = [
        Event::TestSuiteStart {
            suite: "A".to_string(),
        },
        Event::TestCasePassed(TimedTestCase {
            suite: "A".to_string(),
            name: "t1".to_string(),
            time: "0.1".to_string(),
        }),
        Event::TestSuiteStart {
            suite: "B".to_string(),
        },
        Event::FailingTest(FailingTest {
            location: "/src/B.swift:3".to_string(),
            suite: "B".to_string(),
            name: "t2".to_string(),
            reason: "boom".to_string(),
        }),
    ];
    for event in &events {
        aggregator.observe(event);
    }

    let xml = to_junit_string(&aggregator.report()).expect("serialized");
    assert_eq!(
        xml,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites name="A" tests="2" failures="1">
    <testsuite name="A" tests="1" failures="0">
        <testcase classname="A" name="t1" time="0.1"/>
    </testsuite>
    <testsuite name="B" tests="1" failures="1">
        <testcase classname="B" name="t2">
            <failure message="/src/B.swift:3: boom"/>
        </testcase>
    </testsuite>
</testsuites>
"#
    );
}

#[test]
fn test_write_junit_to_file() {
    let dir = std::env::temp_dir().join(format!("xclog-report-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("report.junit");

    let report = aggregate_fixture("xctest.log").report();
    let file = std::fs::File::create(&path).expect("create report");
    write_junit(&report, file).expect("written");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, to_junit_string(&report).expect("serialized"));
    std::fs::remove_dir_all(&dir).ok();
}

// ============================================================================
// Properties
// ============================================================================

// Strategies

fn test_event() -> impl Strategy<Value = Event> {
    let suite = prop::sample::select(vec!["A", "B", "C"]);
    let name = prop::sample::select(vec!["t1", "t2", "t3"]);
    prop_oneof![
        suite.clone().prop_map(|s| Event::TestSuiteStart {
            suite: s.to_string()
        }),
        (suite.clone(), name.clone()).prop_map(|(s, n)| {
            Event::TestCasePassed(TimedTestCase {
                suite: s.to_string(),
                name: n.to_string(),
                time: "0.001".to_string(),
            })
        }),
        (suite.clone(), name.clone()).prop_map(|(s, n)| {
            Event::FailingTest(FailingTest {
                location: "/src/x.swift:1".to_string(),
                suite: s.to_string(),
                name: n.to_string(),
                reason: "boom".to_string(),
            })
        }),
        (suite, name).prop_map(|(s, n)| {
            Event::ParallelTestCaseFailed(ParallelTestCase {
                suite: s.to_string(),
                name: n.to_string(),
                device: "iPhone 15".to_string(),
                time: "0.002".to_string(),
            })
        }),
    ]
}

proptest! {
    #[test]
    fn prop_report_counts_match_recorded_cases(
        events in prop::collection::vec(test_event(), 0..50),
    ) {
        let mut aggregator = ReportAggregator::new();
        for event in &events {
            aggregator.observe(event);
        }
        let report = aggregator.report();
        prop_assert_eq!(report.tests(), aggregator.case_count());
        prop_assert!(report.failures() <= report.tests());

        let first_start = events.iter().find_map(|e| match e {
            Event::TestSuiteStart { suite } => Some(suite.clone()),
            _ => None,
        });
        prop_assert_eq!(report.name, first_start);

        let parallel_position = report.suites.iter().position(|s| s.name == PARALLEL_SUITE_NAME);
        if let Some(position) = parallel_position {
            prop_assert_eq!(position, report.suites.len() - 1);
        }
    }

    #[test]
    fn prop_xml_always_serializes(
        events in prop::collection::vec(test_event(), 0..30),
    ) {
        let mut aggregator = ReportAggregator::new();
        for event in &events {
            aggregator.observe(event);
        }
        let xml = to_junit_string(&aggregator.report());
        prop_assert!(xml.is_ok());
    }
}
