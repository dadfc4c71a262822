// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the report aggregator
//!
//! Classifies arbitrary input, folds the events into a report and writes it
//! as XML. Counts must always agree with the recorded cases.

#![no_main]

use libfuzzer_sys::fuzz_target;

use xclog_parser::{Classifier, Platform, ScanOrder};
use xclog_report::{ReportAggregator, to_junit_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let Ok(mut classifier) = Classifier::for_platform(Platform::Apple, ScanOrder::default())
        else {
            return;
        };
        let mut aggregator = ReportAggregator::new();
        for line in input.lines() {
            if let Some(event) = classifier.classify_line(line) {
                aggregator.observe(&event);
            }
        }

        let report = aggregator.report();
        assert_eq!(report.tests(), aggregator.case_count());
        assert!(to_junit_string(&report).is_ok());
    }
});
