// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the classifier
//!
//! Feeds arbitrary text through the classifier as a line stream, including
//! the continuation pulls of multi-line diagnostics.

#![no_main]

use libfuzzer_sys::fuzz_target;

use xclog_parser::prelude::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let Ok(mut classifier) = Classifier::for_platform(Platform::Apple, ScanOrder::default())
        else {
            return;
        };
        let mut source = input.lines().into_source();

        // Extraction failures panic in debug builds, so any panic here is a
        // rule whose captures do not fit its event
        while let Some(line) = source.next_line() {
            let _ = classifier.classify(&line, &mut source);
        }
    }
});
