// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target comparing scan orders
//!
//! The most-recently-used scan must pick the same rule as the canonical scan
//! for every line.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use xclog_parser::prelude::*;

#[derive(Debug, Arbitrary)]
struct Input {
    linux: bool,
    lines: Vec<String>,
}

fuzz_target!(|input: Input| {
    let platform = if input.linux {
        Platform::Linux
    } else {
        Platform::Apple
    };
    let (Ok(mut canonical), Ok(mut recent)) = (
        Classifier::for_platform(platform, ScanOrder::Canonical),
        Classifier::for_platform(platform, ScanOrder::MostRecentlyUsed),
    ) else {
        return;
    };
    for line in &input.lines {
        assert_eq!(canonical.winner(line), recent.winner(line), "{line:?}");
    }
});
