// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for the run pipeline
//!
//! These tests use proptest to check that verbosity and renderer choices only
//! change presentation, never what was classified or the exit code.

use std::collections::HashSet;

use proptest::prelude::*;
use xclog::pipeline::{RunOptions, RunOutcome, run};
use xclog_parser::Platform;
use xclog_render::{RendererKind, Verbosity};

// ============================================================================
// Strategies
// ============================================================================

/// Lines taken from real builds, plus noise no rule recognizes
fn log_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("=== BUILD TARGET App OF PROJECT App WITH CONFIGURATION Debug ===".to_string()),
        Just(
            "CompileSwift normal arm64 /a/Sources/A.swift (in target 'App' from project 'App')"
                .to_string()
        ),
        Just("/a/B.swift:3:1: warning: unused variable".to_string()),
        Just("/a/B.swift:9:2: error: cannot find 'x' in scope".to_string()),
        Just("Test Suite 'AppTests' started at 2024-01-01 10:00:00.000".to_string()),
        Just("Test Case '-[AppTests.AppTests testA]' passed (0.001 seconds).".to_string()),
        Just("/a/T.swift:4: error: -[AppTests.AppTests testB] : failed".to_string()),
        Just("** BUILD SUCCEEDED **".to_string()),
        Just("** BUILD FAILED **".to_string()),
        Just(String::new()),
        "[a-zA-Z0-9 ./:'-]{0,60}",
    ]
}

fn log() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(log_line(), 0..40)
}

fn verbosity() -> impl Strategy<Value = Verbosity> {
    prop_oneof![
        Just(Verbosity::Full),
        Just(Verbosity::Quiet),
        Just(Verbosity::Quieter),
    ]
}

fn renderer() -> impl Strategy<Value = RendererKind> {
    prop_oneof![
        Just(RendererKind::Terminal),
        Just(RendererKind::GithubActions),
        Just(RendererKind::TeamCity),
    ]
}

// ============================================================================
// Helpers
// ============================================================================

fn run_lines(lines: &[String], renderer: RendererKind, verbosity: Verbosity) -> (RunOutcome, String) {
    let mut input = lines.join("\n");
    input.push('\n');
    let options = RunOptions {
        renderer,
        verbosity,
        platform: Platform::Apple,
        ..RunOptions::default()
    };
    let mut out = Vec::new();
    let outcome = run(&options, input.as_bytes(), &mut out).expect("run succeeds");
    (outcome, String::from_utf8(out).expect("utf-8 output"))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_every_input_line_is_counted(lines in log(), kind in renderer()) {
        let (outcome, _) = run_lines(&lines, kind, Verbosity::Full);
        prop_assert_eq!(outcome.lines, lines.len() as u64);
        prop_assert!(outcome.classified <= outcome.lines);
    }

    #[test]
    fn prop_presentation_does_not_change_classification(
        lines in log(),
        kind in renderer(),
        level in verbosity(),
    ) {
        let (reference, _) = run_lines(&lines, RendererKind::Terminal, Verbosity::Full);
        let (outcome, _) = run_lines(&lines, kind, level);
        prop_assert_eq!(outcome.classified, reference.classified);
        prop_assert_eq!(outcome.errors, reference.errors);
        prop_assert_eq!(outcome.exit_code(), reference.exit_code());
    }

    #[test]
    fn prop_quiet_output_is_drawn_from_full_output(
        lines in log(),
        kind in renderer(),
        level in verbosity(),
    ) {
        let (_, full) = run_lines(&lines, kind, Verbosity::Full);
        let (_, filtered) = run_lines(&lines, kind, level);
        let full_lines: HashSet<&str> = full.lines().collect();
        for line in filtered.lines() {
            prop_assert!(full_lines.contains(line), "unexpected line: {:?}", line);
        }
    }
}
