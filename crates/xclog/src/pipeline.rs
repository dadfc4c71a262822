// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Run pipeline
//!
//! Reads lines, classifies them, renders and filters the result, and feeds
//! test events to the summary and the report aggregator.
//!
//! # Example
//!
//! ```
//! use xclog::pipeline::{RunOptions, run};
//! use xclog_parser::Platform;
//!
//! let input = "/a/b.c:10:4: error: missing semicolon\nint x\n    ^\n";
//! let options = RunOptions {
//!     platform: Platform::Apple,
//!     ..RunOptions::default()
//! };
//! let mut out = Vec::new();
//! let outcome = run(&options, input.as_bytes(), &mut out).expect("run");
//!
//! assert_eq!(outcome.exit_code(), 1);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "❌ /a/b.c:10:4: missing semicolon\nint x\n    ^\n"
//! );
//! ```

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use xclog_parser::prelude::*;
use xclog_render::prelude::*;
use xclog_report::{ReportAggregator, ReportError, write_junit};

// ============================================================================
// Error Types
// ============================================================================

/// Pipeline errors
#[derive(Debug, Error)]
pub enum RunError {
    /// Registry construction or input read failed
    #[error("Parser error: {0}")]
    Parser(#[from] ParserError),

    /// Writing rendered output failed
    #[error("Output error: {0}")]
    Output(#[from] io::Error),

    /// Writing the report failed
    #[error("Report error writing {path}: {source}")]
    Report {
        /// The report file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: ReportError,
    },
}

// ============================================================================
// Options and Outcome
// ============================================================================

/// Settings for one run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Output format
    pub renderer: RendererKind,
    /// Emit ANSI colors (terminal renderer only)
    pub colored: bool,
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Show test progress in the quiet modes
    pub ci: bool,
    /// Print lines no rule recognizes
    pub preserve_unbeautified: bool,
    /// Toolchain that produced the log
    pub platform: Platform,
    /// Rule scan strategy
    pub scan: ScanOrder,
    /// Where to write a JUnit report, if anywhere
    pub report_file: Option<PathBuf>,
}

/// Statistics from a completed run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOutcome {
    /// Input lines read, continuation lines included
    pub lines: u64,
    /// Lines that produced an event
    pub classified: u64,
    /// Error-category events seen
    pub errors: u64,
    /// Output lines written
    pub emitted: u64,
    /// Test summary, if a test run completed
    pub summary: Option<TestSummary>,
    /// Report written, if any
    pub report_file: Option<PathBuf>,
}

impl RunOutcome {
    /// Process exit code: 1 if any error was classified, else 0
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(self.errors > 0)
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Beautify `input` into `out`
///
/// # Errors
///
/// Returns `RunError` if the catalog fails to build, input or output I/O
/// fails, or the report cannot be written.
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    input: R,
    out: W,
) -> Result<RunOutcome, RunError> {
    let mut classifier = Classifier::for_platform(options.platform, options.scan)?;
    let renderer = AnyRenderer::new(options.renderer, options.colored);
    let mut filter = OutputFilter::new(options.verbosity, options.ci);
    let mut summary = SummaryTracker::new();
    let mut aggregator = options.report_file.as_ref().map(|_| ReportAggregator::new());
    let mut source = ReaderSource::new(input);
    let mut out = BufWriter::new(out);
    let mut outcome = RunOutcome::default();

    info!(
        renderer = %options.renderer,
        verbosity = %options.verbosity,
        platform = %options.platform,
        scan = %options.scan,
        "starting run"
    );

    while let Some(line) = source.next_line() {
        let (category, text) = match classifier.classify(&line, &mut source) {
            Some(event) => {
                outcome.classified += 1;
                let category = event.category();
                if category.is_error() {
                    outcome.errors += 1;
                }
                summary.observe(&event);
                if let Some(aggregator) = aggregator.as_mut() {
                    aggregator.observe(&event);
                }
                (category, renderer.render(&event))
            }
            None if options.preserve_unbeautified => (
                OutputCategory::Undefined,
                Some(renderer.render_unclassified(&line)),
            ),
            None => continue,
        };

        if let Some(text) = text {
            for emitted in filter.offer(category, text) {
                writeln!(out, "{emitted}")?;
                outcome.emitted += 1;
            }
        }
    }
    filter.finish();

    outcome.summary = summary.summary();
    if let Some(test_summary) = &outcome.summary {
        writeln!(out, "{}", renderer.render_summary(test_summary))?;
        outcome.emitted += 1;
    }
    out.flush()?;

    let stats = classifier.stats();
    debug!(
        lines = stats.lines,
        matched = stats.matched,
        evaluations = stats.evaluations,
        "classifier statistics"
    );
    outcome.lines = source.finish()?;

    if let (Some(path), Some(aggregator)) = (&options.report_file, &aggregator) {
        write_report(path, aggregator)?;
        outcome.report_file = Some(path.clone());
    }

    info!(
        lines = outcome.lines,
        classified = outcome.classified,
        errors = outcome.errors,
        "run complete"
    );
    Ok(outcome)
}

fn write_report(path: &Path, aggregator: &ReportAggregator) -> Result<(), RunError> {
    let report_error = |source: ReportError| RunError::Report {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| report_error(e.into()))?;
    }
    let file = File::create(path).map_err(|e| report_error(e.into()))?;
    let mut writer = BufWriter::new(file);
    let report = aggregator.report();
    write_junit(&report, &mut writer).map_err(report_error)?;
    writer.flush().map_err(|e| report_error(e.into()))?;

    info!(
        path = %path.display(),
        tests = report.tests(),
        failures = report.failures(),
        "wrote JUnit report"
    );
    Ok(())
}
