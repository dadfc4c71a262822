// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Event dump
//!
//! Writes one JSON object per input line describing the event it classified
//! to, for checking the catalog against captured logs.

use std::io::{self, BufRead, BufWriter, Write};

use serde::Serialize;
use thiserror::Error;
use xclog_parser::prelude::*;

/// Event dump errors
#[derive(Debug, Error)]
pub enum DumpError {
    /// Registry construction or input read failed
    #[error("Parser error: {0}")]
    Parser(#[from] ParserError),

    /// Writing a record failed
    #[error("Output error: {0}")]
    Output(#[from] io::Error),

    /// Encoding a classified line failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One classified line
#[derive(Debug, Serialize)]
pub struct ClassifiedLine<'a> {
    /// 1-based input line number
    pub number: u64,
    /// The raw line
    pub line: &'a str,
    /// Event kind, `null` when unclassified
    pub kind: Option<EventKind>,
    /// Output category
    pub category: OutputCategory,
    /// Full event with its fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<&'a Event>,
}

/// Dump classifications of `input` to `out` as newline-delimited JSON
///
/// Returns the number of records written.
///
/// # Errors
///
/// Returns `DumpError` if the catalog fails to build or a record cannot be
/// read, encoded or written.
pub fn dump<R: BufRead, W: Write>(
    platform: Platform,
    scan: ScanOrder,
    include_unclassified: bool,
    input: R,
    out: W,
) -> Result<u64, DumpError> {
    let mut classifier = Classifier::for_platform(platform, scan)?;
    let mut source = ReaderSource::new(input);
    let mut out = BufWriter::new(out);
    let mut written = 0;

    while let Some(line) = source.next_line() {
        let number = source.lines_read();
        let event = classifier.classify(&line, &mut source);
        if event.is_none() && !include_unclassified {
            continue;
        }
        let record = ClassifiedLine {
            number,
            line: &line,
            kind: event.as_ref().map(Event::kind),
            category: event
                .as_ref()
                .map_or(OutputCategory::Undefined, Event::category),
            event: event.as_ref(),
        };
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
        written += 1;
    }

    out.flush()?;
    source.finish()?;
    tracing::debug!(records = written, "classification dump complete");
    Ok(written)
}
