// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xclog: beautifier for xcodebuild output
//!
//! This binary reads `xcodebuild` output on stdin and writes a readable,
//! CI-friendly rendering on stdout, optionally writing a JUnit report.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};

use xclog::config::{Command, Config};
use xclog::{classify, logging, pipeline};

/// Exit code for failures of xclog itself rather than of the build
const EXIT_INTERNAL_ERROR: u8 = 2;

fn main() -> ExitCode {
    let config = Config::parse();
    if let Err(e) = logging::init(config.log_level()) {
        eprintln!("xclog: {e:#}");
    }

    match run(&config) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!(error = %format!("{e:#}"), "xclog failed");
            ExitCode::from(EXIT_INTERNAL_ERROR)
        }
    }
}

fn run(config: &Config) -> anyhow::Result<u8> {
    config.validate().context("invalid configuration")?;
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match &config.command {
        Some(Command::Classify { all }) => {
            let records = classify::dump(
                config.platform(),
                config.scan_order.unwrap_or_default(),
                *all,
                stdin,
                stdout,
            )
            .context("classification dump failed")?;
            debug!(records, "dump finished");
            Ok(0)
        }
        None => {
            let outcome = pipeline::run(&config.run_options(), stdin, stdout)
                .context("beautifying input failed")?;
            debug!(
                lines = outcome.lines,
                emitted = outcome.emitted,
                "run finished"
            );
            Ok(outcome.exit_code())
        }
    }
}
