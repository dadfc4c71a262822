// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for xclog
//!
//! This module provides the command line interface and derives the effective
//! settings for a run: renderer, color, verbosity, platform and report output.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use xclog_parser::{Platform, ScanOrder};
use xclog_render::{RendererKind, Verbosity, stdout_supports_color};

use crate::pipeline::RunOptions;

/// Default directory for written reports
pub const DEFAULT_REPORT_PATH: &str = "build/reports";

/// Default JUnit report file name
pub const DEFAULT_JUNIT_FILENAME: &str = "junit.xml";

/// xclog - beautify xcodebuild output
///
/// Pipe xcodebuild output into xclog:
///
///   xcodebuild test -scheme App | xclog
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "xclog")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run (defaults to beautifying stdin)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Only show warnings, errors and results
    ///
    /// Repeat (-qq) to hide warnings as well.
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Only show errors and results (same as -qq)
    #[arg(long, default_value = "false")]
    pub quieter: bool,

    /// Output verbosity when no -q flag is given
    #[arg(long, env = "XCLOG_VERBOSITY")]
    pub verbosity: Option<Verbosity>,

    /// Output format: terminal, github-actions or teamcity
    #[arg(long, env = "XCLOG_RENDERER", default_value_t = RendererKind::Terminal)]
    pub renderer: RendererKind,

    /// Never emit ANSI color codes
    #[arg(long, default_value = "false")]
    pub disable_colored_output: bool,

    /// Show test progress in the quiet modes
    #[arg(long, env = "XCLOG_IS_CI", default_value = "false")]
    pub is_ci: bool,

    /// Print lines no rule recognizes
    #[arg(long, default_value = "false")]
    pub preserve_unbeautified: bool,

    /// Toolchain that produced the log: apple or linux
    ///
    /// Defaults to the platform xclog is running on.
    #[arg(long, env = "XCLOG_PLATFORM")]
    pub platform: Option<Platform>,

    /// Write a test report after the run
    #[arg(long, value_enum)]
    pub report: Option<ReportFormat>,

    /// Directory for written reports
    #[arg(long)]
    pub report_path: Option<PathBuf>,

    /// File name of the JUnit report
    #[arg(long)]
    pub junit_report_filename: Option<String>,

    /// Only log internal errors
    #[arg(long, default_value = "false")]
    pub disable_logging: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with rendered output.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Rule scan strategy: mru or canonical
    #[arg(long)]
    pub scan_order: Option<ScanOrder>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print one JSON object per classified line
    ///
    /// Useful for checking which rule a line resolves to.
    ///
    /// Example:
    ///   xcodebuild build | xclog classify
    Classify {
        /// Also print lines no rule recognizes
        #[arg(long)]
        all: bool,
    },
}

/// Report formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// JUnit XML
    Junit,
}

impl Config {
    /// Effective output verbosity
    ///
    /// `--quieter` and `-q` take precedence over `--verbosity`.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quieter {
            Verbosity::Quieter
        } else if self.quiet > 0 {
            Verbosity::from_quiet_count(self.quiet)
        } else {
            self.verbosity.unwrap_or_default()
        }
    }

    /// Get the log level based on verbose/disable-logging flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.disable_logging {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }

    /// Whether color was asked for, ignoring terminal support
    #[must_use]
    pub fn wants_color(&self) -> bool {
        !self.disable_colored_output && self.renderer == RendererKind::Terminal
    }

    /// Whether rendered output should be colored
    #[must_use]
    pub fn colored(&self) -> bool {
        self.wants_color() && stdout_supports_color()
    }

    /// Platform to classify for, defaulting to the host
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::host)
    }

    /// Directory reports are written to
    #[must_use]
    pub fn report_dir(&self) -> PathBuf {
        self.report_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH))
    }

    /// Full path of the report file, if a report was requested
    #[must_use]
    pub fn report_file(&self) -> Option<PathBuf> {
        self.report.map(|ReportFormat::Junit| {
            self.report_dir().join(
                self.junit_report_filename
                    .as_deref()
                    .unwrap_or(DEFAULT_JUNIT_FILENAME),
            )
        })
    }

    /// Settings for one pipeline run
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            renderer: self.renderer,
            colored: self.colored(),
            verbosity: self.verbosity(),
            ci: self.is_ci,
            preserve_unbeautified: self.preserve_unbeautified,
            platform: self.platform(),
            scan: self.scan_order.unwrap_or_default(),
            report_file: self.report_file(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The report path exists but is not a directory
    /// - The JUnit file name contains a path separator
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.report_path
            && path.exists()
            && !path.is_dir()
        {
            return Err(ConfigError::ReportPathNotDirectory(path.clone()));
        }

        if let Some(ref name) = self.junit_report_filename
            && (name.is_empty() || name.contains(['/', '\\']))
        {
            return Err(ConfigError::InvalidReportFilename(name.clone()));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Report path is not a directory
    #[error("Report path is not a directory: {0}")]
    ReportPathNotDirectory(PathBuf),

    /// JUnit report file name is not a plain file name
    #[error("Invalid JUnit report file name: {0:?}")]
    InvalidReportFilename(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.command.is_none());
        assert_eq!(config.verbosity(), Verbosity::Full);
        assert_eq!(config.renderer, RendererKind::Terminal);
        assert!(config.report_file().is_none());
        assert!(!config.is_ci);
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(Config::default().log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_log_level_verbose_wins() {
        let config = Config {
            verbose: true,
            disable_logging: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_quieter_overrides_verbosity() {
        let config = Config {
            quieter: true,
            verbosity: Some(Verbosity::Full),
            ..Default::default()
        };
        assert_eq!(config.verbosity(), Verbosity::Quieter);
    }

    #[test]
    fn test_report_file_defaults() {
        let config = Config {
            report: Some(ReportFormat::Junit),
            ..Default::default()
        };
        assert_eq!(
            config.report_file(),
            Some(PathBuf::from("build/reports/junit.xml"))
        );
    }

    #[test]
    fn test_ci_renderers_are_never_colored() {
        let config = Config {
            renderer: RendererKind::GithubActions,
            ..Default::default()
        };
        assert!(!config.wants_color());
        assert!(!config.colored());
    }

    #[test]
    fn test_validate_rejects_file_as_report_path() {
        let file = std::env::temp_dir().join(format!("xclog-config-{}", std::process::id()));
        std::fs::write(&file, b"").expect("temp file");
        let config = Config {
            report_path: Some(file.clone()),
            ..Default::default()
        };
        let result = config.validate();
        std::fs::remove_file(&file).ok();
        assert!(matches!(result, Err(ConfigError::ReportPathNotDirectory(_))));
    }

    #[test]
    fn test_validate_rejects_nested_filename() {
        let config = Config {
            junit_report_filename: Some("reports/junit.xml".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidReportFilename(_))
        ));
    }

    #[test]
    fn test_validate_accepts_missing_report_dir() {
        let config = Config {
            report_path: Some(PathBuf::from("/nonexistent/xclog/reports")),
            junit_report_filename: Some("report.xml".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
