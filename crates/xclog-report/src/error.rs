// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for xclog-report

use thiserror::Error;

/// Errors that can occur while producing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error writing XML
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Error writing the report file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized report was not valid UTF-8
    #[error("report is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
