// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for xclog-parser

use thiserror::Error;

use crate::event::EventKind;

/// Errors that can occur while building a registry or reading input
#[derive(Debug, Error)]
pub enum ParserError {
    /// A catalog pattern is not a valid regular expression
    #[error("Invalid pattern for rule {kind:?}: {source}")]
    InvalidPattern {
        /// The rule whose pattern failed to compile
        kind: EventKind,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Reading the input stream failed
    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),
}
