// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Source locations
//!
//! Diagnostics print positions as `path`, `path:line` or `path:line:col`.

use std::fmt;

use serde::Serialize;

/// A file position decomposed from a `path[:line[:col]]` string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLocation {
    /// File path
    pub path: String,
    /// One-based line number
    pub line: Option<u32>,
    /// One-based column number
    pub column: Option<u32>,
}

impl FileLocation {
    /// Split `text` into path, line and column
    ///
    /// Up to two trailing numeric segments are taken as line and column.
    /// Anything else stays in the path, so `C:\dir\file` or a path with no
    /// position round-trips unchanged.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let (rest, last) = split_number(text);
        let Some(last) = last else {
            return Self::path_only(text);
        };
        match split_number(rest) {
            (path, Some(line)) if !path.is_empty() => Self {
                path: path.to_string(),
                line: Some(line),
                column: Some(last),
            },
            _ if rest.is_empty() => Self::path_only(text),
            _ => Self {
                path: rest.to_string(),
                line: Some(last),
                column: None,
            },
        }
    }

    fn path_only(text: &str) -> Self {
        Self {
            path: text.to_string(),
            line: None,
            column: None,
        }
    }
}

/// Split a trailing `:<digits>` off `text`
fn split_number(text: &str) -> (&str, Option<u32>) {
    match text.rsplit_once(':') {
        Some((head, tail)) if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) => {
            match tail.parse() {
                Ok(n) => (head, Some(n)),
                Err(_) => (text, None),
            }
        }
        _ => (text, None),
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
            if let Some(column) = self.column {
                write!(f, ":{column}")?;
            }
        }
        Ok(())
    }
}
