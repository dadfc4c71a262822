// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Coarse output categories
//!
//! Every classified event belongs to exactly one category. The category drives
//! verbosity filtering and decides whether a renderer treats the event as an
//! error, a warning or a plain notice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a formatted line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputCategory {
    /// A build step (compile, link, copy, sign, ...)
    Task,
    /// Test lifecycle markers (suite started, test started, ...)
    Test,
    /// A single test case outcome
    TestCase,
    /// A warning that has file or tool context
    Warning,
    /// An error that has file or tool context
    Error,
    /// An error line that is meaningful on its own, without preceding context
    NonContextualError,
    /// Phase and run results
    Result,
    /// Issues recorded by a test framework
    Issue,
    /// Anything else, including unclassified lines
    Undefined,
}

impl OutputCategory {
    /// Get the display name for this category
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Test => "test",
            Self::TestCase => "testCase",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::NonContextualError => "nonContextualError",
            Self::Result => "result",
            Self::Issue => "issue",
            Self::Undefined => "undefined",
        }
    }

    /// Whether this category counts towards a failing exit code
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for OutputCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
