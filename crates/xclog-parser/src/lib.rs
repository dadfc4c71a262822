// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xclog-parser: Line classification for xcodebuild logs
//!
//! This library crate turns raw `xcodebuild` console output into typed
//! [`Event`]s using an ordered catalog of anchored line patterns.

//! # Example
//!
//! ```
//! use xclog_parser::prelude::*;
//!
//! let mut classifier = Classifier::for_platform(Platform::Apple, ScanOrder::default())
//!     .expect("catalog compiles");
//! let mut source = IterSource::new(["int x", "    ^"].into_iter());
//!
//! let event = classifier
//!     .classify("/a/b.c:10:4: error: missing semicolon", &mut source)
//!     .expect("classified");
//! assert_eq!(event.category(), OutputCategory::Error);
//! ```

pub mod category;
pub mod classifier;
pub mod error;
pub mod event;
pub mod lookahead;
pub mod registry;
pub mod rules;
pub mod summary;

pub use category::OutputCategory;
pub use classifier::{Classifier, ScanOrder, ScanStats};
pub use error::ParserError;
pub use event::{Event, EventKind};
pub use lookahead::{IntoLineSource, IterSource, LineSource, ReaderSource};
pub use registry::{Platform, Registry};
pub use summary::{SummaryTracker, TestSummary};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::category::OutputCategory;
    pub use crate::classifier::{Classifier, ScanOrder};
    pub use crate::error::ParserError;
    pub use crate::event::{Event, EventKind, HasFile, HasTarget, HasTestCase, HasTestCounts};
    pub use crate::lookahead::{IntoLineSource, IterSource, LineSource, ReaderSource};
    pub use crate::registry::Platform;
    pub use crate::summary::{SummaryTracker, TestSummary};
}
