// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xclog-render: Output formatting for classified xcodebuild logs
//!
//! This library crate turns [`xclog_parser::Event`]s into text for a
//! terminal, GitHub Actions or TeamCity, and filters that text by verbosity.

//! # Example
//!
//! ```
//! use xclog_parser::prelude::*;
//! use xclog_render::prelude::*;
//!
//! let mut classifier = Classifier::for_platform(Platform::Apple, ScanOrder::default())
//!     .expect("catalog compiles");
//! let mut source = IterSource::new(["int x", "    ^"].into_iter());
//! let event = classifier
//!     .classify("/a/b.c:10:4: error: missing semicolon", &mut source)
//!     .expect("classified");
//!
//! let renderer = AnyRenderer::new(RendererKind::GithubActions, false);
//! assert_eq!(
//!     renderer.render(&event).as_deref(),
//!     Some("::error file=/a/b.c,line=10,col=4::missing semicolon\nint x\n    ^")
//! );
//! ```

pub mod diagnostic;
pub mod filter;
pub mod github;
pub mod location;
pub mod renderer;
pub mod styles;
pub mod teamcity;
pub mod terminal;
pub mod view;

pub use diagnostic::{Diagnostic, Origin, Severity};
pub use filter::{FilterState, OutputFilter, Verbosity};
pub use github::GithubActionsRenderer;
pub use location::FileLocation;
pub use renderer::{AnyRenderer, Renderer, RendererKind};
pub use styles::{Styles, stdout_supports_color};
pub use teamcity::TeamCityRenderer;
pub use terminal::TerminalRenderer;
pub use view::{CaseLine, CaseStatus, View, view};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::filter::{OutputFilter, Verbosity};
    pub use crate::renderer::{AnyRenderer, Renderer, RendererKind};
    pub use crate::styles::stdout_supports_color;
    pub use crate::view::{View, view};
}
