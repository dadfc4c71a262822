// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Compiled pattern registry
//!
//! A [`Registry`] compiles the catalog for one [`Platform`] and precomputes,
//! for every rule, the set of earlier rules that could ever match the same
//! line. Two anchored rules can only both match a line if their leading
//! literal text agrees, so rules whose literal prefixes diverge never
//! compete. The classifier uses these competitor sets to reorder its scan
//! without changing which rule wins.

use std::fmt;
use std::str::FromStr;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::category::OutputCategory;
use crate::error::ParserError;
use crate::event::{Event, EventKind};
use crate::rules::{Extractor, Fields, RuleSpec, catalog};

// ============================================================================
// Platform
// ============================================================================

/// Which toolchain produced the log
///
/// Selects the Linux variant of a rule's matcher where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// `xcodebuild` on macOS
    Apple,
    /// swift-corelibs-xctest and SwiftPM on Linux
    Linux,
}

impl Platform {
    /// The platform this binary is running on
    #[must_use]
    pub fn host() -> Self {
        match std::env::consts::OS {
            "linux" => Self::Linux,
            _ => Self::Apple,
        }
    }

    /// Get the lowercase name for this platform
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Linux => "linux",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apple" | "macos" | "darwin" => Ok(Self::Apple),
            "linux" => Ok(Self::Linux),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

// ============================================================================
// Rule
// ============================================================================

/// A compiled catalog rule
pub struct Rule {
    kind: EventKind,
    pattern: &'static str,
    regex: Regex,
    extract: Extractor,
    continuation: usize,
    prefix: String,
}

impl Rule {
    fn compile(spec: &RuleSpec, platform: Platform) -> Result<Self, ParserError> {
        let matcher = spec.matcher(platform);
        let regex = Regex::new(matcher.pattern).map_err(|source| ParserError::InvalidPattern {
            kind: spec.kind,
            source,
        })?;
        Ok(Self {
            kind: spec.kind,
            pattern: matcher.pattern,
            regex,
            extract: matcher.extract,
            continuation: spec.continuation,
            prefix: literal_prefix(matcher.pattern),
        })
    }

    /// Kind of event this rule produces
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Category of every event this rule produces
    #[must_use]
    pub fn category(&self) -> OutputCategory {
        self.kind.category()
    }

    /// The source pattern
    #[must_use]
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Lines this rule pulls after the matched one
    #[must_use]
    pub fn continuation(&self) -> usize {
        self.continuation
    }

    /// Literal text at the first non-whitespace character of every line this
    /// rule matches
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether the pattern matches `line`
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    pub(crate) fn captures<'a>(&self, line: &'a str) -> Option<Captures<'a>> {
        self.regex.captures(line)
    }

    pub(crate) fn extract(&self, fields: &Fields<'_>) -> Option<Event> {
        (self.extract)(fields)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("pattern", &self.pattern)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// The catalog compiled for one platform, in canonical order
#[derive(Debug)]
pub struct Registry {
    platform: Platform,
    rules: Vec<Rule>,
    competitors: Vec<Vec<usize>>,
}

impl Registry {
    /// Compile the full catalog for `platform`
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidPattern`] if any pattern fails to compile.
    pub fn new(platform: Platform) -> Result<Self, ParserError> {
        Self::from_specs(&catalog(), platform)
    }

    /// Compile an explicit list of rules, in the given canonical order
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidPattern`] if any pattern fails to compile.
    pub fn from_specs(specs: &[RuleSpec], platform: Platform) -> Result<Self, ParserError> {
        let rules = specs
            .iter()
            .map(|spec| Rule::compile(spec, platform))
            .collect::<Result<Vec<_>, _>>()?;

        let competitors = (0..rules.len())
            .map(|i| {
                (0..i)
                    .filter(|&j| prefixes_compatible(&rules[i].prefix, &rules[j].prefix))
                    .collect()
            })
            .collect();

        tracing::debug!(
            platform = %platform,
            rules = rules.len(),
            "compiled pattern registry"
        );

        Ok(Self {
            platform,
            rules,
            competitors,
        })
    }

    /// Platform the registry was compiled for
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Number of rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry has no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule at canonical position `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Registry::len`].
    #[must_use]
    pub fn rule(&self, index: usize) -> &Rule {
        &self.rules[index]
    }

    /// All rules in canonical order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Canonical positions of the earlier rules that can match a line rule
    /// `index` matches, ascending
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Registry::len`].
    #[must_use]
    pub fn competitors(&self, index: usize) -> &[usize] {
        &self.competitors[index]
    }

    /// Canonical position of the first rule matching `line`
    #[must_use]
    pub fn first_match(&self, line: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.is_match(line))
    }
}

/// Literal text found at the first non-whitespace character of every match
///
/// A leading `\s*` or `\s+` is skipped, since it always consumes exactly the
/// line's leading whitespace when followed by a non-whitespace literal. The
/// literal stops at the first metacharacter, and a literal followed by a
/// quantifier that allows zero repetitions is dropped. Unanchored patterns,
/// patterns with a top-level alternation, and patterns that open with a
/// group, class or other escape have an empty prefix, which is compatible
/// with every other prefix.
#[must_use]
pub fn literal_prefix(pattern: &str) -> String {
    let Some(body) = pattern.strip_prefix('^') else {
        return String::new();
    };
    if has_top_level_alternation(body) {
        return String::new();
    }
    let body = body
        .strip_prefix(r"\s*")
        .or_else(|| body.strip_prefix(r"\s+"))
        .unwrap_or(body);

    let mut prefix = String::new();
    for c in body.chars() {
        if is_meta(c) {
            if matches!(c, '?' | '*' | '{') {
                prefix.pop();
            }
            break;
        }
        prefix.push(c);
    }
    if prefix.starts_with(char::is_whitespace) {
        return String::new();
    }
    prefix
}

fn is_meta(c: char) -> bool {
    matches!(
        c,
        '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
    )
}

fn has_top_level_alternation(body: &str) -> bool {
    let mut depth = 0usize;
    let mut in_class = false;
    let mut escaped = false;
    for c in body.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class => depth += 1,
            ')' if !in_class => depth = depth.saturating_sub(1),
            '|' if !in_class && depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Whether two literal prefixes can both start the same line
#[must_use]
pub fn prefixes_compatible(a: &str, b: &str) -> bool {
    a.starts_with(b) || b.starts_with(a)
}
