// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The rule catalog
//!
//! [`catalog`] returns every rule in canonical order. Order is significant:
//! rules are not mutually exclusive, so specific line shapes are listed ahead
//! of the broader shapes that would also accept them (`CodeSign` of a
//! framework before `CodeSign`, `Executed … with N tests skipped` before
//! `Executed`, compiler diagnostics before the bare `error:` catch-all, and
//! the indented shell command last of all).

use std::str::FromStr;

use regex::Captures;

use crate::event::{
    CommandLine, CompileCommand, CopyStep, Event, EventKind, ExecutedTests, FailingTest, FileStep,
    MeasuredTestCase, ModuleStep, PackageResolved, ParallelTestCase, RestartedTest, ScriptPhase,
    SourceDiagnostic, SwiftTestingIssue, SwiftTestingOutcome, SwiftTestingRun, TargetHeader,
    TargetStep, TestCaseRef, TimedTestCase, file_name,
};
use crate::registry::Platform;

/// Turns the captures of a matched line into an event
///
/// Returns `None` when a capture the event needs is missing or does not
/// parse. That is a defect in the rule, not in the input.
pub type Extractor = fn(&Fields<'_>) -> Option<Event>;

/// A line pattern and the extractor for its captures
#[derive(Clone, Copy)]
pub struct Matcher {
    /// Regular expression, anchored with `^`
    pub pattern: &'static str,
    /// Field extractor
    pub extract: Extractor,
}

/// One catalog entry
#[derive(Clone, Copy)]
pub struct RuleSpec {
    /// Kind of event the rule produces
    pub kind: EventKind,
    /// Matcher for Apple-hosted `xcodebuild` output
    pub apple: Matcher,
    /// Matcher for Linux toolchain output, when its shape differs
    pub linux: Option<Matcher>,
    /// Lines that belong to the event after the matched one
    pub continuation: usize,
}

impl RuleSpec {
    fn new(kind: EventKind, pattern: &'static str, extract: Extractor) -> Self {
        Self {
            kind,
            apple: Matcher { pattern, extract },
            linux: None,
            continuation: 0,
        }
    }

    fn on_linux(mut self, pattern: &'static str, extract: Extractor) -> Self {
        self.linux = Some(Matcher { pattern, extract });
        self
    }

    fn with_continuation(mut self, lines: usize) -> Self {
        self.continuation = lines;
        self
    }

    /// The matcher registered for `platform`
    #[must_use]
    pub fn matcher(&self, platform: Platform) -> &Matcher {
        match (platform, &self.linux) {
            (Platform::Linux, Some(linux)) => linux,
            _ => &self.apple,
        }
    }
}

impl std::fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSpec")
            .field("kind", &self.kind)
            .field("pattern", &self.apple.pattern)
            .field("continuation", &self.continuation)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Captured Fields
// ============================================================================

/// Captures of a matched line plus the continuation lines pulled for it
pub struct Fields<'a> {
    captures: Captures<'a>,
    continuation: &'a [String],
}

impl<'a> Fields<'a> {
    pub(crate) fn new(captures: Captures<'a>, continuation: &'a [String]) -> Self {
        Self {
            captures,
            continuation,
        }
    }

    /// Capture group `index`, if it took part in the match
    #[must_use]
    pub fn get(&self, index: usize) -> Option<String> {
        self.captures.get(index).map(|m| m.as_str().to_string())
    }

    /// Capture group `index` parsed as a number
    #[must_use]
    pub fn num<T: FromStr>(&self, index: usize) -> Option<T> {
        self.captures.get(index)?.as_str().trim().parse().ok()
    }

    /// Target name from an `(in target …)` suffix starting at group `index`
    ///
    /// The suffix has two shapes (`in target: X` and `in target 'X' from
    /// project 'Y'`), so the target is whichever of `index`/`index + 1`
    /// participated.
    #[must_use]
    pub fn target(&self, index: usize) -> Option<String> {
        self.get(index).or_else(|| self.get(index + 1))
    }

    /// Project name from an `(in target …)` suffix starting at group `index`
    #[must_use]
    pub fn project(&self, index: usize) -> Option<String> {
        self.get(index + 2)
    }

    /// Continuation line `n`, or an empty string if the stream ended first
    #[must_use]
    pub fn line(&self, n: usize) -> String {
        self.continuation.get(n).cloned().unwrap_or_default()
    }

    fn file_step(&self, path: usize, file: usize, in_target: usize) -> Option<FileStep> {
        Some(FileStep {
            path: self.get(path)?,
            filename: unescape(&self.get(file)?),
            target: self.target(in_target),
            project: self.project(in_target),
        })
    }

    fn copy_step(&self, source: usize, destination: usize, in_target: usize) -> Option<CopyStep> {
        Some(CopyStep {
            source: self.get(source)?,
            destination: self.get(destination)?,
            target: self.target(in_target),
            project: self.project(in_target),
        })
    }

    fn target_step(&self, in_target: usize) -> Option<TargetStep> {
        Some(TargetStep {
            target: self.target(in_target)?,
            project: self.project(in_target),
        })
    }

    fn module_step(&self, module: usize) -> Option<ModuleStep> {
        Some(ModuleStep {
            module: self.get(module)?,
            target: self.get(module + 1)?,
            project: self.get(module + 2)?,
        })
    }

    fn target_header(&self) -> Option<TargetHeader> {
        Some(TargetHeader {
            target: self.get(1)?,
            project: self.get(2)?,
            configuration: self.get(3)?,
        })
    }

    fn timed_case(&self) -> Option<TimedTestCase> {
        Some(TimedTestCase {
            suite: self.get(1)?,
            name: self.get(2)?,
            time: self.get(3)?,
        })
    }

    fn parallel_case(&self) -> Option<ParallelTestCase> {
        Some(ParallelTestCase {
            suite: self.get(1)?,
            name: self.get(2)?,
            device: self.get(3)?,
            time: self.get(4)?,
        })
    }

    fn swift_testing_run(&self) -> Option<SwiftTestingRun> {
        Some(SwiftTestingRun {
            tests: self.num(1)?,
            time: self.num(2)?,
            issues: match self.captures.get(3) {
                Some(_) => self.num(3)?,
                None => 0,
            },
        })
    }

    fn swift_testing_outcome(&self) -> Option<SwiftTestingOutcome> {
        Some(SwiftTestingOutcome {
            name: self.get(1)?,
            time: self.get(2)?,
            issues: match self.captures.get(3) {
                Some(_) => Some(self.num(3)?),
                None => None,
            },
        })
    }

    fn source_diagnostic(&self) -> Option<SourceDiagnostic> {
        Some(SourceDiagnostic {
            location: self.get(1)?,
            reason: self.get(3)?,
            source_line: self.line(0),
            cursor: self.line(1),
        })
    }
}

/// Replace the `\ ` escapes the build tool prints inside paths and names
#[must_use]
pub fn unescape(text: &str) -> String {
    text.replace("\\ ", " ")
}

// ============================================================================
// Pattern Fragments
// ============================================================================

/// A path that may contain escaped spaces: group 1 is the path, group 2 its
/// last component
macro_rules! escaped_path {
    () => {
        r"((?:\\ |[^ ])*/((?:\\ |[^ ])+))"
    };
}

/// `(in target: X)` or `(in target 'X' from project 'Y')`: three groups
macro_rules! in_target {
    () => {
        r"\((?:in target: (.*)|in target '(.*)' from project '(.*)')\)"
    };
}

/// An optional trailing `(in target …)` suffix: three groups
macro_rules! opt_in_target {
    () => {
        concat!(r"(?:\s.*", in_target!(), ")?")
    };
}

/// `Executed` counts, kept within `u32`
macro_rules! count {
    () => {
        r"([0-9]{1,9})"
    };
}

// ============================================================================
// Catalog
// ============================================================================

/// Every rule in canonical (first-match-wins) order
#[must_use]
pub fn catalog() -> Vec<RuleSpec> {
    use EventKind as K;

    vec![
        // --------------------------------------------------------------------
        // Target headers
        // --------------------------------------------------------------------
        RuleSpec::new(
            K::BuildTarget,
            r"^=== BUILD TARGET (.*) OF PROJECT (.*) WITH (?:THE DEFAULT CONFIGURATION|CONFIGURATION) (.*) ===",
            |f| Some(Event::BuildTarget(f.target_header()?)),
        ),
        RuleSpec::new(
            K::AggregateTarget,
            r"^=== BUILD AGGREGATE TARGET (.*) OF PROJECT (.*) WITH (?:THE DEFAULT CONFIGURATION|CONFIGURATION) (.*) ===",
            |f| Some(Event::AggregateTarget(f.target_header()?)),
        ),
        RuleSpec::new(
            K::AnalyzeTarget,
            r"^=== ANALYZE TARGET (.*) OF PROJECT (.*) WITH (?:THE DEFAULT CONFIGURATION|CONFIGURATION) (.*) ===",
            |f| Some(Event::AnalyzeTarget(f.target_header()?)),
        ),
        RuleSpec::new(
            K::CleanTarget,
            r"^=== CLEAN TARGET (.*) OF PROJECT (.*) WITH CONFIGURATION (.*) ===",
            |f| Some(Event::CleanTarget(f.target_header()?)),
        ),
        // --------------------------------------------------------------------
        // Build steps
        // --------------------------------------------------------------------
        RuleSpec::new(
            K::Analyze,
            concat!(
                r"^Analyze(?:Shallow)?\s((?:\\ |[^ ])*/((?:\\ |[^ ])+\.(?:mm|m|cpp|cxx|cc|c)))",
                opt_in_target!()
            ),
            |f| Some(Event::Analyze(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(K::CheckDependencies, r"^Check dependencies", |_| {
            Some(Event::CheckDependencies)
        }),
        RuleSpec::new(K::CleanRemove, r"^Clean\.Remove\sclean\s(.*)", |f| {
            Some(Event::CleanRemove { path: f.get(1)? })
        }),
        RuleSpec::new(
            K::CodesignFramework,
            r"^CodeSign\s((?:\\ |[^ ])*\.framework)/Versions/A",
            |f| Some(Event::CodesignFramework { path: f.get(1)? }),
        ),
        RuleSpec::new(K::Codesign, r"^CodeSign\s((?:\\ |[^ ])*)", |f| {
            Some(Event::Codesign { path: f.get(1)? })
        }),
        RuleSpec::new(
            K::CompileXib,
            concat!(r"^CompileXIB\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::CompileXib(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::CompileStoryboard,
            concat!(r"^CompileStoryboard\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::CompileStoryboard(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::CompileAssetCatalog,
            concat!(
                r"^CompileAssetCatalog\s(?:\\ |[^ ])+\s",
                escaped_path!(),
                opt_in_target!()
            ),
            |f| Some(Event::CompileAssetCatalog(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::SwiftCompiling,
            concat!(
                r"^SwiftCompile\s\w+\s\w+\sCompiling\\ ((?:\\ |[^ ])+)",
                opt_in_target!()
            ),
            |f| {
                Some(Event::SwiftCompiling {
                    files: unescape(&f.get(1)?),
                    target: f.target(2),
                    project: f.project(2),
                })
            },
        ),
        RuleSpec::new(
            K::SwiftCompile,
            concat!(r"^SwiftCompile\s\w+\s\w+\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::SwiftCompile(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::CompileSwiftSources,
            concat!(r"^CompileSwiftSources\s.*", in_target!()),
            |f| Some(Event::CompileSwiftSources(f.target_step(1)?)),
        ),
        RuleSpec::new(
            K::Compile,
            concat!(
                r"^Compile[\w]+\s.+?\s((?:\\ |[^ ])*/((?:\\ |[^ ])+\.(?:mm|m|cpp|cxx|cc|c|swift)))",
                opt_in_target!()
            ),
            |f| Some(Event::Compile(f.file_step(1, 2, 3)?)),
        )
        .on_linux(
            r"^\[\d+/\d+\]\sCompiling\s([^ ]+)\s([^ .]+\.(?:mm|m|cpp|cxx|cc|c|swift))",
            |f| {
                let filename = f.get(2)?;
                Some(Event::Compile(FileStep {
                    path: filename.clone(),
                    filename,
                    target: f.get(1),
                    project: None,
                }))
            },
        ),
        RuleSpec::new(
            K::ProcessPchCommand,
            r"^\s*.*/usr/bin/clang\s.*\s-c\s(.*\.pch)\s.*-o\s.*",
            |f| Some(Event::ProcessPchCommand { path: f.get(1)? }),
        ),
        RuleSpec::new(
            K::CompileCommand,
            r"^\s*(.*clang\s.*\s-c\s(.*\.(?:mm|m|cpp|cxx|cc|c))\s.*\.o)$",
            |f| {
                Some(Event::CompileCommand(CompileCommand {
                    compiler_command: f.get(1)?,
                    path: f.get(2)?,
                }))
            },
        ),
        RuleSpec::new(
            K::CopyHeader,
            concat!(
                r"^CpHeader\s((?:\\ |[^ ])+\.h)\s((?:\\ |[^ ])+\.h)",
                opt_in_target!()
            ),
            |f| Some(Event::CopyHeader(f.copy_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::CopyPlist,
            concat!(
                r"^CopyPlistFile\s((?:\\ |[^ ])+\.plist)\s((?:\\ |[^ ])+\.plist)",
                opt_in_target!()
            ),
            |f| Some(Event::CopyPlist(f.copy_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::CopyStrings,
            concat!(
                r"^CopyStringsFile\s((?:\\ |[^ ])+\.strings)\s((?:\\ |[^ ])+\.strings)",
                opt_in_target!()
            ),
            |f| Some(Event::CopyStrings(f.copy_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::CopySwiftLibs,
            concat!(r"^CopySwiftLibs\s.*", in_target!()),
            |f| Some(Event::CopySwiftLibs(f.target_step(1)?)),
        ),
        RuleSpec::new(
            K::CopyPngFile,
            concat!(
                r"^CopyPNGFile\s((?:\\ |[^ ])+\.png)\s((?:\\ |[^ ])+\.png)",
                opt_in_target!()
            ),
            |f| Some(Event::CopyPngFile(f.copy_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::CopyFiles,
            concat!(
                r"^Copy\s((?:\\ |[^ ])+)\s((?:\\ |[^ ])+)",
                opt_in_target!()
            ),
            |f| Some(Event::CopyFiles(f.copy_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::CpResource,
            concat!(
                r"^CpResource\s",
                escaped_path!(),
                r"\s(?:\\ |[^ ])+",
                opt_in_target!()
            ),
            |f| Some(Event::CpResource(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::PbxCp,
            concat!(
                r"^PBXCp\s",
                escaped_path!(),
                r"\s(?:\\ |[^ ])+",
                opt_in_target!()
            ),
            |f| Some(Event::PbxCp(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(K::GenerateCoverageData, r"^generating\s+coverage\s+data", |_| {
            Some(Event::GenerateCoverageData)
        }),
        RuleSpec::new(
            K::GeneratedCoverageReport,
            r"^Generated\s+coverage\s+report:\s+(.+)",
            |f| Some(Event::GeneratedCoverageReport { path: f.get(1)? }),
        ),
        RuleSpec::new(
            K::GenerateDsym,
            concat!(
                r"^GenerateDSYMFile\s((?:\\ |[^ ])*/((?:\\ |[^ ])+\.dSYM))",
                opt_in_target!()
            ),
            |f| Some(Event::GenerateDsym(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::Libtool,
            concat!(r"^Libtool\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::Libtool(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::Linking,
            concat!(r"^Ld\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::Linking(f.file_step(1, 2, 3)?)),
        )
        .on_linux(r"^\[\d+/\d+\]\sLinking\s(.+)", |f| {
            let path = f.get(1)?;
            Some(Event::Linking(FileStep {
                filename: file_name(&path).to_string(),
                path,
                target: None,
                project: None,
            }))
        }),
        RuleSpec::new(
            K::PhaseScriptExecution,
            concat!(
                r"^PhaseScriptExecution\s((?:\\ |[^ ])*)\s(?:\\ |[^ ])*",
                opt_in_target!()
            ),
            |f| {
                Some(Event::PhaseScriptExecution(ScriptPhase {
                    name: unescape(&f.get(1)?),
                    target: f.target(2),
                    project: f.project(2),
                }))
            },
        ),
        RuleSpec::new(
            K::Preprocess,
            concat!(
                r"^Preprocess\s(?:\\ |[^ ])+\s",
                escaped_path!(),
                opt_in_target!()
            ),
            |f| Some(Event::Preprocess(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::ProcessInfoPlist,
            concat!(
                r"^ProcessInfoPlistFile\s(?:\\ |[^ ])+\.plist\s((?:\\ |[^ ])*/((?:\\ |[^ ])+\.plist))",
                opt_in_target!()
            ),
            |f| Some(Event::ProcessInfoPlist(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::ProcessPch,
            concat!(
                r"^ProcessPCH(?:\+\+)?\s(?:\\ |[^ ])+\s",
                escaped_path!(),
                opt_in_target!()
            ),
            |f| Some(Event::ProcessPch(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(K::TiffUtil, r"^TiffUtil\s(.*)", |f| {
            Some(Event::TiffUtil {
                filename: f.get(1)?,
            })
        }),
        RuleSpec::new(
            K::Touch,
            concat!(r"^Touch\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::Touch(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(K::WriteFile, r"^write-file\s(.*)", |f| {
            Some(Event::WriteFile { path: f.get(1)? })
        }),
        RuleSpec::new(K::WriteAuxiliaryFiles, r"^Write auxiliary files", |_| {
            Some(Event::WriteAuxiliaryFiles)
        }),
        // --------------------------------------------------------------------
        // Swift packages
        // --------------------------------------------------------------------
        RuleSpec::new(
            K::PackageFetching,
            r"^Fetching from (.*?)(?: \(cached\))?$",
            |f| Some(Event::PackageFetching { source: f.get(1)? }),
        ),
        RuleSpec::new(K::PackageUpdating, r"^Updating from (.*)", |f| {
            Some(Event::PackageUpdating { source: f.get(1)? })
        }),
        RuleSpec::new(
            K::PackageCheckingOut,
            r"^Checking out (.*) of package (.*)",
            |f| {
                Some(Event::PackageCheckingOut {
                    version: f.get(1)?,
                    package: f.get(2)?,
                })
            },
        ),
        RuleSpec::new(
            K::PackageGraphResolvingStart,
            r"^\s*Resolve Package Graph\s*$",
            |_| Some(Event::PackageGraphResolvingStart),
        ),
        RuleSpec::new(
            K::PackageGraphResolvingEnded,
            r"^Resolved source packages:$",
            |_| Some(Event::PackageGraphResolvingEnded),
        ),
        RuleSpec::new(
            K::PackageGraphResolvedItem,
            r"^\s*([^\s:]+):\s([^ ]+)\s@\s(\d+\.\d+\.\d+)",
            |f| {
                Some(Event::PackageGraphResolvedItem(PackageResolved {
                    name: f.get(1)?,
                    url: f.get(2)?,
                    version: f.get(3)?,
                }))
            },
        ),
        // --------------------------------------------------------------------
        // Swift driver and module steps
        // --------------------------------------------------------------------
        RuleSpec::new(
            K::SwiftDriverJobDiscoveryEmittingModule,
            r"^SwiftDriverJobDiscovery\s\S+\s\S+\sEmitting module for (\S+) \(in target '(.*)' from project '(.*)'\)",
            |f| Some(Event::SwiftDriverJobDiscoveryEmittingModule(f.module_step(1)?)),
        ),
        RuleSpec::new(
            K::SwiftDriverJobDiscoveryCompiling,
            concat!(
                r"^SwiftDriverJobDiscovery\s\S+\s\S+\sCompiling\s(.*?)\s",
                escaped_path!(),
                opt_in_target!()
            ),
            |f| {
                Some(Event::SwiftDriverJobDiscoveryCompiling(FileStep {
                    path: f.get(2)?,
                    filename: f.get(1)?,
                    target: f.target(4),
                    project: f.project(4),
                }))
            },
        ),
        RuleSpec::new(
            K::SwiftDriverCompilationRequirements,
            r"^SwiftDriver\\ Compilation\\ Requirements\s(\S+)\s.*\(in target '(.*)' from project '(.*)'\)",
            |f| Some(Event::SwiftDriverCompilationRequirements(f.module_step(1)?)),
        ),
        RuleSpec::new(
            K::SwiftDriverCompilation,
            r"^SwiftDriver\\ Compilation\s(\S+)\s.*\(in target '(.*)' from project '(.*)'\)",
            |f| Some(Event::SwiftDriverCompilation(f.module_step(1)?)),
        ),
        RuleSpec::new(
            K::SwiftDriver,
            r"^SwiftDriver\s(\S+)\s.*\(in target '(.*)' from project '(.*)'\)",
            |f| Some(Event::SwiftDriver(f.module_step(1)?)),
        ),
        RuleSpec::new(
            K::EmitSwiftModule,
            concat!(r"^EmitSwiftModule\s.*", in_target!()),
            |f| Some(Event::EmitSwiftModule(f.target_step(1)?)),
        ),
        RuleSpec::new(
            K::SwiftEmitModule,
            r"^SwiftEmitModule\s\S+\s\S+\sEmitting\\ module\\ for\\ (\S+)\s\(in target '(.*)' from project '(.*)'\)",
            |f| Some(Event::SwiftEmitModule(f.module_step(1)?)),
        ),
        RuleSpec::new(
            K::SwiftMergeGeneratedHeaders,
            concat!(r"^SwiftMergeGeneratedHeaders\s.*", in_target!()),
            |f| Some(Event::SwiftMergeGeneratedHeaders(f.target_step(1)?)),
        ),
        RuleSpec::new(
            K::MergeSwiftModule,
            concat!(r"^MergeSwiftModule\s.*", in_target!()),
            |f| Some(Event::MergeSwiftModule(f.target_step(1)?)),
        ),
        RuleSpec::new(
            K::LinkStoryboards,
            concat!(r"^LinkStoryboards\s.*", in_target!()),
            |f| Some(Event::LinkStoryboards(f.target_step(1)?)),
        ),
        RuleSpec::new(
            K::ExtractAppIntentsMetadata,
            concat!(r"^ExtractAppIntentsMetadata\s.*", in_target!()),
            |f| Some(Event::ExtractAppIntentsMetadata(f.target_step(1)?)),
        ),
        RuleSpec::new(
            K::GenerateAssetSymbols,
            concat!(r"^GenerateAssetSymbols\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::GenerateAssetSymbols(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::DataModelCodegen,
            concat!(r"^DataModelCodegen\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::DataModelCodegen(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::ProcessXcFramework,
            concat!(r"^ProcessXCFramework\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::ProcessXcFramework(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::ValidateEmbeddedBinary,
            concat!(r"^ValidateEmbeddedBinary\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::ValidateEmbeddedBinary(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::Validate,
            concat!(r"^Validate\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::Validate(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::RegisterExecutionPolicyException,
            concat!(
                r"^RegisterExecutionPolicyException\s",
                escaped_path!(),
                opt_in_target!()
            ),
            |f| Some(Event::RegisterExecutionPolicyException(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::ScanDependencies,
            concat!(
                r"^ScanDependencies\s(?:\\ |[^ ])+\s",
                escaped_path!(),
                opt_in_target!()
            ),
            |f| Some(Event::ScanDependencies(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::SymLink,
            concat!(r"^SymLink\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::SymLink(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::CreateUniversalBinary,
            concat!(r"^CreateUniversalBinary\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::CreateUniversalBinary(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::MkDir,
            concat!(r"^MkDir\s", escaped_path!(), opt_in_target!()),
            |f| Some(Event::MkDir(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::ProcessProductPackagingDer,
            concat!(
                r"^ProcessProductPackagingDER\s(?:\\ |[^ ])+\s",
                escaped_path!(),
                opt_in_target!()
            ),
            |f| Some(Event::ProcessProductPackagingDer(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::ProcessProductPackaging,
            concat!(
                r"^ProcessProductPackaging\s(?:\\ |[^ ])*\s",
                escaped_path!(),
                opt_in_target!()
            ),
            |f| Some(Event::ProcessProductPackaging(f.file_step(1, 2, 3)?)),
        ),
        RuleSpec::new(
            K::ExplicitDependency,
            r"^\s*➜ Explicit dependency on target '([^']+)' in project '([^']+)'",
            |f| {
                Some(Event::ExplicitDependency(TargetStep {
                    target: f.get(1)?,
                    project: f.get(2),
                }))
            },
        ),
        RuleSpec::new(
            K::TargetDependencies,
            r"^Target '([^']+)' in project '([^']+)'",
            |f| {
                Some(Event::TargetDependencies(TargetStep {
                    target: f.get(1)?,
                    project: f.get(2),
                }))
            },
        ),
        RuleSpec::new(
            K::CompilationResult,
            r"^/\*\scom\.apple\.actool\.compilation-results\s\*/$",
            |_| Some(Event::CompilationResult),
        ),
        RuleSpec::new(
            K::ComputeTargetDependencyGraph,
            r"^ComputeTargetDependencyGraph$",
            |_| Some(Event::ComputeTargetDependencyGraph),
        ),
        RuleSpec::new(
            K::ComputePackagePrebuildTargetDependencyGraph,
            r"^ComputePackagePrebuildTargetDependencyGraph$",
            |_| Some(Event::ComputePackagePrebuildTargetDependencyGraph),
        ),
        RuleSpec::new(
            K::CreateBuildDescription,
            r"^CreateBuildDescription$",
            |_| Some(Event::CreateBuildDescription),
        ),
        RuleSpec::new(
            K::ClangStatCache,
            r"^ClangStatCache\s(?:\\ |[^ ])+\s((?:\\ |[^ ])+)",
            |f| Some(Event::ClangStatCache { path: f.get(1)? }),
        ),
        RuleSpec::new(K::SigningIdentity, r#"^Signing Identity:\s+"(.*)""#, |f| {
            Some(Event::SigningIdentity {
                identity: f.get(1)?,
            })
        }),
        RuleSpec::new(
            K::ProvisioningProfile,
            r#"^Provisioning Profile:\s+"(.*)""#,
            |f| {
                Some(Event::ProvisioningProfile {
                    profile: f.get(1)?,
                })
            },
        ),
        RuleSpec::new(K::Note, r"^note:\s(.*)", |f| {
            Some(Event::Note { message: f.get(1)? })
        }),
        // --------------------------------------------------------------------
        // XCTest
        // --------------------------------------------------------------------
        RuleSpec::new(
            K::TestSuiteAllTestsPassed,
            r"^\s*Test Suite 'All tests' passed at",
            |_| Some(Event::TestSuiteAllTestsPassed),
        ),
        RuleSpec::new(
            K::TestSuiteAllTestsFailed,
            r"^\s*Test Suite 'All tests' failed at",
            |_| Some(Event::TestSuiteAllTestsFailed),
        ),
        RuleSpec::new(
            K::TestsRunCompletion,
            r"^\s*Test Suite '(?:.*/)?(.*[ox]ctest.*)' (finished|passed|failed) at (.*)",
            |f| {
                Some(Event::TestsRunCompletion {
                    suite: f.get(1)?,
                    result: f.get(2)?,
                    time: f.get(3)?,
                })
            },
        ),
        RuleSpec::new(
            K::TestSuiteStarted,
            r"^\s*Test Suite '(?:.*/)?(.*[ox]ctest.*)' started at (.*)",
            |f| {
                Some(Event::TestSuiteStarted {
                    suite: f.get(1)?,
                    time: f.get(2)?,
                })
            },
        ),
        RuleSpec::new(K::TestSuiteStart, r"^\s*Test Suite '(.*)' started at", |f| {
            Some(Event::TestSuiteStart { suite: f.get(1)? })
        }),
        RuleSpec::new(
            K::TestSuiteFinished,
            r"^\s*Test Suite '(.*)' (finished|passed|failed) at",
            |f| {
                Some(Event::TestSuiteFinished {
                    suite: f.get(1)?,
                    result: f.get(2)?,
                })
            },
        ),
        RuleSpec::new(
            K::TestCaseStarted,
            r"^Test [Cc]ase '-\[(.*?) (.*)\]' started\.$",
            |f| {
                Some(Event::TestCaseStarted(TestCaseRef {
                    suite: f.get(1)?,
                    name: f.get(2)?,
                }))
            },
        )
        .on_linux(r"^Test Case '(.*)\.(.*)' started at", |f| {
            Some(Event::TestCaseStarted(TestCaseRef {
                suite: f.get(1)?,
                name: f.get(2)?,
            }))
        }),
        RuleSpec::new(
            K::TestCasePending,
            r"^Test Case\s'-\[(.*?) (.*)PENDING\]'\spassed",
            |f| {
                Some(Event::TestCasePending(TestCaseRef {
                    suite: f.get(1)?,
                    name: f.get(2)?,
                }))
            },
        ),
        RuleSpec::new(
            K::TestCasePassed,
            r"^\s*Test Case\s'-\[(.*?) (.*)\]'\spassed\s\((\d*\.\d{1,3})\sseconds\)",
            |f| Some(Event::TestCasePassed(f.timed_case()?)),
        )
        .on_linux(
            r"^\s*Test Case\s'(.*)\.(.*)'\spassed\s\((\d*\.\d{1,3})\sseconds\)",
            |f| Some(Event::TestCasePassed(f.timed_case()?)),
        ),
        RuleSpec::new(
            K::TestCaseSkipped,
            r"^\s*Test Case\s'-\[(.*?) (.*)\]'\sskipped\s\((\d*\.\d{1,3})\sseconds\)",
            |f| Some(Event::TestCaseSkipped(f.timed_case()?)),
        )
        .on_linux(
            r"^\s*Test Case\s'(.*)\.(.*)'\sskipped\s\((\d*\.\d{1,3})\sseconds\)",
            |f| Some(Event::TestCaseSkipped(f.timed_case()?)),
        ),
        RuleSpec::new(
            K::TestCaseMeasured,
            r"^[^:]*:[^:]*:\sTest Case\s'-\[(.*?) (.*)\]'\smeasured\s\[([^,]*),\s([^\]]*)\]\saverage:\s(\d*\.\d{3}),",
            |f| {
                Some(Event::TestCaseMeasured(MeasuredTestCase {
                    suite: f.get(1)?,
                    name: f.get(2)?,
                    metric: f.get(3)?,
                    unit: f.get(4)?,
                    average: f.get(5)?,
                }))
            },
        ),
        // --------------------------------------------------------------------
        // Parallel testing
        // --------------------------------------------------------------------
        RuleSpec::new(
            K::ParallelTestCasePassed,
            r"^Test\s+case\s+'(.*)\.(.*)\(\)'\s+passed\s+on\s+'(.*)'\s+\((\d*\.\d+)\s+seconds\)",
            |f| Some(Event::ParallelTestCasePassed(f.parallel_case()?)),
        )
        .on_linux(
            r"^Test\s+case\s+'(.*)\.(.*)'\s+passed\s+on\s+'(.*)'\s+\((\d*\.\d+)\s+seconds\)",
            |f| Some(Event::ParallelTestCasePassed(f.parallel_case()?)),
        ),
        RuleSpec::new(
            K::ParallelTestCaseAppKitPassed,
            r"^\s*Test case\s'-\[(.*?) (.*)\]'\spassed\son\s'(.*)'\s\((\d*\.\d+)\sseconds\)",
            |f| Some(Event::ParallelTestCaseAppKitPassed(f.parallel_case()?)),
        ),
        RuleSpec::new(
            K::ParallelTestCaseFailed,
            r"^Test\s+case\s+'(.*)\.(.*)\(\)'\s+failed\s+on\s+'(.*)'\s+\((\d*\.\d+)\s+seconds\)",
            |f| Some(Event::ParallelTestCaseFailed(f.parallel_case()?)),
        ),
        RuleSpec::new(
            K::ParallelTestCaseSkipped,
            r"^Test\s+case\s+'(.*)\.(.*)\(\)'\s+skipped\s+on\s+'(.*)'\s+\((\d*\.\d+)\s+seconds\)",
            |f| Some(Event::ParallelTestCaseSkipped(f.parallel_case()?)),
        ),
        RuleSpec::new(
            K::ParallelTestingStarted,
            r"^Testing\s+started\s+on\s+'(.*)'",
            |f| Some(Event::ParallelTestingStarted { device: f.get(1)? }),
        ),
        RuleSpec::new(
            K::ParallelTestingPassed,
            r"^Testing\s+passed\s+on\s+'(.*)'",
            |f| Some(Event::ParallelTestingPassed { device: f.get(1)? }),
        ),
        RuleSpec::new(
            K::ParallelTestingFailed,
            r"^Testing\s+failed\s+on\s+'(.*)'",
            |f| Some(Event::ParallelTestingFailed { device: f.get(1)? }),
        ),
        RuleSpec::new(
            K::ParallelTestSuiteStarted,
            r"^\s*Test\s+suite\s+'(.*)'\s+started\s+on\s+'(.*)'",
            |f| {
                Some(Event::ParallelTestSuiteStarted {
                    suite: f.get(1)?,
                    device: f.get(2)?,
                })
            },
        ),
        RuleSpec::new(K::TestingStarted, r"^Testing started$", |_| {
            Some(Event::TestingStarted)
        }),
        RuleSpec::new(
            K::RestartingTest,
            r"^(Restarting after unexpected exit, crash, or test timeout in (\w+)\.(\w+)\(\);.*)$",
            |f| {
                Some(Event::RestartingTest(RestartedTest {
                    message: f.get(1)?,
                    suite: f.get(2)?,
                    name: f.get(3)?,
                }))
            },
        ),
        RuleSpec::new(
            K::ExecutedWithSkipped,
            concat!(
                r"^\s*Executed\s",
                count!(),
                r"\stests?,\swith\s",
                count!(),
                r"\stests?\sskipped\sand\s",
                count!(),
                r"\sfailures?\s\(",
                count!(),
                r"\sunexpected\)\sin\s\d+\.\d{3}\s\(([0-9]+\.[0-9]{3})\)\sseconds"
            ),
            |f| {
                Some(Event::ExecutedWithSkipped(ExecutedTests {
                    tests: f.num(1)?,
                    skipped: f.num(2)?,
                    failures: f.num(3)?,
                    unexpected: f.num(4)?,
                    time: f.num(5)?,
                }))
            },
        ),
        RuleSpec::new(
            K::Executed,
            concat!(
                r"^\s*Executed\s",
                count!(),
                r"\stests?,\swith\s",
                count!(),
                r"\sfailures?\s\(",
                count!(),
                r"\sunexpected\)\sin\s\d+\.\d{3}\s\(([0-9]+\.[0-9]{3})\)\sseconds"
            ),
            |f| {
                Some(Event::Executed(ExecutedTests {
                    tests: f.num(1)?,
                    skipped: 0,
                    failures: f.num(2)?,
                    unexpected: f.num(3)?,
                    time: f.num(4)?,
                }))
            },
        ),
        RuleSpec::new(
            K::FailingTest,
            r"^\s*(.+:\d+):\serror:\s[+-]\[(.*?)\s(.*)\]\s:?\s?(.*)$",
            |f| Some(Event::FailingTest(failing_test(f)?)),
        )
        .on_linux(
            r"^\s*(.+:\d+):\serror:\s(.*)\.(.*)\s:(?:\s'.*'\s\[failed\],)?\s(.*)",
            |f| Some(Event::FailingTest(failing_test(f)?)),
        ),
        RuleSpec::new(
            K::UiFailingTest,
            r"^\s{4}t = \s+\d+\.\d+s\s+Assertion Failure: (.*:\d+): (.*)$",
            |f| {
                Some(Event::UiFailingTest {
                    location: f.get(1)?,
                    reason: f.get(2)?,
                })
            },
        ),
        // --------------------------------------------------------------------
        // Swift Testing
        // --------------------------------------------------------------------
        RuleSpec::new(
            K::SwiftTestingRunStarted,
            r"^[\x{1007C8}◇] Test run started\.",
            |_| Some(Event::SwiftTestingRunStarted),
        ),
        RuleSpec::new(
            K::SwiftTestingTestStarted,
            r"^[\x{1007C8}◇] Test (.*) started\.",
            |f| Some(Event::SwiftTestingTestStarted { name: f.get(1)? }),
        ),
        RuleSpec::new(
            K::SwiftTestingSuiteStarted,
            r"^[\x{1007C8}◇] Suite (.*) started\.",
            |f| Some(Event::SwiftTestingSuiteStarted { suite: f.get(1)? }),
        ),
        RuleSpec::new(
            K::SwiftTestingRunCompleted,
            r"^[\x{10105B}✔] Test run with ([0-9]{1,9}) tests? passed after ([0-9]+(?:\.[0-9]+)?) seconds\.",
            |f| Some(Event::SwiftTestingRunCompleted(f.swift_testing_run()?)),
        ),
        RuleSpec::new(
            K::SwiftTestingTestPassed,
            r"^[\x{10105B}✔] Test (.*) passed after ([0-9]+(?:\.[0-9]+)?) seconds\.",
            |f| Some(Event::SwiftTestingTestPassed(f.swift_testing_outcome()?)),
        ),
        RuleSpec::new(
            K::SwiftTestingSuitePassed,
            r"^[\x{10105B}✔] Suite (.*) passed after ([0-9]+(?:\.[0-9]+)?) seconds\.",
            |f| Some(Event::SwiftTestingSuitePassed(f.swift_testing_outcome()?)),
        ),
        RuleSpec::new(
            K::SwiftTestingRunFailed,
            r"^[\x{100884}✘] Test run with ([0-9]{1,9}) tests? failed after ([0-9]+(?:\.[0-9]+)?) seconds with ([0-9]{1,9}) issues?\.",
            |f| Some(Event::SwiftTestingRunFailed(f.swift_testing_run()?)),
        ),
        RuleSpec::new(
            K::SwiftTestingTestFailed,
            r"^[\x{100884}✘] Test (.*) failed after ([0-9]+(?:\.[0-9]+)?) seconds with ([0-9]{1,9}) issues?\.",
            |f| Some(Event::SwiftTestingTestFailed(f.swift_testing_outcome()?)),
        ),
        RuleSpec::new(
            K::SwiftTestingSuiteFailed,
            r"^[\x{100884}✘] Suite (.*) failed after ([0-9]+(?:\.[0-9]+)?) seconds with ([0-9]{1,9}) issues?\.",
            |f| Some(Event::SwiftTestingSuiteFailed(f.swift_testing_outcome()?)),
        ),
        RuleSpec::new(
            K::SwiftTestingTestSkipped,
            r#"^[\x{10065F}➜] Test (.*?) skipped(?:: "(.*)")?\.?$"#,
            |f| {
                Some(Event::SwiftTestingTestSkipped {
                    name: f.get(1)?,
                    reason: f.get(2),
                })
            },
        ),
        RuleSpec::new(
            K::SwiftTestingIssueArgument,
            r"^[\x{100884}✘] Test (.*?) recorded an issue with ([0-9]{1,9}) arguments?.* at ([^ ]+:\d+:\d+): (.*)$",
            |f| {
                Some(Event::SwiftTestingIssueArgument(SwiftTestingIssue {
                    test: f.get(1)?,
                    arguments: Some(f.num(2)?),
                    location: f.get(3),
                    message: f.get(4)?,
                }))
            },
        ),
        RuleSpec::new(
            K::SwiftTestingIssue,
            r"^[\x{100884}✘] Test (.*?) recorded an issue(?: at ([^ ]+:\d+:\d+))?: (.*)$",
            |f| {
                Some(Event::SwiftTestingIssue(SwiftTestingIssue {
                    test: f.get(1)?,
                    arguments: None,
                    location: f.get(2),
                    message: f.get(3)?,
                }))
            },
        ),
        // --------------------------------------------------------------------
        // Tool diagnostics
        // --------------------------------------------------------------------
        RuleSpec::new(
            K::XcodeprojWarning,
            r"^(/.+\.xcodeproj):\swarning:\s(.*)$",
            |f| {
                Some(Event::XcodeprojWarning {
                    path: f.get(1)?,
                    message: f.get(2)?,
                })
            },
        ),
        RuleSpec::new(
            K::XcodeprojError,
            r"^(/.+\.xcodeproj):\serror:\s(.*)$",
            |f| {
                Some(Event::XcodeprojError {
                    path: f.get(1)?,
                    message: f.get(2)?,
                })
            },
        ),
        RuleSpec::new(
            K::LinkerDuplicateSymbols,
            r"^(duplicate symbol .*):$",
            |f| Some(Event::LinkerDuplicateSymbols { reason: f.get(1)? }),
        ),
        RuleSpec::new(K::LdWarning, r"^(ld: )warning: (.*)", |f| {
            Some(Event::LdWarning {
                prefix: f.get(1)?,
                message: f.get(2)?,
            })
        }),
        RuleSpec::new(K::LdError, r"^ld: (.*)", |f| {
            Some(Event::LdError { message: f.get(1)? })
        }),
        RuleSpec::new(K::ClangError, r"^(clang-?\d*: error:.*)$", |f| {
            Some(Event::ClangError { message: f.get(1)? })
        }),
        RuleSpec::new(K::XcodebuildError, r"^(xcodebuild: error:.*)$", |f| {
            Some(Event::XcodebuildError { message: f.get(1)? })
        }),
        RuleSpec::new(
            K::FileMissingError,
            r"^<unknown>:0:\s(?:error|fatal error):\s(.*)\s'(/.+/.*\..*)'$",
            |f| {
                Some(Event::FileMissingError {
                    reason: f.get(1)?,
                    path: f.get(2)?,
                })
            },
        ),
        RuleSpec::new(
            K::ModuleIncludesError,
            r"^<module-includes>:.*?:.*?:\s(?:fatal\s)?(error:\s.*)$",
            |f| Some(Event::ModuleIncludesError { reason: f.get(1)? }),
        ),
        RuleSpec::new(K::FatalError, r"^(fatal error:.*)$", |f| {
            Some(Event::FatalError { message: f.get(1)? })
        }),
        RuleSpec::new(
            K::CheckDependenciesErrors,
            r"^(Code\s?Sign error:.*|Code signing is required for product type .* in SDK .*|No profile matching .* found:.*|Provisioning profile .* doesn't .*|Swift is unavailable on .*|.?Use Legacy Swift Language Version.*)$",
            |f| Some(Event::CheckDependenciesErrors { message: f.get(1)? }),
        ),
        RuleSpec::new(
            K::NoCertificate,
            r"^(No (?:signing )?certificate .*)$",
            |f| Some(Event::NoCertificate { message: f.get(1)? }),
        ),
        RuleSpec::new(
            K::LinkerUndefinedSymbols,
            r"^(Undefined symbols for architecture .*):$",
            |f| Some(Event::LinkerUndefinedSymbols { reason: f.get(1)? }),
        ),
        RuleSpec::new(
            K::SymbolReferencedFrom,
            r#"^\s+"(.*)", referenced from:$"#,
            |f| Some(Event::SymbolReferencedFrom { reference: f.get(1)? }),
        ),
        RuleSpec::new(
            K::LinkerDuplicateSymbolsLocation,
            r"^\s+(/.*\.o\)?)$",
            |f| Some(Event::LinkerDuplicateSymbolsLocation { path: f.get(1)? }),
        ),
        // --------------------------------------------------------------------
        // Source diagnostics (message line + source line + caret line)
        // --------------------------------------------------------------------
        RuleSpec::new(
            K::CompileWarning,
            r"^(([^:]*):*\d*:*\d*):\swarning:\s(.*)$",
            |f| Some(Event::CompileWarning(f.source_diagnostic()?)),
        )
        .with_continuation(2),
        RuleSpec::new(
            K::CompileError,
            r"^(([^:]*):*\d*:*\d*):\s(?:fatal\s)?error:\s(.*)$",
            |f| Some(Event::CompileError(f.source_diagnostic()?)),
        )
        .with_continuation(2),
        // --------------------------------------------------------------------
        // Catch-alls
        // --------------------------------------------------------------------
        RuleSpec::new(
            K::ProvisioningProfileRequired,
            r"^(.*requires a provisioning profile.*)$",
            |f| Some(Event::ProvisioningProfileRequired { message: f.get(1)? }),
        ),
        RuleSpec::new(
            K::WillNotBeCodeSigned,
            r"^(.* will not be code signed because .*)$",
            |f| Some(Event::WillNotBeCodeSigned { message: f.get(1)? }),
        ),
        RuleSpec::new(
            K::DuplicateLocalizedStringKey,
            r#"^.*--- WARNING: (Key ".*" used with multiple values\..*)$"#,
            |f| Some(Event::DuplicateLocalizedStringKey { message: f.get(1)? }),
        ),
        RuleSpec::new(
            K::UndefinedSymbolLocation,
            r"^.+: in (.+)\((.+)\.o\)$",
            |f| {
                Some(Event::UndefinedSymbolLocation {
                    target: f.get(1)?,
                    filename: f.get(2)?,
                })
            },
        ),
        RuleSpec::new(
            K::LinkerUndefinedSymbolLocation,
            r"^(.* in .*\.o)$",
            |f| Some(Event::LinkerUndefinedSymbolLocation { location: f.get(1)? }),
        ),
        RuleSpec::new(K::GenericWarning, r"^warning:\s(.*)$", |f| {
            Some(Event::GenericWarning { message: f.get(1)? })
        }),
        RuleSpec::new(K::PodsError, r"^error:\s(.*)", |f| {
            Some(Event::PodsError { message: f.get(1)? })
        }),
        RuleSpec::new(K::PhaseSuccess, r"^\*\*\s(.*)\sSUCCEEDED\s\*\*", |f| {
            Some(Event::PhaseSuccess { phase: f.get(1)? })
        }),
        RuleSpec::new(K::PhaseFailure, r"^\*\*\s(.*)\sFAILED\s\*\*", |f| {
            Some(Event::PhaseFailure { phase: f.get(1)? })
        }),
        RuleSpec::new(
            K::BuildCommandsFailed,
            r"^The following build commands failed:$",
            |_| Some(Event::BuildCommandsFailed),
        ),
        RuleSpec::new(K::TestingFailed, r"^Testing failed:$", |_| {
            Some(Event::TestingFailed)
        }),
        RuleSpec::new(K::Cursor, r"^([\s~]*\^[\s~]*)$", |f| {
            Some(Event::Cursor { cursor: f.get(1)? })
        }),
        RuleSpec::new(
            K::ShellCommand,
            r"^\s{4}(cd|setenv|(?:[\w/:\s.-]+?/)?[\w-]+)\s(.*)$",
            |f| {
                Some(Event::ShellCommand(CommandLine {
                    command: f.get(1)?,
                    arguments: f.get(2)?,
                }))
            },
        ),
    ]
}

fn failing_test(f: &Fields<'_>) -> Option<FailingTest> {
    Some(FailingTest {
        location: f.get(1)?,
        suite: f.get(2)?,
        name: f.get(3)?,
        reason: f.get(4)?,
    })
}
