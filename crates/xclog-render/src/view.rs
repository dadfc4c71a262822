// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Presentation model
//!
//! [`view`] maps every event variant to one of a handful of presentation
//! shapes. It is the only place that matches on [`Event`], so adding a
//! variant is a compile error here and nowhere else, and every renderer
//! receives the same content for the same event.

use xclog_parser::event::{
    Event, ExecutedTests, HasFile, HasTarget, HasTestCase, ParallelTestCase, SwiftTestingIssue,
    SwiftTestingOutcome, SwiftTestingRun, TargetHeader, file_name,
};

use crate::diagnostic::{Diagnostic, Origin, Severity};

/// Outcome marker of a rendered test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    /// Passed
    Passed,
    /// Failed without a source position
    Failed,
    /// Skipped
    Skipped,
    /// Marked pending
    Pending,
    /// Performance measurement
    Measured,
}

/// One rendered test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseLine {
    /// Outcome
    pub status: CaseStatus,
    /// Suite, shown only where the surrounding output does not imply it
    pub suite: Option<String>,
    /// Case name
    pub name: String,
    /// Trailing detail such as the device or skip reason
    pub detail: Option<String>,
    /// Duration with its unit, e.g. `0.001 seconds`
    pub duration: Option<String>,
}

/// Presentation shape of one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Section heading
    Heading(String),
    /// A build step, e.g. `[App] Compiling main.swift`
    Task {
        /// Action
        verb: &'static str,
        /// What the action applies to
        subject: Option<String>,
        /// Owning target
        target: Option<String>,
    },
    /// Plain informational line
    Info(String),
    /// Test suite started
    Suite(String),
    /// Test case outcome
    Case(CaseLine),
    /// Warning or error
    Diagnostic(Diagnostic),
    /// Indented continuation of a preceding diagnostic
    Detail(String),
    /// Result line
    Result {
        /// Whether the result is a success
        success: bool,
        /// Result text
        text: String,
    },
    /// Nothing to show
    Suppressed,
}

// ============================================================================
// Constructors
// ============================================================================

fn task<T: HasTarget + ?Sized>(verb: &'static str, subject: impl Into<String>, step: &T) -> View {
    View::Task {
        verb,
        subject: Some(subject.into()),
        target: step.target().map(str::to_string),
    }
}

fn file_task<T: HasFile + HasTarget + ?Sized>(verb: &'static str, step: &T) -> View {
    task(verb, step.filename(), step)
}

fn target_task<T: HasTarget + ?Sized>(verb: &'static str, step: &T) -> View {
    View::Task {
        verb,
        subject: None,
        target: step.target().map(str::to_string),
    }
}

fn bare_task(verb: &'static str, subject: Option<String>) -> View {
    View::Task {
        verb,
        subject,
        target: None,
    }
}

fn heading(kind: &str, header: &TargetHeader) -> View {
    View::Heading(format!(
        "{kind} target {} of project {} with configuration {}",
        header.target, header.project, header.configuration
    ))
}

fn seconds(time: &str) -> Option<String> {
    Some(format!("{time} seconds"))
}

fn case(status: CaseStatus, name: &str, duration: Option<String>) -> View {
    View::Case(CaseLine {
        status,
        suite: None,
        name: name.to_string(),
        detail: None,
        duration,
    })
}

fn parallel_case(status: CaseStatus, c: &ParallelTestCase) -> View {
    View::Case(CaseLine {
        status,
        suite: Some(c.suite().to_string()),
        name: c.name().to_string(),
        detail: Some(format!("on '{}'", c.device)),
        duration: seconds(&c.time),
    })
}

fn swift_case(status: CaseStatus, prefix: &str, outcome: &SwiftTestingOutcome) -> View {
    let detail = outcome.issues.map(|n| format!("with {n} {}", plural(n, "issue", "issues")));
    View::Case(CaseLine {
        status,
        suite: None,
        name: format!("{prefix}{}", outcome.name),
        detail,
        duration: seconds(&outcome.time),
    })
}

fn swift_issue(issue: &SwiftTestingIssue) -> View {
    let subject = match issue.arguments {
        Some(n) => format!(
            "{} ({n} {})",
            issue.test,
            plural(n, "argument", "arguments")
        ),
        None => issue.test.clone(),
    };
    let diag = Diagnostic::new(
        Severity::Error,
        Origin::Test,
        format!("{subject}: {}", issue.message),
    );
    View::Diagnostic(match &issue.location {
        Some(location) => diag.at(location),
        None => diag,
    })
}

fn swift_run(run: &SwiftTestingRun, success: bool) -> View {
    let tests = plural(run.tests, "test", "tests");
    let text = if success {
        format!(
            "Test run with {} {tests} passed after {:.3} seconds",
            run.tests, run.time
        )
    } else {
        format!(
            "Test run with {} {tests} failed after {:.3} seconds with {} {}",
            run.tests,
            run.time,
            run.issues,
            plural(run.issues, "issue", "issues")
        )
    };
    View::Result { success, text }
}

fn executed(counts: &ExecutedTests) -> View {
    let mut text = format!(
        "Executed {} {}, ",
        counts.tests,
        plural(counts.tests, "test", "tests")
    );
    if counts.skipped > 0 {
        text.push_str(&format!(
            "with {} {} skipped and ",
            counts.skipped,
            plural(counts.skipped, "test", "tests")
        ));
    } else {
        text.push_str("with ");
    }
    text.push_str(&format!(
        "{} {} ({} unexpected) in {:.3} seconds",
        counts.failures,
        plural(counts.failures, "failure", "failures"),
        counts.unexpected,
        counts.time
    ));
    View::Result {
        success: counts.failures == 0 && counts.unexpected == 0,
        text,
    }
}

fn error(origin: Origin, message: &str) -> View {
    View::Diagnostic(Diagnostic::new(Severity::Error, origin, message))
}

fn warning(origin: Origin, message: &str) -> View {
    View::Diagnostic(Diagnostic::new(Severity::Warning, origin, message))
}

fn plural(n: u32, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

// ============================================================================
// Dispatch
// ============================================================================

/// The presentation shape of `event`
#[must_use]
pub fn view(event: &Event) -> View {
    match event {
        // Target headers
        Event::BuildTarget(h) => heading("Build", h),
        Event::AggregateTarget(h) => heading("Aggregate", h),
        Event::AnalyzeTarget(h) => heading("Analyze", h),
        Event::CleanTarget(h) => heading("Clean", h),

        // Build steps
        Event::Analyze(s) => file_task("Analyzing", s),
        Event::CheckDependencies => bare_task("Check dependencies", None),
        Event::CleanRemove { path } => bare_task("Cleaning", Some(file_name(path).to_string())),
        Event::CodesignFramework { path } | Event::Codesign { path } => {
            bare_task("Signing", Some(file_name(path).to_string()))
        }
        Event::Compile(s) | Event::SwiftCompile(s) => file_task("Compiling", s),
        Event::SwiftCompiling { files, target, .. } => View::Task {
            verb: "Compiling",
            subject: Some(files.clone()),
            target: target.clone(),
        },
        Event::CompileCommand(_) => View::Suppressed,
        Event::ProcessPchCommand { path } => {
            bare_task("Preprocessing", Some(file_name(path).to_string()))
        }
        Event::CompileXib(s) | Event::CompileStoryboard(s) | Event::CompileAssetCatalog(s) => {
            file_task("Compiling", s)
        }
        Event::CopyHeader(s)
        | Event::CopyPlist(s)
        | Event::CopyStrings(s)
        | Event::CopyPngFile(s)
        | Event::CopyFiles(s) => file_task("Copying", s),
        Event::CpResource(s) | Event::PbxCp(s) => file_task("Copying", s),
        Event::CopySwiftLibs(s) => target_task("Copying Swift libraries", s),
        Event::GenerateCoverageData => bare_task("Generating code coverage data", None),
        Event::GeneratedCoverageReport { path } => {
            bare_task("Generated code coverage report", Some(path.clone()))
        }
        Event::GenerateDsym(s) => file_task("Generating", s),
        Event::Libtool(s) => file_task("Building library", s),
        Event::Linking(s) => file_task("Linking", s),
        Event::PhaseScriptExecution(s) => task("Running script", s.name.clone(), s),
        Event::Preprocess(s) => file_task("Preprocessing", s),
        Event::ProcessInfoPlist(s) | Event::ProcessPch(s) => file_task("Processing", s),
        Event::TiffUtil { filename } => bare_task("Validating", Some(filename.clone())),
        Event::Touch(s) => file_task("Touching", s),
        Event::WriteFile { .. } | Event::WriteAuxiliaryFiles => View::Suppressed,
        Event::GenerateAssetSymbols(s) => file_task("Generating asset symbols for", s),
        Event::DataModelCodegen(s) => file_task("Generating code for", s),
        Event::ProcessXcFramework(s) => file_task("Processing", s),
        Event::ValidateEmbeddedBinary(s) => file_task("Validating embedded binary", s),
        Event::Validate(s) => file_task("Validating", s),
        Event::RegisterExecutionPolicyException(s) => {
            file_task("Registering execution policy exception for", s)
        }
        Event::ScanDependencies(s) => file_task("Scanning dependencies of", s),
        Event::SymLink(s) => file_task("Symlinking", s),
        Event::CreateUniversalBinary(s) => file_task("Creating universal binary", s),
        Event::MkDir(s) => file_task("Creating directory", s),
        Event::ProcessProductPackaging(s) | Event::ProcessProductPackagingDer(s) => {
            file_task("Processing", s)
        }
        Event::ExplicitDependency(_)
        | Event::TargetDependencies(_)
        | Event::CompilationResult
        | Event::ComputeTargetDependencyGraph
        | Event::ComputePackagePrebuildTargetDependencyGraph
        | Event::CreateBuildDescription
        | Event::ClangStatCache { .. }
        | Event::ShellCommand(_) => View::Suppressed,
        Event::SigningIdentity { identity } => View::Info(format!("Signing Identity: {identity}")),
        Event::ProvisioningProfile { profile } => {
            View::Info(format!("Provisioning Profile: {profile}"))
        }
        Event::Note { message } => View::Info(format!("note: {message}")),

        // Swift driver
        Event::SwiftDriverJobDiscoveryEmittingModule(_)
        | Event::SwiftDriverJobDiscoveryCompiling(_)
        | Event::SwiftDriverCompilationRequirements(_)
        | Event::SwiftDriverCompilation(_)
        | Event::SwiftDriver(_)
        | Event::CompileSwiftSources(_) => View::Suppressed,
        Event::EmitSwiftModule(s) => target_task("Emitting module", s),
        Event::MergeSwiftModule(s) => target_task("Merging module", s),
        Event::SwiftEmitModule(s) => task("Emitting module for", s.module.clone(), s),
        Event::SwiftMergeGeneratedHeaders(s) => target_task("Merging generated headers", s),
        Event::LinkStoryboards(s) => target_task("Linking storyboards", s),
        Event::ExtractAppIntentsMetadata(s) => target_task("Extracting app intents metadata", s),

        // Swift packages
        Event::PackageFetching { source } => bare_task("Fetching", Some(source.clone())),
        Event::PackageUpdating { source } => bare_task("Updating", Some(source.clone())),
        Event::PackageCheckingOut { version, package } => {
            bare_task("Checking out", Some(format!("{package} @ {version}")))
        }
        Event::PackageGraphResolvingStart => bare_task("Resolving package graph", None),
        Event::PackageGraphResolvingEnded => bare_task("Resolved source packages", None),
        Event::PackageGraphResolvedItem(p) => {
            bare_task("Resolved", Some(format!("{} @ {} ({})", p.name, p.version, p.url)))
        }

        // XCTest
        Event::TestSuiteStarted { suite, .. } | Event::TestSuiteStart { suite } => {
            View::Suite(suite.clone())
        }
        Event::TestsRunCompletion { .. }
        | Event::TestSuiteFinished { .. }
        | Event::TestSuiteAllTestsPassed
        | Event::TestSuiteAllTestsFailed
        | Event::TestCaseStarted(_) => View::Suppressed,
        Event::TestCasePending(c) => case(CaseStatus::Pending, c.name(), None),
        Event::TestCasePassed(c) => case(CaseStatus::Passed, c.name(), seconds(&c.time)),
        Event::TestCaseSkipped(c) => case(CaseStatus::Skipped, c.name(), seconds(&c.time)),
        Event::TestCaseMeasured(c) => View::Case(CaseLine {
            status: CaseStatus::Measured,
            suite: None,
            name: c.name().to_string(),
            detail: Some(format!("{} average", c.metric)),
            duration: Some(format!("{} {}", c.average, c.unit)),
        }),
        Event::FailingTest(t) => View::Diagnostic(
            Diagnostic::new(
                Severity::Error,
                Origin::Test,
                format!("{}, {}", t.name(), t.reason),
            )
            .at(&t.location),
        ),
        Event::UiFailingTest { location, reason } => View::Diagnostic(
            Diagnostic::new(Severity::Error, Origin::Test, reason.clone()).at(location),
        ),
        Event::RestartingTest(r) => View::Info(r.message.clone()),
        Event::Executed(counts) | Event::ExecutedWithSkipped(counts) => executed(counts),
        Event::TestingStarted => View::Heading("Testing started".to_string()),
        Event::TestingFailed => View::Result {
            success: false,
            text: "Testing failed:".to_string(),
        },

        // Parallel testing
        Event::ParallelTestingStarted { device } => {
            View::Heading(format!("Testing started on '{device}'"))
        }
        Event::ParallelTestingPassed { device } => View::Result {
            success: true,
            text: format!("Testing passed on '{device}'"),
        },
        Event::ParallelTestingFailed { device } => View::Result {
            success: false,
            text: format!("Testing failed on '{device}'"),
        },
        Event::ParallelTestSuiteStarted { suite, device } => {
            View::Suite(format!("{suite} on '{device}'"))
        }
        Event::ParallelTestCasePassed(c) | Event::ParallelTestCaseAppKitPassed(c) => {
            parallel_case(CaseStatus::Passed, c)
        }
        Event::ParallelTestCaseFailed(c) => parallel_case(CaseStatus::Failed, c),
        Event::ParallelTestCaseSkipped(c) => parallel_case(CaseStatus::Skipped, c),

        // Swift Testing
        Event::SwiftTestingRunStarted => View::Heading("Test run started".to_string()),
        Event::SwiftTestingRunCompleted(run) => swift_run(run, true),
        Event::SwiftTestingRunFailed(run) => swift_run(run, false),
        Event::SwiftTestingSuiteStarted { suite } => View::Suite(suite.clone()),
        Event::SwiftTestingTestStarted { .. } => View::Suppressed,
        Event::SwiftTestingSuitePassed(o) => swift_case(CaseStatus::Passed, "Suite ", o),
        Event::SwiftTestingSuiteFailed(o) => swift_case(CaseStatus::Failed, "Suite ", o),
        Event::SwiftTestingTestPassed(o) => swift_case(CaseStatus::Passed, "", o),
        Event::SwiftTestingTestFailed(o) => swift_case(CaseStatus::Failed, "", o),
        Event::SwiftTestingTestSkipped { name, reason } => View::Case(CaseLine {
            status: CaseStatus::Skipped,
            suite: None,
            name: name.clone(),
            detail: reason.clone(),
            duration: None,
        }),
        Event::SwiftTestingIssue(i) | Event::SwiftTestingIssueArgument(i) => swift_issue(i),

        // Diagnostics
        Event::CompileWarning(d) | Event::CompileError(d) => {
            let severity = if matches!(event, Event::CompileError(_)) {
                Severity::Error
            } else {
                Severity::Warning
            };
            View::Diagnostic(
                Diagnostic::new(severity, Origin::Source, d.reason.clone())
                    .at(&d.location)
                    .with_context([d.source_line.clone(), d.cursor.clone()]),
            )
        }
        Event::LdWarning { prefix, message } => {
            warning(Origin::Tool, &format!("{prefix}{message}"))
        }
        Event::GenericWarning { message }
        | Event::WillNotBeCodeSigned { message }
        | Event::DuplicateLocalizedStringKey { message } => warning(Origin::Tool, message),
        Event::XcodeprojWarning { path, message } => View::Diagnostic(
            Diagnostic::new(Severity::Warning, Origin::Tool, message.clone()).at(path),
        ),
        Event::UndefinedSymbolLocation { target, filename } => warning(
            Origin::Tool,
            &format!("Undefined symbol location: {filename}.o in {target}"),
        ),
        Event::ClangError { message }
        | Event::FatalError { message }
        | Event::LdError { message }
        | Event::XcodebuildError { message }
        | Event::CheckDependenciesErrors { message }
        | Event::ProvisioningProfileRequired { message }
        | Event::NoCertificate { message }
        | Event::PodsError { message } => error(Origin::Tool, message),
        Event::FileMissingError { reason, path } => View::Diagnostic(
            Diagnostic::new(Severity::Error, Origin::Tool, reason.clone()).at(path),
        ),
        Event::ModuleIncludesError { reason } => error(Origin::Tool, reason),
        Event::XcodeprojError { path, message } => View::Diagnostic(
            Diagnostic::new(Severity::Error, Origin::Tool, message.clone()).at(path),
        ),
        Event::LinkerDuplicateSymbols { reason } | Event::LinkerUndefinedSymbols { reason } => {
            error(Origin::Tool, reason)
        }
        Event::LinkerDuplicateSymbolsLocation { path } => View::Detail(format!("    {path}")),
        Event::LinkerUndefinedSymbolLocation { location } => View::Detail(location.clone()),
        Event::SymbolReferencedFrom { reference } => {
            View::Detail(format!("  \"{reference}\", referenced from:"))
        }
        Event::Cursor { cursor } => View::Detail(cursor.clone()),

        // Results
        Event::PhaseSuccess { phase } => View::Result {
            success: true,
            text: format!("** {phase} SUCCEEDED **"),
        },
        Event::PhaseFailure { phase } => View::Result {
            success: false,
            text: format!("** {phase} FAILED **"),
        },
        Event::BuildCommandsFailed => View::Result {
            success: false,
            text: "The following build commands failed:".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use xclog_parser::event::{FileStep, SourceDiagnostic, TimedTestCase};

    #[test]
    fn test_compile_step_is_a_target_task() {
        let event = Event::Compile(FileStep {
            path: "/a/main.swift".to_string(),
            filename: "main.swift".to_string(),
            target: Some("App".to_string()),
            project: Some("App".to_string()),
        });
        assert_eq!(
            view(&event),
            View::Task {
                verb: "Compiling",
                subject: Some("main.swift".to_string()),
                target: Some("App".to_string()),
            }
        );
    }

    #[test]
    fn test_compile_error_carries_position_and_context() {
        let event = Event::CompileError(SourceDiagnostic {
            location: "/a/b.c:10:4".to_string(),
            reason: "missing semicolon".to_string(),
            source_line: "int x".to_string(),
            cursor: "    ^".to_string(),
        });
        let View::Diagnostic(diag) = view(&event) else {
            panic!("expected diagnostic");
        };
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.location.as_ref().map(|l| l.line), Some(Some(10)));
        assert_eq!(diag.details(), "missing semicolon\nint x\n    ^");
    }

    #[test]
    fn test_executed_text() {
        let event = Event::ExecutedWithSkipped(ExecutedTests {
            tests: 10,
            skipped: 2,
            failures: 1,
            unexpected: 0,
            time: 1.3,
        });
        assert_eq!(
            view(&event),
            View::Result {
                success: false,
                text: "Executed 10 tests, with 2 tests skipped and 1 failure (0 unexpected) in 1.300 seconds"
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_passed_case() {
        let event = Event::TestCasePassed(TimedTestCase {
            suite: "AppTests".to_string(),
            name: "testExample".to_string(),
            time: "0.001".to_string(),
        });
        let View::Case(line) = view(&event) else {
            panic!("expected case");
        };
        assert_eq!(line.status, CaseStatus::Passed);
        assert_eq!(line.duration.as_deref(), Some("0.001 seconds"));
    }

    #[test]
    fn test_shell_commands_are_suppressed() {
        let event = Event::ShellCommand(xclog_parser::event::CommandLine {
            command: "cd".to_string(),
            arguments: "/tmp".to_string(),
        });
        assert_eq!(view(&event), View::Suppressed);
    }
}
