// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Classified events
//!
//! [`Event`] is the closed set of line shapes the pattern registry recognises.
//! Each variant carries only the fields its line shape yields. Fields shared by
//! several shapes live in small payload structs, and the capability traits at
//! the bottom of this module ([`HasTarget`], [`HasFile`], [`HasTestCase`],
//! [`HasTestCounts`]) let renderers work with the common subset.

use serde::Serialize;

use crate::category::OutputCategory;

// ============================================================================
// Payload Types
// ============================================================================

/// `=== BUILD TARGET … OF PROJECT … WITH CONFIGURATION … ===` style headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetHeader {
    /// Target name
    pub target: String,
    /// Project name
    pub project: String,
    /// Build configuration (Debug, Release, ...)
    pub configuration: String,
}

/// A build step operating on a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStep {
    /// Path as printed by the build tool (may contain `\ ` escapes)
    pub path: String,
    /// Last path component
    pub filename: String,
    /// Owning target, when the line names one
    pub target: Option<String>,
    /// Owning project, when the line names one
    pub project: Option<String>,
}

/// A build step copying one file to another location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyStep {
    /// Source path
    pub source: String,
    /// Destination path
    pub destination: String,
    /// Owning target, when the line names one
    pub target: Option<String>,
    /// Owning project, when the line names one
    pub project: Option<String>,
}

/// A build step that only names its target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetStep {
    /// Target name
    pub target: String,
    /// Project name, when printed
    pub project: Option<String>,
}

/// A Swift driver step for a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleStep {
    /// Module name
    pub module: String,
    /// Target name
    pub target: String,
    /// Project name
    pub project: String,
}

/// A run-script build phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptPhase {
    /// Phase name (may contain `\ ` escapes)
    pub name: String,
    /// Owning target
    pub target: Option<String>,
    /// Owning project
    pub project: Option<String>,
}

/// An indented shell command echoed by the build tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    /// Executable or builtin (`cd`, `setenv`, `/usr/bin/ditto`, ...)
    pub command: String,
    /// Remaining arguments
    pub arguments: String,
}

/// A raw clang compiler invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileCommand {
    /// The whole compiler command line
    pub compiler_command: String,
    /// Source file being compiled
    pub path: String,
}

/// A test case identified by suite and name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCaseRef {
    /// Test suite (class) name
    pub suite: String,
    /// Test case (method) name
    pub name: String,
}

/// A finished test case with its duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimedTestCase {
    /// Test suite (class) name
    pub suite: String,
    /// Test case (method) name
    pub name: String,
    /// Duration in seconds, verbatim
    pub time: String,
}

/// A performance test measurement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasuredTestCase {
    /// Test suite (class) name
    pub suite: String,
    /// Test case (method) name
    pub name: String,
    /// Metric name, e.g. `Time`
    pub metric: String,
    /// Metric unit, e.g. `s`
    pub unit: String,
    /// Average value, verbatim
    pub average: String,
}

/// A test case reported by the parallel test runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParallelTestCase {
    /// Suite name as printed (not trusted for report grouping)
    pub suite: String,
    /// Test case name
    pub name: String,
    /// Device or runner clone the test ran on
    pub device: String,
    /// Duration in seconds, verbatim
    pub time: String,
}

/// A test restarted after a crash or timeout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestartedTest {
    /// The whole line
    pub message: String,
    /// Test suite name
    pub suite: String,
    /// Test case name
    pub name: String,
}

/// An XCTest assertion failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailingTest {
    /// `path:line` of the failing assertion
    pub location: String,
    /// Test suite name
    pub suite: String,
    /// Test case name
    pub name: String,
    /// Failure reason
    pub reason: String,
}

/// Counts from an `Executed N tests, …` line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutedTests {
    /// Tests executed
    pub tests: u32,
    /// Tests skipped
    pub skipped: u32,
    /// Failures
    pub failures: u32,
    /// Unexpected failures
    pub unexpected: u32,
    /// Wall clock time in seconds
    pub time: f64,
}

/// A Swift Testing run completion line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwiftTestingRun {
    /// Tests run
    pub tests: u32,
    /// Duration in seconds
    pub time: f64,
    /// Issues recorded (zero for passing runs)
    pub issues: u32,
}

/// A Swift Testing suite or test outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwiftTestingOutcome {
    /// Suite or test name
    pub name: String,
    /// Duration in seconds, verbatim
    pub time: String,
    /// Issues recorded, for failures
    pub issues: Option<u32>,
}

/// An issue recorded by Swift Testing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwiftTestingIssue {
    /// Test name
    pub test: String,
    /// Number of parameterized arguments, for argument issues
    pub arguments: Option<u32>,
    /// `path:line:col` of the issue
    pub location: Option<String>,
    /// Issue description
    pub message: String,
}

/// A compiler diagnostic followed by its source and caret lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceDiagnostic {
    /// `path[:line[:col]]`
    pub location: String,
    /// Diagnostic message
    pub reason: String,
    /// Source line the diagnostic points into
    pub source_line: String,
    /// Caret line marking the column
    pub cursor: String,
}

/// A resolved Swift package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageResolved {
    /// Package name
    pub name: String,
    /// Repository URL
    pub url: String,
    /// Resolved version
    pub version: String,
}

// ============================================================================
// Event
// ============================================================================

/// A classified line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "fields", rename_all = "camelCase")]
pub enum Event {
    // Target headers
    BuildTarget(TargetHeader),
    AggregateTarget(TargetHeader),
    AnalyzeTarget(TargetHeader),
    CleanTarget(TargetHeader),

    // Build steps
    Analyze(FileStep),
    CheckDependencies,
    CleanRemove { path: String },
    CodesignFramework { path: String },
    Codesign { path: String },
    Compile(FileStep),
    SwiftCompile(FileStep),
    SwiftCompiling {
        files: String,
        target: Option<String>,
        project: Option<String>,
    },
    CompileCommand(CompileCommand),
    ProcessPchCommand { path: String },
    CompileXib(FileStep),
    CompileStoryboard(FileStep),
    CompileAssetCatalog(FileStep),
    CopyHeader(CopyStep),
    CopyPlist(CopyStep),
    CopyStrings(CopyStep),
    CopyPngFile(CopyStep),
    CopyFiles(CopyStep),
    CpResource(FileStep),
    PbxCp(FileStep),
    CopySwiftLibs(TargetStep),
    GenerateCoverageData,
    GeneratedCoverageReport { path: String },
    GenerateDsym(FileStep),
    Libtool(FileStep),
    Linking(FileStep),
    PhaseScriptExecution(ScriptPhase),
    Preprocess(FileStep),
    ProcessInfoPlist(FileStep),
    ProcessPch(FileStep),
    TiffUtil { filename: String },
    Touch(FileStep),
    WriteFile { path: String },
    WriteAuxiliaryFiles,
    GenerateAssetSymbols(FileStep),
    DataModelCodegen(FileStep),
    ProcessXcFramework(FileStep),
    ValidateEmbeddedBinary(FileStep),
    Validate(FileStep),
    RegisterExecutionPolicyException(FileStep),
    ScanDependencies(FileStep),
    SymLink(FileStep),
    CreateUniversalBinary(FileStep),
    MkDir(FileStep),
    ProcessProductPackaging(FileStep),
    ProcessProductPackagingDer(FileStep),
    ExplicitDependency(TargetStep),
    TargetDependencies(TargetStep),
    CompilationResult,
    ComputeTargetDependencyGraph,
    ComputePackagePrebuildTargetDependencyGraph,
    CreateBuildDescription,
    ClangStatCache { path: String },
    SigningIdentity { identity: String },
    ProvisioningProfile { profile: String },
    Note { message: String },
    ShellCommand(CommandLine),

    // Swift driver
    SwiftDriverJobDiscoveryEmittingModule(ModuleStep),
    SwiftDriverJobDiscoveryCompiling(FileStep),
    SwiftDriverCompilationRequirements(ModuleStep),
    SwiftDriverCompilation(ModuleStep),
    SwiftDriver(ModuleStep),
    EmitSwiftModule(TargetStep),
    SwiftEmitModule(ModuleStep),
    SwiftMergeGeneratedHeaders(TargetStep),
    CompileSwiftSources(TargetStep),
    MergeSwiftModule(TargetStep),
    LinkStoryboards(TargetStep),
    ExtractAppIntentsMetadata(TargetStep),

    // Swift packages
    PackageFetching { source: String },
    PackageUpdating { source: String },
    PackageCheckingOut { version: String, package: String },
    PackageGraphResolvingStart,
    PackageGraphResolvingEnded,
    PackageGraphResolvedItem(PackageResolved),

    // XCTest
    TestSuiteStarted { suite: String, time: String },
    TestSuiteStart { suite: String },
    TestsRunCompletion {
        suite: String,
        result: String,
        time: String,
    },
    TestSuiteFinished { suite: String, result: String },
    TestSuiteAllTestsPassed,
    TestSuiteAllTestsFailed,
    TestCaseStarted(TestCaseRef),
    TestCasePending(TestCaseRef),
    TestCasePassed(TimedTestCase),
    TestCaseSkipped(TimedTestCase),
    TestCaseMeasured(MeasuredTestCase),
    FailingTest(FailingTest),
    UiFailingTest { location: String, reason: String },
    RestartingTest(RestartedTest),
    Executed(ExecutedTests),
    ExecutedWithSkipped(ExecutedTests),
    TestingStarted,
    TestingFailed,

    // Parallel testing
    ParallelTestingStarted { device: String },
    ParallelTestingPassed { device: String },
    ParallelTestingFailed { device: String },
    ParallelTestSuiteStarted { suite: String, device: String },
    ParallelTestCasePassed(ParallelTestCase),
    ParallelTestCaseAppKitPassed(ParallelTestCase),
    ParallelTestCaseFailed(ParallelTestCase),
    ParallelTestCaseSkipped(ParallelTestCase),

    // Swift Testing
    SwiftTestingRunStarted,
    SwiftTestingRunCompleted(SwiftTestingRun),
    SwiftTestingRunFailed(SwiftTestingRun),
    SwiftTestingSuiteStarted { suite: String },
    SwiftTestingTestStarted { name: String },
    SwiftTestingSuitePassed(SwiftTestingOutcome),
    SwiftTestingSuiteFailed(SwiftTestingOutcome),
    SwiftTestingTestPassed(SwiftTestingOutcome),
    SwiftTestingTestFailed(SwiftTestingOutcome),
    SwiftTestingTestSkipped { name: String, reason: Option<String> },
    SwiftTestingIssue(SwiftTestingIssue),
    SwiftTestingIssueArgument(SwiftTestingIssue),

    // Diagnostics
    CompileWarning(SourceDiagnostic),
    CompileError(SourceDiagnostic),
    LdWarning { prefix: String, message: String },
    GenericWarning { message: String },
    WillNotBeCodeSigned { message: String },
    DuplicateLocalizedStringKey { message: String },
    XcodeprojWarning { path: String, message: String },
    UndefinedSymbolLocation { target: String, filename: String },
    ClangError { message: String },
    FatalError { message: String },
    FileMissingError { reason: String, path: String },
    LdError { message: String },
    ModuleIncludesError { reason: String },
    XcodebuildError { message: String },
    XcodeprojError { path: String, message: String },
    CheckDependenciesErrors { message: String },
    ProvisioningProfileRequired { message: String },
    NoCertificate { message: String },
    LinkerDuplicateSymbols { reason: String },
    LinkerDuplicateSymbolsLocation { path: String },
    LinkerUndefinedSymbols { reason: String },
    LinkerUndefinedSymbolLocation { location: String },
    SymbolReferencedFrom { reference: String },
    PodsError { message: String },
    Cursor { cursor: String },

    // Results
    PhaseSuccess { phase: String },
    PhaseFailure { phase: String },
    BuildCommandsFailed,
}

impl Event {
    /// The coarse category of this event
    ///
    /// This is a function of the variant alone.
    #[must_use]
    pub fn category(&self) -> OutputCategory {
        self.kind().category()
    }

    /// The fieldless discriminant of this event
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::BuildTarget(_) => EventKind::BuildTarget,
            Self::AggregateTarget(_) => EventKind::AggregateTarget,
            Self::AnalyzeTarget(_) => EventKind::AnalyzeTarget,
            Self::CleanTarget(_) => EventKind::CleanTarget,
            Self::Analyze(_) => EventKind::Analyze,
            Self::CheckDependencies => EventKind::CheckDependencies,
            Self::CleanRemove { .. } => EventKind::CleanRemove,
            Self::CodesignFramework { .. } => EventKind::CodesignFramework,
            Self::Codesign { .. } => EventKind::Codesign,
            Self::Compile(_) => EventKind::Compile,
            Self::SwiftCompile(_) => EventKind::SwiftCompile,
            Self::SwiftCompiling { .. } => EventKind::SwiftCompiling,
            Self::CompileCommand(_) => EventKind::CompileCommand,
            Self::ProcessPchCommand { .. } => EventKind::ProcessPchCommand,
            Self::CompileXib(_) => EventKind::CompileXib,
            Self::CompileStoryboard(_) => EventKind::CompileStoryboard,
            Self::CompileAssetCatalog(_) => EventKind::CompileAssetCatalog,
            Self::CopyHeader(_) => EventKind::CopyHeader,
            Self::CopyPlist(_) => EventKind::CopyPlist,
            Self::CopyStrings(_) => EventKind::CopyStrings,
            Self::CopyPngFile(_) => EventKind::CopyPngFile,
            Self::CopyFiles(_) => EventKind::CopyFiles,
            Self::CpResource(_) => EventKind::CpResource,
            Self::PbxCp(_) => EventKind::PbxCp,
            Self::CopySwiftLibs(_) => EventKind::CopySwiftLibs,
            Self::GenerateCoverageData => EventKind::GenerateCoverageData,
            Self::GeneratedCoverageReport { .. } => EventKind::GeneratedCoverageReport,
            Self::GenerateDsym(_) => EventKind::GenerateDsym,
            Self::Libtool(_) => EventKind::Libtool,
            Self::Linking(_) => EventKind::Linking,
            Self::PhaseScriptExecution(_) => EventKind::PhaseScriptExecution,
            Self::Preprocess(_) => EventKind::Preprocess,
            Self::ProcessInfoPlist(_) => EventKind::ProcessInfoPlist,
            Self::ProcessPch(_) => EventKind::ProcessPch,
            Self::TiffUtil { .. } => EventKind::TiffUtil,
            Self::Touch(_) => EventKind::Touch,
            Self::WriteFile { .. } => EventKind::WriteFile,
            Self::WriteAuxiliaryFiles => EventKind::WriteAuxiliaryFiles,
            Self::GenerateAssetSymbols(_) => EventKind::GenerateAssetSymbols,
            Self::DataModelCodegen(_) => EventKind::DataModelCodegen,
            Self::ProcessXcFramework(_) => EventKind::ProcessXcFramework,
            Self::ValidateEmbeddedBinary(_) => EventKind::ValidateEmbeddedBinary,
            Self::Validate(_) => EventKind::Validate,
            Self::RegisterExecutionPolicyException(_) => {
                EventKind::RegisterExecutionPolicyException
            }
            Self::ScanDependencies(_) => EventKind::ScanDependencies,
            Self::SymLink(_) => EventKind::SymLink,
            Self::CreateUniversalBinary(_) => EventKind::CreateUniversalBinary,
            Self::MkDir(_) => EventKind::MkDir,
            Self::ProcessProductPackaging(_) => EventKind::ProcessProductPackaging,
            Self::ProcessProductPackagingDer(_) => EventKind::ProcessProductPackagingDer,
            Self::ExplicitDependency(_) => EventKind::ExplicitDependency,
            Self::TargetDependencies(_) => EventKind::TargetDependencies,
            Self::CompilationResult => EventKind::CompilationResult,
            Self::ComputeTargetDependencyGraph => EventKind::ComputeTargetDependencyGraph,
            Self::ComputePackagePrebuildTargetDependencyGraph => {
                EventKind::ComputePackagePrebuildTargetDependencyGraph
            }
            Self::CreateBuildDescription => EventKind::CreateBuildDescription,
            Self::ClangStatCache { .. } => EventKind::ClangStatCache,
            Self::SigningIdentity { .. } => EventKind::SigningIdentity,
            Self::ProvisioningProfile { .. } => EventKind::ProvisioningProfile,
            Self::Note { .. } => EventKind::Note,
            Self::ShellCommand(_) => EventKind::ShellCommand,
            Self::SwiftDriverJobDiscoveryEmittingModule(_) => {
                EventKind::SwiftDriverJobDiscoveryEmittingModule
            }
            Self::SwiftDriverJobDiscoveryCompiling(_) => {
                EventKind::SwiftDriverJobDiscoveryCompiling
            }
            Self::SwiftDriverCompilationRequirements(_) => {
                EventKind::SwiftDriverCompilationRequirements
            }
            Self::SwiftDriverCompilation(_) => EventKind::SwiftDriverCompilation,
            Self::SwiftDriver(_) => EventKind::SwiftDriver,
            Self::EmitSwiftModule(_) => EventKind::EmitSwiftModule,
            Self::SwiftEmitModule(_) => EventKind::SwiftEmitModule,
            Self::SwiftMergeGeneratedHeaders(_) => EventKind::SwiftMergeGeneratedHeaders,
            Self::CompileSwiftSources(_) => EventKind::CompileSwiftSources,
            Self::MergeSwiftModule(_) => EventKind::MergeSwiftModule,
            Self::LinkStoryboards(_) => EventKind::LinkStoryboards,
            Self::ExtractAppIntentsMetadata(_) => EventKind::ExtractAppIntentsMetadata,
            Self::PackageFetching { .. } => EventKind::PackageFetching,
            Self::PackageUpdating { .. } => EventKind::PackageUpdating,
            Self::PackageCheckingOut { .. } => EventKind::PackageCheckingOut,
            Self::PackageGraphResolvingStart => EventKind::PackageGraphResolvingStart,
            Self::PackageGraphResolvingEnded => EventKind::PackageGraphResolvingEnded,
            Self::PackageGraphResolvedItem(_) => EventKind::PackageGraphResolvedItem,
            Self::TestSuiteStarted { .. } => EventKind::TestSuiteStarted,
            Self::TestSuiteStart { .. } => EventKind::TestSuiteStart,
            Self::TestsRunCompletion { .. } => EventKind::TestsRunCompletion,
            Self::TestSuiteFinished { .. } => EventKind::TestSuiteFinished,
            Self::TestSuiteAllTestsPassed => EventKind::TestSuiteAllTestsPassed,
            Self::TestSuiteAllTestsFailed => EventKind::TestSuiteAllTestsFailed,
            Self::TestCaseStarted(_) => EventKind::TestCaseStarted,
            Self::TestCasePending(_) => EventKind::TestCasePending,
            Self::TestCasePassed(_) => EventKind::TestCasePassed,
            Self::TestCaseSkipped(_) => EventKind::TestCaseSkipped,
            Self::TestCaseMeasured(_) => EventKind::TestCaseMeasured,
            Self::FailingTest(_) => EventKind::FailingTest,
            Self::UiFailingTest { .. } => EventKind::UiFailingTest,
            Self::RestartingTest(_) => EventKind::RestartingTest,
            Self::Executed(_) => EventKind::Executed,
            Self::ExecutedWithSkipped(_) => EventKind::ExecutedWithSkipped,
            Self::TestingStarted => EventKind::TestingStarted,
            Self::TestingFailed => EventKind::TestingFailed,
            Self::ParallelTestingStarted { .. } => EventKind::ParallelTestingStarted,
            Self::ParallelTestingPassed { .. } => EventKind::ParallelTestingPassed,
            Self::ParallelTestingFailed { .. } => EventKind::ParallelTestingFailed,
            Self::ParallelTestSuiteStarted { .. } => EventKind::ParallelTestSuiteStarted,
            Self::ParallelTestCasePassed(_) => EventKind::ParallelTestCasePassed,
            Self::ParallelTestCaseAppKitPassed(_) => EventKind::ParallelTestCaseAppKitPassed,
            Self::ParallelTestCaseFailed(_) => EventKind::ParallelTestCaseFailed,
            Self::ParallelTestCaseSkipped(_) => EventKind::ParallelTestCaseSkipped,
            Self::SwiftTestingRunStarted => EventKind::SwiftTestingRunStarted,
            Self::SwiftTestingRunCompleted(_) => EventKind::SwiftTestingRunCompleted,
            Self::SwiftTestingRunFailed(_) => EventKind::SwiftTestingRunFailed,
            Self::SwiftTestingSuiteStarted { .. } => EventKind::SwiftTestingSuiteStarted,
            Self::SwiftTestingTestStarted { .. } => EventKind::SwiftTestingTestStarted,
            Self::SwiftTestingSuitePassed(_) => EventKind::SwiftTestingSuitePassed,
            Self::SwiftTestingSuiteFailed(_) => EventKind::SwiftTestingSuiteFailed,
            Self::SwiftTestingTestPassed(_) => EventKind::SwiftTestingTestPassed,
            Self::SwiftTestingTestFailed(_) => EventKind::SwiftTestingTestFailed,
            Self::SwiftTestingTestSkipped { .. } => EventKind::SwiftTestingTestSkipped,
            Self::SwiftTestingIssue(_) => EventKind::SwiftTestingIssue,
            Self::SwiftTestingIssueArgument(_) => EventKind::SwiftTestingIssueArgument,
            Self::CompileWarning(_) => EventKind::CompileWarning,
            Self::CompileError(_) => EventKind::CompileError,
            Self::LdWarning { .. } => EventKind::LdWarning,
            Self::GenericWarning { .. } => EventKind::GenericWarning,
            Self::WillNotBeCodeSigned { .. } => EventKind::WillNotBeCodeSigned,
            Self::DuplicateLocalizedStringKey { .. } => EventKind::DuplicateLocalizedStringKey,
            Self::XcodeprojWarning { .. } => EventKind::XcodeprojWarning,
            Self::UndefinedSymbolLocation { .. } => EventKind::UndefinedSymbolLocation,
            Self::ClangError { .. } => EventKind::ClangError,
            Self::FatalError { .. } => EventKind::FatalError,
            Self::FileMissingError { .. } => EventKind::FileMissingError,
            Self::LdError { .. } => EventKind::LdError,
            Self::ModuleIncludesError { .. } => EventKind::ModuleIncludesError,
            Self::XcodebuildError { .. } => EventKind::XcodebuildError,
            Self::XcodeprojError { .. } => EventKind::XcodeprojError,
            Self::CheckDependenciesErrors { .. } => EventKind::CheckDependenciesErrors,
            Self::ProvisioningProfileRequired { .. } => EventKind::ProvisioningProfileRequired,
            Self::NoCertificate { .. } => EventKind::NoCertificate,
            Self::LinkerDuplicateSymbols { .. } => EventKind::LinkerDuplicateSymbols,
            Self::LinkerDuplicateSymbolsLocation { .. } => {
                EventKind::LinkerDuplicateSymbolsLocation
            }
            Self::LinkerUndefinedSymbols { .. } => EventKind::LinkerUndefinedSymbols,
            Self::LinkerUndefinedSymbolLocation { .. } => EventKind::LinkerUndefinedSymbolLocation,
            Self::SymbolReferencedFrom { .. } => EventKind::SymbolReferencedFrom,
            Self::PodsError { .. } => EventKind::PodsError,
            Self::Cursor { .. } => EventKind::Cursor,
            Self::PhaseSuccess { .. } => EventKind::PhaseSuccess,
            Self::PhaseFailure { .. } => EventKind::PhaseFailure,
            Self::BuildCommandsFailed => EventKind::BuildCommandsFailed,
        }
    }
}

// ============================================================================
// Event Kind
// ============================================================================

/// Fieldless discriminant of [`Event`]
///
/// The registry keys its rules by kind, and the category table lives here so
/// that a variant's category can never drift between rule and event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum EventKind {
    BuildTarget,
    AggregateTarget,
    AnalyzeTarget,
    CleanTarget,
    Analyze,
    CheckDependencies,
    CleanRemove,
    CodesignFramework,
    Codesign,
    Compile,
    SwiftCompile,
    SwiftCompiling,
    CompileCommand,
    ProcessPchCommand,
    CompileXib,
    CompileStoryboard,
    CompileAssetCatalog,
    CopyHeader,
    CopyPlist,
    CopyStrings,
    CopyPngFile,
    CopyFiles,
    CpResource,
    PbxCp,
    CopySwiftLibs,
    GenerateCoverageData,
    GeneratedCoverageReport,
    GenerateDsym,
    Libtool,
    Linking,
    PhaseScriptExecution,
    Preprocess,
    ProcessInfoPlist,
    ProcessPch,
    TiffUtil,
    Touch,
    WriteFile,
    WriteAuxiliaryFiles,
    GenerateAssetSymbols,
    DataModelCodegen,
    ProcessXcFramework,
    ValidateEmbeddedBinary,
    Validate,
    RegisterExecutionPolicyException,
    ScanDependencies,
    SymLink,
    CreateUniversalBinary,
    MkDir,
    ProcessProductPackaging,
    ProcessProductPackagingDer,
    ExplicitDependency,
    TargetDependencies,
    CompilationResult,
    ComputeTargetDependencyGraph,
    ComputePackagePrebuildTargetDependencyGraph,
    CreateBuildDescription,
    ClangStatCache,
    SigningIdentity,
    ProvisioningProfile,
    Note,
    ShellCommand,
    SwiftDriverJobDiscoveryEmittingModule,
    SwiftDriverJobDiscoveryCompiling,
    SwiftDriverCompilationRequirements,
    SwiftDriverCompilation,
    SwiftDriver,
    EmitSwiftModule,
    SwiftEmitModule,
    SwiftMergeGeneratedHeaders,
    CompileSwiftSources,
    MergeSwiftModule,
    LinkStoryboards,
    ExtractAppIntentsMetadata,
    PackageFetching,
    PackageUpdating,
    PackageCheckingOut,
    PackageGraphResolvingStart,
    PackageGraphResolvingEnded,
    PackageGraphResolvedItem,
    TestSuiteStarted,
    TestSuiteStart,
    TestsRunCompletion,
    TestSuiteFinished,
    TestSuiteAllTestsPassed,
    TestSuiteAllTestsFailed,
    TestCaseStarted,
    TestCasePending,
    TestCasePassed,
    TestCaseSkipped,
    TestCaseMeasured,
    FailingTest,
    UiFailingTest,
    RestartingTest,
    Executed,
    ExecutedWithSkipped,
    TestingStarted,
    TestingFailed,
    ParallelTestingStarted,
    ParallelTestingPassed,
    ParallelTestingFailed,
    ParallelTestSuiteStarted,
    ParallelTestCasePassed,
    ParallelTestCaseAppKitPassed,
    ParallelTestCaseFailed,
    ParallelTestCaseSkipped,
    SwiftTestingRunStarted,
    SwiftTestingRunCompleted,
    SwiftTestingRunFailed,
    SwiftTestingSuiteStarted,
    SwiftTestingTestStarted,
    SwiftTestingSuitePassed,
    SwiftTestingSuiteFailed,
    SwiftTestingTestPassed,
    SwiftTestingTestFailed,
    SwiftTestingTestSkipped,
    SwiftTestingIssue,
    SwiftTestingIssueArgument,
    CompileWarning,
    CompileError,
    LdWarning,
    GenericWarning,
    WillNotBeCodeSigned,
    DuplicateLocalizedStringKey,
    XcodeprojWarning,
    UndefinedSymbolLocation,
    ClangError,
    FatalError,
    FileMissingError,
    LdError,
    ModuleIncludesError,
    XcodebuildError,
    XcodeprojError,
    CheckDependenciesErrors,
    ProvisioningProfileRequired,
    NoCertificate,
    LinkerDuplicateSymbols,
    LinkerDuplicateSymbolsLocation,
    LinkerUndefinedSymbols,
    LinkerUndefinedSymbolLocation,
    SymbolReferencedFrom,
    PodsError,
    Cursor,
    PhaseSuccess,
    PhaseFailure,
    BuildCommandsFailed,
}

impl EventKind {
    /// The output category of every event of this kind
    #[must_use]
    pub fn category(self) -> OutputCategory {
        use OutputCategory as C;
        match self {
            Self::BuildTarget
            | Self::AggregateTarget
            | Self::AnalyzeTarget
            | Self::CleanTarget
            | Self::Analyze
            | Self::CheckDependencies
            | Self::CleanRemove
            | Self::CodesignFramework
            | Self::Codesign
            | Self::Compile
            | Self::SwiftCompile
            | Self::SwiftCompiling
            | Self::CompileCommand
            | Self::ProcessPchCommand
            | Self::CompileXib
            | Self::CompileStoryboard
            | Self::CompileAssetCatalog
            | Self::CopyHeader
            | Self::CopyPlist
            | Self::CopyStrings
            | Self::CopyPngFile
            | Self::CopyFiles
            | Self::CpResource
            | Self::PbxCp
            | Self::CopySwiftLibs
            | Self::GenerateCoverageData
            | Self::GeneratedCoverageReport
            | Self::GenerateDsym
            | Self::Libtool
            | Self::Linking
            | Self::PhaseScriptExecution
            | Self::Preprocess
            | Self::ProcessInfoPlist
            | Self::ProcessPch
            | Self::TiffUtil
            | Self::Touch
            | Self::WriteFile
            | Self::WriteAuxiliaryFiles
            | Self::GenerateAssetSymbols
            | Self::DataModelCodegen
            | Self::ProcessXcFramework
            | Self::ValidateEmbeddedBinary
            | Self::Validate
            | Self::RegisterExecutionPolicyException
            | Self::ScanDependencies
            | Self::SymLink
            | Self::CreateUniversalBinary
            | Self::MkDir
            | Self::ProcessProductPackaging
            | Self::ProcessProductPackagingDer
            | Self::ExplicitDependency
            | Self::TargetDependencies
            | Self::CompilationResult
            | Self::ComputeTargetDependencyGraph
            | Self::ComputePackagePrebuildTargetDependencyGraph
            | Self::CreateBuildDescription
            | Self::ClangStatCache
            | Self::SigningIdentity
            | Self::ProvisioningProfile
            | Self::Note
            | Self::ShellCommand
            | Self::SwiftDriverJobDiscoveryEmittingModule
            | Self::SwiftDriverJobDiscoveryCompiling
            | Self::SwiftDriverCompilationRequirements
            | Self::SwiftDriverCompilation
            | Self::SwiftDriver
            | Self::EmitSwiftModule
            | Self::SwiftEmitModule
            | Self::SwiftMergeGeneratedHeaders
            | Self::CompileSwiftSources
            | Self::MergeSwiftModule
            | Self::LinkStoryboards
            | Self::ExtractAppIntentsMetadata
            | Self::PackageFetching
            | Self::PackageUpdating
            | Self::PackageCheckingOut
            | Self::PackageGraphResolvingStart
            | Self::PackageGraphResolvingEnded
            | Self::PackageGraphResolvedItem => C::Task,

            Self::TestSuiteStarted
            | Self::TestSuiteStart
            | Self::TestsRunCompletion
            | Self::TestSuiteFinished
            | Self::TestCaseStarted
            | Self::RestartingTest
            | Self::TestingStarted
            | Self::ParallelTestingStarted
            | Self::ParallelTestSuiteStarted
            | Self::SwiftTestingRunStarted
            | Self::SwiftTestingSuiteStarted
            | Self::SwiftTestingTestStarted => C::Test,

            Self::TestCasePending
            | Self::TestCasePassed
            | Self::TestCaseSkipped
            | Self::TestCaseMeasured
            | Self::ParallelTestCasePassed
            | Self::ParallelTestCaseAppKitPassed
            | Self::ParallelTestCaseSkipped
            | Self::SwiftTestingSuitePassed
            | Self::SwiftTestingTestPassed
            | Self::SwiftTestingTestSkipped => C::TestCase,

            Self::CompileWarning
            | Self::LdWarning
            | Self::GenericWarning
            | Self::WillNotBeCodeSigned
            | Self::DuplicateLocalizedStringKey
            | Self::XcodeprojWarning
            | Self::UndefinedSymbolLocation => C::Warning,

            Self::CompileError
            | Self::FailingTest
            | Self::UiFailingTest
            | Self::ParallelTestCaseFailed
            | Self::SwiftTestingSuiteFailed
            | Self::SwiftTestingTestFailed
            | Self::ClangError
            | Self::FatalError
            | Self::FileMissingError
            | Self::LdError
            | Self::ModuleIncludesError
            | Self::XcodebuildError
            | Self::XcodeprojError
            | Self::CheckDependenciesErrors
            | Self::ProvisioningProfileRequired
            | Self::NoCertificate
            | Self::LinkerDuplicateSymbols
            | Self::LinkerDuplicateSymbolsLocation
            | Self::LinkerUndefinedSymbols
            | Self::LinkerUndefinedSymbolLocation
            | Self::SymbolReferencedFrom => C::Error,

            Self::PodsError
            | Self::ParallelTestingFailed
            | Self::PhaseFailure
            | Self::BuildCommandsFailed
            | Self::TestingFailed => C::NonContextualError,

            Self::Executed
            | Self::ExecutedWithSkipped
            | Self::PhaseSuccess
            | Self::ParallelTestingPassed
            | Self::TestSuiteAllTestsPassed
            | Self::TestSuiteAllTestsFailed
            | Self::SwiftTestingRunCompleted
            | Self::SwiftTestingRunFailed => C::Result,

            Self::SwiftTestingIssue | Self::SwiftTestingIssueArgument => C::Issue,

            Self::Cursor => C::Undefined,
        }
    }
}

// ============================================================================
// Capabilities
// ============================================================================

/// Payloads that name the target (and maybe project) they belong to
pub trait HasTarget {
    /// Target name, when known
    fn target(&self) -> Option<&str>;
    /// Project name, when known
    fn project(&self) -> Option<&str>;
}

/// Payloads that operate on one named file
pub trait HasFile {
    /// Last path component of the file
    fn filename(&self) -> &str;
}

/// Payloads that identify a single test case
pub trait HasTestCase {
    /// Test suite (class) name
    fn suite(&self) -> &str;
    /// Test case name
    fn name(&self) -> &str;
}

/// Payloads that carry aggregate test counts
pub trait HasTestCounts {
    /// Tests run
    fn tests(&self) -> u32;
    /// Tests skipped
    fn skipped(&self) -> u32;
    /// Failures
    fn failures(&self) -> u32;
    /// Unexpected failures
    fn unexpected(&self) -> u32;
    /// Duration in seconds
    fn seconds(&self) -> f64;
}

impl HasTarget for TargetHeader {
    fn target(&self) -> Option<&str> {
        Some(&self.target)
    }

    fn project(&self) -> Option<&str> {
        Some(&self.project)
    }
}

impl HasTarget for FileStep {
    fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }
}

impl HasTarget for CopyStep {
    fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }
}

impl HasTarget for TargetStep {
    fn target(&self) -> Option<&str> {
        Some(&self.target)
    }

    fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }
}

impl HasTarget for ModuleStep {
    fn target(&self) -> Option<&str> {
        Some(&self.target)
    }

    fn project(&self) -> Option<&str> {
        Some(&self.project)
    }
}

impl HasTarget for ScriptPhase {
    fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }
}

impl HasFile for FileStep {
    fn filename(&self) -> &str {
        &self.filename
    }
}

impl HasFile for CopyStep {
    fn filename(&self) -> &str {
        file_name(&self.source)
    }
}

impl HasTestCase for TestCaseRef {
    fn suite(&self) -> &str {
        &self.suite
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl HasTestCase for TimedTestCase {
    fn suite(&self) -> &str {
        &self.suite
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl HasTestCase for MeasuredTestCase {
    fn suite(&self) -> &str {
        &self.suite
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl HasTestCase for ParallelTestCase {
    fn suite(&self) -> &str {
        &self.suite
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl HasTestCase for RestartedTest {
    fn suite(&self) -> &str {
        &self.suite
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl HasTestCase for FailingTest {
    fn suite(&self) -> &str {
        &self.suite
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl HasTestCounts for ExecutedTests {
    fn tests(&self) -> u32 {
        self.tests
    }

    fn skipped(&self) -> u32 {
        self.skipped
    }

    fn failures(&self) -> u32 {
        self.failures
    }

    fn unexpected(&self) -> u32 {
        self.unexpected
    }

    fn seconds(&self) -> f64 {
        self.time
    }
}

impl HasTestCounts for SwiftTestingRun {
    fn tests(&self) -> u32 {
        self.tests
    }

    fn skipped(&self) -> u32 {
        0
    }

    fn failures(&self) -> u32 {
        self.issues
    }

    fn unexpected(&self) -> u32 {
        0
    }

    fn seconds(&self) -> f64 {
        self.time
    }
}

/// Last `/`-separated component of a path
#[must_use]
pub fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
