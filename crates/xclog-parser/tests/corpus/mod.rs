// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Sample log lines, one or more per rule
//!
//! Shared by the catalog and property tests.

#![allow(dead_code)]

use xclog_parser::EventKind as K;

/// Lines as printed by `xcodebuild` on macOS
pub const APPLE: &[(&str, K)] = &[
    (r"=== BUILD TARGET App OF PROJECT App WITH CONFIGURATION Debug ===", K::BuildTarget),
    (r"=== BUILD TARGET Lib OF PROJECT Pods WITH THE DEFAULT CONFIGURATION Release ===", K::BuildTarget),
    (r"=== BUILD AGGREGATE TARGET Docs OF PROJECT App WITH CONFIGURATION Debug ===", K::AggregateTarget),
    (r"=== ANALYZE TARGET App OF PROJECT App WITH CONFIGURATION Debug ===", K::AnalyzeTarget),
    (r"=== CLEAN TARGET App OF PROJECT App WITH CONFIGURATION Debug ===", K::CleanTarget),
    (r"AnalyzeShallow /Users/dev/App/Sources/main.m normal x86_64 (in target 'App' from project 'App')", K::Analyze),
    (r"Analyze /Users/dev/App/Sources/Widget.mm normal arm64", K::Analyze),
    (r"Check dependencies", K::CheckDependencies),
    (r"Clean.Remove clean /Users/dev/Build/Products/Debug/App.app", K::CleanRemove),
    (r"CodeSign build/Release/MyFramework.framework/Versions/A", K::CodesignFramework),
    (r"CodeSign build/Release/MyApp.app (in target 'App' from project 'App')", K::Codesign),
    (r"CompileXIB /Users/dev/App/Base.lproj/Main.xib (in target 'App' from project 'App')", K::CompileXib),
    (r"CompileStoryboard /Users/dev/App/Base.lproj/LaunchScreen.storyboard (in target 'App' from project 'App')", K::CompileStoryboard),
    (r"CompileAssetCatalog /Users/dev/Build/App.app /Users/dev/App/Assets.xcassets (in target 'App' from project 'App')", K::CompileAssetCatalog),
    (r"SwiftCompile normal arm64 Compiling\ ViewController.swift,\ AppDelegate.swift /Users/dev/App/ViewController.swift /Users/dev/App/AppDelegate.swift (in target 'App' from project 'App')", K::SwiftCompiling),
    (r"SwiftCompile normal arm64 /Users/dev/App/My\ Views/ViewController.swift (in target 'App' from project 'App')", K::SwiftCompile),
    (r"CompileSwiftSources normal arm64 com.apple.xcode.tools.swift.compiler (in target 'App' from project 'App')", K::CompileSwiftSources),
    (r"CompileSwift normal arm64 /Users/dev/App/Sources/AppDelegate.swift (in target 'App' from project 'App')", K::Compile),
    (r"CompileC /Users/dev/Build/Intermediates/main.o /Users/dev/App/main.m normal x86_64 objective-c com.apple.compilers.llvm.clang.1_0.compiler (in target: App)", K::Compile),
    (r"    /Applications/Xcode.app/Contents/Developer/Toolchains/XcodeDefault.xctoolchain/usr/bin/clang -x objective-c-header -c /Users/dev/App/App-Prefix.pch -o /Users/dev/Build/App-Prefix.pch.gch", K::ProcessPchCommand),
    (r"    /Applications/Xcode.app/Contents/Developer/Toolchains/XcodeDefault.xctoolchain/usr/bin/clang -x objective-c -c /Users/dev/App/main.m -o /Users/dev/Build/main.o", K::CompileCommand),
    (r"CpHeader /Users/dev/Lib/Public.h /Users/dev/Build/include/Public.h (in target 'Lib' from project 'Lib')", K::CopyHeader),
    (r"CopyPlistFile /Users/dev/Build/App.app/Settings.plist /Users/dev/App/Settings.plist (in target 'App' from project 'App')", K::CopyPlist),
    (r"CopyStringsFile /Users/dev/Build/App.app/en.lproj/Localizable.strings /Users/dev/App/en.lproj/Localizable.strings (in target 'App' from project 'App')", K::CopyStrings),
    (r"CopySwiftLibs /Users/dev/Build/App.app (in target 'App' from project 'App')", K::CopySwiftLibs),
    (r"CopyPNGFile /Users/dev/Build/App.app/icon.png /Users/dev/App/icon.png (in target 'App' from project 'App')", K::CopyPngFile),
    (r"Copy /Users/dev/Build/App.app/Frameworks/Lib.framework /Users/dev/Build/Lib.framework (in target 'App' from project 'App')", K::CopyFiles),
    (r"CpResource /Users/dev/App/Resources/data.json /Users/dev/Build/App.app/data.json (in target 'App' from project 'App')", K::CpResource),
    (r"PBXCp /Users/dev/App/Lib.bundle /Users/dev/Build/App.app/Lib.bundle (in target 'App' from project 'App')", K::PbxCp),
    (r"generating coverage data...", K::GenerateCoverageData),
    (r"Generated coverage report: /Users/dev/coverage/index.html", K::GeneratedCoverageReport),
    (r"GenerateDSYMFile /Users/dev/Build/App.app.dSYM /Users/dev/Build/App.app/App (in target 'App' from project 'App')", K::GenerateDsym),
    (r"Libtool /Users/dev/Build/libLib.a normal (in target 'Lib' from project 'Lib')", K::Libtool),
    (r"Ld /Users/dev/Build/App.app/App normal (in target 'App' from project 'App')", K::Linking),
    (r"PhaseScriptExecution Run\ Script /Users/dev/Build/Script-123.sh (in target 'App' from project 'App')", K::PhaseScriptExecution),
    (r"Preprocess /Users/dev/Build/Info.plist /Users/dev/App/Info.plist (in target 'App' from project 'App')", K::Preprocess),
    (r"ProcessInfoPlistFile /Users/dev/Build/App.app/Info.plist /Users/dev/App/Info.plist (in target 'App' from project 'App')", K::ProcessInfoPlist),
    (r"ProcessPCH /Users/dev/Build/App-Prefix.pch.gch /Users/dev/App/App-Prefix.pch normal x86_64 objective-c com.apple.compilers.llvm.clang.1_0.analyzer (in target 'App' from project 'App')", K::ProcessPch),
    (r"ProcessPCH++ /Users/dev/Build/App-Prefix.pch.gch /Users/dev/App/App-Prefix.pch normal arm64 objective-c++ com.apple.compilers.llvm.clang.1_0.compiler", K::ProcessPch),
    (r"TiffUtil icon.tiff", K::TiffUtil),
    (r"Touch /Users/dev/Build/App.app (in target 'App' from project 'App')", K::Touch),
    (r"write-file /Users/dev/Build/App.hmap", K::WriteFile),
    (r"Write auxiliary files", K::WriteAuxiliaryFiles),
    (r"Fetching from https://github.com/apple/swift-log.git (cached)", K::PackageFetching),
    (r"Updating from https://github.com/apple/swift-log.git", K::PackageUpdating),
    (r"Checking out 1.5.3 of package swift-log", K::PackageCheckingOut),
    (r"Resolve Package Graph", K::PackageGraphResolvingStart),
    (r"Resolved source packages:", K::PackageGraphResolvingEnded),
    (r"  swift-log: https://github.com/apple/swift-log.git @ 1.5.3", K::PackageGraphResolvedItem),
    (r"SwiftDriverJobDiscovery normal arm64 Emitting module for App (in target 'App' from project 'App')", K::SwiftDriverJobDiscoveryEmittingModule),
    (r"SwiftDriverJobDiscovery normal arm64 Compiling ViewController.swift /Users/dev/App/ViewController.swift (in target 'App' from project 'App')", K::SwiftDriverJobDiscoveryCompiling),
    (r"SwiftDriver\ Compilation\ Requirements App normal arm64 com.apple.xcode.tools.swift.compiler (in target 'App' from project 'App')", K::SwiftDriverCompilationRequirements),
    (r"SwiftDriver\ Compilation App normal arm64 com.apple.xcode.tools.swift.compiler (in target 'App' from project 'App')", K::SwiftDriverCompilation),
    (r"SwiftDriver App normal arm64 com.apple.xcode.tools.swift.compiler (in target 'App' from project 'App')", K::SwiftDriver),
    (r"EmitSwiftModule normal arm64 (in target 'App' from project 'App')", K::EmitSwiftModule),
    (r"SwiftEmitModule normal arm64 Emitting\ module\ for\ App (in target 'App' from project 'App')", K::SwiftEmitModule),
    (r"SwiftMergeGeneratedHeaders /Users/dev/Build/App-Swift.h (in target 'App' from project 'App')", K::SwiftMergeGeneratedHeaders),
    (r"MergeSwiftModule normal arm64 (in target 'App' from project 'App')", K::MergeSwiftModule),
    (r"LinkStoryboards (in target 'App' from project 'App')", K::LinkStoryboards),
    (r"ExtractAppIntentsMetadata (in target 'App' from project 'App')", K::ExtractAppIntentsMetadata),
    (r"GenerateAssetSymbols /Users/dev/App/Assets.xcassets (in target 'App' from project 'App')", K::GenerateAssetSymbols),
    (r"DataModelCodegen /Users/dev/App/Model.xcdatamodeld (in target 'App' from project 'App')", K::DataModelCodegen),
    (r"ProcessXCFramework /Users/dev/Frameworks/Lib.xcframework /Users/dev/Build/Lib.framework ios (in target 'App' from project 'App')", K::ProcessXcFramework),
    (r"ValidateEmbeddedBinary /Users/dev/Build/App.app/PlugIns/Widget.appex (in target 'App' from project 'App')", K::ValidateEmbeddedBinary),
    (r"Validate /Users/dev/Build/App.app (in target 'App' from project 'App')", K::Validate),
    (r"RegisterExecutionPolicyException /Users/dev/Build/App.app (in target 'App' from project 'App')", K::RegisterExecutionPolicyException),
    (r"ScanDependencies /Users/dev/Build/Foo.o /Users/dev/App/Foo.m normal arm64 objective-c com.apple.compilers.llvm.clang.1_0.compiler (in target 'App' from project 'App')", K::ScanDependencies),
    (r"SymLink /Users/dev/Build/Products/Debug/App.app /Users/dev/Build/InstallationBuildProductsLocation/App.app (in target 'App' from project 'App')", K::SymLink),
    (r"CreateUniversalBinary /Users/dev/Build/App.app/App normal arm64\ x86_64 (in target 'App' from project 'App')", K::CreateUniversalBinary),
    (r"MkDir /Users/dev/Build/App.app (in target 'App' from project 'App')", K::MkDir),
    (r"ProcessProductPackagingDER /Users/dev/Build/App.app-Simulated.xcent /Users/dev/Build/App.app-Simulated.xcent.der (in target 'App' from project 'App')", K::ProcessProductPackagingDer),
    (r#"ProcessProductPackaging "" /Users/dev/Build/App.app.xcent (in target 'App' from project 'App')"#, K::ProcessProductPackaging),
    (r"    ➜ Explicit dependency on target 'Lib' in project 'App'", K::ExplicitDependency),
    (r"Target 'App' in project 'App'", K::TargetDependencies),
    (r"/* com.apple.actool.compilation-results */", K::CompilationResult),
    (r"ComputeTargetDependencyGraph", K::ComputeTargetDependencyGraph),
    (r"ComputePackagePrebuildTargetDependencyGraph", K::ComputePackagePrebuildTargetDependencyGraph),
    (r"CreateBuildDescription", K::CreateBuildDescription),
    (r"ClangStatCache /Applications/Xcode.app/usr/bin/clang-stat-cache /Applications/Xcode.app/SDKs/iPhoneSimulator17.0.sdk /Users/dev/Build/iphonesimulator17.0.sdkstatcache", K::ClangStatCache),
    (r#"Signing Identity:     "Apple Development: Jane Appleseed (ABC123)""#, K::SigningIdentity),
    (r#"Provisioning Profile: "iOS Team Provisioning Profile: *""#, K::ProvisioningProfile),
    (r"note: Using new build system", K::Note),
    (r"Test Suite 'All tests' passed at 2024-01-01 10:00:00.000.", K::TestSuiteAllTestsPassed),
    (r"Test Suite 'All tests' failed at 2024-01-01 10:00:00.000.", K::TestSuiteAllTestsFailed),
    (r"Test Suite 'AppTests.xctest' passed at 2024-01-01 10:00:00.000.", K::TestsRunCompletion),
    (r"Test Suite 'AppTests.xctest' started at 2024-01-01 10:00:00.000", K::TestSuiteStarted),
    (r"Test Suite 'AppTests' started at 2024-01-01 10:00:00.000", K::TestSuiteStart),
    (r"Test Suite 'All tests' started at 2024-01-01 10:00:00.000", K::TestSuiteStart),
    (r"Test Suite 'AppTests' finished at 2024-01-01 10:00:00.000.", K::TestSuiteFinished),
    (r"Test Case '-[AppTests.AppTests testExample]' started.", K::TestCaseStarted),
    (r"Test Case '-[AppTests.AppTests testLaterPENDING]' passed (0.001 seconds).", K::TestCasePending),
    (r"Test Case '-[AppTests.AppTests testExample]' passed (0.001 seconds).", K::TestCasePassed),
    (r"Test Case '-[AppTests.AppTests testSkipped]' skipped (0.002 seconds).", K::TestCaseSkipped),
    (r"/Users/dev/AppTests/PerfTests.swift:12: Test Case '-[AppTests.PerfTests testPerformance]' measured [Time, seconds] average: 0.123, relative standard deviation: 2.3%, values: [0.12, 0.13]", K::TestCaseMeasured),
    (r"Test case 'AppTests.testExample()' passed on 'iPhone 15 - App (12345)' (0.002 seconds)", K::ParallelTestCasePassed),
    (r"Test case '-[AppTests.AppTests testExample]' passed on 'My Mac - App (12345)' (0.002 seconds)", K::ParallelTestCaseAppKitPassed),
    (r"Test case 'AppTests.testBroken()' failed on 'iPhone 15 - App (12345)' (0.010 seconds)", K::ParallelTestCaseFailed),
    (r"Test case 'AppTests.testLater()' skipped on 'iPhone 15 - App (12345)' (0.000 seconds)", K::ParallelTestCaseSkipped),
    (r"Testing started on 'iPhone 15'", K::ParallelTestingStarted),
    (r"Testing passed on 'iPhone 15'", K::ParallelTestingPassed),
    (r"Testing failed on 'iPhone 15'", K::ParallelTestingFailed),
    (r"Test suite 'AppTests (iOS).xctest' started on 'iPhone 15'", K::ParallelTestSuiteStarted),
    (r"Testing started", K::TestingStarted),
    (r"Restarting after unexpected exit, crash, or test timeout in AppTests.testCrash(); summary will include totals from previous launches.", K::RestartingTest),
    (r"Executed 10 tests, with 2 tests skipped and 1 failure (0 unexpected) in 1.234 (1.300) seconds", K::ExecutedWithSkipped),
    (r"Executed 5 tests, with 0 failures (0 unexpected) in 0.012 (0.014) seconds", K::Executed),
    (r#"/Users/dev/AppTests/AppTests.swift:42: error: -[AppTests.AppTests testFailure] : XCTAssertEqual failed: ("1") is not equal to ("2")"#, K::FailingTest),
    (r"    t =     0.51s Assertion Failure: AppUITests.swift:25: XCTAssertTrue failed", K::UiFailingTest),
    ("\u{25C7} Test run started.", K::SwiftTestingRunStarted),
    ("\u{1007C8} Test run started.", K::SwiftTestingRunStarted),
    ("\u{25C7} Test addition() started.", K::SwiftTestingTestStarted),
    ("\u{25C7} Suite MathTests started.", K::SwiftTestingSuiteStarted),
    ("\u{2714} Test run with 3 tests passed after 0.005 seconds.", K::SwiftTestingRunCompleted),
    ("\u{10105B} Test addition() passed after 0.001 seconds.", K::SwiftTestingTestPassed),
    ("\u{2714} Suite MathTests passed after 0.004 seconds.", K::SwiftTestingSuitePassed),
    ("\u{2718} Test run with 3 tests failed after 0.006 seconds with 1 issue.", K::SwiftTestingRunFailed),
    ("\u{2718} Test subtraction() failed after 0.002 seconds with 1 issue.", K::SwiftTestingTestFailed),
    ("\u{100884} Suite MathTests failed after 0.004 seconds with 2 issues.", K::SwiftTestingSuiteFailed),
    ("\u{279C} Test later() skipped: \"not ready\"", K::SwiftTestingTestSkipped),
    ("\u{2718} Test parse(input:) recorded an issue with 1 argument input \u{2192} \"x\" at ParserTests.swift:14:5: Expectation failed", K::SwiftTestingIssueArgument),
    ("\u{2718} Test subtraction() recorded an issue at MathTests.swift:8:5: Expectation failed: (diff \u{2192} 3) == 4", K::SwiftTestingIssue),
    (r"/Users/dev/App.xcodeproj: warning: The iOS deployment target is set to 9.0", K::XcodeprojWarning),
    (r"/Users/dev/App.xcodeproj: error: No account for team 'ABC123'", K::XcodeprojError),
    (r"duplicate symbol _foo in:", K::LinkerDuplicateSymbols),
    (r"ld: warning: directory not found for option '-L/usr/lib/missing'", K::LdWarning),
    (r"ld: symbol(s) not found for architecture arm64", K::LdError),
    (r"clang: error: linker command failed with exit code 1 (use -v to see invocation)", K::ClangError),
    (r"xcodebuild: error: Unable to find a destination matching the provided destination specifier", K::XcodebuildError),
    (r"<unknown>:0: error: no such file or directory: '/Users/dev/App/Missing.swift'", K::FileMissingError),
    (r"<module-includes>:1:9: error: umbrella header for module 'Lib' does not include header 'Extra.h'", K::ModuleIncludesError),
    (r"fatal error: 'Foundation/Foundation.h' file not found", K::FatalError),
    (r"Code Sign error: No code signing identities found", K::CheckDependenciesErrors),
    (r"No certificate matching 'Apple Distribution' for team 'ABC123'", K::NoCertificate),
    (r"Undefined symbols for architecture arm64:", K::LinkerUndefinedSymbols),
    (r#"  "_OBJC_CLASS_$_Foo", referenced from:"#, K::SymbolReferencedFrom),
    (r"    /Users/dev/Build/Foo.o", K::LinkerDuplicateSymbolsLocation),
    (r"/Users/dev/App/ViewController.swift:12:9: warning: variable 'x' was never used", K::CompileWarning),
    (r"/Users/dev/App/ViewController.swift:20:5: error: cannot find 'foo' in scope", K::CompileError),
    (r"/Users/dev/App/Bridge.h:1:9: fatal error: 'Missing.h' file not found", K::CompileError),
    (r"App has entitlements that require signing with a development certificate. Enable development signing in the Signing & Capabilities editor. App requires a provisioning profile.", K::ProvisioningProfileRequired),
    (r"Lib.framework will not be code signed because its settings don't specify a development team.", K::WillNotBeCodeSigned),
    (r#"2024-01-01 10:00:00.000 ibtoold[123:456] --- WARNING: Key "title" used with multiple values. Value "Title" kept. Value "Other" ignored."#, K::DuplicateLocalizedStringKey),
    (r"_main: in App(main.o)", K::UndefinedSymbolLocation),
    (r"      _foo in Foo.o", K::LinkerUndefinedSymbolLocation),
    (r"warning: no rule to process file 'README.md'", K::GenericWarning),
    (r"error: Unable to load contents of file list: '/Pods/Target Support Files/Pods-App/Pods-App-frameworks.xcfilelist'", K::PodsError),
    (r"** BUILD SUCCEEDED **", K::PhaseSuccess),
    (r"** TEST SUCCEEDED ** [12.345 sec]", K::PhaseSuccess),
    (r"** BUILD FAILED **", K::PhaseFailure),
    (r"The following build commands failed:", K::BuildCommandsFailed),
    (r"Testing failed:", K::TestingFailed),
    (r"    ^~~~~", K::Cursor),
    (r"    cd /Users/dev/App", K::ShellCommand),
    (r"    export LANG=en_US.US-ASCII", K::ShellCommand),
    (r"    /usr/bin/ditto -rsrc /Users/dev/A /Users/dev/B", K::ShellCommand),
];

/// Lines whose shape differs on Linux
pub const LINUX: &[(&str, K)] = &[
    (r"[3/12] Compiling MyLib Foo.swift", K::Compile),
    (r"[12/12] Linking ./.build/debug/MyTool", K::Linking),
    (r"Test Case 'AppTests.testExample' started at 2024-01-01 10:00:00.000", K::TestCaseStarted),
    (r"Test Case 'AppTests.testExample' passed (0.001 seconds)", K::TestCasePassed),
    (r"Test Case 'AppTests.testLater' skipped (0.000 seconds)", K::TestCaseSkipped),
    (r"Test case 'AppTests.testExample' passed on 'linux-runner' (0.002 seconds)", K::ParallelTestCasePassed),
    (r#"/home/dev/Tests/AppTests/AppTests.swift:42: error: AppTests.testFailure : XCTAssertEqual failed: ("1") is not equal to ("2") - "#, K::FailingTest),
    (r"=== BUILD TARGET App OF PROJECT App WITH CONFIGURATION Debug ===", K::BuildTarget),
    (r"** BUILD SUCCEEDED **", K::PhaseSuccess),
];

/// Lines that resemble a rule but must not be classified as it
pub const NEAR_MISSES: &[(&str, K)] = &[
    (r"=== BUILD TARGETS App OF PROJECT App WITH CONFIGURATION Debug ===", K::BuildTarget),
    (r"Check dependency", K::CheckDependencies),
    (r"CodeSign build/Release/MyFramework.framework/Versions/B", K::CodesignFramework),
    (r"Executed 5 tests, with 0 failures (0 unexpected) in 0.012 seconds", K::Executed),
    (r"Test Case '-[AppTests.AppTests testExample]' passed (slow).", K::TestCasePassed),
    (r"Test Suite 'All tests' passed on 2024-01-01", K::TestSuiteAllTestsPassed),
    (r"** BUILD SUCCEEDED", K::PhaseSuccess),
    (r"Touch", K::Touch),
    (r"ld warning: missing colon", K::LdWarning),
    (r"xcodebuild error: missing colon", K::XcodebuildError),
    (r"   cd /three/spaces/only", K::ShellCommand),
    (r"Testing passed in 'iPhone 15'", K::ParallelTestingPassed),
    (r"Resolved source packages", K::PackageGraphResolvingEnded),
    ("\u{2714} Test run with many tests passed after 0.005 seconds.", K::SwiftTestingRunCompleted),
    (r"Linking ./.build/debug/MyTool", K::Linking),
    (r"warning - not a diagnostic", K::GenericWarning),
    // Diagnostics that the generic compile rules would also accept
    (r"/Users/dev/App.xcodeproj: warning: The iOS deployment target is set to 9.0", K::CompileWarning),
    (r"/Users/dev/App.xcodeproj: error: No account for team 'ABC123'", K::CompileError),
    (r"clang: error: linker command failed with exit code 1", K::CompileError),
    (r"<unknown>:0: error: no such file or directory: '/Users/dev/App/Missing.swift'", K::CompileError),
    (r"/Users/dev/App.xcodeproj/project.pbxproj: warning: unknown build setting", K::XcodeprojWarning),
    (r"/Users/dev/App.xcodeproj/project.pbxproj: error: damaged project", K::XcodeprojError),
    (r"clang: warning: argument unused during compilation: '-fno-objc-arc'", K::ClangError),
    (r"clang++: error: no input files", K::ClangError),
    (r"<unknown>:0: error: no such file or directory: 'Missing.swift'", K::FileMissingError),
    (r"<unknown>:1: error: no such file or directory: '/Users/dev/App/Missing.swift'", K::FileMissingError),
    // Swift Testing glyph lines with a damaged tail
    ("\u{25c7} Test run started", K::SwiftTestingRunStarted),
    ("\u{25c7} Suite AppTests starting.", K::SwiftTestingSuiteStarted),
    ("\u{2714} Test testExample() passed after 0.001 seconds", K::SwiftTestingTestPassed),
    ("\u{2718} Test testFailure() failed after 0.002 seconds.", K::SwiftTestingTestFailed),
    ("\u{279c} Test testLater() skipping", K::SwiftTestingTestSkipped),
    // Test totals and parallel cases
    (r"Executed 10 tests, with 2 tests skipped and 1 failure (0 unexpected) in 1.234 seconds", K::ExecutedWithSkipped),
    (r"Executed 10 tests, with 2 tests skipped, 1 failure (0 unexpected) in 1.234 (1.300) seconds", K::ExecutedWithSkipped),
    (r"Test case 'AppTests.testB()' failed on 'iPhone 15' (slow)", K::ParallelTestCaseFailed),
    (r"Test case 'AppTests.testB' failed on 'iPhone 15' (0.010 seconds)", K::ParallelTestCaseFailed),
    (r"Test case 'AppTests.testC()' skipped on 'iPhone 15'", K::ParallelTestCaseSkipped),
    (r"Test case 'AppTests.testC()' skipped (0.000 seconds)", K::ParallelTestCaseSkipped),
];

/// Lines two rules accept, paired with the more specific rule that must win
pub const OVERLAPS: &[(&str, K)] = &[
    (r"/Users/dev/App.xcodeproj: warning: The iOS deployment target is set to 9.0", K::XcodeprojWarning),
    (r"/Users/dev/App.xcodeproj: error: No account for team 'ABC123'", K::XcodeprojError),
    (r"clang: error: linker command failed with exit code 1", K::ClangError),
    (r"<unknown>:0: error: no such file or directory: '/Users/dev/App/Missing.swift'", K::FileMissingError),
    (r"/Users/dev/App.xcodeproj/project.pbxproj: warning: unknown build setting", K::CompileWarning),
    (r"Executed 10 tests, with 2 tests skipped and 1 failure (0 unexpected) in 1.234 (1.300) seconds", K::ExecutedWithSkipped),
];
