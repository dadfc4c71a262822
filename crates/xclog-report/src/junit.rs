// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JUnit XML serialization

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::error::ReportError;
use crate::report::{Case, Outcome, Report, Suite};

const TESTSUITES_TAG: &str = "testsuites";
const TESTSUITE_TAG: &str = "testsuite";
const TESTCASE_TAG: &str = "testcase";
const FAILURE_TAG: &str = "failure";
const SKIPPED_TAG: &str = "skipped";

/// Write `report` as JUnit XML
///
/// # Errors
///
/// Returns `ReportError::Xml` if writing to `writer` fails.
pub fn write_junit(report: &Report, writer: impl io::Write) -> Result<(), ReportError> {
    let mut writer = Writer::new_with_indent(writer, b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut tag = BytesStart::new(TESTSUITES_TAG);
    if let Some(name) = &report.name {
        tag.push_attribute(("name", name.as_str()));
    }
    tag.push_attribute(("tests", report.tests().to_string().as_str()));
    tag.push_attribute(("failures", report.failures().to_string().as_str()));
    writer.write_event(Event::Start(tag))?;

    for suite in &report.suites {
        write_suite(suite, &mut writer)?;
    }

    writer.write_event(Event::End(BytesEnd::new(TESTSUITES_TAG)))?;
    writer.write_indent()?;
    Ok(())
}

/// Serialize `report` to a JUnit XML string
///
/// # Errors
///
/// Returns `ReportError` if serialization fails.
pub fn to_junit_string(report: &Report) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    write_junit(report, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_suite(suite: &Suite, writer: &mut Writer<impl io::Write>) -> Result<(), ReportError> {
    let mut tag = BytesStart::new(TESTSUITE_TAG);
    tag.push_attribute(("name", suite.name.as_str()));
    tag.push_attribute(("tests", suite.tests().to_string().as_str()));
    tag.push_attribute(("failures", suite.failures().to_string().as_str()));
    writer.write_event(Event::Start(tag))?;

    for case in &suite.cases {
        write_case(case, writer)?;
    }

    writer.write_event(Event::End(BytesEnd::new(TESTSUITE_TAG)))?;
    Ok(())
}

fn write_case(case: &Case, writer: &mut Writer<impl io::Write>) -> Result<(), ReportError> {
    let mut tag = BytesStart::new(TESTCASE_TAG);
    tag.push_attribute(("classname", case.classname.as_str()));
    tag.push_attribute(("name", case.name.as_str()));
    if let Some(time) = &case.time {
        tag.push_attribute(("time", time.as_str()));
    }

    let child = match &case.outcome {
        Outcome::Passed => None,
        Outcome::Failed(message) => {
            let mut failure = BytesStart::new(FAILURE_TAG);
            failure.push_attribute(("message", message.as_str()));
            Some(failure)
        }
        Outcome::Skipped(reason) => {
            let mut skipped = BytesStart::new(SKIPPED_TAG);
            if let Some(reason) = reason {
                skipped.push_attribute(("message", reason.as_str()));
            }
            Some(skipped)
        }
    };

    match child {
        Some(child) => {
            writer.write_event(Event::Start(tag))?;
            writer.write_event(Event::Empty(child))?;
            writer.write_event(Event::End(BytesEnd::new(TESTCASE_TAG)))?;
        }
        None => writer.write_event(Event::Empty(tag))?,
    }
    Ok(())
}
