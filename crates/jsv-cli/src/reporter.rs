//! Presenting outcomes and mapping them to exit codes.

use std::io::{self, Write};

use jsv_core::json::pretty_print;
use jsv_core::ProcessingReport;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum RetCode {
    /// Everything validated.
    AllOk = 0,
    /// Bad command line or unreadable input.
    CmdError = 2,
    /// Processing failed unexpectedly.
    ExecutionError = 5,
    /// A schema has syntax errors.
    SchemaSyntaxError = 100,
    /// An instance failed validation.
    ValidationFailure = 101,
}

impl RetCode {
    /// Numeric exit code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// How outcomes are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportStyle {
    /// Banner, verdict, and the full report on failure.
    #[default]
    Default,
    /// One line per file.
    Brief,
    /// Nothing; only the exit code.
    Quiet,
}

/// The result of processing one file.
#[derive(Debug)]
pub enum Outcome<'a> {
    /// A schema was syntax-checked.
    SchemaChecked {
        /// Display name of the schema file.
        file: &'a str,
        /// Syntax report.
        report: &'a ProcessingReport,
    },
    /// An instance was validated.
    InstanceChecked {
        /// Display name of the instance file.
        file: &'a str,
        /// Validation report.
        report: &'a ProcessingReport,
    },
}

impl Outcome<'_> {
    fn parts(&self) -> (&str, &ProcessingReport, RetCode) {
        match *self {
            Self::SchemaChecked { file, report } => (file, report, RetCode::SchemaSyntaxError),
            Self::InstanceChecked { file, report } => (file, report, RetCode::ValidationFailure),
        }
    }

    /// Exit code this outcome warrants.
    pub fn ret_code(&self) -> RetCode {
        let (_, report, failure) = self.parts();
        if report.is_success() {
            RetCode::AllOk
        } else {
            failure
        }
    }
}

/// Print `outcome` in `style` and return its exit code.
pub fn report(style: ReportStyle, outcome: &Outcome<'_>, out: &mut dyn Write) -> io::Result<RetCode> {
    let (file, report, _) = outcome.parts();
    let verdict = if report.is_success() { "SUCCESS" } else { "FAILURE" };
    match style {
        ReportStyle::Default => {
            writeln!(out, "--- BEGIN {file}---")?;
            writeln!(out, "validation: {verdict}")?;
            if !report.is_success() {
                writeln!(out, "{}", pretty_print(&report.to_json()))?;
            }
            writeln!(out, "--- END {file}---")?;
        }
        ReportStyle::Brief => writeln!(out, "{file}: {verdict}")?,
        ReportStyle::Quiet => {}
    }
    Ok(outcome.ret_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsv_core::{LogLevel, ProcessingMessage};

    fn failing() -> ProcessingReport {
        let mut report = ProcessingReport::new();
        report.error(
            ProcessingMessage::new(LogLevel::Error)
                .with_message("bad")
                .with_field("keyword", "type"),
        );
        report
    }

    fn render(style: ReportStyle, outcome: &Outcome<'_>) -> (String, RetCode) {
        let mut out = Vec::new();
        let code = report(style, outcome, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), code)
    }

    #[test]
    fn test_default_success() {
        let ok = ProcessingReport::new();
        let (text, code) = render(
            ReportStyle::Default,
            &Outcome::SchemaChecked {
                file: "s.json",
                report: &ok,
            },
        );
        assert_eq!(text, "--- BEGIN s.json---\nvalidation: SUCCESS\n--- END s.json---\n");
        assert_eq!(code, RetCode::AllOk);
    }

    #[test]
    fn test_default_failure_includes_report() {
        let bad = failing();
        let (text, code) = render(
            ReportStyle::Default,
            &Outcome::InstanceChecked {
                file: "i.json",
                report: &bad,
            },
        );
        assert!(text.starts_with("--- BEGIN i.json---\nvalidation: FAILURE\n["));
        assert!(text.contains("\"keyword\": \"type\""));
        assert!(text.ends_with("--- END i.json---\n"));
        assert_eq!(code, RetCode::ValidationFailure);
    }

    #[test]
    fn test_schema_failure_code() {
        let bad = failing();
        let outcome = Outcome::SchemaChecked {
            file: "s.json",
            report: &bad,
        };
        assert_eq!(outcome.ret_code(), RetCode::SchemaSyntaxError);
        assert_eq!(outcome.ret_code().code(), 100);
    }

    #[test]
    fn test_brief_and_quiet() {
        let bad = failing();
        let outcome = Outcome::InstanceChecked {
            file: "i.yaml",
            report: &bad,
        };
        assert_eq!(render(ReportStyle::Brief, &outcome).0, "i.yaml: FAILURE\n");
        let (text, code) = render(ReportStyle::Quiet, &outcome);
        assert!(text.is_empty());
        assert_eq!(code, RetCode::ValidationFailure);
    }
}
