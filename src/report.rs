//! Report formatting and printing utilities.
//!
//! This module renders a finished check run in the fixed plain-text layout:
//! a banner, the warning list, the error list, and a closing line per list
//! (or the all-clear line when both are empty). Separate from core logic to
//! allow lingot to be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::issues::{Issue, Report, Severity};

/// Indent prefix for individual diagnostic lines.
const ISSUE_INDENT: &str = "     - ";

const WARNINGS_CLOSER: &str =
    "Warnings are not fatal but should be fixed to avoid missing / broken translations in the app.";

const ERRORS_CLOSER: &str = "Please fix them and run the check again.";

const ALL_CLEAR: &str = "No errors or warnings detected, your i18n folder is good to go!";

/// Print the opening banner for a run to stdout.
pub fn print_banner(path: &Path) {
    print_banner_to(path, &mut io::stdout().lock());
}

/// Print the opening banner to a custom writer.
pub fn print_banner_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(writer, "Checking i18n folder {}...\n", path.display());
}

/// Print the collected issues to stdout.
///
/// Warnings are listed before errors; within each list the collected order
/// is preserved exactly, never sorted.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    let warnings: Vec<&Issue> = issues
        .iter()
        .filter(|issue| issue.severity() == Severity::Warning)
        .collect();
    let errors: Vec<&Issue> = issues
        .iter()
        .filter(|issue| issue.severity() == Severity::Error)
        .collect();

    if !warnings.is_empty() {
        let _ = writeln!(
            writer,
            "{}",
            format!("{} warning(s):", warnings.len()).bold().yellow()
        );
        for issue in &warnings {
            print_issue(issue, writer);
        }
        let _ = writeln!(writer, "\n{}", WARNINGS_CLOSER);
    }

    if !errors.is_empty() {
        let _ = writeln!(
            writer,
            "{}",
            format!("{} error(s):", errors.len()).bold().red()
        );
        for issue in &errors {
            print_issue(issue, writer);
        }
        let _ = writeln!(writer, "\n{}", ERRORS_CLOSER);
    }

    if warnings.is_empty() && errors.is_empty() {
        let _ = writeln!(writer, "{}", ALL_CLEAR.green());
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let tag = match issue.severity() {
        Severity::Error => issue.code_tag().red(),
        Severity::Warning => issue.code_tag().yellow(),
    };
    let _ = writeln!(writer, "{}{}: {}", ISSUE_INDENT, tag, issue.message());
}

// ============================================================
// Tests
// ============================================================
