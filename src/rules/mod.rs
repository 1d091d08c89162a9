//! Validation rules for lingot.
//!
//! This module contains pure functions that implement the individual
//! checks. Each function takes only the specific inputs it needs and
//! returns its complete, immutable list of issues; `run_checks` wires
//! them into the fixed pipeline and owns the decision to stop.
//!
//! ## Module Structure
//!
//! - `root`: root folder existence and default locale presence
//! - `types`: reserved characters in keys, non-string leaves
//! - `missing`: strings untranslated in some locale
//! - `orphan`: strings with no counterpart in the default locale

pub mod missing;
pub mod orphan;
pub mod root;
pub mod types;

pub use missing::check_missing_translations;
pub use orphan::check_orphan_translations;
pub use root::{check_default_locale_presence, check_root_path};
pub use types::check_types;

use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::core::{LoadOutcome, load_locales};
use crate::issues::{Issue, Severity};

/// Run the fixed-order check pipeline against `root`.
///
/// Order: root path, default locale presence, loading, key/type
/// validation, missing translations, orphan translations. Warnings
/// accumulate across checks; the pipeline stops after the first check
/// whose result contains an error, returning everything collected up to
/// that point.
pub fn run_checks(root: &Path, config: &Config) -> Result<Vec<Issue>> {
    let mut report = Vec::new();

    if record(&mut report, check_root_path(root)) {
        return Ok(report);
    }
    if record(
        &mut report,
        check_default_locale_presence(root, &config.default_locale),
    ) {
        return Ok(report);
    }

    let LoadOutcome { tree, issues } = load_locales(root, config)?;
    if record(&mut report, issues) {
        return Ok(report);
    }

    if record(&mut report, check_types(&tree)) {
        return Ok(report);
    }
    if record(
        &mut report,
        check_missing_translations(&config.default_locale, &tree),
    ) {
        return Ok(report);
    }
    record(
        &mut report,
        check_orphan_translations(&config.default_locale, &tree),
    );

    Ok(report)
}

/// Append a check's result to the report. True when the result contained
/// an error, which stops the pipeline.
fn record(report: &mut Vec<Issue>, issues: Vec<Issue>) -> bool {
    let has_error = issues
        .iter()
        .any(|issue| issue.severity() == Severity::Error);
    report.extend(issues);
    has_error
}
