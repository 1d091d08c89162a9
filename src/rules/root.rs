//! Root folder validation rules.
//!
//! The first two pipeline stages: the root path must exist and be a
//! directory, and the default locale should have a subfolder under it.

use std::path::Path;

use crate::issues::{Issue, MissingDefaultLocaleIssue, RootMissingIssue, RootNotAFolderIssue};

/// Check that the i18n root exists and is a directory.
///
/// Returns at most one issue: a missing path is reported as such and the
/// not-a-folder case is only tested on paths that do exist. Either issue
/// is fatal to the run.
pub fn check_root_path(path: &Path) -> Vec<Issue> {
    if !path.exists() {
        return vec![
            RootMissingIssue {
                path: path.display().to_string(),
            }
            .into(),
        ];
    }
    if !path.is_dir() {
        return vec![
            RootNotAFolderIssue {
                path: path.display().to_string(),
            }
            .into(),
        ];
    }
    Vec::new()
}

/// Warn when the default locale has no folder under the root.
///
/// Non-fatal: loading tolerates the absence by giving the default locale
/// an empty tree, so the comparison checks still run.
pub fn check_default_locale_presence(root: &Path, default_locale: &str) -> Vec<Issue> {
    if !root.join(default_locale).is_dir() {
        return vec![
            MissingDefaultLocaleIssue {
                default_locale: default_locale.to_string(),
            }
            .into(),
        ];
    }
    Vec::new()
}
