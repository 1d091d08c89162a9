//! Locale folder loading.
//!
//! Walks the immediate children of the i18n root, records stray entries,
//! and parses every `*.json` file of each supported locale folder into the
//! locale tree. Loading is fail-fast on the first JSON parse error: a
//! corrupt file makes the cross-locale checks meaningless, so nothing after
//! it is read.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::config::Config;
use crate::core::tree::{LocaleTree, Node};
use crate::issues::{
    Issue, ParseErrorIssue, StrayLocaleFileIssue, StrayLocaleFolderIssue, StrayRootFileIssue,
    UnknownLocaleIssue,
};

/// Suffix a locale file must carry to be loaded.
const LOCALE_FILE_SUFFIX: &str = ".json";

/// Result of loading the i18n root.
///
/// The tree holds every supported locale that contributed at least one JSON
/// file, plus an always-present entry for the default locale. The issues
/// are the stray-entry warnings in discovery order, ending with the parse
/// error when loading aborted.
#[derive(Debug)]
pub struct LoadOutcome {
    pub tree: LocaleTree,
    pub issues: Vec<Issue>,
}

/// Load every supported locale folder under `root`.
///
/// Children are visited in name order so output is stable across platforms.
/// A locale's tree entry is created before its first file is parsed, which
/// means a locale whose only file fails to parse still appears (empty) in
/// the returned tree, while a recognized folder with no JSON files at all
/// never enters it.
pub fn load_locales(root: &Path, config: &Config) -> Result<LoadOutcome> {
    let mut tree = LocaleTree::new();
    let mut issues: Vec<Issue> = Vec::new();

    for entry in sorted_entries(root)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        if !path.is_dir() {
            issues.push(StrayRootFileIssue { file: name }.into());
            continue;
        }
        if !config.is_supported_locale(&name) {
            issues.push(UnknownLocaleIssue { folder: name }.into());
            continue;
        }

        let locale = name;
        for child in sorted_entries(&path)? {
            let file_name = child.file_name().to_string_lossy().into_owned();
            let child_path = child.path();

            if child_path.is_dir() {
                issues.push(
                    StrayLocaleFolderIssue {
                        locale: locale.clone(),
                        folder: file_name,
                    }
                    .into(),
                );
                continue;
            }
            let Some(stem) = file_name.strip_suffix(LOCALE_FILE_SUFFIX) else {
                issues.push(
                    StrayLocaleFileIssue {
                        locale: locale.clone(),
                        file: file_name,
                    }
                    .into(),
                );
                continue;
            };

            // The entry exists even if the parse below fails.
            tree.ensure_locale(&locale);

            let content = fs::read_to_string(&child_path)
                .with_context(|| format!("Failed to read JSON file: {:?}", child_path))?;
            match serde_json::from_str::<Value>(&content) {
                Ok(value) => tree.insert_domain(&locale, stem, Node::from(value)),
                Err(err) => {
                    issues.push(
                        ParseErrorIssue {
                            locale: locale.clone(),
                            file: file_name.clone(),
                            error: err.to_string(),
                        }
                        .into(),
                    );
                    tree.ensure_locale(&config.default_locale);
                    return Ok(LoadOutcome { tree, issues });
                }
            }
        }
    }

    // Downstream checks assume the default locale resolves unconditionally.
    tree.ensure_locale(&config.default_locale);

    Ok(LoadOutcome { tree, issues })
}

/// Directory entries sorted by file name.
fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read folder: {:?}", dir))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read folder: {:?}", dir))?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}
