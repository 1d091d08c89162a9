//! Issue types for i18n folder validation results.
//!
//! This module defines all issue types the checks can detect. Each issue is
//! self-contained with all information needed to describe the offending item,
//! carries a fixed two-digit code, and classifies itself as an error or a
//! warning. Errors stop the pipeline after the check that raised them;
//! warnings accumulate across the whole run.

use enum_dispatch::enum_dispatch;
use serde_json::Value;

use crate::core::json_type_name;

// ============================================================
// Severity
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Single-letter prefix used in report code tags.
    pub fn code_prefix(self) -> char {
        match self {
            Severity::Error => 'E',
            Severity::Warning => 'W',
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

// ============================================================
// Issue Types - Errors
// ============================================================

/// The i18n root path does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMissingIssue {
    pub path: String,
}

impl RootMissingIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn code() -> u8 {
        1
    }
}

/// The i18n root path exists but is not a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootNotAFolderIssue {
    pub path: String,
}

impl RootNotAFolderIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn code() -> u8 {
        2
    }
}

/// A locale file could not be parsed as JSON.
///
/// Loading stops at the first parse failure, so no file after it in
/// iteration order enters the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub locale: String,
    pub file: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn code() -> u8 {
        3
    }
}

/// A key segment contains one of the reserved characters.
///
/// One issue per reserved character found in the key, so a key that is
/// wrong twice over produces two of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalKeyCharIssue {
    /// Slash-joined path of the offending key, domain first.
    pub key_path: String,
    pub locale: String,
    pub character: char,
}

impl IllegalKeyCharIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn code() -> u8 {
        4
    }
}

/// A leaf holds something other than a string.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidValueTypeIssue {
    pub key_path: String,
    pub locale: String,
    /// The raw JSON value found at the leaf.
    pub value: Value,
}

impl InvalidValueTypeIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn code() -> u8 {
        5
    }
}

// ============================================================
// Issue Types - Warnings
// ============================================================

/// The configured default locale has no folder under the i18n root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDefaultLocaleIssue {
    pub default_locale: String,
}

impl MissingDefaultLocaleIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn code() -> u8 {
        1
    }
}

/// A plain file sits directly in the i18n root, where only locale folders
/// belong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrayRootFileIssue {
    pub file: String,
}

impl StrayRootFileIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn code() -> u8 {
        2
    }
}

/// A folder in the i18n root is not named after a supported locale.
/// Its contents are skipped entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocaleIssue {
    pub folder: String,
}

impl UnknownLocaleIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn code() -> u8 {
        3
    }
}

/// A locale folder contains a nested folder. Locale folders hold JSON files
/// only; nothing is loaded from the nested one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrayLocaleFolderIssue {
    pub locale: String,
    pub folder: String,
}

impl StrayLocaleFolderIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn code() -> u8 {
        4
    }
}

/// A locale folder contains a file without the .json extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrayLocaleFileIssue {
    pub locale: String,
    pub file: String,
}

impl StrayLocaleFileIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn code() -> u8 {
        5
    }
}

/// A string exists in the default locale but does not resolve in another
/// loaded locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    /// The locale the translation is missing from.
    pub locale: String,
    pub key_path: String,
    pub default_locale: String,
}

impl MissingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn code() -> u8 {
        6
    }
}

/// A string exists in a non-default locale but does not resolve in the
/// default locale, meaning it translates a key that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanTranslationIssue {
    pub key_path: String,
    /// The locale carrying the orphaned string.
    pub locale: String,
    pub default_locale: String,
}

impl OrphanTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn code() -> u8 {
        7
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found while validating the i18n folder.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    RootMissing(RootMissingIssue),
    RootNotAFolder(RootNotAFolderIssue),
    ParseError(ParseErrorIssue),
    IllegalKeyChar(IllegalKeyCharIssue),
    InvalidValueType(InvalidValueTypeIssue),
    MissingDefaultLocale(MissingDefaultLocaleIssue),
    StrayRootFile(StrayRootFileIssue),
    UnknownLocale(UnknownLocaleIssue),
    StrayLocaleFolder(StrayLocaleFolderIssue),
    StrayLocaleFile(StrayLocaleFileIssue),
    MissingTranslation(MissingTranslationIssue),
    OrphanTranslation(OrphanTranslationIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::RootMissing(_) => RootMissingIssue::severity(),
            Issue::RootNotAFolder(_) => RootNotAFolderIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
            Issue::IllegalKeyChar(_) => IllegalKeyCharIssue::severity(),
            Issue::InvalidValueType(_) => InvalidValueTypeIssue::severity(),
            Issue::MissingDefaultLocale(_) => MissingDefaultLocaleIssue::severity(),
            Issue::StrayRootFile(_) => StrayRootFileIssue::severity(),
            Issue::UnknownLocale(_) => UnknownLocaleIssue::severity(),
            Issue::StrayLocaleFolder(_) => StrayLocaleFolderIssue::severity(),
            Issue::StrayLocaleFile(_) => StrayLocaleFileIssue::severity(),
            Issue::MissingTranslation(_) => MissingTranslationIssue::severity(),
            Issue::OrphanTranslation(_) => OrphanTranslationIssue::severity(),
        }
    }

    /// The code tag printed in the report, e.g. `E01` or `W06`.
    pub fn code_tag(&self) -> String {
        format!("{}{:02}", self.severity().code_prefix(), self.code())
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be written into the run report.
///
/// This trait is implemented by all issue types to provide a consistent
/// interface for the report functions. Uses `enum_dispatch` for zero-cost
/// dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Two-digit code, unique within its severity class.
    fn code(&self) -> u8;

    /// Human-readable description naming the offending item.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for RootMissingIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!(
            "Cannot continue with the checks: folder \"{}\" doesn't exist",
            self.path
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

impl Report for RootNotAFolderIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!(
            "Cannot continue with the checks: file \"{}\" is not a folder",
            self.path
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

impl Report for ParseErrorIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!(
            "Cannot parse JSON file \"{}/{}\": {}",
            self.locale, self.file, self.error
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

impl Report for IllegalKeyCharIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!(
            "String \"{}\" of {} locale contains illegal character \"{}\" in its name",
            self.key_path, self.locale, self.character
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

impl Report for InvalidValueTypeIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!(
            "String \"{}\" of {} locale contains data \"{}\" of invalid type \"{}\"",
            self.key_path,
            self.locale,
            self.value,
            json_type_name(&self.value)
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

impl Report for MissingDefaultLocaleIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!(
            "Default locale {} is missing from the i18n folder",
            self.default_locale
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

impl Report for StrayRootFileIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!("i18n folder contains stray file \"{}\"", self.file)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

impl Report for UnknownLocaleIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!("Unknown locale for folder \"{}\"", self.folder)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

impl Report for StrayLocaleFolderIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!(
            "{} folder contains stray folder \"{}\"",
            self.locale, self.folder
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

impl Report for StrayLocaleFileIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!(
            "{} folder contains stray file \"{}\"",
            self.locale, self.file
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

impl Report for MissingTranslationIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!(
            "Locale {} is missing string \"{}\" (untranslated from {})",
            self.locale, self.key_path, self.default_locale
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

impl Report for OrphanTranslationIssue {
    fn code(&self) -> u8 {
        Self::code()
    }

    fn message(&self) -> String {
        format!(
            "String \"{}\" is translated in locale {} but is missing from default locale {} (translation of unknown string)",
            self.key_path, self.locale, self.default_locale
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }
}

// ============================================================
// Tests
// ============================================================
