//! Lingot - locale folder checker
//!
//! Lingot is a CLI tool and library for checking the integrity of an i18n
//! folder of per-locale JSON translation files. It detects malformed files,
//! illegal key names, untranslated strings and translations of strings that
//! no longer exist in the default locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments and entry point)
//! - `config`: Configuration file loading and parsing
//! - `core`: Locale tree model and folder loading
//! - `issues`: Issue type definitions and messages
//! - `report`: Console rendering of a check's results
//! - `rules`: The individual checks and the pipeline driver

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod report;
pub mod rules;
