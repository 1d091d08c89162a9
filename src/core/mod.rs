//! Core data model and loading for locale folders.
//!
//! ## Module Structure
//!
//! - `tree`: the in-memory locale tree (Node, LocaleTree) and key-path
//!   resolution
//! - `loader`: filesystem walk that builds the tree and records stray
//!   entries

pub mod loader;
pub mod tree;

pub use loader::{LoadOutcome, load_locales};
pub use tree::{
    KEY_PATH_SEPARATOR, LocaleTree, Node, join_path, json_type_name, resolve,
};
