//! Key-name and leaf-type validation rule.
//!
//! Walks every loaded locale and enforces the data contract: key segments
//! stay clear of the reserved characters and every terminal value is a
//! string.

use crate::core::{LocaleTree, Node, join_path};
use crate::issues::{IllegalKeyCharIssue, InvalidValueTypeIssue, Issue};

/// Characters that must not appear in key segments.
///
/// Mostly JSON pointer reserved characters; kept in this order so repeated
/// offenders report consistently.
pub const RESERVED_KEY_CHARS: [char; 5] = ['/', '~', ' ', '#', '$'];

/// Check key names and leaf types across all loaded locales.
///
/// Every locale is fully walked even when an earlier one already produced
/// errors; stopping the run is the driver's call, not this rule's.
pub fn check_types(tree: &LocaleTree) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (locale, root) in tree.iter() {
        let Some(children) = root.children() else {
            continue;
        };
        for (key, node) in children {
            check_node(&mut issues, locale, key, key, node);
        }
    }

    issues
}

fn check_node(issues: &mut Vec<Issue>, locale: &str, key_path: &str, key: &str, node: &Node) {
    // One issue per reserved character found, however often it repeats.
    for character in RESERVED_KEY_CHARS {
        if key.contains(character) {
            issues.push(
                IllegalKeyCharIssue {
                    key_path: key_path.to_string(),
                    locale: locale.to_string(),
                    character,
                }
                .into(),
            );
        }
    }

    match node {
        Node::Branch(children) => {
            for (nested_key, nested) in children {
                let nested_path = join_path(key_path, nested_key);
                check_node(issues, locale, &nested_path, nested_key, nested);
            }
        }
        Node::Leaf(_) => {}
        Node::Invalid(value) => {
            issues.push(
                InvalidValueTypeIssue {
                    key_path: key_path.to_string(),
                    locale: locale.to_string(),
                    value: value.clone(),
                }
                .into(),
            );
        }
    }
}
