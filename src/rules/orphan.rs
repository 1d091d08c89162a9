//! Orphan translation detection rule.
//!
//! The inverse of the missing check: detects strings present in a
//! non-default locale but absent at that key path in the default locale.
//! These are typically translations of keys that were renamed or deleted
//! in the source of truth.

use indexmap::IndexMap;

use crate::core::{LocaleTree, Node, join_path, resolve};
use crate::issues::{Issue, OrphanTranslationIssue};

/// Check every non-default locale's strings against the default locale.
///
/// Only string leaves trigger a lookup; a terminal of some other type is
/// the type rule's business. Warnings come out grouped by locale first
/// (the outer loop), key path second (the inner walk).
pub fn check_orphan_translations(default_locale: &str, tree: &LocaleTree) -> Vec<Issue> {
    let mut issues = Vec::new();

    let Some(default_root) = tree.get(default_locale) else {
        return issues;
    };

    for (locale, root) in tree.iter() {
        if locale == default_locale {
            continue;
        }
        let Some(children) = root.children() else {
            continue;
        };
        walk(&mut issues, default_locale, default_root, locale, "", children);
    }

    issues
}

fn walk(
    issues: &mut Vec<Issue>,
    default_locale: &str,
    default_root: &Node,
    locale: &str,
    breadcrumb: &str,
    branch: &IndexMap<String, Node>,
) {
    for (key, node) in branch {
        let path = join_path(breadcrumb, key);
        match node {
            Node::Branch(children) => {
                walk(issues, default_locale, default_root, locale, &path, children)
            }
            Node::Leaf(_) => {
                if resolve(default_root, &path).is_none() {
                    issues.push(
                        OrphanTranslationIssue {
                            key_path: path.clone(),
                            locale: locale.to_string(),
                            default_locale: default_locale.to_string(),
                        }
                        .into(),
                    );
                }
            }
            Node::Invalid(_) => {}
        }
    }
}
