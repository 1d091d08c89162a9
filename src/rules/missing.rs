//! Missing translation detection rule.
//!
//! Detects strings present in the default locale but absent at the same
//! key path in some other loaded locale. The walk is driven entirely by
//! the default locale's shape; other locales only answer lookups.

use indexmap::IndexMap;

use crate::core::{LocaleTree, Node, join_path, resolve};
use crate::issues::{Issue, MissingTranslationIssue};

/// Check every other loaded locale against the default locale's strings.
///
/// Warnings come out grouped by key path first (the outer walk) and by
/// locale second (the inner loop), one per (locale, path) pair. A failed
/// lookup is the expected signal here, never an error.
pub fn check_missing_translations(default_locale: &str, tree: &LocaleTree) -> Vec<Issue> {
    let mut issues = Vec::new();

    let Some(children) = tree.get(default_locale).and_then(Node::children) else {
        return issues;
    };
    walk(&mut issues, default_locale, tree, "", children);

    issues
}

fn walk(
    issues: &mut Vec<Issue>,
    default_locale: &str,
    tree: &LocaleTree,
    breadcrumb: &str,
    branch: &IndexMap<String, Node>,
) {
    for (key, node) in branch {
        let path = join_path(breadcrumb, key);
        match node {
            Node::Branch(children) => walk(issues, default_locale, tree, &path, children),
            // Any terminal in the default tree demands a counterpart.
            _ => {
                for (locale, root) in tree.iter() {
                    if locale == default_locale {
                        continue;
                    }
                    if resolve(root, &path).is_none() {
                        issues.push(
                            MissingTranslationIssue {
                                locale: locale.clone(),
                                key_path: path.clone(),
                                default_locale: default_locale.to_string(),
                            }
                            .into(),
                        );
                    }
                }
            }
        }
    }
}
