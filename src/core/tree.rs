//! In-memory representation of loaded locale data.
//!
//! The loader turns each parsed JSON value into a [`Node`] tree so the
//! checks can pattern-match structure instead of re-inspecting raw JSON
//! types. Key paths use "/" as the segment separator, with the file-stem
//! (domain) as the first segment.

use indexmap::IndexMap;
use serde_json::Value;

/// The "/" used to join key segments into a key path.
pub const KEY_PATH_SEPARATOR: char = '/';

/// One position in a locale's nested string table.
///
/// JSON objects become `Branch`, strings become `Leaf`, and every other
/// JSON value (number, boolean, array, null) is carried as `Invalid` so
/// the type check can cite the raw value and its type. Arrays are never
/// traversed; an array leaf is a single invalid value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A translatable string.
    Leaf(String),
    /// A nested mapping of key segment to child node, in document order.
    Branch(IndexMap<String, Node>),
    /// A leaf of a type the string table does not allow.
    Invalid(Value),
}

impl Node {
    /// An empty mapping, used for locales that exist without content.
    pub fn empty_branch() -> Self {
        Node::Branch(IndexMap::new())
    }

    /// The children of a `Branch`, or `None` for terminal nodes.
    pub fn children(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Branch(children) => Some(children),
            _ => None,
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Node::Leaf(text),
            Value::Object(map) => Node::Branch(
                map.into_iter()
                    .map(|(key, child)| (key, Node::from(child)))
                    .collect(),
            ),
            other => Node::Invalid(other),
        }
    }
}

/// Resolve a "/"-joined key path against a node.
///
/// Descends through `Branch` maps only; a missing segment or a terminal
/// node in the middle of the path is a failed lookup. The node the final
/// segment lands on may be of any kind.
pub fn resolve<'a>(root: &'a Node, path: &str) -> Option<&'a Node> {
    path.split(KEY_PATH_SEPARATOR)
        .try_fold(root, |node, segment| node.children()?.get(segment))
}

/// Extend a breadcrumb with one more key segment.
pub fn join_path(breadcrumb: &str, segment: &str) -> String {
    if breadcrumb.is_empty() {
        segment.to_string()
    } else {
        format!("{}{}{}", breadcrumb, KEY_PATH_SEPARATOR, segment)
    }
}

/// The JSON type name of a value, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// All loaded locales, keyed by locale identifier in load order.
///
/// Each locale's root is a `Branch` whose first-level keys are the
/// file-stems (domains) of the JSON files that were loaded for it.
#[derive(Debug, Clone, Default)]
pub struct LocaleTree {
    locales: IndexMap<String, Node>,
}

impl LocaleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a locale has a (possibly empty) root branch.
    pub fn ensure_locale(&mut self, locale: &str) {
        self.locales
            .entry(locale.to_string())
            .or_insert_with(Node::empty_branch);
    }

    /// Store one parsed domain file under `tree[locale][stem]`.
    pub fn insert_domain(&mut self, locale: &str, stem: impl Into<String>, node: Node) {
        // Locale roots are only ever created as branches.
        if let Node::Branch(domains) = self
            .locales
            .entry(locale.to_string())
            .or_insert_with(Node::empty_branch)
        {
            domains.insert(stem.into(), node);
        }
    }

    pub fn get(&self, locale: &str) -> Option<&Node> {
        self.locales.get(locale)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locales and their root nodes, in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
