//! Resolved configuration tree queries.
//!
//! The configuration source is an external collaborator; this module only
//! navigates an already-resolved tree by dotted paths.

use serde_json::{Map, Value};

/// Config query: sub-tree selector (`""`/`"all"` selects the root).
pub const PARAM_NAMESPACE: &str = "namespace";
/// Config and env query: dotted key (empty returns the whole scope).
pub const PARAM_KEY: &str = "key";
/// Legacy configuration query: short namespace selector.
pub const PARAM_NS: &str = "ns";
/// Legacy configuration query: case-insensitive key filter.
pub const PARAM_MATCH: &str = "match";

/// The gateway's configuration, resolved at startup into a JSON tree.
///
/// Leaves may be any JSON scalar; interior nodes are objects. Navigated by
/// dotted paths for both namespace sub-tree selection and key lookup.
#[derive(Debug, Clone, Default)]
pub struct ConfigSnapshot {
    root: Value,
}

impl ConfigSnapshot {
    /// Wrap a resolved tree. Expected to be a JSON object at the root.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// An empty configuration.
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Resolve a namespace to its sub-tree.
    ///
    /// Empty or `"all"` selects the root; otherwise a dotted path selects
    /// a sub-tree. A missing sub-tree resolves to an empty mapping, not an
    /// error.
    pub fn namespace(&self, ns: &str) -> Value {
        if is_root(ns) {
            return self.root.clone();
        }
        lookup_path(&self.root, ns)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Look up a dotted key under a namespace.
    pub fn get(&self, ns: &str, key: &str) -> Option<&Value> {
        let scope = if is_root(ns) {
            &self.root
        } else {
            lookup_path(&self.root, ns)?
        };
        lookup_path(scope, key)
    }
}

fn is_root(ns: &str) -> bool {
    ns.is_empty() || ns == "all"
}

fn lookup_path<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> ConfigSnapshot {
        ConfigSnapshot::new(json!({
            "db": { "host": "localhost", "port": 5432 },
            "listen": "0.0.0.0:8080",
        }))
    }

    #[test]
    fn root_namespace_is_the_whole_tree() {
        let config = snapshot();
        assert_eq!(config.namespace(""), config.namespace("all"));
        assert!(config.namespace("")["db"].is_object());
    }

    #[test]
    fn dotted_namespace_selects_a_subtree() {
        let config = snapshot();
        assert_eq!(config.namespace("db")["host"], json!("localhost"));
        assert_eq!(config.namespace("missing"), json!({}));
    }

    #[test]
    fn dotted_key_reaches_a_leaf() {
        let config = snapshot();
        assert_eq!(config.get("", "db.host"), Some(&json!("localhost")));
        assert_eq!(config.get("db", "port"), Some(&json!(5432)));
        assert_eq!(config.get("", "db.missing"), None);
    }
}
