//! Frozen route table.
//!
//! The immutable counterpart of [`RouteTrie`](crate::routing::trie::RouteTrie):
//! the static route list plus the dynamic trie with literal children and the
//! wildcard child held apart. This is what the matcher walks and what gets
//! serialized into the emitted program.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::config::RouteConfig;

/// Key an object literal treats as its prototype rather than an own property.
/// It can never be a key of the serialized trie.
pub const PROTOTYPE_KEY: &str = "__proto__";

/// An immutable trie node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableNode {
    literals: BTreeMap<String, TableNode>,
    wildcard: Option<Box<TableNode>>,
    page: Option<String>,
}

impl TableNode {
    pub(crate) fn new(
        literals: BTreeMap<String, TableNode>,
        wildcard: Option<Box<TableNode>>,
        page: Option<String>,
    ) -> Self {
        Self {
            literals,
            wildcard,
            page,
        }
    }

    /// Next node for a request segment: the exact literal if present,
    /// otherwise the wildcard.
    pub fn child(&self, segment: &str) -> Option<&TableNode> {
        self.literals.get(segment).or(self.wildcard.as_deref())
    }

    pub fn literal(&self, segment: &str) -> Option<&TableNode> {
        self.literals.get(segment)
    }

    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    /// Nested key/value form using the reserved keys from `keys`.
    pub fn to_json(&self, keys: &RouteConfig) -> Value {
        let mut object = Map::new();
        for (segment, child) in &self.literals {
            object.insert(segment.clone(), child.to_json(keys));
        }
        if let Some(wildcard) = &self.wildcard {
            object.insert(keys.wildcard_key.clone(), wildcard.to_json(keys));
        }
        if let Some(page) = &self.page {
            object.insert(keys.page_key.clone(), Value::String(page.clone()));
        }
        Value::Object(object)
    }
}

/// Static routes and the dynamic trie, ready for matching or emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    static_routes: Vec<String>,
    root: TableNode,
}

impl RouteTable {
    pub(crate) fn new(static_routes: Vec<String>, root: TableNode) -> Self {
        Self {
            static_routes,
            root,
        }
    }

    /// Static route pages in manifest order.
    pub fn static_routes(&self) -> &[String] {
        &self.static_routes
    }

    pub fn is_static(&self, path: &str) -> bool {
        self.static_routes.iter().any(|route| route == path)
    }

    pub fn root(&self) -> &TableNode {
        &self.root
    }

    /// The static list as a JSON array literal.
    pub fn static_routes_json(&self) -> Value {
        json!(self.static_routes)
    }

    /// The trie as a nested JSON object literal.
    pub fn trie_json(&self, keys: &RouteConfig) -> Value {
        self.root.to_json(keys)
    }

    /// Both parts together, for inspection.
    pub fn to_json(&self, keys: &RouteConfig) -> Value {
        json!({
            "staticRoutes": self.static_routes_json(),
            "dynamicRoutes": self.trie_json(keys),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::trie::RouteTrie;

    #[test]
    fn test_child_prefers_literal() {
        let table = RouteTrie::build(["/items/[id]", "/items/new"])
            .unwrap()
            .freeze(Vec::new());
        let items = table.root().literal("items").unwrap();

        assert_eq!(items.child("new").and_then(TableNode::page), Some("/items/new"));
        assert_eq!(items.child("42").and_then(TableNode::page), Some("/items/[id]"));
        assert!(table.root().child("other").is_none());
    }

    #[test]
    fn test_trie_json_uses_reserved_keys() {
        let table = RouteTrie::build(["/items/[id]", "/items/[id]/edit", "/items/new"])
            .unwrap()
            .freeze(vec!["/about".into()]);

        let expected = json!({
            "items": {
                "new": { "___page": "/items/new" },
                "*": {
                    "___page": "/items/[id]",
                    "edit": { "___page": "/items/[id]/edit" }
                }
            }
        });
        assert_eq!(table.trie_json(&RouteConfig::default()), expected);
        assert_eq!(table.static_routes_json(), json!(["/about"]));
    }

    #[test]
    fn test_custom_keys() {
        let keys = RouteConfig {
            wildcard_key: "_".into(),
            page_key: "$".into(),
            ..RouteConfig::default()
        };
        let table = RouteTrie::build(["/p/[id]"]).unwrap().freeze(Vec::new());

        assert_eq!(table.trie_json(&keys), json!({ "p": { "_": { "$": "/p/[id]" } } }));
    }

    #[test]
    fn test_is_static_is_exact() {
        let table = RouteTable::new(vec!["/about".into()], TableNode::default());
        assert!(table.is_static("/about"));
        assert!(!table.is_static("/about/"));
        assert!(!table.is_static("/abou"));
    }
}
