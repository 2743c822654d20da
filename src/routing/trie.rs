//! Build-time route trie.
//!
//! # Responsibilities
//! - Split dynamic page templates into segments
//! - Classify each segment as literal or wildcard
//! - Merge every template into one trie, terminal nodes carrying the template
//!
//! # Design Decisions
//! - Children are kept in a `BTreeMap` so iteration (and therefore emitted
//!   output) is deterministic
//! - Insertion only ever adds nodes; the shape is independent of insertion
//!   order
//! - Two different templates on the same node are a build error instead of
//!   last-writer-wins

use std::collections::BTreeMap;

use crate::compiler::{CompileError, CompileResult};
use crate::routing::table::{RouteTable, TableNode};

/// One path segment of a page template.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// Must equal the request segment exactly.
    Literal(String),
    /// A single bracketed parameter such as `[id]`; matches any one segment.
    Wildcard,
}

impl Segment {
    /// Classify a raw template segment.
    pub fn parse(raw: &str) -> Self {
        if raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']') {
            Segment::Wildcard
        } else {
            Segment::Literal(raw.to_string())
        }
    }
}

/// Split a page template into its non-empty segments.
pub fn template_segments(page: &str) -> impl Iterator<Item = Segment> + '_ {
    page.split('/')
        .filter(|part| !part.is_empty())
        .map(Segment::parse)
}

/// A mutable trie node used only while building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<Segment, TrieNode>,
    page: Option<String>,
}

impl TrieNode {
    pub fn child(&self, segment: &Segment) -> Option<&TrieNode> {
        self.children.get(segment)
    }

    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    fn freeze(self) -> TableNode {
        let mut literals = BTreeMap::new();
        let mut wildcard = None;
        for (segment, child) in self.children {
            match segment {
                Segment::Literal(name) => {
                    literals.insert(name, child.freeze());
                }
                Segment::Wildcard => wildcard = Some(Box::new(child.freeze())),
            }
        }
        TableNode::new(literals, wildcard, self.page)
    }
}

/// Trie of dynamic page templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTrie {
    root: TrieNode,
    pages: usize,
}

impl RouteTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from every template in `pages`.
    pub fn build<'a, I>(pages: I) -> CompileResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut trie = Self::new();
        for page in pages {
            trie.insert(page)?;
        }

        tracing::debug!(pages = trie.pages, "Route trie built");
        Ok(trie)
    }

    /// Insert one template, creating intermediate nodes as needed.
    ///
    /// Re-inserting the same template is a no-op. A different template that
    /// normalizes to the same segments fails with `ConflictingDynamicRoutes`.
    pub fn insert(&mut self, page: &str) -> CompileResult<()> {
        let mut node = &mut self.root;
        for segment in template_segments(page) {
            node = node.children.entry(segment).or_default();
        }

        if let Some(existing) = &node.page {
            if existing == page {
                return Ok(());
            }
            return Err(CompileError::ConflictingDynamicRoutes {
                existing: existing.clone(),
                page: page.to_string(),
            });
        }

        node.page = Some(page.to_string());
        self.pages += 1;
        Ok(())
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct templates inserted.
    pub fn len(&self) -> usize {
        self.pages
    }

    pub fn is_empty(&self) -> bool {
        self.pages == 0
    }

    /// Convert into the immutable table embedded in the matcher program.
    pub fn freeze(self, static_routes: Vec<String>) -> RouteTable {
        RouteTable::new(static_routes, self.root.freeze())
    }
}
