//! Request path resolution.
//!
//! # Responsibilities
//! - Leave runtime assets and files with extensions alone
//! - Normalize a single trailing slash
//! - Resolve root, static and dynamic paths to their stored page file
//!
//! # Design Decisions
//! - Same steps, same order as the emitted edge program
//! - One linear pass over the segments, no backtracking: once a literal is
//!   taken at a level the wildcard sibling is never revisited
//! - No regex; unmatched paths come back unmodified

use std::borrow::Cow;

use crate::config::MatcherConfig;
use crate::routing::table::RouteTable;

/// How a request path was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Internal runtime file or a path with a file extension.
    Asset,
    /// Already ends with the page-file suffix.
    AlreadyResolved,
    /// The root path.
    Root { target: String },
    /// Exact hit in the static route list.
    Static { target: String },
    /// Matched a dynamic template while walking the trie.
    Dynamic { page: String, target: String },
    /// Nothing matched.
    NoMatch,
}

impl Resolution {
    /// The rewritten path, if the request is rewritten at all.
    pub fn target(&self) -> Option<&str> {
        match self {
            Resolution::Root { target }
            | Resolution::Static { target }
            | Resolution::Dynamic { target, .. } => Some(target.as_str()),
            Resolution::Asset | Resolution::AlreadyResolved | Resolution::NoMatch => None,
        }
    }

    /// Short label for logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::Asset => "asset",
            Resolution::AlreadyResolved => "already-resolved",
            Resolution::Root { .. } => "root",
            Resolution::Static { .. } => "static",
            Resolution::Dynamic { .. } => "dynamic",
            Resolution::NoMatch => "no-match",
        }
    }
}

/// Resolves request paths against a frozen [`RouteTable`].
#[derive(Debug, Clone, Copy)]
pub struct RouteMatcher<'a> {
    table: &'a RouteTable,
    config: &'a MatcherConfig,
}

impl<'a> RouteMatcher<'a> {
    pub fn new(table: &'a RouteTable, config: &'a MatcherConfig) -> Self {
        Self { table, config }
    }

    /// Decide what happens to `path`.
    pub fn resolve(&self, path: &str) -> Resolution {
        if path.starts_with(&self.config.internal_prefix) || has_extension(path) {
            return Resolution::Asset;
        }

        let path = path.strip_suffix('/').unwrap_or(path);
        let suffix = &self.config.page_suffix;

        if path.ends_with(suffix.as_str()) {
            return Resolution::AlreadyResolved;
        }

        if path.is_empty() {
            return Resolution::Root {
                target: self.config.root_page.clone(),
            };
        }

        if self.table.is_static(path) {
            return Resolution::Static {
                target: format!("{path}{suffix}"),
            };
        }

        self.walk(path)
    }

    /// Rewritten path, or `path` itself when it is left alone.
    pub fn rewrite<'p>(&self, path: &'p str) -> Cow<'p, str> {
        match self.resolve(path) {
            Resolution::Root { target }
            | Resolution::Static { target }
            | Resolution::Dynamic { target, .. } => Cow::Owned(target),
            _ => Cow::Borrowed(path),
        }
    }

    fn walk(&self, path: &str) -> Resolution {
        let mut segments = path.split('/').filter(|segment| !segment.is_empty()).peekable();
        if segments.peek().is_none() {
            return Resolution::NoMatch;
        }

        let mut node = self.table.root();
        for segment in segments {
            match node.child(segment) {
                Some(next) => node = next,
                None => return Resolution::NoMatch,
            }
        }

        match node.page() {
            Some(page) => Resolution::Dynamic {
                page: page.to_string(),
                target: format!("{page}{}", self.config.page_suffix),
            },
            None => Resolution::NoMatch,
        }
    }
}

/// True when the last path segment contains a dot.
fn has_extension(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|last| last.contains('.'))
}
