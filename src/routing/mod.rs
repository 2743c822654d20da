//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (build time):
//!     dynamic page templates
//!     → trie.rs (segment trie, literal/wildcard keys, merged)
//!     → freeze + static route list
//!     → table.rs (immutable RouteTable, serializable)
//!
//! Request Resolution:
//!     request path
//!     → matcher.rs (asset check, normalization, static lookup, trie walk)
//!     → Return: rewritten page file or unmodified path
//! ```
//!
//! # Design Decisions
//! - Routes compiled at build time, immutable afterwards
//! - No regex in hot path (segment lookups only)
//! - Deterministic: same input always matches same route
//! - Exact literal beats wildcard at every level, no backtracking

pub mod matcher;
pub mod table;
pub mod trie;

pub use matcher::{Resolution, RouteMatcher};
pub use table::{RouteTable, TableNode, PROTOTYPE_KEY};
pub use trie::{RouteTrie, Segment, TrieNode};
