//! Configuration schema definitions.
//!
//! This module defines every constant the compiler depends on. All types
//! derive Serde traits for deserialization from config files, and every
//! section falls back to the reference deployment's values.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the route compiler.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct CompilerConfig {
    /// Where the route manifest lives and which version is accepted.
    pub manifest: ManifestConfig,

    /// Reserved markers used while building the route trie.
    pub routes: RouteConfig,

    /// Constants baked into the emitted matcher program.
    pub matcher: MatcherConfig,

    /// Minification of the emitted program.
    pub minify: MinifyConfig,
}

impl CompilerConfig {
    /// Full path of the route manifest inside the build directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.manifest.build_dir.join(&self.manifest.file_name)
    }
}

/// Route manifest location and compatibility.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ManifestConfig {
    /// Build output directory of the exporter (e.g., "./.next").
    pub build_dir: PathBuf,

    /// Manifest file name inside `build_dir`.
    pub file_name: String,

    /// The only manifest version this compiler understands.
    pub supported_version: u32,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("./.next"),
            file_name: "routes-manifest.json".to_string(),
            supported_version: 3,
        }
    }
}

/// Reserved markers for dynamic route templates and trie keys.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RouteConfig {
    /// Trie key standing for "any single segment at this position".
    pub wildcard_key: String,

    /// Trie key holding the page template of a terminal node.
    pub page_key: String,

    /// Substring marking a catch-all segment in a page template.
    pub catch_all_marker: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            wildcard_key: "*".to_string(),
            page_key: "___page".to_string(),
            catch_all_marker: "[...".to_string(),
        }
    }
}

/// Constants of the request-time matching algorithm.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MatcherConfig {
    /// Extension appended to a resolved page to locate its stored file.
    pub page_suffix: String,

    /// Rewrite target for the root path.
    pub root_page: String,

    /// Paths under this prefix are runtime assets and never rewritten.
    pub internal_prefix: String,

    /// Hard size ceiling of the edge runtime, in bytes.
    pub max_program_bytes: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            page_suffix: ".html".to_string(),
            root_page: "/index.html".to_string(),
            internal_prefix: "/_next".to_string(),
            max_program_bytes: 10 * 1024, // edge function limit
        }
    }
}

/// Minification settings for the emitted program.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MinifyConfig {
    /// Run the minifier at all.
    pub enabled: bool,

    /// Rename local identifiers.
    pub mangle: bool,

    /// Run compression passes. Off by default: the edge runtime accepts
    /// ECMAScript 5.1 plus a few later features such as template literals,
    /// and compressed output may use others.
    pub compress: bool,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mangle: true,
            compress: false,
        }
    }
}
