//! Build-time error definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a compilation. None of them is recoverable.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The manifest file does not exist; the export step was not run.
    #[error(
        "could not find route manifest at {}; run the static export before compiling",
        .path.display()
    )]
    MissingManifest { path: PathBuf },

    /// The manifest exists but could not be read.
    #[error("failed to read route manifest at {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or does not fit the manifest shape.
    #[error("failed to parse route manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    /// The manifest was produced by an incompatible exporter release.
    #[error("route manifest version {found} is not supported, it must be {expected}")]
    UnsupportedManifestVersion { found: u32, expected: u32 },

    /// The project uses incremental regeneration.
    #[error(
        "{count} data route(s) detected; incremental static regeneration is not supported, convert them to static pages"
    )]
    UnsupportedDataRoutes { count: usize },

    /// A dynamic route uses a variable-depth segment.
    #[error("catch-all route {page} is not supported, convert it to a standard dynamic page")]
    UnsupportedCatchAllRoute { page: String },

    /// A literal segment collides with a reserved trie key.
    #[error("route {page} uses reserved segment {segment:?}")]
    ReservedRouteSegment { page: String, segment: String },

    /// Two different templates resolve to the same trie node.
    #[error("dynamic routes {existing} and {page} match the same paths")]
    ConflictingDynamicRoutes { existing: String, page: String },

    /// The rendered program could not be minified.
    #[error("failed to minify matcher program: {0}")]
    Minify(String),

    /// The minified program does not fit the edge runtime.
    #[error(
        "matcher program is {size} bytes but the edge runtime caps it at {limit} bytes; reduce the number of page types"
    )]
    MatcherSizeExceeded { size: usize, limit: usize },

    /// Compiler configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CompileError>;
