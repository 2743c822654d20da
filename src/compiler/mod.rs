//! Compilation pipeline.
//!
//! # Data Flow
//! ```text
//! routes-manifest.json
//!     → manifest::load_manifest      (MissingManifest, parse errors)
//!     → manifest::validate_manifest  (version, data routes, catch-all)
//!     → routing::RouteTrie::build    (dynamic routes)
//!     → freeze with static routes    (RouteTable)
//!     → emitter::ProgramEmitter      (render, minify, size budget)
//!     → EmittedProgram
//! ```
//!
//! # Design Decisions
//! - Single-threaded and synchronous; the first failure aborts everything
//! - The compiler owns its configuration; no global state

pub mod error;

pub use error::{CompileError, CompileResult};

use crate::config::CompilerConfig;
use crate::emitter::{EmittedProgram, ProgramEmitter};
use crate::manifest::{load_manifest, validate_manifest, RouteManifest};
use crate::routing::{RouteMatcher, RouteTable, RouteTrie};

/// Compiles route manifests into edge matcher programs.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Load the manifest from the configured build directory.
    pub fn load(&self) -> CompileResult<RouteManifest> {
        load_manifest(&self.config.manifest_path())
    }

    /// Validate `manifest` and build its frozen route table.
    pub fn route_table(&self, manifest: &RouteManifest) -> CompileResult<RouteTable> {
        let manifest = validate_manifest(manifest, &self.config)?;

        let trie = RouteTrie::build(manifest.dynamic_pages())?;
        let table = trie.freeze(manifest.static_pages());

        tracing::debug!(
            static_routes = table.static_routes().len(),
            "Route table frozen"
        );
        Ok(table)
    }

    /// Compile `manifest` into a matcher program.
    pub fn compile(&self, manifest: &RouteManifest) -> CompileResult<EmittedProgram> {
        let table = self.route_table(manifest)?;
        ProgramEmitter::new(&self.config).emit(&table)
    }

    /// Load, validate and compile in one go.
    pub fn compile_build(&self) -> CompileResult<EmittedProgram> {
        tracing::info!(
            manifest = %self.config.manifest_path().display(),
            "Producing matcher program"
        );
        let manifest = self.load()?;
        self.compile(&manifest)
    }

    /// Matcher over `table` using this compiler's constants.
    pub fn matcher<'a>(&'a self, table: &'a RouteTable) -> RouteMatcher<'a> {
        RouteMatcher::new(table, &self.config.matcher)
    }
}
