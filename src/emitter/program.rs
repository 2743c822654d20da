//! Program emission and the size budget.

use std::fmt;

use crate::compiler::{CompileError, CompileResult};
use crate::config::CompilerConfig;
use crate::emitter::minify::JsMinifier;
use crate::emitter::template;
use crate::routing::RouteTable;

/// Minified matcher source, guaranteed to fit the configured budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedProgram {
    code: String,
}

impl EmittedProgram {
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// UTF-8 byte length, the unit the edge runtime limits.
    pub fn byte_len(&self) -> usize {
        self.code.len()
    }
}

impl fmt::Display for EmittedProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Renders, minifies and size-checks the matcher program.
#[derive(Debug, Clone)]
pub struct ProgramEmitter<'a> {
    config: &'a CompilerConfig,
    minifier: JsMinifier,
}

impl<'a> ProgramEmitter<'a> {
    pub fn new(config: &'a CompilerConfig) -> Self {
        Self {
            config,
            minifier: JsMinifier::new(config.minify.clone()),
        }
    }

    /// Emit the program for `table`.
    ///
    /// Fails with `MatcherSizeExceeded` when the minified program is larger
    /// than `matcher.max_program_bytes`; nothing is returned in that case.
    pub fn emit(&self, table: &RouteTable) -> CompileResult<EmittedProgram> {
        let source = template::render(table, self.config);
        let code = self.minifier.minify(&source)?;

        let size = code.len();
        let limit = self.config.matcher.max_program_bytes;
        if size > limit {
            tracing::warn!(size, limit, "Matcher program exceeds size budget");
            return Err(CompileError::MatcherSizeExceeded { size, limit });
        }

        tracing::info!(
            size,
            limit,
            rendered = source.len(),
            static_routes = table.static_routes().len(),
            "Matcher program emitted"
        );

        Ok(EmittedProgram { code })
    }
}
