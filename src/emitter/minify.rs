//! JavaScript minification with OXC.
//!
//! Parses the rendered program, optionally mangles local names and runs
//! compression, then prints it back without whitespace or comments.
//! Top-level names are never mangled, so `handler` keeps its name.

use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc_mangler::MangleOptions;
use oxc_minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::compiler::{CompileError, CompileResult};
use crate::config::MinifyConfig;

/// Minifier for the emitted matcher program.
#[derive(Debug, Clone, Default)]
pub struct JsMinifier {
    config: MinifyConfig,
}

impl JsMinifier {
    pub fn new(config: MinifyConfig) -> Self {
        Self { config }
    }

    /// Minify `source`, or return it unchanged when minification is disabled.
    pub fn minify(&self, source: &str) -> CompileResult<String> {
        if !self.config.enabled {
            return Ok(source.to_string());
        }

        let allocator = Allocator::default();
        let parse_result = Parser::new(&allocator, source, SourceType::default()).parse();

        if let Some(error) = parse_result.errors.first() {
            return Err(CompileError::Minify(format!("{error:?}")));
        }

        let mut program = parse_result.program;

        let mangle = self.config.mangle.then(MangleOptions::default);
        let compress = self.config.compress.then(CompressOptions::smallest);

        let minified = Minifier::new(MinifierOptions { mangle, compress }).minify(&allocator, &mut program);

        let codegen_options = CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        };

        let output = Codegen::new()
            .with_options(codegen_options)
            .with_scoping(minified.scoping)
            .build(&program);

        Ok(output.code)
    }
}
