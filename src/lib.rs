//! Static export route compiler.
//!
//! Turns an exporter's route manifest into a small viewer-request program
//! that rewrites request paths to stored page files, dynamic segments
//! included, without regular expressions.

pub mod compiler;
pub mod config;
pub mod emitter;
pub mod manifest;
pub mod observability;
pub mod routing;

pub use compiler::{CompileError, CompileResult, Compiler};
pub use config::CompilerConfig;
pub use emitter::EmittedProgram;
pub use manifest::RouteManifest;
pub use routing::{Resolution, RouteMatcher, RouteTable};
