//! Matcher program emission.
//!
//! # Data Flow
//! ```text
//! RouteTable + CompilerConfig
//!     → template.rs (serialize static list and trie, substitute constants)
//!     → minify.rs (parse, mangle, print without whitespace)
//!     → program.rs (measure bytes, enforce budget)
//!     → EmittedProgram (opaque deployable artifact)
//! ```
//!
//! # Design Decisions
//! - Exceeding the budget is fatal; no splitting or fallback tier
//! - Output is byte-for-byte deterministic for the same table and config

pub mod minify;
pub mod program;
pub mod template;

pub use minify::JsMinifier;
pub use program::{EmittedProgram, ProgramEmitter};
