//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CompilerConfig (validated, immutable)
//!     → passed by reference into every pipeline stage
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - No ambient globals: every constant the compiler uses lives here

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::CompilerConfig;
pub use schema::ManifestConfig;
pub use schema::MatcherConfig;
pub use schema::MinifyConfig;
pub use schema::RouteConfig;
