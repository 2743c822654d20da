//! Route manifest subsystem.
//!
//! # Data Flow
//! ```text
//! <build_dir>/routes-manifest.json
//!     → loader.rs (existence check, read, deserialize)
//!     → validation.rs (version, data routes, catch-all, reserved keys)
//!     → RouteManifest (validated, immutable)
//! ```

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{load_manifest, parse_manifest};
pub use types::{DataRoute, PageRoute, RouteManifest};
pub use validation::validate_manifest;
