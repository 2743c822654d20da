//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All pipeline stages produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stderr of the invoking build tool
//! ```
//!
//! # Design Decisions
//! - Structured fields (sizes, counts, paths) rather than formatted text
//! - Library code only emits events; the binary installs the subscriber

pub mod logging;

pub use logging::init_logging;
