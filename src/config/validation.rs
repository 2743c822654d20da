//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check reserved trie keys are usable and distinct
//! - Validate value ranges (non-zero budget, non-empty markers)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CompilerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the compiler

use thiserror::Error;

use crate::config::schema::CompilerConfig;
use crate::routing::PROTOTYPE_KEY;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("routes.wildcard_key and routes.page_key must differ (both are {0:?})")]
    ReservedKeyClash(String),

    #[error("{field} must not be \"__proto__\", object literals treat it as the prototype")]
    PrototypeKey { field: &'static str },

    #[error("{field} must start with '/' (got {value:?})")]
    NotAbsolute { field: &'static str, value: String },

    #[error("matcher.max_program_bytes must be greater than zero")]
    ZeroBudget,
}

/// Check a configuration, collecting every violation.
pub fn validate_config(config: &CompilerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let required = [
        ("manifest.file_name", config.manifest.file_name.as_str()),
        ("routes.wildcard_key", config.routes.wildcard_key.as_str()),
        ("routes.page_key", config.routes.page_key.as_str()),
        ("routes.catch_all_marker", config.routes.catch_all_marker.as_str()),
        ("matcher.page_suffix", config.matcher.page_suffix.as_str()),
        ("matcher.internal_prefix", config.matcher.internal_prefix.as_str()),
    ];
    for (field, value) in required {
        if value.is_empty() {
            errors.push(ValidationError::Empty { field });
        }
    }

    if !config.routes.wildcard_key.is_empty()
        && config.routes.wildcard_key == config.routes.page_key
    {
        errors.push(ValidationError::ReservedKeyClash(
            config.routes.wildcard_key.clone(),
        ));
    }

    for (field, value) in [
        ("routes.wildcard_key", &config.routes.wildcard_key),
        ("routes.page_key", &config.routes.page_key),
    ] {
        if value == PROTOTYPE_KEY {
            errors.push(ValidationError::PrototypeKey { field });
        }
    }

    let absolute = [
        ("matcher.root_page", &config.matcher.root_page),
        ("matcher.internal_prefix", &config.matcher.internal_prefix),
    ];
    for (field, value) in absolute {
        if !value.starts_with('/') {
            errors.push(ValidationError::NotAbsolute {
                field,
                value: value.clone(),
            });
        }
    }

    if config.matcher.max_program_bytes == 0 {
        errors.push(ValidationError::ZeroBudget);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
