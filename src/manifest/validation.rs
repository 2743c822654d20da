//! Manifest validation.
//!
//! # Responsibilities
//! - Reject manifests from incompatible exporter releases
//! - Reject features the non-backtracking matcher cannot express
//!   (data routes, catch-all segments)
//! - Reject literal segments that collide with reserved trie keys or with
//!   the object-literal prototype key
//!
//! # Design Decisions
//! - Fails on the first violation; checks run in a fixed order so the most
//!   actionable error is reported first
//! - Pure: the manifest is returned unchanged on success

use crate::compiler::{CompileError, CompileResult};
use crate::config::CompilerConfig;
use crate::manifest::types::RouteManifest;
use crate::routing::PROTOTYPE_KEY;

/// Validate `manifest` against the preconditions the matcher depends on.
pub fn validate_manifest<'a>(
    manifest: &'a RouteManifest,
    config: &CompilerConfig,
) -> CompileResult<&'a RouteManifest> {
    let expected = config.manifest.supported_version;
    if manifest.version != expected {
        return Err(CompileError::UnsupportedManifestVersion {
            found: manifest.version,
            expected,
        });
    }

    let data_routes = manifest.data_routes();
    if !data_routes.is_empty() {
        return Err(CompileError::UnsupportedDataRoutes {
            count: data_routes.len(),
        });
    }

    let routes = &config.routes;
    if let Some(page) = manifest
        .dynamic_pages()
        .find(|page| page.contains(routes.catch_all_marker.as_str()))
    {
        return Err(CompileError::UnsupportedCatchAllRoute {
            page: page.to_string(),
        });
    }

    for page in manifest.dynamic_pages() {
        if let Some(segment) = page
            .split('/')
            .find(|segment| {
                *segment == routes.wildcard_key
                    || *segment == routes.page_key
                    || *segment == PROTOTYPE_KEY
            })
        {
            return Err(CompileError::ReservedRouteSegment {
                page: page.to_string(),
                segment: segment.to_string(),
            });
        }
    }

    if !manifest.base_path.is_empty() {
        tracing::warn!(
            base_path = %manifest.base_path,
            "Manifest declares a base path; request paths are matched without stripping it"
        );
    }

    Ok(manifest)
}
