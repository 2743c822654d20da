//! Route manifest loading from the build directory.

use std::fs;
use std::path::Path;

use crate::compiler::{CompileError, CompileResult};
use crate::manifest::types::RouteManifest;

/// Read and deserialize the manifest at `path`.
///
/// Fails with `MissingManifest` before attempting to read when the file is
/// absent, since that almost always means the export step was skipped.
pub fn load_manifest(path: &Path) -> CompileResult<RouteManifest> {
    if !path.is_file() {
        return Err(CompileError::MissingManifest {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| CompileError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest = parse_manifest(&content)?;

    tracing::info!(
        path = %path.display(),
        version = manifest.version,
        static_routes = manifest.static_routes.len(),
        dynamic_routes = manifest.dynamic_routes.len(),
        "Route manifest loaded"
    );

    Ok(manifest)
}

/// Deserialize a manifest from JSON text.
pub fn parse_manifest(content: &str) -> CompileResult<RouteManifest> {
    Ok(serde_json::from_str(content)?)
}
