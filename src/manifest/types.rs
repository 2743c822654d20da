//! Route manifest types as written by the static exporter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The build-time description of a completed static export.
///
/// Everything except `version` defaults when absent, so an incompatible
/// manifest is reported by its version rather than by a shape mismatch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteManifest {
    pub version: u32,

    #[serde(default)]
    pub pages404: bool,

    #[serde(default)]
    pub base_path: String,

    #[serde(default)]
    pub redirects: Vec<Redirect>,

    #[serde(default)]
    pub rewrites: Vec<Rewrite>,

    #[serde(default)]
    pub headers: Vec<serde_json::Value>,

    #[serde(default)]
    pub static_routes: Vec<PageRoute>,

    #[serde(default)]
    pub dynamic_routes: Vec<PageRoute>,

    /// `null` in some exporter releases, which counts as empty.
    #[serde(default)]
    pub data_routes: Option<Vec<DataRoute>>,

    #[serde(default)]
    pub rsc: serde_json::Value,
}

impl RouteManifest {
    /// Data routes, treating an absent list as empty.
    pub fn data_routes(&self) -> &[DataRoute] {
        self.data_routes.as_deref().unwrap_or_default()
    }

    /// Pages of the static routes, in manifest order, skipping empty pages.
    pub fn static_pages(&self) -> Vec<String> {
        self.static_routes
            .iter()
            .filter(|route| !route.page.is_empty())
            .map(|route| route.page.clone())
            .collect()
    }

    /// Page templates of the dynamic routes, in manifest order.
    pub fn dynamic_pages(&self) -> impl Iterator<Item = &str> {
        self.dynamic_routes.iter().map(|route| route.page.as_str())
    }
}

/// A static or dynamic page route.
///
/// The regex fields are carried for completeness; matching never reads them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRoute {
    pub page: String,

    #[serde(default)]
    pub regex: String,

    #[serde(default)]
    pub route_keys: BTreeMap<String, String>,

    #[serde(default)]
    pub named_regex: String,
}

impl PageRoute {
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            ..Self::default()
        }
    }
}

/// A data (incremental regeneration) route.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRoute {
    #[serde(default)]
    pub page: String,

    #[serde(default)]
    pub data_route_regex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Redirect {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub regex: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rewrite {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub regex: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORTED_MANIFEST: &str = r#"{
        "version": 3,
        "pages404": true,
        "basePath": "",
        "redirects": [
            {
                "source": "/:path+/",
                "destination": "/:path+",
                "internal": true,
                "statusCode": 308,
                "regex": "^(?:/((?:[^/]+?)(?:/(?:[^/]+?))*))/$"
            }
        ],
        "headers": [],
        "dynamicRoutes": [
            {
                "page": "/items/[id]",
                "regex": "^/items/([^/]+?)(?:/)?$",
                "routeKeys": { "nxtPid": "nxtPid" },
                "namedRegex": "^/items/(?<nxtPid>[^/]+?)(?:/)?$"
            }
        ],
        "staticRoutes": [
            { "page": "/", "regex": "^/(?:/)?$", "routeKeys": {}, "namedRegex": "^/(?:/)?$" },
            { "page": "/about", "regex": "^/about(?:/)?$", "routeKeys": {}, "namedRegex": "^/about(?:/)?$" }
        ],
        "dataRoutes": [],
        "rsc": { "header": "RSC", "varyHeader": "RSC, Next-Router-State-Tree" },
        "rewrites": []
    }"#;

    #[test]
    fn test_parse_exported_manifest() {
        let manifest: RouteManifest = serde_json::from_str(EXPORTED_MANIFEST).unwrap();

        assert_eq!(manifest.version, 3);
        assert!(manifest.pages404);
        assert_eq!(manifest.redirects.len(), 1);
        assert_eq!(manifest.redirects[0].status_code, 308);
        assert_eq!(manifest.static_pages(), vec!["/", "/about"]);
        assert_eq!(manifest.dynamic_pages().collect::<Vec<_>>(), vec!["/items/[id]"]);
        assert_eq!(
            manifest.dynamic_routes[0].route_keys.get("nxtPid").map(String::as_str),
            Some("nxtPid")
        );
        assert!(manifest.data_routes().is_empty());
    }

    #[test]
    fn test_minimal_manifest_defaults() {
        let manifest: RouteManifest =
            serde_json::from_str(r#"{"version": 1, "dataRoutes": null}"#).unwrap();

        assert_eq!(manifest.version, 1);
        assert!(manifest.static_routes.is_empty());
        assert!(manifest.data_routes().is_empty());
    }

    #[test]
    fn test_empty_static_pages_are_skipped() {
        let manifest = RouteManifest {
            version: 3,
            static_routes: vec![PageRoute::new(""), PageRoute::new("/about")],
            ..RouteManifest::default()
        };

        assert_eq!(manifest.static_pages(), vec!["/about"]);
    }
}
