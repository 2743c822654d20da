//! Shared fixtures for integration tests.

use std::fs;
use std::path::Path;

use route_rewriter::config::CompilerConfig;
use serde_json::json;

/// Dynamic pages of a realistic admin site export.
#[allow(dead_code)]
pub const ADMIN_DYNAMIC_PAGES: &[&str] = &[
    "/majors/[majorId]",
    "/majors/[majorId]/apps",
    "/majors/[majorId]/apps/[appId]/install",
    "/majors/[majorId]/collections",
    "/majors/[majorId]/collections/[collectionId]",
    "/majors/[majorId]/collections/[collectionId]/images/add",
    "/majors/[majorId]/collections/create",
    "/majors/[majorId]/edit",
    "/majors/[majorId]/orders",
    "/majors/[majorId]/orders/[orderId]",
    "/majors/[majorId]/orders/[orderId]/order-items/[orderItemId]",
    "/majors/[majorId]/orders/[orderId]/order-items/create",
    "/majors/[majorId]/orders/create",
    "/majors/[majorId]/pages",
    "/majors/[majorId]/pages/[pageId]",
    "/majors/[majorId]/pages/[pageId]/images/add",
    "/majors/[majorId]/pages/create",
    "/majors/[majorId]/payment-gateway",
    "/majors/[majorId]/products",
    "/majors/[majorId]/products/[productId]",
    "/majors/[majorId]/products/[productId]/images/[contentItemId]",
    "/majors/[majorId]/products/[productId]/images/add",
    "/majors/[majorId]/products/[productId]/variants/[variantId]",
    "/majors/[majorId]/products/[productId]/variants/[variantId]/add",
    "/majors/[majorId]/products/[productId]/variants/create",
    "/majors/[majorId]/products/create",
    "/majors/[majorId]/products/create-from-supplier-product",
    "/majors/[majorId]/storefronts",
    "/majors/[majorId]/storefronts/[storefrontId]",
    "/majors/[majorId]/storefronts/[storefrontId]/customers",
    "/majors/[majorId]/storefronts/[storefrontId]/customers/[customerId]",
    "/majors/[majorId]/storefronts/[storefrontId]/customers/create",
    "/majors/[majorId]/storefronts/[storefrontId]/navs",
    "/majors/[majorId]/storefronts/[storefrontId]/navs/create",
    "/majors/[majorId]/storefronts/[storefrontId]/type-contents",
    "/majors/[majorId]/storefronts/create",
    "/majors/[majorId]/subscriptions",
    "/majors/[majorId]/suppliers",
    "/majors/[majorId]/suppliers/request",
    "/majors/[majorId]/taxonomy",
    "/majors/[majorId]/taxonomy/create",
    "/majors/[majorId]/users",
    "/majors/[majorId]/users/[userName]",
    "/majors/[majorId]/users/add",
];

/// Static pages of the same export.
#[allow(dead_code)]
pub const ADMIN_STATIC_PAGES: &[&str] = &["/", "/404", "/login", "/majors", "/settings/profile"];

/// Manifest JSON in the exporter's format.
#[allow(dead_code)]
pub fn manifest_json(static_pages: &[&str], dynamic_pages: &[&str]) -> String {
    let route = |page: &&str| {
        json!({
            "page": page,
            "regex": "",
            "routeKeys": {},
            "namedRegex": ""
        })
    };

    json!({
        "version": 3,
        "pages404": true,
        "basePath": "",
        "redirects": [],
        "headers": [],
        "staticRoutes": static_pages.iter().map(route).collect::<Vec<_>>(),
        "dynamicRoutes": dynamic_pages.iter().map(route).collect::<Vec<_>>(),
        "dataRoutes": [],
        "rewrites": []
    })
    .to_string()
}

/// Write `content` as the route manifest of `build_dir`.
#[allow(dead_code)]
pub fn write_manifest(build_dir: &Path, content: &str) {
    fs::create_dir_all(build_dir).unwrap();
    fs::write(build_dir.join("routes-manifest.json"), content).unwrap();
}

/// Default configuration pointed at `build_dir`.
#[allow(dead_code)]
pub fn config_for(build_dir: &Path) -> CompilerConfig {
    let mut config = CompilerConfig::default();
    config.manifest.build_dir = build_dir.to_path_buf();
    config
}
