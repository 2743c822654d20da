//! Matcher program template.
//!
//! The viewer-request handler run by the edge runtime. It repeats the steps
//! of [`RouteMatcher::resolve`](crate::routing::RouteMatcher::resolve) over
//! the embedded route data. The template is plain ECMAScript 5.1; minified
//! output additionally prints string literals as template literals, which the
//! edge runtime accepts.

use serde_json::Value;

use crate::config::CompilerConfig;
use crate::routing::RouteTable;

const STATIC_ROUTES: &str = "__STATIC_ROUTES__";
const ROUTE_TRIE: &str = "__ROUTE_TRIE__";
const PAGE_SUFFIX: &str = "__PAGE_SUFFIX__";
const ROOT_PAGE: &str = "__ROOT_PAGE__";
const INTERNAL_PREFIX: &str = "__INTERNAL_PREFIX__";
const WILDCARD_KEY: &str = "__WILDCARD_KEY__";
const PAGE_KEY: &str = "__PAGE_KEY__";

const HANDLER_TEMPLATE: &str = r#"
function handler(event) {
    var request = event.request;
    var uri = request.uri;

    var staticRoutes = __STATIC_ROUTES__;
    var routeTrie = __ROUTE_TRIE__;
    var suffix = __PAGE_SUFFIX__;
    var wildcardKey = __WILDCARD_KEY__;
    var pageKey = __PAGE_KEY__;

    // Runtime files and anything with an extension are served as stored.
    var last = uri.split('/').pop();
    if (uri.indexOf(__INTERNAL_PREFIX__) === 0 || (last && last.indexOf('.') !== -1)) {
        return request;
    }

    if (uri.charAt(uri.length - 1) === '/') {
        uri = uri.slice(0, -1);
    }

    if (uri.length >= suffix.length && uri.slice(uri.length - suffix.length) === suffix) {
        return request;
    }

    if (uri === '') {
        request.uri = __ROOT_PAGE__;
        return request;
    }

    if (staticRoutes.indexOf(uri) !== -1) {
        request.uri = uri + suffix;
        return request;
    }

    function childOf(node, key) {
        if (Object.prototype.hasOwnProperty.call(node, key) && typeof node[key] === 'object') {
            return node[key];
        }
        return null;
    }

    var segments = uri.split('/').filter(function (segment) {
        return segment !== '';
    });
    if (segments.length === 0) {
        return request;
    }

    // Exact literal first, wildcard second, never backtrack.
    var node = routeTrie;
    for (var i = 0; i < segments.length; i++) {
        var next = childOf(node, segments[i]);
        if (next === null) {
            next = childOf(node, wildcardKey);
        }
        if (next === null) {
            return request;
        }
        node = next;
    }

    if (typeof node[pageKey] === 'string') {
        request.uri = node[pageKey] + suffix;
    }
    return request;
}
"#;

/// Substitute the route data and configured constants into the template.
pub fn render(table: &RouteTable, config: &CompilerConfig) -> String {
    let literal = |value: &str| Value::String(value.to_string()).to_string();

    substitute(
        HANDLER_TEMPLATE,
        &[
            (STATIC_ROUTES, table.static_routes_json().to_string()),
            (ROUTE_TRIE, table.trie_json(&config.routes).to_string()),
            (PAGE_SUFFIX, literal(&config.matcher.page_suffix)),
            (ROOT_PAGE, literal(&config.matcher.root_page)),
            (INTERNAL_PREFIX, literal(&config.matcher.internal_prefix)),
            (WILDCARD_KEY, literal(&config.routes.wildcard_key)),
            (PAGE_KEY, literal(&config.routes.page_key)),
        ],
    )
}

/// Single pass, so substituted values are never scanned for placeholders.
fn substitute(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while !rest.is_empty() {
        match values.iter().find(|(key, _)| rest.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &rest[key.len()..];
            }
            None => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }
    }
    out
}
