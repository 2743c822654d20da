//! Property tests for route resolution.

use proptest::prelude::*;
use route_rewriter::config::MatcherConfig;
use route_rewriter::routing::{Resolution, RouteMatcher, RouteTable, RouteTrie};

mod common;

fn admin_table() -> RouteTable {
    RouteTrie::build(common::ADMIN_DYNAMIC_PAGES.iter().copied())
        .unwrap()
        .freeze(common::ADMIN_STATIC_PAGES.iter().map(|s| s.to_string()).collect())
}

/// Segment values that never collide with a literal sibling in the fixture.
fn param_value() -> impl Strategy<Value = String> {
    "[0-9][a-zA-Z0-9_~-]{0,15}"
}

/// Replace each bracketed segment of `template` with the next value.
fn instantiate(template: &str, values: &[String]) -> String {
    let mut values = values.iter();
    template
        .split('/')
        .map(|segment| {
            if segment.starts_with('[') {
                values.next().map(String::as_str).unwrap_or("0")
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

proptest! {
    #[test]
    fn dynamic_templates_resolve_for_any_parameters(
        index in 0..common::ADMIN_DYNAMIC_PAGES.len(),
        values in prop::collection::vec(param_value(), 4),
        trailing_slash in any::<bool>(),
    ) {
        let table = admin_table();
        let config = MatcherConfig::default();
        let matcher = RouteMatcher::new(&table, &config);

        let template = common::ADMIN_DYNAMIC_PAGES[index];
        let mut path = instantiate(template, &values);
        if trailing_slash {
            path.push('/');
        }

        let expected = format!("{template}.html");
        prop_assert_eq!(matcher.rewrite(&path), expected.as_str());
    }

    #[test]
    fn static_page_is_only_reached_by_its_own_path(
        segments in prop::collection::vec(
            prop::sample::select(vec!["majors", "login", "settings", "profile", "404", "7", ""]),
            0..4,
        ),
    ) {
        let table = admin_table();
        let config = MatcherConfig::default();
        let matcher = RouteMatcher::new(&table, &config);

        let path = format!("/{}", segments.join("/"));
        if let Resolution::Static { target } = matcher.resolve(&path) {
            let normalized = path.strip_suffix('/').unwrap_or(&path);
            prop_assert_eq!(target, format!("{normalized}.html"));
            prop_assert!(common::ADMIN_STATIC_PAGES.contains(&normalized));
        }
    }

    #[test]
    fn rewriting_is_idempotent(
        segments in prop::collection::vec("[a-z0-9]{1,8}", 0..6),
    ) {
        let table = admin_table();
        let config = MatcherConfig::default();
        let matcher = RouteMatcher::new(&table, &config);

        let path = format!("/{}", segments.join("/"));
        let once = matcher.rewrite(&path).into_owned();
        prop_assert_eq!(matcher.rewrite(&once), once.as_str());
    }

    #[test]
    fn assets_are_never_rewritten(
        dir in prop::collection::vec("[a-z0-9]{1,8}", 0..4),
        stem in "[a-zA-Z0-9_-]{0,8}",
        ext in "[a-z0-9]{1,4}",
    ) {
        let table = admin_table();
        let config = MatcherConfig::default();
        let matcher = RouteMatcher::new(&table, &config);

        let mut parts = dir.clone();
        parts.push(format!("{stem}.{ext}"));
        let file = format!("/{}", parts.join("/"));
        prop_assert_eq!(matcher.resolve(&file), Resolution::Asset);

        let internal = format!("/_next/{}", dir.join("/"));
        prop_assert_eq!(matcher.resolve(&internal), Resolution::Asset);
    }

    #[test]
    fn trie_shape_ignores_insertion_order(
        order in Just((0..common::ADMIN_DYNAMIC_PAGES.len()).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let shuffled: Vec<&str> = order.iter().map(|&i| common::ADMIN_DYNAMIC_PAGES[i]).collect();

        let expected = RouteTrie::build(common::ADMIN_DYNAMIC_PAGES.iter().copied()).unwrap();
        let actual = RouteTrie::build(shuffled).unwrap();
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn test_root_always_rewrites_to_index() {
    let table = admin_table();
    let config = MatcherConfig::default();
    let matcher = RouteMatcher::new(&table, &config);

    assert_eq!(matcher.rewrite(""), "/index.html");
    assert_eq!(matcher.rewrite("/"), "/index.html");
}
