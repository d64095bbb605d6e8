//! Property tests for the query engine's universal guarantees.
//!
//! The properties pinned here hold for every registry and every parameter
//! set: filtering is monotone, AND-composition only shrinks results,
//! pagination lengths follow from `total`, ordering is a total order, and
//! identical queries are idempotent.

use std::sync::Arc;

use proptest::prelude::*;

use gateway_inspect::{
    ConfigSnapshot, Endpoint, InMemoryRegistry, OrderKey, QueryEngine, QueryParams,
};

const APPS: [&str; 3] = ["alpha", "beta", "gamma"];
const METHODS: [&str; 3] = ["GET", "POST", "PUT"];
const PATTERNS: [&str; 4] = ["/orders", "/orders/:id", "/users", "/items"];
const VERSIONS: [&str; 3] = ["1.0", "2.0", "3.0"];
const PROTOS: [&str; 3] = ["dubbo", "grpc", "http"];

fn arb_endpoint() -> impl Strategy<Value = Endpoint> {
    (
        prop::sample::select(APPS.to_vec()),
        prop::sample::select(METHODS.to_vec()),
        prop::sample::select(PATTERNS.to_vec()),
        prop::sample::select(VERSIONS.to_vec()),
        prop::sample::select(PROTOS.to_vec()),
    )
        .prop_map(|(app, method, pattern, version, proto)| {
            Endpoint::new(
                app,
                pattern,
                method,
                version,
                format!("svc.{app}:{method}{pattern}"),
                proto,
            )
        })
}

fn arb_registry() -> impl Strategy<Value = Vec<Endpoint>> {
    prop::collection::vec(arb_endpoint(), 0..40)
}

fn engine_over(endpoints: Vec<Endpoint>) -> QueryEngine<InMemoryRegistry> {
    let registry = InMemoryRegistry::new();
    for endpoint in endpoints {
        registry.register_endpoint(endpoint);
    }
    QueryEngine::new(Arc::new(registry), ConfigSnapshot::empty())
}

/// Query with a page size large enough to hold every candidate.
fn all_of(engine: &QueryEngine<InMemoryRegistry>, pairs: &[(&str, &str)]) -> Vec<Endpoint> {
    let mut pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    pairs.push(("pageSize".to_string(), "100".to_string()));
    engine
        .query_endpoints(&QueryParams::from_pairs(pairs))
        .data
}

proptest! {
    /// Any filtered result is a subset of the no-filter result.
    #[test]
    fn filtering_is_monotone(endpoints in arb_registry(), app in prop::sample::select(APPS.to_vec())) {
        let engine = engine_over(endpoints);
        let unfiltered = all_of(&engine, &[]);
        let filtered = all_of(&engine, &[("application", app)]);

        prop_assert!(filtered.len() <= unfiltered.len());
        for endpoint in &filtered {
            prop_assert!(unfiltered.contains(endpoint));
        }
    }

    /// Adding a recognized filter parameter never grows the result set.
    #[test]
    fn and_composition_only_shrinks(
        endpoints in arb_registry(),
        app in prop::sample::select(APPS.to_vec()),
        version in prop::sample::select(VERSIONS.to_vec()),
    ) {
        let engine = engine_over(endpoints);
        let broad = all_of(&engine, &[("application", app)]);
        let narrow = all_of(&engine, &[("application", app), ("version", version)]);

        prop_assert!(narrow.len() <= broad.len());
    }

    /// The returned slice length follows from total, page, and page size.
    #[test]
    fn pagination_invariant_holds(
        endpoints in arb_registry(),
        page in 1usize..20,
        page_size in 1usize..=100,
    ) {
        let engine = engine_over(endpoints);
        let response = engine.query_endpoints(&QueryParams::from_pairs([
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
        ]));

        let expected = page_size.min(
            response.total.saturating_sub((page - 1) * page_size),
        );
        prop_assert_eq!(response.data.len(), expected);
        prop_assert_eq!(response.page, page);
        prop_assert_eq!(response.page_size, page_size);
    }

    /// Identical queries against an unchanged registry are byte-identical.
    #[test]
    fn repeated_queries_are_idempotent(
        endpoints in arb_registry(),
        app in prop::sample::select(APPS.to_vec()),
        page in 1usize..5,
    ) {
        let engine = engine_over(endpoints);
        let query = QueryParams::from_pairs([
            ("application".to_string(), app.to_string()),
            ("page".to_string(), page.to_string()),
        ]);

        let first = serde_json::to_vec(&engine.query_endpoints(&query)).unwrap();
        let second = serde_json::to_vec(&engine.query_endpoints(&query)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Within one response, sort keys ascend with position.
    #[test]
    fn responses_are_totally_ordered(endpoints in arb_registry()) {
        let engine = engine_over(endpoints);
        let data = all_of(&engine, &[]);

        for pair in data.windows(2) {
            prop_assert!(pair[0].order_key() <= pair[1].order_key());
        }
    }
}
