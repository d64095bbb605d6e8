//! Service middleware for request metrics.
//!
//! Metrics are emitted as structured tracing records under the
//! `gateway_inspect::metrics` target, aggregatable from logs:
//!
//! - `request` - path, method, status, latency per handled request
//! - `query` - entity kind, candidate total, returned page size

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Records request count and latency for every handled request.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = normalize_path(request.uri().path());

    let response = next.run(request).await;

    info!(
        target: "gateway_inspect::metrics",
        metric_type = "request",
        path = %path,
        method = %method,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "request_metric"
    );

    response
}

/// Collapse dynamic path segments so metric cardinality stays bounded.
///
/// The query routes are static, but the gateway may mount this router
/// under parameterized prefixes; purely numeric segments become `:n`.
fn normalize_path(path: &str) -> String {
    let numeric = regex_lite::Regex::new(r"/[0-9]+(/|$)").unwrap();
    let mut normalized = path.to_string();
    while numeric.is_match(&normalized) {
        normalized = numeric.replace_all(&normalized, "/:n$1").to_string();
    }
    normalized
}

/// Record the outcome of one metadata query.
pub fn record_query_metrics(entity: &str, total: usize, returned: usize) {
    info!(
        target: "gateway_inspect::metrics",
        metric_type = "query",
        entity = entity,
        total = total,
        returned = returned,
        "query_metric"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_are_collapsed() {
        assert_eq!(normalize_path("/tenants/42/api/endpoints"), "/tenants/:n/api/endpoints");
        assert_eq!(normalize_path("/a/1/b/2"), "/a/:n/b/:n");
    }

    #[test]
    fn static_paths_pass_through() {
        assert_eq!(normalize_path("/api/endpoints"), "/api/endpoints");
    }
}
