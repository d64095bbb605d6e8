//! Deterministic ordering of query results.
//!
//! Pagination is only stable if two calls against an unchanged registry
//! snapshot see the same ordering, so every queryable entity carries a
//! composite string key imposing a total order.

use crate::types::{Endpoint, ServiceRecord};

/// Composite sort key, compared byte-wise as a plain string.
pub trait OrderKey {
    /// The ordered key fields joined by `","`.
    fn order_key(&self) -> String;
}

impl OrderKey for Endpoint {
    fn order_key(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.application, self.version, self.http_method, self.http_pattern, self.service_id
        )
    }
}

impl OrderKey for ServiceRecord {
    fn order_key(&self) -> String {
        format!("{},{}", self.interface, self.method)
    }
}

/// Sort candidates into ascending key order.
///
/// The sort is stable: the snapshot may contain true duplicates, and equal
/// keys keep their relative input order (no dedup is assumed).
pub fn sort_deterministic<T: OrderKey>(items: &mut [T]) {
    items.sort_by_cached_key(OrderKey::order_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ep(app: &str, version: &str, method: &str) -> Endpoint {
        Endpoint::new(app, "/p", method, version, "svc:m", "dubbo")
    }

    #[test]
    fn endpoints_order_by_app_then_version_then_method() {
        let mut items = vec![ep("b", "1.0", "GET"), ep("a", "2.0", "GET"), ep("a", "1.0", "POST")];
        sort_deterministic(&mut items);

        let keys: Vec<_> = items.iter().map(|e| (e.application.clone(), e.version.clone())).collect();
        assert_eq!(
            keys,
            vec![
                ("a".to_string(), "1.0".to_string()),
                ("a".to_string(), "2.0".to_string()),
                ("b".to_string(), "1.0".to_string()),
            ]
        );
    }

    #[test]
    fn sorted_keys_are_non_decreasing() {
        let mut items = vec![ep("c", "1", "GET"), ep("a", "9", "PUT"), ep("b", "2", "POST")];
        sort_deterministic(&mut items);
        for pair in items.windows(2) {
            assert!(pair[0].order_key() <= pair[1].order_key());
        }
    }

    #[test]
    fn services_order_by_interface_then_method() {
        let mut items = vec![
            ServiceRecord::new("b.Svc", "a", "grpc"),
            ServiceRecord::new("a.Svc", "z", "grpc"),
            ServiceRecord::new("a.Svc", "a", "dubbo"),
        ];
        sort_deterministic(&mut items);
        assert_eq!(items[0].order_key(), "a.Svc,a");
        assert_eq!(items[2].order_key(), "b.Svc,a");
    }
}
