//! Default predicate tables.
//!
//! The set of recognized parameters is fixed and known at build time, so
//! the tables are built by these functions once during engine
//! construction rather than through runtime plugin registration.

use super::FilterRegistry;
use crate::matching;
use crate::types::{Endpoint, EndpointGroup, ServiceRecord};

/// Endpoint query: owning application.
pub const PARAM_APPLICATION: &str = "application";
/// Endpoint query: route pattern, substring match.
pub const PARAM_HTTP_PATTERN: &str = "httpPattern";
/// Endpoint query: HTTP method.
pub const PARAM_HTTP_METHOD: &str = "httpMethod";
/// Endpoint query: variant version.
pub const PARAM_VERSION: &str = "version";
/// Endpoint query: backing service identifier.
pub const PARAM_SERVICE_ID: &str = "serviceId";
/// Endpoint and service query: RPC protocol tag.
pub const PARAM_RPC_PROTO: &str = "rpcProto";

/// Service query: interface name, prefix match.
pub const PARAM_INTERFACE: &str = "interface";
/// Service query: method name, prefix match.
pub const PARAM_METHOD: &str = "method";

/// Group-level table: narrows route groups before the variant pass runs.
///
/// Each predicate reads a shared attribute through the group's
/// representative variant, which the registry contract on
/// [`EndpointGroup`] makes well-defined.
pub fn endpoint_group_registry() -> FilterRegistry<EndpointGroup> {
    let mut registry = FilterRegistry::new();
    registry.register(PARAM_APPLICATION, |values, group: &EndpointGroup| {
        matching::match_equal(values, &group.representative().application)
    });
    registry.register(PARAM_HTTP_PATTERN, |values, group: &EndpointGroup| {
        matching::match_contains(values, &group.representative().http_pattern)
    });
    registry.register(PARAM_HTTP_METHOD, |values, group: &EndpointGroup| {
        matching::match_equal(values, &group.representative().http_method)
    });
    registry
}

/// Variant-level table.
///
/// `application` is registered at both levels; the group pass narrows
/// candidates before this more detailed pass runs.
pub fn endpoint_registry() -> FilterRegistry<Endpoint> {
    let mut registry = FilterRegistry::new();
    registry.register(PARAM_APPLICATION, |values, ep: &Endpoint| {
        matching::match_equal(values, &ep.application)
    });
    registry.register(PARAM_VERSION, |values, ep: &Endpoint| {
        matching::match_equal(values, &ep.version)
    });
    registry.register(PARAM_SERVICE_ID, |values, ep: &Endpoint| {
        matching::match_equal(values, &ep.service_id)
    });
    registry.register(PARAM_RPC_PROTO, |values, ep: &Endpoint| {
        matching::match_equal(values, &ep.rpc_proto)
    });
    registry
}

/// Service table.
///
/// `application` is registered but always matches: the service metadata
/// model carries no application attribute, and the parameter stays
/// recognized so callers sending it get an unfiltered (not failed) query.
pub fn service_registry() -> FilterRegistry<ServiceRecord> {
    let mut registry = FilterRegistry::new();
    registry.register(PARAM_APPLICATION, |_, _: &ServiceRecord| true);
    registry.register(PARAM_INTERFACE, |values, srv: &ServiceRecord| {
        matching::match_prefix(values, &srv.interface)
    });
    registry.register(PARAM_METHOD, |values, srv: &ServiceRecord| {
        matching::match_prefix(values, &srv.method)
    });
    registry.register(PARAM_RPC_PROTO, |values, srv: &ServiceRecord| {
        matching::match_equal(values, &srv.rpc_proto)
    });
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QueryParams;

    fn group(app: &str, method: &str, pattern: &str) -> EndpointGroup {
        EndpointGroup::new(Endpoint::new(app, pattern, method, "1.0", "svc:m", "dubbo"))
    }

    #[test]
    fn group_table_matches_on_representative() {
        let registry = endpoint_group_registry();
        let filters =
            registry.compose(&QueryParams::from_pairs([(PARAM_APPLICATION, "shop")]));

        assert!(filters.matches(&group("shop", "GET", "/orders")));
        assert!(!filters.matches(&group("billing", "GET", "/orders")));
    }

    #[test]
    fn pattern_filter_is_substring() {
        let registry = endpoint_group_registry();
        let filters =
            registry.compose(&QueryParams::from_pairs([(PARAM_HTTP_PATTERN, "orders")]));

        assert!(filters.matches(&group("shop", "GET", "/api/orders/:id")));
        assert!(!filters.matches(&group("shop", "GET", "/api/users")));
    }

    #[test]
    fn service_application_filter_is_inert() {
        let registry = service_registry();
        let filters =
            registry.compose(&QueryParams::from_pairs([(PARAM_APPLICATION, "anything")]));

        assert!(filters.matches(&ServiceRecord::new("com.example.Svc", "call", "grpc")));
    }

    #[test]
    fn service_interface_filter_is_prefix() {
        let registry = service_registry();
        let filters =
            registry.compose(&QueryParams::from_pairs([(PARAM_INTERFACE, "com.example")]));

        assert!(filters.matches(&ServiceRecord::new("com.example.Svc", "call", "grpc")));
        assert!(!filters.matches(&ServiceRecord::new("org.other.Svc", "call", "grpc")));
    }
}
