//! Endpoint metadata types.

use serde::{Deserialize, Serialize};

/// One concrete bound endpoint: a single route binding returned to callers.
///
/// An immutable snapshot of registry state at query time; it has no
/// lifecycle beyond the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Owning application name.
    pub application: String,
    /// HTTP route pattern (e.g. `/api/orders/:id`).
    pub http_pattern: String,
    /// HTTP method the binding answers to.
    pub http_method: String,
    /// Version tag distinguishing variants within one route.
    pub version: String,
    /// Identifier of the backing service (`interface:method`).
    pub service_id: String,
    /// RPC protocol tag of the backing service.
    pub rpc_proto: String,
}

impl Endpoint {
    /// Create a new endpoint snapshot.
    pub fn new(
        application: impl Into<String>,
        http_pattern: impl Into<String>,
        http_method: impl Into<String>,
        version: impl Into<String>,
        service_id: impl Into<String>,
        rpc_proto: impl Into<String>,
    ) -> Self {
        Self {
            application: application.into(),
            http_pattern: http_pattern.into(),
            http_method: http_method.into(),
            version: version.into(),
            service_id: service_id.into(),
            rpc_proto: rpc_proto.into(),
        }
    }
}

/// A logical route holding one or more bound endpoint variants.
///
/// ## Registry Contract
///
/// Every variant in a group shares the group's `application`,
/// `http_method`, and `http_pattern`; variants differ in `version`,
/// `service_id`, or `rpc_proto`. Group-level predicates evaluate against an
/// arbitrary representative variant, so their result is undefined for a
/// source registry that violates this uniformity. A group always contains
/// at least one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointGroup {
    variants: Vec<Endpoint>,
}

impl EndpointGroup {
    /// Create a group from its first variant.
    pub fn new(first: Endpoint) -> Self {
        Self {
            variants: vec![first],
        }
    }

    /// Add a variant to the group.
    ///
    /// The caller is responsible for the uniformity contract above.
    pub fn push(&mut self, variant: Endpoint) {
        self.variants.push(variant);
    }

    /// An arbitrary variant carrying the group's shared attributes.
    pub fn representative(&self) -> &Endpoint {
        &self.variants[0]
    }

    /// All variants, in registration order.
    pub fn variants(&self) -> &[Endpoint] {
        &self.variants
    }

    /// Consume the group, yielding its variants in registration order.
    pub fn into_variants(self) -> Vec<Endpoint> {
        self.variants
    }
}
