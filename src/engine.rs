//! The introspection query engine.
//!
//! One engine instance is constructed at gateway startup and shared by
//! every query entry point. It owns the predicate registries (built once,
//! read-only afterwards), the resolved configuration snapshot, and a
//! handle to the entity registry. All query methods are synchronous,
//! allocation-light transformations of a materialized snapshot, and all
//! of them treat an empty result as success.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::config::{ConfigSnapshot, PARAM_KEY, PARAM_MATCH, PARAM_NAMESPACE, PARAM_NS};
use crate::filter::pipeline::{filter_flat, filter_two_level};
use crate::filter::{tables, FilterRegistry};
use crate::matching;
use crate::order::sort_deterministic;
use crate::page::PageSpec;
use crate::registry::MetadataRegistry;
use crate::stats::count_by;
use crate::types::{Endpoint, EndpointGroup, QueryParams, ServiceRecord};

/// Response shape of the paged metadata queries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    /// Always true; failures surface as transport errors, not payloads.
    pub success: bool,
    /// The page of sorted candidates.
    pub data: Vec<T>,
    /// Echoed page number.
    pub page: usize,
    /// Echoed page size.
    pub page_size: usize,
    /// Pre-pagination candidate count, for client-side navigation.
    pub total: usize,
}

/// Response shape of the stats queries.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse<D> {
    /// Always true.
    pub success: bool,
    /// The aggregated counts.
    pub data: D,
}

/// Endpoint stats: group counts per application.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointStats {
    /// Total number of endpoint groups.
    pub count: usize,
    /// Group count per application.
    pub apps: BTreeMap<String, usize>,
}

/// Service stats: service counts per protocol.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStats {
    /// Total number of services.
    pub count: usize,
    /// Service count per RPC protocol.
    pub protos: BTreeMap<String, usize>,
}

/// Response shape of the config query.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    /// Echoed namespace (`"all"` for the root tree).
    pub namespace: String,
    /// Echoed key; empty when the whole scope was requested.
    pub key: String,
    /// The resolved value; JSON null for an absent key.
    pub value: Value,
}

/// Response shape of the env query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvResponse {
    /// Echoed variable name (`"all"` for the full environment).
    pub env_key: String,
    /// The variable's value, or the full environment mapping; JSON null
    /// for an absent variable.
    pub value: Value,
}

/// The query engine.
///
/// Generic over the entity registry so the gateway's live registry and
/// the in-memory test/standalone registry share one implementation.
pub struct QueryEngine<R> {
    registry: Arc<R>,
    group_filters: FilterRegistry<EndpointGroup>,
    endpoint_filters: FilterRegistry<Endpoint>,
    service_filters: FilterRegistry<ServiceRecord>,
    config: ConfigSnapshot,
}

impl<R: MetadataRegistry> QueryEngine<R> {
    /// Build an engine over a registry with the default predicate tables.
    pub fn new(registry: Arc<R>, config: ConfigSnapshot) -> Self {
        Self {
            registry,
            group_filters: tables::endpoint_group_registry(),
            endpoint_filters: tables::endpoint_registry(),
            service_filters: tables::service_registry(),
            config,
        }
    }

    /// The underlying entity registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Endpoint metadata query: two-level filter, sort, paginate.
    pub fn query_endpoints(&self, query: &QueryParams) -> PagedResponse<Endpoint> {
        let group_filters = self.group_filters.compose(query);
        let endpoint_filters = self.endpoint_filters.compose(query);

        let mut candidates = filter_two_level(
            self.registry.endpoint_groups(),
            &group_filters,
            EndpointGroup::into_variants,
            &endpoint_filters,
        );
        sort_deterministic(&mut candidates);

        let total = candidates.len();
        let spec = PageSpec::from_query(query);
        let data = spec.slice(candidates);
        tracing::debug!(
            total,
            returned = data.len(),
            page = spec.page,
            page_size = spec.page_size,
            "endpoint query"
        );
        PagedResponse {
            success: true,
            data,
            page: spec.page,
            page_size: spec.page_size,
            total,
        }
    }

    /// Service metadata query: flat filter, sort, paginate.
    pub fn query_services(&self, query: &QueryParams) -> PagedResponse<ServiceRecord> {
        let filters = self.service_filters.compose(query);

        let mut candidates = filter_flat(self.registry.services(), &filters);
        sort_deterministic(&mut candidates);

        let total = candidates.len();
        let spec = PageSpec::from_query(query);
        let data = spec.slice(candidates);
        tracing::debug!(
            total,
            returned = data.len(),
            page = spec.page,
            page_size = spec.page_size,
            "service query"
        );
        PagedResponse {
            success: true,
            data,
            page: spec.page,
            page_size: spec.page_size,
            total,
        }
    }

    /// Endpoint stats: group counts per application over the unfiltered
    /// snapshot.
    pub fn endpoint_stats(&self) -> StatsResponse<EndpointStats> {
        let (apps, count) = count_by(self.registry.endpoint_groups(), |group| {
            group.representative().application.as_str()
        });
        StatsResponse {
            success: true,
            data: EndpointStats { count, apps },
        }
    }

    /// Service stats: service counts per RPC protocol over the unfiltered
    /// snapshot.
    pub fn service_stats(&self) -> StatsResponse<ServiceStats> {
        let (protos, count) = count_by(self.registry.services(), |srv| srv.rpc_proto.as_str());
        StatsResponse {
            success: true,
            data: ServiceStats { count, protos },
        }
    }

    /// Config metadata query.
    ///
    /// An empty `key` returns the entire resolved scope as a mapping; a
    /// non-empty dotted `key` returns that single value (JSON null when
    /// absent).
    pub fn query_config(&self, query: &QueryParams) -> ConfigResponse {
        let ns = query.first(PARAM_NAMESPACE).unwrap_or("");
        let key = query.first(PARAM_KEY).unwrap_or("");
        if key.is_empty() {
            let namespace = if ns.is_empty() || ns == "all" {
                "all".to_string()
            } else {
                ns.to_string()
            };
            return ConfigResponse {
                namespace,
                key: String::new(),
                value: self.config.namespace(ns),
            };
        }
        ConfigResponse {
            namespace: ns.to_string(),
            key: key.to_string(),
            value: self.config.get(ns, key).cloned().unwrap_or(Value::Null),
        }
    }

    /// Legacy configuration query: the namespace sub-tree as a mapping.
    ///
    /// An optional `match` parameter filters top-level keys by
    /// case-insensitive containment ([`matching::fold_contains`]).
    pub fn query_configuration(&self, query: &QueryParams) -> Value {
        let ns = query.first(PARAM_NS).unwrap_or("");
        let scope = self.config.namespace(ns);
        let Some(pattern) = query.first(PARAM_MATCH).filter(|m| !m.is_empty()) else {
            return scope;
        };
        match scope {
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .filter(|(key, _)| matching::fold_contains(pattern, key))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Env metadata query.
    ///
    /// An empty `key` returns the full process environment; a non-empty
    /// `key` returns that variable's value (JSON null when unset).
    pub fn query_env(&self, query: &QueryParams) -> EnvResponse {
        match query.first(PARAM_KEY).filter(|k| !k.is_empty()) {
            Some(key) => EnvResponse {
                env_key: key.to_string(),
                value: std::env::var(key).map(Value::String).unwrap_or(Value::Null),
            },
            None => {
                let vars: BTreeMap<String, Value> = std::env::vars()
                    .map(|(name, value)| (name, Value::String(value)))
                    .collect();
                EnvResponse {
                    env_key: "all".to_string(),
                    value: Value::Object(vars.into_iter().collect()),
                }
            }
        }
    }
}
