//! In-memory metadata registry.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::{MetadataRegistry, RegistrySeed};
use crate::fingerprint::fingerprint;
use crate::types::{Endpoint, EndpointGroup, ServiceRecord};

/// In-memory registry, grouping endpoints by route identity.
///
/// Endpoints registered under the same `(http_method, http_pattern)` land
/// in one group, which upholds the uniformity contract documented on
/// [`EndpointGroup`]. BTreeMap keeps iteration order deterministic; the
/// lock admits concurrent readers.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    groups: BTreeMap<(String, String), EndpointGroup>,
    services: Vec<ServiceRecord>,
}

impl InMemoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate a registry from a serialized seed.
    pub fn from_seed(seed: RegistrySeed) -> Self {
        let registry = Self::new();
        for endpoint in seed.endpoints {
            registry.register_endpoint(endpoint);
        }
        for service in seed.services {
            registry.register_service(service);
        }
        registry
    }

    /// Register an endpoint variant, creating or extending its group.
    pub fn register_endpoint(&self, endpoint: Endpoint) {
        let key = (endpoint.http_method.clone(), endpoint.http_pattern.clone());
        let mut inner = self.inner.write();
        match inner.groups.entry(key) {
            Entry::Occupied(mut occupied) => occupied.get_mut().push(endpoint),
            Entry::Vacant(vacant) => {
                vacant.insert(EndpointGroup::new(endpoint));
            }
        }
    }

    /// Register a service.
    pub fn register_service(&self, service: ServiceRecord) {
        self.inner.write().services.push(service);
    }

    /// Number of endpoint groups currently registered.
    pub fn group_count(&self) -> usize {
        self.inner.read().groups.len()
    }

    /// Number of services currently registered.
    pub fn service_count(&self) -> usize {
        self.inner.read().services.len()
    }
}

impl MetadataRegistry for InMemoryRegistry {
    fn endpoint_groups(&self) -> Vec<EndpointGroup> {
        self.inner.read().groups.values().cloned().collect()
    }

    fn services(&self) -> Vec<ServiceRecord> {
        self.inner.read().services.clone()
    }

    fn fingerprint(&self) -> String {
        let inner = self.inner.read();
        let groups: Vec<&EndpointGroup> = inner.groups.values().collect();
        fingerprint(&(&groups, &inner.services))
    }
}
