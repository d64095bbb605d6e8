//! Entity registry abstraction.

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::types::{Endpoint, EndpointGroup, ServiceRecord};

/// Read-only snapshot access to the gateway's entity registry.
///
/// Queries materialize a snapshot per call and never mutate the source.
/// Implementations must be safe for concurrent readers; snapshot order is
/// registry-defined (not guaranteed sorted) but must be consistent while
/// the contents are unchanged.
pub trait MetadataRegistry: Send + Sync {
    /// Snapshot of all endpoint groups, in registry-defined order.
    fn endpoint_groups(&self) -> Vec<EndpointGroup>;

    /// Snapshot of all registered services, in registry-defined order.
    fn services(&self) -> Vec<ServiceRecord>;

    /// Canonical fingerprint of the current contents.
    ///
    /// An unchanged fingerprint guarantees identical query ordering across
    /// calls.
    fn fingerprint(&self) -> String;
}

/// Serializable registry contents.
///
/// Used to seed an in-memory registry from a captured gateway snapshot
/// (the service binary's `REGISTRY_FILE`) and by tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySeed {
    /// Endpoint variants; grouping happens on registration.
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    /// Registered services.
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
}

pub use memory::InMemoryRegistry;
