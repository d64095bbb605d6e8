//! Service metadata types.

use serde::{Deserialize, Serialize};

/// One registered callable: the service-level leaf entity.
///
/// Independent of [`super::EndpointGroup`]; queried through its own
/// predicate set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    /// Fully qualified interface name.
    pub interface: String,
    /// Method name on the interface.
    pub method: String,
    /// RPC protocol tag.
    pub rpc_proto: String,
}

impl ServiceRecord {
    /// Create a new service record.
    pub fn new(
        interface: impl Into<String>,
        method: impl Into<String>,
        rpc_proto: impl Into<String>,
    ) -> Self {
        Self {
            interface: interface.into(),
            method: method.into(),
            rpc_proto: rpc_proto.into(),
        }
    }

    /// Derived identifier that endpoint variants reference.
    pub fn service_id(&self) -> String {
        format!("{}:{}", self.interface, self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_id_joins_interface_and_method() {
        let record = ServiceRecord::new("com.example.OrderService", "list", "dubbo");
        assert_eq!(record.service_id(), "com.example.OrderService:list");
    }
}
