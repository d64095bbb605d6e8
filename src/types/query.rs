//! Request-scoped query parameters.

use std::collections::BTreeMap;

/// An immutable mapping from parameter name to one-or-more string values,
/// derived once per request from the transport's key/value pairs.
///
/// Never mutated after the predicate composer consumes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    /// An empty parameter set (the no-filter query).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from transport key/value pairs; repeated names accumulate.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in pairs {
            params.entry(name.into()).or_default().push(value.into());
        }
        Self { params }
    }

    /// All values supplied for a parameter name.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.params.get(name).map(Vec::as_slice)
    }

    /// The first value supplied for a parameter name, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// True if no parameters were supplied.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
