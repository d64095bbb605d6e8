//! Predicate registration and AND-composition.
//!
//! One [`FilterRegistry`] exists per queryable entity shape (endpoint
//! group, endpoint variant, service). Registries are populated by an
//! explicit builder step during engine construction (see [`tables`]) and
//! are read-only afterwards, so queries need no locking.

pub mod pipeline;
pub mod tables;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::types::QueryParams;

/// A registered predicate: a pure, stateless test of one entity against
/// the values supplied for one query parameter.
pub type FilterFn<T> = Arc<dyn Fn(&[String], &T) -> bool + Send + Sync>;

/// Mapping from query-parameter name to predicate for one entity shape.
///
/// Registration is last-writer-wins and happens only during engine
/// construction; there is no removal operation.
pub struct FilterRegistry<T> {
    filters: BTreeMap<&'static str, FilterFn<T>>,
}

impl<T> FilterRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            filters: BTreeMap::new(),
        }
    }

    /// Register a predicate under a parameter name.
    ///
    /// Registering the same name again replaces the previous predicate.
    pub fn register<F>(&mut self, name: &'static str, filter: F)
    where
        F: Fn(&[String], &T) -> bool + Send + Sync + 'static,
    {
        self.filters.insert(name, Arc::new(filter));
    }

    /// Look up the predicate registered under a parameter name.
    pub fn lookup(&self, name: &str) -> Option<&FilterFn<T>> {
        self.filters.get(name)
    }

    /// Number of registered parameter names.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Bind the predicates named by `query` into the active AND set.
    ///
    /// Parameters unknown to this registry are silently ignored. A
    /// parameter whose value list is empty or contains any empty string is
    /// treated as absent: malformed query strings must not over-match. If
    /// nothing binds, the set holds a single always-true predicate so
    /// downstream logic never special-cases "no filters".
    pub fn compose(&self, query: &QueryParams) -> ActiveFilters<T> {
        let mut bound = Vec::new();
        for (name, filter) in &self.filters {
            let Some(values) = query.values(name) else {
                continue;
            };
            if values.is_empty() || values.iter().any(|v| v.is_empty()) {
                continue;
            }
            bound.push(BoundFilter {
                values: values.to_vec(),
                filter: Arc::clone(filter),
            });
        }
        if bound.is_empty() {
            bound.push(BoundFilter {
                values: Vec::new(),
                filter: Arc::new(|_, _| true),
            });
        }
        ActiveFilters { filters: bound }
    }
}

impl<T> Default for FilterRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A predicate bound to the query values supplied for its parameter.
pub struct BoundFilter<T> {
    values: Vec<String>,
    filter: FilterFn<T>,
}

impl<T> BoundFilter<T> {
    /// Evaluate the predicate against one entity.
    pub fn matches(&self, entity: &T) -> bool {
        (self.filter)(&self.values, entity)
    }
}

/// The active predicate set for one request.
///
/// Combination is logical AND: an entity passes only if every bound
/// predicate returns true.
pub struct ActiveFilters<T> {
    filters: Vec<BoundFilter<T>>,
}

impl<T> ActiveFilters<T> {
    /// True if the entity satisfies every active predicate.
    pub fn matches(&self, entity: &T) -> bool {
        self.filters.iter().all(|f| f.matches(entity))
    }

    /// Number of bound predicates (at least one; see
    /// [`FilterRegistry::compose`]).
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Never true: composition always yields at least the match-all
    /// predicate.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
