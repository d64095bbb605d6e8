//! Two-level filter pipeline.
//!
//! One generic implementation serves every entity shape: the two-pass
//! semantics are parameterized over a flatten accessor instead of being
//! duplicated per shape.

use super::ActiveFilters;

/// Apply grouped-level predicates, flatten the survivors, then apply
/// variant-level predicates.
///
/// Output preserves flatten order: group order first, within-group order
/// second. No reordering happens at this stage. An empty result is a
/// valid, successful outcome.
pub fn filter_two_level<G, V, F, I>(
    groups: I,
    group_filters: &ActiveFilters<G>,
    flatten: F,
    variant_filters: &ActiveFilters<V>,
) -> Vec<V>
where
    I: IntoIterator<Item = G>,
    F: Fn(G) -> Vec<V>,
{
    groups
        .into_iter()
        .filter(|group| group_filters.matches(group))
        .flat_map(flatten)
        .filter(|variant| variant_filters.matches(variant))
        .collect()
}

/// Single-level pipeline for entity shapes with no grouping.
pub fn filter_flat<V, I>(items: I, filters: &ActiveFilters<V>) -> Vec<V>
where
    I: IntoIterator<Item = V>,
{
    items
        .into_iter()
        .filter(|item| filters.matches(item))
        .collect()
}
