//! Count-by-key aggregation over the unfiltered snapshot.

use std::collections::BTreeMap;

/// Count items by a grouping attribute.
///
/// Returns the per-key counts and the grand total. No filtering, no
/// pagination; the map iterates in key order purely for deterministic
/// serialization.
pub fn count_by<T, I, F>(items: I, key: F) -> (BTreeMap<String, usize>, usize)
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> &str,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0;
    for item in items {
        total += 1;
        *counts.entry(key(&item).to_string()).or_insert(0) += 1;
    }
    (counts, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_total_agree() {
        let items = vec!["a", "b", "a", "c", "a"];
        let (counts, total) = count_by(items, |s| *s);

        assert_eq!(total, 5);
        assert_eq!(counts.get("a"), Some(&3));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(counts.get("c"), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), total);
    }

    #[test]
    fn empty_input_yields_zero_total() {
        let (counts, total) = count_by(Vec::<&str>::new(), |s| *s);
        assert!(counts.is_empty());
        assert_eq!(total, 0);
    }
}
