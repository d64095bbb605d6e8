//! Value-matching policies used by the registered predicates.
//!
//! The struct-field policies (`equal`, `contains`, `prefix`) are
//! case-sensitive and accept when ANY of the provided values matches the
//! attribute. The legacy free-text helper [`fold_contains`] is
//! case-insensitive. The legacy configuration surface depends on that
//! difference, so the two families stay distinct named modes.

/// Any provided value is byte-equal to the attribute.
pub fn match_equal(values: &[String], attr: &str) -> bool {
    values.iter().any(|v| v == attr)
}

/// The attribute contains any provided value as a substring.
pub fn match_contains(values: &[String], attr: &str) -> bool {
    values.iter().any(|v| attr.contains(v.as_str()))
}

/// The attribute starts with any provided value.
pub fn match_prefix(values: &[String], attr: &str) -> bool {
    values.iter().any(|v| attr.starts_with(v.as_str()))
}

/// Case-insensitive containment: `expected` contains `input` after both
/// are lower-cased. Used by the legacy configuration key lookup.
pub fn fold_contains(input: &str, expected: &str) -> bool {
    expected.to_lowercase().contains(&input.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn equal_is_case_sensitive_any_of() {
        assert!(match_equal(&values(&["a", "b"]), "b"));
        assert!(!match_equal(&values(&["a"]), "A"));
        assert!(!match_equal(&[], "a"));
    }

    #[test]
    fn contains_matches_substring() {
        assert!(match_contains(&values(&["orders"]), "/api/orders/:id"));
        assert!(!match_contains(&values(&["Orders"]), "/api/orders/:id"));
    }

    #[test]
    fn prefix_matches_start() {
        assert!(match_prefix(&values(&["com.example"]), "com.example.OrderService"));
        assert!(!match_prefix(&values(&["example"]), "com.example.OrderService"));
    }

    #[test]
    fn fold_contains_ignores_case() {
        assert!(fold_contains("HOST", "db.host"));
        assert!(fold_contains("db", "DB.HOST"));
        assert!(!fold_contains("port", "db.host"));
    }
}
