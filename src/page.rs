//! Bounds-safe pagination.

use crate::types::QueryParams;

/// Pagination parameter: 1-based page number.
pub const PARAM_PAGE: &str = "page";
/// Pagination parameter: items per page.
pub const PARAM_PAGE_SIZE: &str = "pageSize";

const DEFAULT_PAGE: usize = 1;
const DEFAULT_PAGE_SIZE: usize = 10;
const MAX_PAGE_SIZE: usize = 100;

/// Resolved, clamped pagination parameters for one query.
///
/// Derived fresh per request and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// Requested page, floor-clamped to 1.
    pub page: usize,
    /// Requested page size, clamped to `[1, 100]`.
    pub page_size: usize,
    start: usize,
    end: usize,
}

impl PageSpec {
    /// Resolve a page/size pair into a raw index range.
    pub fn new(page: usize, page_size: usize) -> Self {
        let page = page.max(DEFAULT_PAGE);
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        let start = (page - 1).saturating_mul(page_size);
        let end = start.saturating_add(page_size);
        Self {
            page,
            page_size,
            start,
            end,
        }
    }

    /// Parse `page`/`pageSize` from the query.
    ///
    /// Non-numeric input falls back to the defaults (page 1, size 10)
    /// rather than failing; out-of-range input is clamped.
    pub fn from_query(query: &QueryParams) -> Self {
        let page = query
            .first(PARAM_PAGE)
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PAGE);
        let page_size = query
            .first(PARAM_PAGE_SIZE)
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self::new(page, page_size)
    }

    /// Clamp the raw range into `[0, total]`.
    ///
    /// `end >= start` holds by construction, so a page requested past the
    /// end of the data yields an empty, valid range rather than an
    /// invalid slice.
    pub fn clamp(&self, total: usize) -> (usize, usize) {
        (self.start.min(total), self.end.min(total))
    }

    /// Slice the sorted candidate list to this page.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let (start, end) = self.clamp(items.len());
        items
            .into_iter()
            .skip(start)
            .take(end - start)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent_or_malformed() {
        let spec = PageSpec::from_query(&QueryParams::new());
        assert_eq!((spec.page, spec.page_size), (1, 10));

        let spec = PageSpec::from_query(&QueryParams::from_pairs([
            (PARAM_PAGE, "abc"),
            (PARAM_PAGE_SIZE, "-3"),
        ]));
        assert_eq!((spec.page, spec.page_size), (1, 10));
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let spec = PageSpec::new(0, 1000);
        assert_eq!((spec.page, spec.page_size), (1, 100));
    }

    #[test]
    fn second_page_of_size_one_selects_second_element() {
        let spec = PageSpec::new(2, 1);
        assert_eq!(spec.slice(vec![10, 20, 30]), vec![20]);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let spec = PageSpec::new(10, 10);
        assert!(spec.slice(vec![1, 2, 3]).is_empty());
    }

    #[test]
    fn full_first_page_keeps_the_last_element() {
        let spec = PageSpec::new(1, 10);
        assert_eq!(spec.slice(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn slice_length_matches_the_pagination_invariant() {
        for total in 0..25usize {
            for page in 1..6usize {
                for page_size in [1usize, 2, 7, 10] {
                    let spec = PageSpec::new(page, page_size);
                    let items: Vec<usize> = (0..total).collect();
                    let got = spec.slice(items).len();
                    let want = page_size.min(total.saturating_sub((page - 1) * page_size));
                    assert_eq!(got, want, "total={total} page={page} size={page_size}");
                }
            }
        }
    }
}
