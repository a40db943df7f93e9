//! Listing query parameters and pagination
//!
//! [`paginate`] is a pure function implementing the forgiving page-number
//! policy the site's listings have always had:
//!
//! - missing or non-numeric page -> page 1
//! - numeric but out of range (including 0 and negatives) -> the last page
//! - empty result set -> one empty page, never an error
//!
//! The page number arrives as a raw string because that is what a query
//! string gives us; deciding what "page=abc" means is this module's job,
//! not the handler's.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the listing endpoints
///
/// # Example
/// ```text
/// GET /blog?page=2
/// GET /blog?page=2&category=silver-gelatin
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingQuery {
    /// Requested page number, kept as text until [`paginate`] interprets it
    pub page: Option<String>,

    /// Category slug filter (only honored by sections with categories)
    pub category: Option<String>,
}

/// One page of results plus the metadata needed to render page navigation
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Current page number (starts at 1)
    pub page: usize,
    /// Items per page
    pub page_size: usize,
    /// Total number of items across all pages
    pub total_items: usize,
    /// Total number of pages (at least 1, even when empty)
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Paginated<T> {
    /// Map the items of a page, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Slice an already ordered, already filtered collection into one page.
///
/// `requested` is the raw `page` query parameter. See the module docs for
/// the out-of-range policy.
pub fn paginate<T>(items: Vec<T>, requested: Option<&str>, page_size: usize) -> Paginated<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = (total_items.div_ceil(page_size)).max(1);

    let page = match requested {
        None => 1,
        Some(raw) => match raw.trim().parse::<i64>() {
            // Non-numeric input falls back to the first page
            Err(_) => 1,
            // Numeric but outside [1, total_pages] clamps to the last page
            Ok(n) if n < 1 => total_pages,
            Ok(n) if n as usize > total_pages => total_pages,
            Ok(n) => n as usize,
        },
    };

    let items: Vec<T> = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Paginated {
        items,
        meta: PageMeta {
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_page_by_default() {
        let page = paginate(nums(25), None, 10);
        assert_eq!(page.items, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.total_pages, 3);
        assert!(page.meta.has_next);
        assert!(!page.meta.has_previous);
    }

    #[test]
    fn test_non_numeric_falls_back_to_first_page() {
        let page = paginate(nums(25), Some("abc"), 10);
        assert_eq!(page.meta.page, 1);

        let page = paginate(nums(25), Some(""), 10);
        assert_eq!(page.meta.page, 1);

        let page = paginate(nums(25), Some("2.5"), 10);
        assert_eq!(page.meta.page, 1);
    }

    #[test]
    fn test_beyond_range_returns_last_page() {
        let page = paginate(nums(25), Some("9999"), 10);
        assert_eq!(page.meta.page, 3);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert!(!page.meta.has_next);
        assert!(page.meta.has_previous);
    }

    #[test]
    fn test_zero_and_negative_return_last_page() {
        let page = paginate(nums(25), Some("0"), 10);
        assert_eq!(page.meta.page, 3);

        let page = paginate(nums(25), Some("-1"), 10);
        assert_eq!(page.meta.page, 3);
    }

    #[test]
    fn test_empty_collection_yields_single_empty_page() {
        let page = paginate(Vec::<usize>::new(), None, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.total_pages, 1);
        assert_eq!(page.meta.total_items, 0);
        assert!(!page.meta.has_next);
        assert!(!page.meta.has_previous);

        // Even with an explicit huge page number
        let page = paginate(Vec::<usize>::new(), Some("7"), 10);
        assert_eq!(page.meta.page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_exact_boundary() {
        let page = paginate(nums(20), Some("2"), 10);
        assert_eq!(page.items, vec![11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
        assert_eq!(page.meta.total_pages, 2);
        assert!(!page.meta.has_next);
    }
}
