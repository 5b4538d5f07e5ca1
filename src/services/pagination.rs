//! Pagination for list operations
//!
//! Category and expense listings share the same page/limit validation and
//! metadata: total, total_pages, has_prev, has_next.

use crate::error::{MonityError, MonityResult};

/// Default page number
pub const DEFAULT_PAGE: usize = 1;

/// Default page size
pub const DEFAULT_LIMIT: usize = 20;

/// Largest accepted page size
pub const MAX_LIMIT: usize = 100;

/// A validated page/limit pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    /// Build a page request, applying defaults and bounds
    ///
    /// Pages start at 1; the limit must be between 1 and 100.
    pub fn new(page: Option<usize>, limit: Option<usize>) -> MonityResult<Self> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page < 1 {
            return Err(MonityError::InvalidInput(
                "Page must be at least 1".into(),
            ));
        }
        if limit < 1 || limit > MAX_LIMIT {
            return Err(MonityError::InvalidInput(format!(
                "Limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Pagination metadata returned with every listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// One page of results with its metadata
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Transform the items while keeping the metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Slice a full result set into the requested page
///
/// A page past the end yields an empty item list, not an error.
pub fn paginate<T>(mut items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let total_pages = if total == 0 {
        0
    } else {
        (total + request.limit - 1) / request.limit
    };

    let start = (request.page - 1) * request.limit;
    let page_items: Vec<T> = if start >= total {
        Vec::new()
    } else {
        let end = (start + request.limit).min(total);
        items.drain(start..end).collect()
    };

    Page {
        items: page_items,
        meta: PageMeta {
            total,
            page: request.page,
            limit: request.limit,
            total_pages,
            has_prev: request.page > 1,
            has_next: request.page < total_pages,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = PageRequest::new(None, None).unwrap();
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), 20);
    }

    #[test]
    fn test_bounds() {
        assert!(PageRequest::new(Some(0), None).is_err());
        assert!(PageRequest::new(None, Some(0)).is_err());
        assert!(PageRequest::new(None, Some(101)).is_err());
        assert!(PageRequest::new(Some(1), Some(100)).is_ok());

        let err = PageRequest::new(None, Some(200)).unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
    }

    #[test]
    fn test_paginate_middle_page() {
        let items: Vec<i32> = (1..=25).collect();
        let page = paginate(items, PageRequest::new(Some(2), Some(10)).unwrap());

        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.total_pages, 3);
        assert!(page.meta.has_prev);
        assert!(page.meta.has_next);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let items: Vec<i32> = (1..=25).collect();
        let page = paginate(items, PageRequest::new(Some(3), Some(10)).unwrap());

        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert!(page.meta.has_prev);
        assert!(!page.meta.has_next);
    }

    #[test]
    fn test_paginate_past_the_end() {
        let items: Vec<i32> = (1..=5).collect();
        let page = paginate(items, PageRequest::new(Some(4), Some(10)).unwrap());

        assert!(page.items.is_empty());
        assert_eq!(page.meta.total, 5);
        assert_eq!(page.meta.total_pages, 1);
        assert!(!page.meta.has_next);
    }

    #[test]
    fn test_paginate_empty() {
        let page = paginate(Vec::<i32>::new(), PageRequest::default());

        assert!(page.items.is_empty());
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.total_pages, 0);
        assert!(!page.meta.has_prev);
        assert!(!page.meta.has_next);
    }
}
