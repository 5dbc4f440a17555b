//! Paging parameters as the storefront sees them.
//!
//! The UI counts pages from 1; the catalog wire counts from 0. Holding the
//! 1-based pair here and converting once in [`PageRequest::offset_page`]
//! keeps the off-by-one out of both the controllers and the gateway call
//! sites.

/// Page size used when a view does not choose one.
pub const DEFAULT_LIMIT: u32 = 10;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Creates a request, clamping both fields to their minimum of 1.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// The first page at the given limit.
    pub fn first(limit: u32) -> Self {
        Self::new(1, limit)
    }

    /// The 0-based page index the catalog service expects.
    pub fn offset_page(&self) -> u32 {
        self.page - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_and_limit_are_clamped_to_one() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req, PageRequest { page: 1, limit: 1 });
    }

    #[test]
    fn wire_page_is_zero_based() {
        assert_eq!(PageRequest::new(1, 10).offset_page(), 0);
        assert_eq!(PageRequest::new(3, 10).offset_page(), 2);
    }

    #[test]
    fn default_is_first_page_of_ten() {
        let req = PageRequest::default();
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, DEFAULT_LIMIT);
    }
}
