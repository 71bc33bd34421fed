//! Pagination type for list endpoints.
//!
//! Listing pages are zero-based with a fixed page size of 20. Results
//! are ordered by insertion, so a given (owner, parent, page) triple is
//! stable in the absence of concurrent writes.

use serde::{Deserialize, Serialize};

/// Fixed number of records per page.
pub const PAGE_SIZE: u64 = 20;

/// A zero-based page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(pub u64);

impl Page {
    /// First page.
    pub fn first() -> Self {
        Self(0)
    }

    /// The SQL `OFFSET` value for this page. Saturates rather than
    /// overflowing on absurd client-supplied page numbers.
    pub fn offset(&self) -> u64 {
        self.0.saturating_mul(PAGE_SIZE)
    }

    /// The SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_multiples_of_page_size() {
        assert_eq!(Page(0).offset(), 0);
        assert_eq!(Page(1).offset(), 20);
        assert_eq!(Page(5).offset(), 100);
        assert_eq!(Page(3).limit(), 20);
    }

    #[test]
    fn huge_page_numbers_saturate_instead_of_overflowing() {
        assert_eq!(Page(u64::MAX).offset(), u64::MAX);
        assert_eq!(Page(u64::MAX / PAGE_SIZE + 1).offset(), u64::MAX);
    }
}
