//! Translation between 1-based API pages and zero-based paginator pages.

use crate::server::model::pagination::Paginated;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Largest row offset a page may start at; SQL offsets are signed 64-bit.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Normalised page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Builds a page request, treating page 0 as page 1 and clamping the size to
    /// `1..=MAX_PAGE_SIZE`.
    ///
    /// Pages past `MAX_OFFSET` are pulled back to the last page whose offset still
    /// fits, which is always empty.
    pub fn new(page: u64, page_size: u64) -> Self {
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        let last_page = MAX_OFFSET / page_size;

        Self {
            page: page.clamp(1, last_page),
            page_size,
        }
    }

    /// Zero-based page index for SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    /// Wraps one fetched page with its totals.
    pub fn paginate<T>(&self, items: Vec<T>, total: u64) -> Paginated<T> {
        Paginated {
            items,
            total,
            page: self.page,
            page_size: self.page_size,
            total_pages: total.div_ceil(self.page_size),
        }
    }
}
