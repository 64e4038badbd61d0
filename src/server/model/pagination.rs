//! Page selection and paged result models.

use crate::model::api::{PagedResultDto, PaginationMetaDataDto, PaginationQuery};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 50;

/// Highest page number whose row offset still fits SQLite's signed 64-bit OFFSET.
pub const MAX_PAGE_NUMBER: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// Normalized page selection.
///
/// `page_number` is 1-based and clamped to `1..=MAX_PAGE_NUMBER`; `page_size` is clamped
/// to `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page_number: u64, page_size: u64) -> Self {
        Self {
            page_number: page_number.clamp(1, MAX_PAGE_NUMBER),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Zero-based page index as expected by SeaORM paginators.
    pub fn page_index(&self) -> u64 {
        self.page_number - 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

impl From<PaginationQuery> for PageRequest {
    fn from(query: PaginationQuery) -> Self {
        Self::new(query.page_number, query.page_size)
    }
}

/// One page of domain models together with the total number of matching rows.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: PageRequest,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total_count: u64, page: PageRequest) -> Self {
        Self {
            items,
            total_count,
            page,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(self.page.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page.page_number < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page.page_number > 1
    }

    /// Converts each item, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paged<U> {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
        }
    }

    /// Converts the page into the API result shape using `f` for each item.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PagedResultDto<D> {
        let meta_data = PaginationMetaDataDto {
            total_count: self.total_count,
            page_size: self.page.page_size,
            current_page: self.page.page_number,
            total_pages: self.total_pages(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        };

        PagedResultDto {
            data: self.items.into_iter().map(f).collect(),
            meta_data,
        }
    }
}
