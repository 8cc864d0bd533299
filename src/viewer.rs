//! Paged, read-only traversal of a filtered dataset.

use crate::dataset::{Dataset, TripRecord};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Walks a dataset a page at a time in row order, starting at offset 0.
#[derive(Debug)]
pub struct RowPager<'a> {
    dataset: &'a Dataset,
    offset: usize,
    page_size: usize,
}

impl<'a> RowPager<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_page_size(dataset, PAGE_SIZE)
    }

    /// A `page_size` of 0 is treated as 1.
    pub fn with_page_size(dataset: &'a Dataset, page_size: usize) -> Self {
        Self {
            dataset,
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True once every row has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.dataset.len()
    }

    /// Returns the next page; the final page may be short, and every call
    /// after that returns an empty slice.
    pub fn next_page(&mut self) -> &'a [TripRecord] {
        let records = self.dataset.records();
        let start = self.offset.min(records.len());
        let end = (start + self.page_size).min(records.len());
        self.offset = self.offset.saturating_add(self.page_size);
        &records[start..end]
    }
}

impl<'a> Iterator for RowPager<'a> {
    type Item = &'a [TripRecord];

    fn next(&mut self) -> Option<Self::Item> {
        let page = self.next_page();
        (!page.is_empty()).then_some(page)
    }
}
