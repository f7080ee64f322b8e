//! Fixed-size page windows over a record set.
//!
//! Navigation clamps at both ends instead of failing; every index the
//! paginator holds is produced internally.

use serde::Serialize;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::models::{Record, RecordSet};

/// One page of records plus the numbers needed to label it
///
/// All numbers are 1-based for display, and all are 0 when there are no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow<'a> {
    pub page_number: usize,
    pub total_pages: usize,
    pub first_record_number: usize,
    pub last_record_number: usize,
    pub total_records: usize,
    pub records: &'a [Record],
}

impl PageWindow<'_> {
    /// `Page X of Y (a-b of N records)`, or `Page 0 of 0 (0 records)`
    pub fn label(&self) -> String {
        if self.total_records == 0 {
            return "Page 0 of 0 (0 records)".to_string();
        }

        format!(
            "Page {} of {} ({}-{} of {} records)",
            self.page_number,
            self.total_pages,
            self.first_record_number,
            self.last_record_number,
            self.total_records
        )
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Owns the current record set and the index of the page being viewed
#[derive(Debug, Clone)]
pub struct Paginator {
    records: RecordSet,
    page_size: usize,
    page_index: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(RecordSet::new(), DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Create a paginator positioned on the first page
    ///
    /// A page size of 0 is treated as 1.
    pub fn new(records: RecordSet, page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
            page_index: 0,
        }
    }

    /// Replace the record set and return to the first page
    pub fn reset(&mut self, records: RecordSet) {
        self.records = records;
        self.page_index = 0;
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the current page
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn total_pages(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }

    pub fn can_go_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.page_index + 1 < self.total_pages()
    }

    /// Step back one page. Returns false when already on the first page.
    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Step forward one page. Returns false when already on the last page.
    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.page_index += 1;
        true
    }

    pub fn go_first(&mut self) {
        self.page_index = 0;
    }

    pub fn go_last(&mut self) {
        self.page_index = self.total_pages().saturating_sub(1);
    }

    /// Jump to a 1-based page number, clamped into range
    pub fn go_to(&mut self, page_number: usize) {
        let last = self.total_pages().saturating_sub(1);
        self.page_index = page_number.saturating_sub(1).min(last);
    }

    pub fn current_page(&self) -> PageWindow<'_> {
        let total = self.records.len();
        if total == 0 {
            return PageWindow {
                page_number: 0,
                total_pages: 0,
                first_record_number: 0,
                last_record_number: 0,
                total_records: 0,
                records: &[],
            };
        }

        let start = self.page_index * self.page_size;
        let end = (start + self.page_size).min(total);

        PageWindow {
            page_number: self.page_index + 1,
            total_pages: self.total_pages(),
            first_record_number: start + 1,
            last_record_number: end,
            total_records: total,
            records: &self.records[start..end],
        }
    }

    /// Iterate every page from first to last without moving the cursor
    pub fn pages(&self) -> impl Iterator<Item = &[Record]> {
        self.records.chunks(self.page_size)
    }
}
