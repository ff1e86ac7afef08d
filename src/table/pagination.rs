use std::ops::Range;

/// Page bookkeeping for a fixed page size.
///
/// The page index always stays within `[0, page_count - 1]`. An empty row
/// set still counts as a single (empty) page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    page_index: usize,
    page_size: usize,
    row_count: usize,
}

impl PaginationState {
    pub fn new(page_size: usize, row_count: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            row_count,
        }
    }

    /// Replace the row count; the page index resets to the first page.
    pub fn reset(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.page_index = 0;
    }

    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.row_count.div_ceil(self.page_size).max(1)
    }

    #[must_use]
    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    #[must_use]
    pub fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// Move forward one page. Returns whether the index changed.
    pub fn next_page(&mut self) -> bool {
        if self.can_next_page() {
            self.page_index += 1;
            true
        } else {
            false
        }
    }

    /// Move back one page. Returns whether the index changed.
    pub fn previous_page(&mut self) -> bool {
        if self.can_previous_page() {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a page, clamped to the last page.
    pub fn go_to_page(&mut self, page_index: usize) {
        self.page_index = page_index.min(self.page_count() - 1);
    }

    /// Row indices covered by the current page.
    #[must_use]
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(self.row_count);
        let end = (start + self.page_size).min(self.row_count);
        start..end
    }

    #[must_use]
    pub fn page_len(&self) -> usize {
        self.page_range().len()
    }
}
