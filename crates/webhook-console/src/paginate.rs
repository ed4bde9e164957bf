use std::ops::Range;

pub const LOGS_PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` items, i.e. `ceil(len / page_size)`.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Current page (1-based) over a filtered collection with a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Moves to `page`, clamped to `[1, max(total_pages, 1)]`.
    pub fn set_page(&mut self, page: usize, len: usize) {
        let last = total_pages(len, self.page_size).max(1);
        self.page = page.clamp(1, last);
    }

    pub fn next(&mut self, len: usize) {
        self.set_page(self.page + 1, len);
    }

    pub fn previous(&mut self, len: usize) {
        self.set_page(self.page.saturating_sub(1), len);
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    pub fn start(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// Index range of the current page within a collection of `len` items.
    /// Empty when the page lies past the end.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.start().min(len);
        let end = (self.start() + self.page_size).min(len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// "Showing 11-20 of 42" style label for the current page.
    pub fn range_label(&self, len: usize) -> String {
        if len == 0 {
            return "Showing 0 of 0".to_string();
        }
        let range = self.range(len);
        if range.is_empty() {
            return format!("Showing 0 of {}", len);
        }
        format!("Showing {}-{} of {}", range.start + 1, range.end, len)
    }
}
