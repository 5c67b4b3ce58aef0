use serde::Serialize;

/// Number of pages needed for `total` items: `ceil(total / page_size)`.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Items `[(page - 1) * page_size, page * page_size)` clamped to the slice.
///
/// Pages are 1-indexed. Page 0 and pages past the end give an empty slice;
/// callers are not required to bound-check first.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Where the current page sits within the filtered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageInfo {
    pub fn new(page: usize, page_size: usize, total_items: usize) -> Self {
        Self {
            page,
            page_size,
            total_items,
            total_pages: page_count(total_items, page_size),
        }
    }

    /// Whether the current page lies within `1..=total_pages`.
    pub fn in_range(&self) -> bool {
        self.page >= 1 && self.page <= self.total_pages
    }

    /// Page links `1..=total_pages`, flagged when active.
    pub fn page_links(&self) -> Vec<(usize, bool)> {
        (1..=self.total_pages).map(|n| (n, n == self.page)).collect()
    }
}
