//! Pagination of listing results.

use serde::Serialize;

/// One page of a larger result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number after clamping.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// Slice `items` into the requested page.
    ///
    /// The page number is clamped into `1..=total_pages`; an empty list
    /// yields page 1 of 0. A `per_page` of zero is treated as one.
    #[must_use]
    pub fn paginate(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page);
        let current_page = page.clamp(1, total_pages.max(1));

        let start = (current_page - 1) * per_page;
        let items = items.into_iter().skip(start).take(per_page).collect();

        Self {
            items,
            current_page,
            total_pages,
            total_items,
        }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}
