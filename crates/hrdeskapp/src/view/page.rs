//! Pagination.
//!
//! [`PageState`] is the page cursor a screen keeps between renders;
//! [`paginate`] cuts the page out of an already filtered and sorted sequence.
//! The requested page is always clamped into `[1, total_pages]`, and
//! `total_pages` is never below 1, so an empty view is a single empty page.

use serde::{Deserialize, Serialize};

use crate::error::{HrdeskError, Result};

/// Page sizes a screen may offer.
pub const PAGE_SIZES: [usize; 6] = [10, 20, 25, 30, 50, 100];

/// A page size from [`PAGE_SIZES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self> {
        if PAGE_SIZES.contains(&size) {
            Ok(Self(size))
        } else {
            Err(HrdeskError::InvalidPageSize(size))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(PAGE_SIZES[0])
    }
}

impl TryFrom<usize> for PageSize {
    type Error = HrdeskError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.0
    }
}

/// `max(1, ceil(count / page_size))`.
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    page: usize,
    page_size: PageSize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PageState {
    pub fn new(page_size: PageSize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Move to `page`, clamped to at least 1. Leaves the page size alone.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Move to `page`, clamped into `[1, total_pages]`.
    pub fn set_page_within(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Change the page size; always returns to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}

/// One page of a view plus the counts needed to render a pager.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewResult<T> {
    pub items: Vec<T>,
    /// Records that passed the filter, across all pages.
    pub total_count: usize,
    pub total_pages: usize,
    /// The page actually shown, after clamping.
    pub page: usize,
    pub page_size: usize,
}

impl<T> ViewResult<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based inclusive positions of the shown items, for "11–20 of 45".
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> ViewResult<U> {
        ViewResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

impl<T: Clone> ViewResult<&T> {
    pub fn cloned(self) -> ViewResult<T> {
        self.map(T::clone)
    }
}

/// Cut the requested page out of `items`. Never reorders.
pub fn paginate<T>(items: Vec<T>, state: &PageState) -> ViewResult<T> {
    let total_count = items.len();
    let page_size = state.page_size().get();
    let total_pages = total_pages(total_count, state.page_size());
    let page = state.page().clamp(1, total_pages);
    let start = (page - 1) * page_size;

    ViewResult {
        items: items.into_iter().skip(start).take(page_size).collect(),
        total_count,
        total_pages,
        page,
        page_size,
    }
}
