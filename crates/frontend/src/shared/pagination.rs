//! Pagination index: page count, visible slice bounds and the compressed
//! page-number sequence rendered by the pager.
//!
//! Everything here is a pure function of the filtered count, the page size and
//! the current page.

use std::ops::Range;

/// Up to this many pages every page number is shown
pub const MAX_INLINE_PAGES: usize = 7;

/// One entry of the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIndex {
    pub total_pages: usize,
    pub current_page: usize,
    pub pages: Vec<PageToken>,
}

impl PageIndex {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// `ceil(count / per_page)`, never less than 1
pub fn total_pages(count: usize, per_page: usize) -> usize {
    if count == 0 || per_page == 0 {
        return 1;
    }
    (count + per_page - 1) / per_page
}

/// Clamp a 1-based page into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of the items shown on a 1-based page
pub fn page_bounds(page: usize, per_page: usize, count: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(count);
    let end = start.saturating_add(per_page).min(count);
    start..end
}

/// Compressed page-number sequence.
///
/// First and last page are always present, the current page always is, and a
/// three page window around it. The window is pinned to `2..=4` near the start
/// and to the last three inner pages near the end, so at most one ellipsis
/// appears on each side.
pub fn page_numbers(total_pages: usize, current_page: usize) -> Vec<PageToken> {
    let total = total_pages.max(1);
    if total <= MAX_INLINE_PAGES {
        return (1..=total).map(PageToken::Page).collect();
    }

    let current = clamp_page(current_page, total);
    let (start, end) = if current <= 3 {
        (2, 4)
    } else if current >= total - 2 {
        (total - 3, total - 1)
    } else {
        (current - 1, current + 1)
    };

    let mut pages = Vec::with_capacity(end - start + 5);
    pages.push(PageToken::Page(1));
    if start > 2 {
        pages.push(PageToken::Ellipsis);
    }
    pages.extend((start..=end).map(PageToken::Page));
    if end < total - 1 {
        pages.push(PageToken::Ellipsis);
    }
    pages.push(PageToken::Page(total));
    pages
}

pub fn page_index(filtered_count: usize, per_page: usize, current_page: usize) -> PageIndex {
    let total = total_pages(filtered_count, per_page);
    let current = clamp_page(current_page, total);
    PageIndex {
        total_pages: total,
        current_page: current,
        pages: page_numbers(total, current),
    }
}
