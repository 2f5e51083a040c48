//! # Pagination: 1-based page windows and the pager control policy
//!
//! [`paginate`] slices a filtered collection into a [`PageWindow`]: the items
//! for one pager position plus the 1-based, inclusive display indices for
//! "Showing X-Y of N results". [`pager_items`] turns a current page and total
//! page count into the button row the pager renders (first page, neighbors of
//! the current page, ellipses, last page).
//!
//! Page numbers are 1-based throughout. Page 0 is clamped to 1; requesting a
//! page beyond the last yields an empty window (indices `0/0`) rather than an
//! error, so a stale page number after a filter change degrades gracefully.

/// A contiguous slice of a filtered collection for one pager position.
#[derive(Clone, Debug, PartialEq)]
pub struct PageWindow<T> {
    pub items: Vec<T>,
    /// The (clamped) 1-based page this window represents.
    pub page: u32,
    pub page_size: u32,
    /// Total item count of the underlying collection.
    pub total: usize,
    /// 1-based inclusive display index of the first item; 0 when empty.
    pub first_index: usize,
    /// 1-based inclusive display index of the last item; 0 when empty.
    pub last_index: usize,
}

impl<T> PageWindow<T> {
    /// The "Showing X-Y of N results" line under the table.
    pub fn summary(&self) -> String {
        format!(
            "Showing {}-{} of {} results",
            self.first_index, self.last_index, self.total
        )
    }
}

/// Total page count: `ceil(total / page_size)`.
pub fn total_pages(total: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size as usize) as u32
}

/// Slice `items` into the window for a 1-based `page`.
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: u32) -> PageWindow<T> {
    let page = page.max(1);
    let total = items.len();
    let start = (page as usize - 1).saturating_mul(page_size as usize);
    let end = start.saturating_add(page_size as usize).min(total);

    let slice: Vec<T> = if start < end {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    let (first_index, last_index) = if slice.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    PageWindow {
        items: slice,
        page,
        page_size,
        total,
        first_index,
        last_index,
    }
}

/// One element of the pager button row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerItem {
    Page(u32),
    Ellipsis,
}

/// The page-button row for a pager control.
///
/// Always shows page 1 and the last page; shows the current page and its
/// immediate neighbors; collapses the gaps to an ellipsis. The prev/next
/// arrows are not part of the row; disable them with
/// [`has_prev`]/[`has_next`].
pub fn pager_items(current: u32, total_pages: u32) -> Vec<PagerItem> {
    let total = total_pages.max(1);
    let current = current.clamp(1, total);
    let mut items = vec![PagerItem::Page(1)];

    if current > 3 {
        items.push(PagerItem::Ellipsis);
    }

    let low = current.saturating_sub(1).max(2);
    let high = (current + 1).min(total.saturating_sub(1));
    for page in low..=high {
        items.push(PagerItem::Page(page));
    }

    if current + 2 < total {
        items.push(PagerItem::Ellipsis);
    }

    if total > 1 {
        items.push(PagerItem::Page(total));
    }

    items
}

/// Whether the "previous" arrow is enabled.
pub fn has_prev(current: u32) -> bool {
    current > 1
}

/// Whether the "next" arrow is enabled.
pub fn has_next(current: u32, total_pages: u32) -> bool {
    current < total_pages
}
