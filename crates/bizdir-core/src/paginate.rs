// Rust guideline compliant 2026-02-06

//! Fixed-size pagination and page navigation metadata.

use serde::{Deserialize, Serialize};

/// Number of listings per directory page.
pub const PAGE_SIZE: usize = 9;

/// Page lists longer than this are compressed with ellipsis markers.
pub const MAX_UNCOMPRESSED_PAGES: usize = 7;

/// One entry of the page-number list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMarker {
    /// A concrete, selectable page number.
    Page(usize),
    /// A non-interactive gap marker.
    Ellipsis,
}

/// A slice of a result set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    /// Items on this page.
    pub items: &'a [T],
    /// Requested page number (1-indexed).
    pub page_number: usize,
    /// Total number of pages; zero when the result set is empty.
    pub total_pages: usize,
    /// Total number of items across all pages.
    pub total_items: usize,
}

impl<'a, T> Page<'a, T> {
    /// Returns navigation metadata for this page.
    #[must_use]
    pub fn navigation(&self) -> PageNavigation {
        PageNavigation::new(self.page_number, self.total_pages)
    }
}

/// Navigation state for the page controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageNavigation {
    /// Current page number.
    pub current: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether "previous" is enabled.
    pub has_previous: bool,
    /// Whether "next" is enabled.
    pub has_next: bool,
    /// Page-number list, possibly compressed.
    pub markers: Vec<PageMarker>,
}

impl PageNavigation {
    /// Builds navigation metadata for a page.
    ///
    /// # Arguments
    ///
    /// * `current` - Current page number
    /// * `total_pages` - Total number of pages
    ///
    /// # Returns
    ///
    /// The navigation state.
    pub fn new(current: usize, total_pages: usize) -> Self {
        Self {
            current,
            total_pages,
            has_previous: current > 1,
            has_next: current < total_pages,
            markers: page_markers(current, total_pages),
        }
    }

    /// Returns true if page controls should be shown at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }
}

/// Computes the number of pages for a result size.
#[must_use]
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Slices a result set into the requested page using [`PAGE_SIZE`].
///
/// # Arguments
///
/// * `subset` - The full result set
/// * `page_number` - Requested page (1-indexed)
///
/// # Returns
///
/// The page. Pages beyond the last page (and page zero) are empty.
pub fn paginate<T>(subset: &[T], page_number: usize) -> Page<'_, T> {
    paginate_with_size(subset, page_number, PAGE_SIZE)
}

/// Slices a result set into the requested page.
///
/// # Arguments
///
/// * `subset` - The full result set
/// * `page_number` - Requested page (1-indexed)
/// * `page_size` - Items per page (a size of zero is treated as one)
///
/// # Returns
///
/// The page. Pages beyond the last page (and page zero) are empty.
pub fn paginate_with_size<T>(subset: &[T], page_number: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let items = match page_number.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size).min(subset.len());
            let end = start.saturating_add(page_size).min(subset.len());
            &subset[start..end]
        }
        None => &subset[..0],
    };

    Page {
        items,
        page_number,
        total_pages: total_pages(subset.len(), page_size),
        total_items: subset.len(),
    }
}

/// Builds the page-number list for the navigation controls.
///
/// With at most [`MAX_UNCOMPRESSED_PAGES`] pages every page is listed.
/// Otherwise the first and last pages are always shown together with one
/// page on either side of the current page, and the gaps are collapsed into
/// [`PageMarker::Ellipsis`].
#[must_use]
pub fn page_markers(current: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= MAX_UNCOMPRESSED_PAGES {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let last = total_pages;
    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(last - 1);

    let mut markers = vec![PageMarker::Page(1)];
    if start > 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.extend((start..=end).map(PageMarker::Page));
    if end < last - 1 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::Page(last));
    markers
}
