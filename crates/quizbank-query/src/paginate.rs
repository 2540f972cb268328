//! Fixed-size pages over a filtered result.

/// Questions shown per page.
pub const PAGE_SIZE: usize = 100;

/// One page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The records on this page.
    pub items: &'a [T],
    /// 1-based page number, after clamping.
    pub number: usize,
    /// `ceil(total_items / page_size)`; zero when there are no items.
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Pager controls are only shown when there is more than one page.
    pub fn show_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// Zero-based index of the first item on this page.
    pub fn first_index(&self) -> usize {
        (self.number - 1) * self.page_size
    }
}

/// Number of pages needed for `total` items.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Slice out page `page` (1-based) of `items`.
///
/// The page number is clamped to `1..=max(total_pages, 1)`, so a page past
/// the end yields the last page and page 0 yields the first.
///
/// # Example
///
/// ```
/// use quizbank_query::paginate;
///
/// let items: Vec<u32> = (0..250).collect();
/// let page = paginate(&items, 3, 100);
/// assert_eq!(page.items.len(), 50);
/// assert_eq!(page.total_pages, 3);
/// assert!(!page.has_next());
/// ```
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let number = page.clamp(1, total_pages.max(1));
    let start = ((number - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        items: &items[start..end],
        number,
        total_pages,
        total_items: items.len(),
        page_size,
    }
}
