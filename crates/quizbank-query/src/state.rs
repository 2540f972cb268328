//! Filter inputs plus the current page.

use log::debug;

use crate::filter::{DifficultyFilter, Filter, Searchable, TagFilter, filter};
use crate::paginate::{PAGE_SIZE, Page, paginate, total_pages};

/// What a reader has typed and selected, and which page they are on.
///
/// Changing any filter input returns to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    filter: Filter,
    page: usize,
    page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    /// Empty query, no restrictions, page 1.
    pub fn new() -> Self {
        Self {
            filter: Filter::default(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }

    /// Rebuild a state from request parameters.
    pub fn from_parts(filter: Filter, page: usize) -> Self {
        Self {
            filter,
            page: page.max(1),
            page_size: PAGE_SIZE,
        }
    }

    /// Use a different page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.filter.query != query {
            self.filter.query = query;
            self.page = 1;
        }
    }

    pub fn set_difficulty(&mut self, difficulty: DifficultyFilter) {
        if self.filter.difficulty != difficulty {
            self.filter.difficulty = difficulty;
            self.page = 1;
        }
    }

    pub fn set_tag(&mut self, tag: TagFilter) {
        if self.filter.tag != tag {
            self.filter.tag = tag;
            self.page = 1;
        }
    }

    /// Advance one page, stopping at the last page of `matched` results.
    pub fn next_page(&mut self, matched: usize) {
        if self.page < total_pages(matched, self.page_size) {
            self.page += 1;
        }
    }

    /// Go back one page, stopping at page 1.
    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Filter `records` and remember the requested page.
    pub fn apply<'a, R: Searchable>(&self, records: &'a [R]) -> QueryResult<'a, R> {
        let matches = filter(records, &self.filter);
        debug!(
            "Query {:?} matched {} of {} records",
            self.filter.query,
            matches.len(),
            records.len()
        );
        QueryResult {
            matches,
            total: records.len(),
            page: self.page,
            page_size: self.page_size,
            filtered: !self.filter.is_empty(),
        }
    }
}

/// The matches of one [`FilterState::apply`] call.
#[derive(Debug, Clone)]
pub struct QueryResult<'a, R> {
    /// Every matching record, in source order.
    pub matches: Vec<&'a R>,
    /// Number of records before filtering.
    pub total: usize,
    page: usize,
    page_size: usize,
    filtered: bool,
}

impl<'a, R> QueryResult<'a, R> {
    /// The requested page of matches, clamped to the available pages.
    pub fn page(&self) -> Page<'_, &'a R> {
        paginate(&self.matches, self.page, self.page_size)
    }

    /// Number of matching records.
    pub fn matched(&self) -> usize {
        self.matches.len()
    }

    /// True when any filter input was set.
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// The "Showing X of Y questions" line, with "(filtered from Z)"
    /// appended when filtering dropped any record.
    pub fn summary(&self) -> String {
        let page = self.page();
        let mut line = format!(
            "Showing {} of {} questions",
            page.items.len(),
            self.matched()
        );
        if self.matched() != self.total {
            line.push_str(&format!(" (filtered from {})", self.total));
        }
        line
    }
}
