/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PostId,
    Name,
    Email,
}

impl SortKey {
    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::PostId => "Post",
            Self::Name => "Name",
            Self::Email => "Email",
        }
    }
}

/// Three-state sort configuration.
///
/// A direction cannot exist without a column: the unsorted state carries no
/// key, so the partial state "direction set, key unset" is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    /// Original fetch order.
    #[default]
    Unsorted,
    Ascending(SortKey),
    Descending(SortKey),
}

impl SortState {
    /// Advance the cycle for a column selection.
    ///
    /// Repeated selection of the same column cycles
    /// Unsorted → Ascending → Descending → Unsorted. Selecting a different
    /// column always starts at Ascending on it, regardless of prior state.
    pub fn toggled(self, key: SortKey) -> Self {
        match self {
            Self::Ascending(current) if current == key => Self::Descending(key),
            Self::Descending(current) if current == key => Self::Unsorted,
            _ => Self::Ascending(key),
        }
    }

    /// The sorted column, if any.
    pub fn key(self) -> Option<SortKey> {
        match self {
            Self::Unsorted => None,
            Self::Ascending(k) | Self::Descending(k) => Some(k),
        }
    }

    /// Header indicator for a column: "▲", "▼", or "" when not sorted on it.
    pub fn indicator(self, key: SortKey) -> &'static str {
        match self {
            Self::Ascending(k) if k == key => " ▲",
            Self::Descending(k) if k == key => " ▼",
            _ => "",
        }
    }
}

/// Rows-per-page setting. Only these three sizes are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Fifty,
    Hundred,
}

impl PageSize {
    pub fn count(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    /// Cycle 10 → 50 → 100 → 10.
    pub fn next(self) -> Self {
        match self {
            Self::Ten => Self::Fifty,
            Self::Fifty => Self::Hundred,
            Self::Hundred => Self::Ten,
        }
    }

    /// Map a configured row count to a setting, if it is one of the three.
    pub fn from_count(count: u64) -> Option<Self> {
        match count {
            10 => Some(Self::Ten),
            50 => Some(Self::Fifty),
            100 => Some(Self::Hundred),
            _ => None,
        }
    }
}

/// The combined search/sort/pagination configuration driving the pipeline.
///
/// All mutation goes through the transition methods so the page-reset
/// contract (search or page-size change → page 1) lives in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub sort: SortState,
    /// Current page, 1-indexed. Never 0.
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortState::Unsorted,
            page: 1,
            page_size: PageSize::Ten,
        }
    }
}

impl ViewState {
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// Replace the search term. Resets to page 1 so the user is never
    /// stranded past the end of a shrunken result set.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Toggle sort on a column. Sorting reorders but never changes the
    /// match count, so the page is left alone.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
    }

    /// Move to the previous page. No-op on page 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Move to the next page. No-op on the last page.
    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    /// Jump to a specific page, clamped to `[1, max(total_pages, 1)]`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Cycle the page size and reset to page 1.
    pub fn cycle_page_size(&mut self) {
        self.page_size = self.page_size.next();
        self.page = 1;
    }

    /// Clamp the page after a pipeline recomputation.
    ///
    /// Defensive: transitions that can shrink the result set already reset
    /// to page 1, but a reload can shrink the collection underneath an
    /// otherwise untouched state.
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
        debug_assert!(self.page >= 1, "page must stay 1-indexed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_cycle_same_column() {
        let mut sort = SortState::Unsorted;
        sort = sort.toggled(SortKey::Name);
        assert_eq!(sort, SortState::Ascending(SortKey::Name));
        sort = sort.toggled(SortKey::Name);
        assert_eq!(sort, SortState::Descending(SortKey::Name));
        sort = sort.toggled(SortKey::Name);
        assert_eq!(sort, SortState::Unsorted);
    }

    #[test]
    fn sort_switching_column_resets_to_ascending() {
        let descending = SortState::Descending(SortKey::Email);
        assert_eq!(
            descending.toggled(SortKey::PostId),
            SortState::Ascending(SortKey::PostId)
        );

        let ascending = SortState::Ascending(SortKey::Name);
        assert_eq!(
            ascending.toggled(SortKey::Email),
            SortState::Ascending(SortKey::Email)
        );
    }

    #[test]
    fn sort_indicator_only_on_active_column() {
        let sort = SortState::Ascending(SortKey::Name);
        assert_eq!(sort.indicator(SortKey::Name), " ▲");
        assert_eq!(sort.indicator(SortKey::Email), "");
        assert_eq!(
            SortState::Descending(SortKey::Name).indicator(SortKey::Name),
            " ▼"
        );
    }

    #[test]
    fn page_size_cycle() {
        assert_eq!(PageSize::Ten.next(), PageSize::Fifty);
        assert_eq!(PageSize::Fifty.next(), PageSize::Hundred);
        assert_eq!(PageSize::Hundred.next(), PageSize::Ten);
    }

    #[test]
    fn page_size_from_count_rejects_unlisted() {
        assert_eq!(PageSize::from_count(50), Some(PageSize::Fifty));
        assert_eq!(PageSize::from_count(25), None);
        assert_eq!(PageSize::from_count(0), None);
    }

    #[test]
    fn set_search_resets_page() {
        let mut state = ViewState::default();
        state.page = 4;
        state.set_search("ann");
        assert_eq!(state.page, 1);
        assert_eq!(state.search, "ann");
    }

    #[test]
    fn cycle_page_size_resets_page() {
        let mut state = ViewState::default();
        state.page = 3;
        state.cycle_page_size();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, PageSize::Fifty);
    }

    #[test]
    fn prev_page_noop_at_first() {
        let mut state = ViewState::default();
        state.prev_page();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn next_page_noop_at_last() {
        let mut state = ViewState::default();
        state.page = 3;
        state.next_page(3);
        assert_eq!(state.page, 3);
        state.next_page(4);
        assert_eq!(state.page, 4);
    }

    #[test]
    fn toggle_sort_preserves_page() {
        let mut state = ViewState::default();
        state.page = 2;
        state.toggle_sort(SortKey::PostId);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn clamp_page_shrunken_result_set() {
        let mut state = ViewState::default();
        state.page = 9;
        state.clamp_page(3);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn clamp_page_empty_result_set_stays_at_one() {
        let mut state = ViewState::default();
        state.page = 5;
        state.clamp_page(0);
        assert_eq!(state.page, 1);
    }
}
