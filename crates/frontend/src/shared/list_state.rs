//! Generic list page state: the working set plus filter, sort and pagination.
//!
//! One `ListState<T>` backs every entity list. Pages differ only in the
//! record type (its searchable fields and sortable columns) and the page size.
//!
//! The current page is clamped back into range after every change of the
//! working set, the filter or the sort, it is never reset to the first page
//! implicitly.

use crate::shared::api::ApiError;
use crate::shared::list_utils::{ListRecord, SortState};
use crate::shared::notification::NotificationCenter;
use crate::shared::pagination::{self, PageIndex};

#[derive(Debug, Clone)]
pub struct ListState<T: ListRecord> {
    items: Vec<T>,
    filter: String,
    sort: Option<SortState<T::Field>>,
    page: usize,
    page_size: usize,
    is_loading: bool,
    is_loaded: bool,
    load_generation: u64,
    mutation_pending: bool,
    pub notices: NotificationCenter,
}

impl<T: ListRecord> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filter: String::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
            is_loading: false,
            is_loaded: false,
            load_generation: 0,
            mutation_pending: false,
            notices: NotificationCenter::default(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort(&self) -> Option<SortState<T::Field>> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn is_mutation_pending(&self) -> bool {
        self.mutation_pending
    }

    /// Back to the defaults of a freshly opened page; the working set stays
    pub fn reset_view(&mut self) {
        self.filter.clear();
        self.sort = None;
        self.page = 1;
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Start a reload and return its ticket. Only the newest ticket is applied.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.is_loading = true;
        self.load_generation
    }

    /// Apply a load result. Returns `false` when the result is stale.
    ///
    /// Success replaces the whole working set at once. Failure keeps whatever
    /// is loaded and raises a sticky error banner.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if ticket != self.load_generation {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(items) => {
                self.is_loaded = true;
                self.notices.clear_sticky();
                self.replace_items(items);
            }
            Err(e) => {
                self.notices.sticky_error(e.to_string());
            }
        }
        true
    }

    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.clamp_page();
    }

    /// Replace the record with the same id, or append it
    pub fn upsert_item(&mut self, item: T) {
        match self.items.iter_mut().find(|i| i.id() == item.id()) {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
        self.clamp_page();
    }

    pub fn remove_item(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id() != id);
        self.clamp_page();
        self.items.len() != before
    }

    // ========================================================================
    // Filter / sort / pagination
    // ========================================================================

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.clamp_page();
    }

    pub fn toggle_sort(&mut self, field: T::Field) {
        self.sort = Some(SortState::toggled(self.sort, field));
        self.clamp_page();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = pagination::clamp_page(page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    fn clamp_page(&mut self) {
        self.page = pagination::clamp_page(self.page, self.total_pages());
    }

    /// Filtered records in display order. Sorting is stable, ties keep
    /// working set order.
    pub fn filtered(&self) -> Vec<&T> {
        let mut rows: Vec<&T> = self
            .items
            .iter()
            .filter(|item| item.matches_filter(&self.filter))
            .collect();
        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| sort.compare(*a, *b));
        }
        rows
    }

    pub fn total_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.matches_filter(&self.filter))
            .count()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.total_count(), self.page_size)
    }

    /// Records of the current page
    pub fn visible_items(&self) -> Vec<T> {
        let rows = self.filtered();
        let range = pagination::page_bounds(self.page, self.page_size, rows.len());
        rows[range].iter().map(|item| (*item).clone()).collect()
    }

    pub fn page_index(&self) -> PageIndex {
        pagination::page_index(self.total_count(), self.page_size, self.page)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Mark a mutation as in flight. `false` if one already is.
    pub fn begin_mutation(&mut self) -> bool {
        if self.mutation_pending {
            return false;
        }
        self.mutation_pending = true;
        true
    }

    pub fn end_mutation(&mut self) {
        self.mutation_pending = false;
    }
}
