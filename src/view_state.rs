//! Page view state and the event → transition table.
//!
//! A `PageController` owns one collection and its `PageState`. Every user
//! action arrives as a `PageEvent`; derived views (filtered subset, page
//! slice) are recomputed from the state on demand.

use serde::Serialize;

use crate::filter::{apply_filters, CategoryFilter, Filterable};
use crate::pagination::{page_count, page_slice, Pagination};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
    pub active_category: CategoryFilter,
    pub search_term: String,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            active_category: CategoryFilter::All,
            search_term: String::new(),
        }
    }

    pub fn has_filters(&self) -> bool {
        self.active_category != CategoryFilter::All || !self.search_term.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    GoToPage(usize),
    SelectCategory(String),
    Search(String),
    ResetFilters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Rerender,
    Ignored,
}

/// Derived view of the current page.
#[derive(Debug)]
pub struct PageView<'a, T> {
    pub items: Vec<&'a T>,
    pub pagination: Pagination,
    pub total_filtered: usize,
}

pub struct PageController<T> {
    items: Vec<T>,
    state: PageState,
    search_fields: &'static [&'static str],
}

impl<T: Filterable> PageController<T> {
    pub fn new(items: Vec<T>, page_size: usize, search_fields: &'static [&'static str]) -> Self {
        Self {
            items,
            state: PageState::new(page_size),
            search_fields,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn filtered(&self) -> Vec<&T> {
        apply_filters(
            &self.items,
            &self.state.active_category,
            &self.state.search_term,
            self.search_fields,
        )
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered().len(), self.state.page_size)
    }

    pub fn handle(&mut self, event: PageEvent) -> Transition {
        match event {
            PageEvent::GoToPage(page) => {
                if page < 1 || page > self.page_count() || page == self.state.current_page {
                    return Transition::Ignored;
                }
                self.state.current_page = page;
            }
            PageEvent::SelectCategory(category) => {
                let category = CategoryFilter::parse(&category);
                if category == self.state.active_category {
                    return Transition::Ignored;
                }
                self.state.active_category = category;
                self.state.current_page = 1;
            }
            PageEvent::Search(term) => {
                let term = term.trim().to_lowercase();
                if term == self.state.search_term {
                    return Transition::Ignored;
                }
                self.state.search_term = term;
                self.state.current_page = 1;
            }
            PageEvent::ResetFilters => {
                if !self.state.has_filters() && self.state.current_page == 1 {
                    return Transition::Ignored;
                }
                self.state.active_category = CategoryFilter::All;
                self.state.search_term.clear();
                self.state.current_page = 1;
            }
        }
        Transition::Rerender
    }

    pub fn view(&self) -> PageView<'_, T> {
        let filtered = self.filtered();
        let total_filtered = filtered.len();
        let pagination = Pagination::new(self.state.current_page, self.state.page_size, total_filtered);
        let items = page_slice(&filtered, pagination.current_page, self.state.page_size).to_vec();
        PageView {
            items,
            pagination,
            total_filtered,
        }
    }
}
