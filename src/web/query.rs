// Query-string view state for list pages.
//
// The browser keeps no state between requests; page, category and search
// term arrive in the URL and are replayed as events against a fresh
// controller.

use axum::extract::{rejection::QueryRejection, Query};
use serde::Deserialize;

use crate::filter::{CategoryFilter, Filterable};
use crate::view_state::{PageController, PageEvent, PageState, Transition};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub category: Option<String>,
    pub q: Option<String>,
}

impl ListQuery {
    /// A query string that does not deserialize (a repeated key, say) counts
    /// as an empty one, so the page still renders with default state.
    pub fn or_default(query: Result<Query<ListQuery>, QueryRejection>) -> Self {
        match query {
            Ok(Query(query)) => query,
            Err(rejection) => {
                tracing::debug!("Ignoring unreadable query string: {}", rejection);
                Self::default()
            }
        }
    }

    /// Unparseable page numbers count as no request.
    pub fn requested_page(&self) -> Option<usize> {
        self.page.as_deref().and_then(|p| p.trim().parse().ok())
    }

    /// Replay category, search and page events in that order.
    pub fn apply<T: Filterable>(&self, controller: &mut PageController<T>) {
        if let Some(category) = &self.category {
            controller.handle(PageEvent::SelectCategory(category.clone()));
        }
        if let Some(term) = &self.q {
            controller.handle(PageEvent::Search(term.clone()));
        }
        if let Some(page) = self.requested_page() {
            if controller.handle(PageEvent::GoToPage(page)) == Transition::Ignored {
                tracing::debug!(
                    "Ignoring page request {} (page count {})",
                    page,
                    controller.page_count()
                );
            }
        }
    }
}

/// URL for `route` carrying the filters in `state` and the given page.
/// Defaults (page 1, all categories, no search) are left out.
pub fn list_href(route: &str, state: &PageState, page: usize) -> String {
    list_href_with(route, &state.active_category, &state.search_term, page)
}

pub fn list_href_with(route: &str, category: &CategoryFilter, term: &str, page: usize) -> String {
    let mut params = Vec::new();
    if let CategoryFilter::Only(category) = category {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if !term.is_empty() {
        params.push(format!("q={}", urlencoding::encode(term)));
    }
    if page > 1 {
        params.push(format!("page={}", page));
    }

    if params.is_empty() {
        route.to_string()
    } else {
        format!("{}?{}", route, params.join("&"))
    }
}
