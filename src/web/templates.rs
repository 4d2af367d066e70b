// Askama templates and the small view structs they render.

use askama::Template;
use chrono::Datelike;

use crate::cards::Card;
use crate::pagination::{PageControl, Pagination};
use crate::post_body::Block;

// ============================================================================
// Shared chrome
// ============================================================================

/// Header/footer data every page needs.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub site_name: String,
    pub year: i32,
    pub nav: &'static str,
}

impl Chrome {
    pub fn new(site_name: &str, nav: &'static str) -> Self {
        Self {
            site_name: site_name.to_string(),
            year: chrono::Local::now().year(),
            nav,
        }
    }

    /// `class="active"` for the current nav entry.
    pub fn nav_class(&self, entry: &str) -> &'static str {
        if self.nav == entry {
            "active"
        } else {
            ""
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

// ============================================================================
// Results fragment (cards + pagination)
// ============================================================================

#[derive(Debug, Clone)]
pub struct EmptyNotice {
    pub heading: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct PageLink {
    pub label: String,
    /// `None` marks an ellipsis.
    pub href: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct PaginationBar {
    pub summary: String,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
    pub links: Vec<PageLink>,
}

impl PaginationBar {
    /// `None` when a single page needs no controls.
    pub fn build<F>(pagination: &Pagination, noun: &str, href: F) -> Option<Self>
    where
        F: Fn(usize) -> String,
    {
        if !pagination.is_visible() {
            return None;
        }
        let links = pagination
            .controls
            .iter()
            .map(|control| match *control {
                PageControl::Page(number) => PageLink {
                    label: number.to_string(),
                    href: Some(href(number)),
                    active: number == pagination.current_page,
                },
                PageControl::Ellipsis => PageLink {
                    label: "...".to_string(),
                    href: None,
                    active: false,
                },
            })
            .collect();

        Some(Self {
            summary: pagination.summary(noun),
            previous_href: pagination
                .has_previous()
                .then(|| href(pagination.current_page - 1)),
            next_href: pagination.has_next().then(|| href(pagination.current_page + 1)),
            links,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Results {
    pub container_id: &'static str,
    pub cards: Vec<Card>,
    pub empty: Option<EmptyNotice>,
    pub pagination: Option<PaginationBar>,
}

impl Results {
    pub fn new(
        container_id: &'static str,
        cards: Vec<Card>,
        empty: EmptyNotice,
        pagination: Option<PaginationBar>,
    ) -> Self {
        let empty = cards.is_empty().then_some(empty);
        Self {
            container_id,
            cards,
            empty,
            pagination,
        }
    }
}

/// Results only, for HTMX swaps.
#[derive(Template)]
#[template(path = "partials/results.html")]
pub struct ResultsTemplate {
    pub results: Results,
}

// ============================================================================
// Collection pages
// ============================================================================

#[derive(Debug, Clone)]
pub struct CategoryButton {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct CategorySummary {
    pub icon: &'static str,
    pub label: String,
    pub count_label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct SearchBox {
    pub action: &'static str,
    pub placeholder: &'static str,
    pub term: String,
    pub category: String,
    pub can_reset: bool,
}

#[derive(Template)]
#[template(path = "pages/collection.html")]
pub struct CollectionTemplate {
    pub chrome: Chrome,
    pub title: String,
    pub heading: String,
    pub intro: String,
    pub category_summary: Vec<CategorySummary>,
    pub category_buttons: Vec<CategoryButton>,
    pub search: Option<SearchBox>,
    pub results: Results,
}

// ============================================================================
// Home
// ============================================================================

#[derive(Debug, Clone)]
pub struct HomeSection {
    pub cards: Vec<Card>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub chrome: Chrome,
    pub title: String,
    pub news: HomeSection,
    pub blogs: HomeSection,
}

// ============================================================================
// Single post
// ============================================================================

#[derive(Debug, Clone)]
pub struct AuthorView {
    pub name: String,
    pub initial: String,
    pub bio: String,
}

#[derive(Debug, Clone)]
pub struct PostView {
    pub title: String,
    pub date: String,
    pub image: String,
    pub fallback_image: String,
    pub category: Option<String>,
    pub read_time: Option<u32>,
    pub author: Option<AuthorView>,
    pub blocks: Vec<Block>,
    pub tags: Vec<String>,
    pub related_heading: &'static str,
    pub related: Vec<Card>,
    pub related_empty: Option<String>,
    pub previous: Option<NavLink>,
    pub next: Option<NavLink>,
    pub back: NavLink,
}

#[derive(Template)]
#[template(path = "pages/post.html")]
pub struct PostTemplate {
    pub chrome: Chrome,
    pub title: String,
    pub post: PostView,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone)]
pub struct ErrorPanel {
    pub heading: String,
    pub message: String,
    pub retry_href: String,
    pub back: Option<NavLink>,
}

#[derive(Template)]
#[template(path = "pages/error.html")]
pub struct ErrorTemplate {
    pub chrome: Chrome,
    pub title: String,
    pub heading: String,
    pub panel: ErrorPanel,
}
