// Page handlers for HTML rendering with Askama

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use axum_htmx::{HxRequest, VaryHxRequest};

use crate::cards::{
    business_card, content_card, listing_category_label, service_card, service_category_label,
    Card, CardKind,
};
use crate::content::{Business, ContentItem, ContentKind, RecentContent, Service};
use crate::dates::sort_newest_first;
use crate::error::SiteError;
use crate::fetch;
use crate::filter::{
    category_counts, CategoryFilter, Filterable, BUSINESS_SEARCH_FIELDS, CONTENT_SEARCH_FIELDS,
    SERVICE_SEARCH_FIELDS,
};
use crate::view_state::PageController;
use crate::web::errors::PageError;
use crate::web::query::{list_href, list_href_with, ListQuery};
use crate::web::templates::{
    CategoryButton, CategorySummary, CollectionTemplate, EmptyNotice, ErrorPanel, ErrorTemplate,
    HomeSection, HomeTemplate, PaginationBar, Results, ResultsTemplate, SearchBox,
};
use crate::web::{render, AppState};

const LISTING_CATEGORIES: &[&str] = &["restaurant", "shop", "service", "medical", "other"];

const SERVICE_CATEGORIES: &[(&str, &str)] = &[
    ("medical", "🏥"),
    ("education", "📚"),
    ("transport", "🚗"),
    ("repair", "🔧"),
    ("professional", "💼"),
    ("utility", "⚡"),
];

// ============================================================================
// Home Page
// ============================================================================

pub async fn home_page(State(state): State<AppState>) -> Response {
    let (news, blogs) = match state.fetcher.fetch::<RecentContent>(fetch::RECENT_POSTS).await {
        Ok(recent) => (
            HomeSection {
                cards: cards_for(&recent.recent_news, CardKind::HomeNews),
                error: None,
            },
            HomeSection {
                cards: cards_for(&recent.recent_blogs, CardKind::HomeBlog),
                error: None,
            },
        ),
        Err(e) => {
            tracing::warn!("Error loading recent content: {}", e);
            (
                HomeSection {
                    cards: Vec::new(),
                    error: Some("Unable to load news".to_string()),
                },
                HomeSection {
                    cards: Vec::new(),
                    error: Some("Unable to load blogs".to_string()),
                },
            )
        }
    };

    let template = HomeTemplate {
        chrome: state.chrome("home"),
        title: state.page_title("Home"),
        news,
        blogs,
    };
    render(&template, StatusCode::OK)
}

fn cards_for(items: &[ContentItem], kind: CardKind) -> Vec<Card> {
    items.iter().map(|item| content_card(item, kind)).collect()
}

// ============================================================================
// News and Blogs
// ============================================================================

pub async fn news_page(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
    uri: Uri,
) -> Response {
    let items = match state.fetcher.fetch::<Vec<ContentItem>>(fetch::NEWS).await {
        Ok(items) => items,
        Err(e) => return load_failure(&state, e.into(), "news", "news", "News", &uri),
    };

    let mut controller = PageController::new(items, state.config.page_sizes.news, CONTENT_SEARCH_FIELDS);
    ListQuery::or_default(query).apply(&mut controller);

    let results = collection_results(
        &controller,
        ContentKind::News,
        "news-posts",
        EmptyNotice {
            heading: "No News Found".to_string(),
            message: "Check back later for the latest updates from Udhwa.".to_string(),
        },
        |item| content_card(item, CardKind::News),
    );

    let template = CollectionTemplate {
        chrome: state.chrome("news"),
        title: state.page_title("News"),
        heading: "Latest News".to_string(),
        intro: "News and updates from around Udhwa.".to_string(),
        category_summary: Vec::new(),
        category_buttons: Vec::new(),
        search: None,
        results,
    };
    render(&template, StatusCode::OK)
}

pub async fn blogs_page(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
    uri: Uri,
) -> Response {
    let mut items = match state.fetcher.fetch::<Vec<ContentItem>>(fetch::BLOGS).await {
        Ok(items) => items,
        Err(e) => return load_failure(&state, e.into(), "blogs", "blogs", "Blogs", &uri),
    };
    sort_newest_first(&mut items);

    let mut controller = PageController::new(items, state.config.page_sizes.blogs, CONTENT_SEARCH_FIELDS);
    ListQuery::or_default(query).apply(&mut controller);

    let results = collection_results(
        &controller,
        ContentKind::Blog,
        "blogs-posts",
        EmptyNotice {
            heading: "No Blogs Found".to_string(),
            message: "Check back later for new stories and insights from Udhwa.".to_string(),
        },
        |item| content_card(item, CardKind::Blog),
    );

    let template = CollectionTemplate {
        chrome: state.chrome("blogs"),
        title: state.page_title("Blogs"),
        heading: "Blogs".to_string(),
        intro: "Stories, history and culture from Udhwa.".to_string(),
        category_summary: Vec::new(),
        category_buttons: Vec::new(),
        search: None,
        results,
    };
    render(&template, StatusCode::OK)
}

// ============================================================================
// Listings and Services
// ============================================================================

/// Listings and services answer HTMX requests with the results fragment
/// from the same URL, so their responses vary on `HX-Request`.
pub async fn listings_page(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    query: Result<Query<ListQuery>, QueryRejection>,
    uri: Uri,
) -> Response {
    (VaryHxRequest, listings_response(&state, is_htmx, query, &uri).await).into_response()
}

async fn listings_response(
    state: &AppState,
    is_htmx: bool,
    query: Result<Query<ListQuery>, QueryRejection>,
    uri: &Uri,
) -> Response {
    let items = match state.fetcher.fetch::<Vec<Business>>(fetch::LISTINGS).await {
        Ok(items) => items,
        Err(e) => return load_failure(state, e.into(), "listings", "listings", "Local Businesses", uri),
    };

    let mut controller =
        PageController::new(items, state.config.page_sizes.listings, BUSINESS_SEARCH_FIELDS);
    ListQuery::or_default(query).apply(&mut controller);

    let view_state = controller.state().clone();
    let empty = match &view_state.active_category {
        CategoryFilter::All => EmptyNotice {
            heading: "No Listings Found".to_string(),
            message: "No listings have been added yet.".to_string(),
        },
        CategoryFilter::Only(category) => EmptyNotice {
            heading: "No Listings Found".to_string(),
            message: format!("No Listings found in the \"{}\" category.", category),
        },
    };
    let results = collection_results(&controller, ContentKind::Listing, "businesses-container", empty, business_card);

    if is_htmx {
        return render(&ResultsTemplate { results }, StatusCode::OK);
    }

    let mut category_buttons = vec![CategoryButton {
        label: "All".to_string(),
        href: list_href_with("/listings", &CategoryFilter::All, &view_state.search_term, 1),
        active: view_state.active_category == CategoryFilter::All,
    }];
    category_buttons.extend(LISTING_CATEGORIES.iter().map(|category| {
        let filter = CategoryFilter::Only(category.to_string());
        CategoryButton {
            label: listing_category_label(category),
            href: list_href_with("/listings", &filter, &view_state.search_term, 1),
            active: view_state.active_category == filter,
        }
    }));

    let template = CollectionTemplate {
        chrome: state.chrome("listings"),
        title: state.page_title("Local Businesses"),
        heading: "Local Businesses".to_string(),
        intro: "Shops, restaurants and more from your neighbourhood.".to_string(),
        category_summary: Vec::new(),
        category_buttons,
        search: None,
        results,
    };
    render(&template, StatusCode::OK)
}

pub async fn services_page(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    query: Result<Query<ListQuery>, QueryRejection>,
    uri: Uri,
) -> Response {
    (VaryHxRequest, services_response(&state, is_htmx, query, &uri).await).into_response()
}

async fn services_response(
    state: &AppState,
    is_htmx: bool,
    query: Result<Query<ListQuery>, QueryRejection>,
    uri: &Uri,
) -> Response {
    let items = match state.fetcher.fetch::<Vec<Service>>(fetch::SERVICES).await {
        Ok(items) => items,
        Err(e) => return load_failure(state, e.into(), "services", "services", "Local Services", uri),
    };

    let categories: Vec<&str> = SERVICE_CATEGORIES.iter().map(|(slug, _)| *slug).collect();
    let counts = category_counts(&items, &categories);

    let mut controller =
        PageController::new(items, state.config.page_sizes.services, SERVICE_SEARCH_FIELDS);
    ListQuery::or_default(query).apply(&mut controller);

    let results = collection_results(
        &controller,
        ContentKind::Service,
        "services-container",
        EmptyNotice {
            heading: "No Services Found".to_string(),
            message: "No services found matching your criteria. Try a different search or category."
                .to_string(),
        },
        service_card,
    );

    if is_htmx {
        return render(&ResultsTemplate { results }, StatusCode::OK);
    }

    let view_state = controller.state();
    let category_summary = SERVICE_CATEGORIES
        .iter()
        .zip(counts)
        .map(|((slug, icon), (_, count))| {
            let filter = CategoryFilter::Only(slug.to_string());
            CategorySummary {
                icon: *icon,
                label: service_category_label(slug),
                count_label: format!("{} Services", count),
                href: list_href_with("/services", &filter, &view_state.search_term, 1),
                active: view_state.active_category == filter,
            }
        })
        .collect();

    let search = SearchBox {
        action: "/services",
        placeholder: "Search services or providers...",
        term: view_state.search_term.clone(),
        category: view_state.active_category.as_str().to_string(),
        can_reset: view_state.has_filters(),
    };

    let template = CollectionTemplate {
        chrome: state.chrome("services"),
        title: state.page_title("Local Services"),
        heading: "Local Services".to_string(),
        intro: "Trusted service providers in Udhwa.".to_string(),
        category_summary,
        category_buttons: Vec::new(),
        search: Some(search),
        results,
    };
    render(&template, StatusCode::OK)
}

// ============================================================================
// Shared helpers
// ============================================================================

fn collection_results<T, F>(
    controller: &PageController<T>,
    kind: ContentKind,
    container_id: &'static str,
    empty: EmptyNotice,
    to_card: F,
) -> Results
where
    T: Filterable,
    F: Fn(&T) -> Card,
{
    let view = controller.view();
    let state = controller.state();
    let cards = view.items.iter().map(|item| to_card(item)).collect();
    let pagination = PaginationBar::build(&view.pagination, kind.plural_noun(), |page| {
        list_href(kind.route(), state, page)
    });
    Results::new(container_id, cards, empty, pagination)
}

fn load_failure(
    state: &AppState,
    err: SiteError,
    what: &str,
    nav: &'static str,
    heading: &str,
    uri: &Uri,
) -> Response {
    PageError::from_site_error(&err, what, uri.to_string()).into_page(
        state.chrome(nav),
        state.page_title(heading),
        heading,
    )
}

pub async fn not_found_page(State(state): State<AppState>, uri: Uri) -> Response {
    tracing::debug!("No route for {}", uri);
    let template = ErrorTemplate {
        chrome: state.chrome(""),
        title: state.page_title("Page Not Found"),
        heading: "Page Not Found".to_string(),
        panel: ErrorPanel {
            heading: "Error".to_string(),
            message: format!("There is no page at {}.", uri.path()),
            retry_href: uri.to_string(),
            back: None,
        },
    };
    render(&template, StatusCode::NOT_FOUND)
}
