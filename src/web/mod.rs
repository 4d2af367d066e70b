// Axum web server: routes, shared state and HTML rendering helpers.

pub mod errors;
pub mod handlers;
pub mod query;
pub mod templates;

use std::sync::Arc;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::fetch::DataFetcher;
use templates::Chrome;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<DataFetcher>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        tracing::info!("Serving content from {}", config.data_dir.display());
        Self {
            fetcher: Arc::new(DataFetcher::new(config.data_dir.clone())),
            config: Arc::new(config),
        }
    }

    pub fn chrome(&self, nav: &'static str) -> Chrome {
        Chrome::new(&self.config.site_name, nav)
    }

    /// Browser title, e.g. "News - udhwa.in".
    pub fn page_title(&self, page: &str) -> String {
        format!("{} - {}", page, self.config.site_name)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.config.static_dir.clone());

    Router::new()
        .route("/", get(handlers::pages::home_page))
        .route("/health", get(health_check))

        // Collection pages
        .route("/news", get(handlers::pages::news_page))
        .route("/blogs", get(handlers::pages::blogs_page))
        .route("/listings", get(handlers::pages::listings_page))
        .route("/services", get(handlers::pages::services_page))

        // Single posts
        .route("/news/:id", get(handlers::posts::news_post))
        .route("/blogs/:id", get(handlers::posts::blog_post))

        .nest_service("/static", static_files)
        .fallback(handlers::pages::not_found_page)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Render a template, falling back to a plain error body.
pub fn render<T: Template>(template: &T, status: StatusCode) -> Response {
    match template.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!("Template render failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("Template error: {}", e)),
            )
                .into_response()
        }
    }
}
