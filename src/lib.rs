//! Community site for Udhwa: news, blogs, local business listings and a
//! services directory, rendered server side from static JSON content.
//!
//! - `fetch`: loads JSON resources from the content directory
//! - `filter`, `pagination`, `view_state`: list page state and derived views
//! - `cards`, `post_body`, `posts`, `dates`: presentation helpers
//! - `web`: axum router, handlers and Askama templates (feature `server`)

pub mod cards;
pub mod config;
pub mod content;
pub mod dates;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod pagination;
pub mod post_body;
pub mod posts;
pub mod view_state;

#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use config::SiteConfig;
pub use content::{Business, ContentItem, ContentKind, Service};
pub use error::{LoadError, SiteError};
pub use fetch::DataFetcher;
pub use view_state::{PageController, PageEvent, PageState};

#[cfg(feature = "server")]
pub use web::{create_router, AppState};
