// Error panels. Failures replace the affected region of the page with a
// message and a retry link; the page shell always renders.

use axum::http::StatusCode;
use axum::response::Response;

use crate::error::SiteError;
use crate::web::render;
use crate::web::templates::{Chrome, ErrorPanel, ErrorTemplate, NavLink};

pub const LOAD_ERROR_HEADING: &str = "Error Loading Content";

pub struct PageError {
    pub status: StatusCode,
    pub panel: ErrorPanel,
}

impl PageError {
    /// `what` names the content for the message, e.g. "news".
    pub fn from_site_error(err: &SiteError, what: &str, retry_href: String) -> Self {
        match err {
            SiteError::Load(load) => {
                tracing::warn!("Load error while rendering {}: {}", what, load);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    panel: ErrorPanel {
                        heading: LOAD_ERROR_HEADING.to_string(),
                        message: format!("Unable to load {}: {}", what, load),
                        retry_href,
                        back: None,
                    },
                }
            }
            SiteError::NotFound { .. } => {
                tracing::info!("{}", err);
                Self {
                    status: StatusCode::NOT_FOUND,
                    panel: ErrorPanel {
                        heading: "Error".to_string(),
                        message: err.to_string(),
                        retry_href,
                        back: None,
                    },
                }
            }
        }
    }

    pub fn with_back(mut self, label: &str, href: &str) -> Self {
        self.panel.back = Some(NavLink {
            label: label.to_string(),
            href: href.to_string(),
        });
        self
    }

    pub fn into_page(self, chrome: Chrome, title: String, heading: &str) -> Response {
        let template = ErrorTemplate {
            chrome,
            title,
            heading: heading.to_string(),
            panel: self.panel,
        };
        render(&template, self.status)
    }
}
