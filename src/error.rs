//! Error taxonomy for the site.
//!
//! Every error is handled at the render call that triggered it; nothing here
//! is ever fatal to a page.

use thiserror::Error;

use crate::content::ContentKind;

/// A JSON resource could not be read or parsed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid resource path: {0}")]
    InvalidResource(String),

    #[error("resource not found: {0}")]
    Missing(String),

    #[error("failed to read {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Resource path the error refers to.
    pub fn resource(&self) -> &str {
        match self {
            LoadError::InvalidResource(resource) | LoadError::Missing(resource) => resource,
            LoadError::Io { resource, .. } | LoadError::Parse { resource, .. } => resource,
        }
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{} with ID {id} not found", kind.label())]
    NotFound { kind: ContentKind, id: String },
}

impl SiteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SiteError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = SiteError::NotFound {
            kind: ContentKind::Blog,
            id: "5".to_string(),
        };
        assert_eq!(err.to_string(), "Blog post with ID 5 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn load_error_keeps_resource_name() {
        let err: SiteError = LoadError::Missing("news/news.json".to_string()).into();
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "resource not found: news/news.json");
        if let SiteError::Load(load) = err {
            assert_eq!(load.resource(), "news/news.json");
        }
    }
}
