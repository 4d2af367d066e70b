//! DataFetcher: single asynchronous read of a named JSON resource.
//!
//! Resources are paths relative to the data directory. There is no retry,
//! timeout or caching; every page view reads the resource it needs once.

use std::path::{Component, Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::LoadError;

pub const NEWS: &str = "news/news.json";
pub const NEWS_POSTS: &str = "news/news-posts.json";
pub const BLOGS: &str = "blogs/blogs.json";
pub const BLOG_POSTS: &str = "blogs/blog-posts.json";
pub const LISTINGS: &str = "listings.json";
pub const SERVICES: &str = "services.json";
pub const RECENT_POSTS: &str = "shared/recent-posts.json";

#[derive(Debug, Clone)]
pub struct DataFetcher {
    root: PathBuf,
}

impl DataFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and parse `resource`. The parsed value is returned as-is.
    pub async fn fetch<T: DeserializeOwned>(&self, resource: &str) -> Result<T, LoadError> {
        let path = self.resolve(resource)?;
        tracing::debug!("Fetching resource {} from {}", resource, path.display());

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("Resource {} not found at {}", resource, path.display());
                return Err(LoadError::Missing(resource.to_string()));
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", resource, e);
                return Err(LoadError::Io {
                    resource: resource.to_string(),
                    source: e,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!("Failed to parse {}: {}", resource, e);
            LoadError::Parse {
                resource: resource.to_string(),
                source: e,
            }
        })
    }

    /// Only plain relative paths below the data root are accepted.
    fn resolve(&self, resource: &str) -> Result<PathBuf, LoadError> {
        let relative = Path::new(resource);
        let plain = !resource.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !plain {
            return Err(LoadError::InvalidResource(resource.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentItem;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("udhwa_site_fetch_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn fetches_and_parses_collection() {
        let dir = scratch_dir("ok");
        std::fs::write(
            dir.join("items.json"),
            r#"[{"id": 1, "title": "One", "date": "2024-01-01"}]"#,
        )
        .unwrap();

        let fetcher = DataFetcher::new(&dir);
        let items: Vec<ContentItem> = fetcher.fetch("items.json").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "One");
    }

    #[tokio::test]
    async fn missing_resource_is_load_error() {
        let fetcher = DataFetcher::new(scratch_dir("missing"));
        let err = fetcher.fetch::<Vec<ContentItem>>("nope.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Missing(ref r) if r == "nope.json"));
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let dir = scratch_dir("bad");
        std::fs::write(dir.join("bad.json"), "[{\"id\": 1,").unwrap();

        let fetcher = DataFetcher::new(&dir);
        let err = fetcher.fetch::<Vec<ContentItem>>("bad.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse bad.json"));
    }

    #[tokio::test]
    async fn rejects_paths_outside_root() {
        let fetcher = DataFetcher::new(scratch_dir("escape"));
        for resource in ["../secret.json", "/etc/passwd", ""] {
            let err = fetcher.fetch::<serde_json::Value>(resource).await.unwrap_err();
            assert!(matches!(err, LoadError::InvalidResource(_)), "{resource}");
        }
    }
}
