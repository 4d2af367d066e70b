//! Content records as they appear in the site's JSON resources.
//!
//! Records are immutable once fetched. Field names follow the camelCase keys
//! used by the resource files.

use serde::{Deserialize, Serialize};

/// The four content collections the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContentKind {
    News,
    Blog,
    Listing,
    Service,
}

impl ContentKind {
    /// Singular label used in error messages ("News post with ID 5 not found").
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::News => "News post",
            ContentKind::Blog => "Blog post",
            ContentKind::Listing => "Listing",
            ContentKind::Service => "Service",
        }
    }

    /// Plural noun for the pagination summary line.
    pub fn plural_noun(&self) -> &'static str {
        match self {
            ContentKind::News => "news articles",
            ContentKind::Blog => "blog articles",
            ContentKind::Listing => "listings",
            ContentKind::Service => "services",
        }
    }

    /// Route prefix for list and single-item pages.
    pub fn route(&self) -> &'static str {
        match self {
            ContentKind::News => "/news",
            ContentKind::Blog => "/blogs",
            ContentKind::Listing => "/listings",
            ContentKind::Service => "/services",
        }
    }
}

/// A news or blog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: u32,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub author_bio: Option<String>,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub related: Vec<u32>,
}

impl ContentItem {
    /// Outbound link, falling back to the site route for this item.
    pub fn href(&self, kind: ContentKind) -> String {
        match &self.link {
            Some(link) if !link.trim().is_empty() => link.clone(),
            _ => format!("{}/{}", kind.route(), self.id),
        }
    }

    /// Text shown on cards: the excerpt if present, otherwise the body.
    pub fn summary_text(&self) -> &str {
        self.excerpt
            .as_deref()
            .or(self.content.as_deref())
            .unwrap_or("")
    }
}

/// A local business listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub directions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    #[serde(default)]
    pub experience: Option<String>,
}

/// A local service offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub provider: Provider,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// The home page's aggregate of top news and blog items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentContent {
    #[serde(default)]
    pub recent_news: Vec<ContentItem>,
    #[serde(default)]
    pub recent_blogs: Vec<ContentItem>,
}
