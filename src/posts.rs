//! Single-post lookup plus related and adjacent posts.

use crate::content::{ContentItem, ContentKind};
use crate::error::{Result, SiteError};

pub const RELATED_LIMIT: usize = 3;
pub const DEFAULT_AUTHOR_BIO: &str = "News reporter and content writer from Udhwa";

pub fn find_post(items: &[ContentItem], kind: ContentKind, id: u32) -> Result<&ContentItem> {
    items
        .iter()
        .find(|post| post.id == id)
        .ok_or_else(|| SiteError::NotFound {
            kind,
            id: id.to_string(),
        })
}

/// Posts listed in `current.related` (collection order). Without an explicit
/// list, the first `limit` posts other than `current`.
pub fn related_posts<'a>(
    items: &'a [ContentItem],
    current: &ContentItem,
    limit: usize,
) -> Vec<&'a ContentItem> {
    if current.related.is_empty() {
        return items
            .iter()
            .filter(|post| post.id != current.id)
            .take(limit)
            .collect();
    }
    items
        .iter()
        .filter(|post| current.related.contains(&post.id))
        .collect()
}

/// Previous and next posts by position in the collection.
pub fn adjacent_posts<'a>(
    items: &'a [ContentItem],
    current: &ContentItem,
) -> (Option<&'a ContentItem>, Option<&'a ContentItem>) {
    let Some(index) = items.iter().position(|post| post.id == current.id) else {
        return (None, None);
    };
    let previous = index.checked_sub(1).and_then(|i| items.get(i));
    (previous, items.get(index + 1))
}

pub fn author_initial(author: &str) -> String {
    author.chars().next().map(String::from).unwrap_or_default()
}
