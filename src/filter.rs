//! Filterer: category equality and case-insensitive substring search.
//!
//! Filters never reorder; the output keeps the input collection's order.

use serde::Serialize;

use crate::content::{Business, ContentItem, Service};

/// The "all" pseudo-category accepted from the query string.
pub const ALL_CATEGORIES: &str = "all";

/// Records that can be filtered by category and searched by named field.
pub trait Filterable {
    fn category(&self) -> Option<&str>;

    /// Look up a searchable field by name. Unknown names yield `None`.
    fn field(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` (any case) and the empty string both mean no filter.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted.as_str()),
        }
    }
}

pub fn by_category<'a, T: Filterable>(items: &'a [T], category: &CategoryFilter) -> Vec<&'a T> {
    items.iter().filter(|item| category.matches(item.category())).collect()
}

/// Keep items where any of `fields` contains `term`, ignoring case.
pub fn by_search<'a, T: Filterable>(items: &'a [T], term: &str, fields: &[&str]) -> Vec<&'a T> {
    let refs: Vec<&T> = items.iter().collect();
    search_refs(refs, term, fields)
}

/// Category first, then search. Both must match.
pub fn apply_filters<'a, T: Filterable>(
    items: &'a [T],
    category: &CategoryFilter,
    term: &str,
    fields: &[&str],
) -> Vec<&'a T> {
    search_refs(by_category(items, category), term, fields)
}

fn search_refs<'a, T: Filterable>(items: Vec<&'a T>, term: &str, fields: &[&str]) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| {
            fields.iter().any(|name| {
                item.field(name)
                    .is_some_and(|value| value.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

/// Item count per category, in the order the categories are given.
pub fn category_counts<T: Filterable>(items: &[T], categories: &[&str]) -> Vec<(String, usize)> {
    categories
        .iter()
        .map(|category| {
            let count = items
                .iter()
                .filter(|item| item.category() == Some(*category))
                .count();
            (category.to_string(), count)
        })
        .collect()
}

impl Filterable for ContentItem {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "excerpt" => self.excerpt.as_deref(),
            "content" => self.content.as_deref(),
            "category" => self.category.as_deref(),
            "author" => self.author.as_deref(),
            _ => None,
        }
    }
}

impl Filterable for Business {
    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "owner" => self.owner.as_deref(),
            "address" => self.address.as_deref(),
            "category" => Some(&self.category),
            _ => None,
        }
    }
}

impl Filterable for Service {
    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "provider.name" => Some(&self.provider.name),
            "category" => Some(&self.category),
            _ => None,
        }
    }
}

/// Fields the services page searches.
pub const SERVICE_SEARCH_FIELDS: &[&str] = &["name", "description", "provider.name"];

/// Fields the listings page searches.
pub const BUSINESS_SEARCH_FIELDS: &[&str] = &["name", "description", "owner"];

/// Fields the news and blog pages search.
pub const CONTENT_SEARCH_FIELDS: &[&str] = &["title", "excerpt", "content"];
