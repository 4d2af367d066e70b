//! Site configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATA_DIR` | `data` |
//! | `STATIC_DIR` | `static` |
//! | `PORT` | `3000` |
//! | `SITE_NAME` | `udhwa.in` |
//! | `NEWS_PAGE_SIZE` | `6` |
//! | `BLOGS_PAGE_SIZE` | `6` |
//! | `LISTINGS_PAGE_SIZE` | `12` |
//! | `SERVICES_PAGE_SIZE` | `12` |

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizes {
    pub news: usize,
    pub blogs: usize,
    pub listings: usize,
    pub services: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            news: 6,
            blogs: 6,
            listings: 12,
            services: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub port: u16,
    pub site_name: String,
    pub page_sizes: PageSizes,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
            port: 3000,
            site_name: "udhwa.in".to_string(),
            page_sizes: PageSizes::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let sizes = defaults.page_sizes.clone();

        Self {
            data_dir: lookup("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            static_dir: lookup("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            port: parse_or(&lookup, "PORT", defaults.port),
            site_name: lookup("SITE_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.site_name),
            page_sizes: PageSizes {
                news: page_size(&lookup, "NEWS_PAGE_SIZE", sizes.news),
                blogs: page_size(&lookup, "BLOGS_PAGE_SIZE", sizes.blogs),
                listings: page_size(&lookup, "LISTINGS_PAGE_SIZE", sizes.listings),
                services: page_size(&lookup, "SERVICES_PAGE_SIZE", sizes.services),
            },
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
    }
}

fn page_size<F>(lookup: &F, key: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, key, default) {
        0 => {
            tracing::warn!("{} must be at least 1, using {}", key, default);
            default
        }
        size => size,
    }
}
