//! CardRenderer: records to display-ready card view models.
//!
//! Cards carry everything the template layer needs; nothing here touches
//! HTML.

use serde::Serialize;

use crate::content::{Business, ContentItem, ContentKind, Service};
use crate::dates::format_date;

pub const DEFAULT_EXCERPT_LENGTH: usize = 150;
pub const RELATED_EXCERPT_LENGTH: usize = 100;

const IMAGE_PARAMS: &str = "?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80";

/// Truncate to `max_len` characters, appending "..." when anything was cut.
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardKind {
    News,
    HomeNews,
    Blog,
    HomeBlog,
    RelatedBlog,
    Business,
    Service,
}

impl CardKind {
    pub fn fallback_image(&self) -> String {
        let photo = match self {
            CardKind::News => "photo-1504711434969-e33886168f5c",
            CardKind::HomeNews => "photo-1495020689067-958852a7765e",
            CardKind::Blog | CardKind::HomeBlog | CardKind::RelatedBlog => {
                "photo-1486312338219-ce68d2c6f44d"
            }
            CardKind::Business => "photo-1563013544-824ae1b704d3",
            CardKind::Service => "photo-1581094794329-c6fe63c7a65a",
        };
        format!("https://images.unsplash.com/{}{}", photo, IMAGE_PARAMS)
    }

    pub fn link_label(&self) -> &'static str {
        match self {
            CardKind::News => "Read Full Story",
            CardKind::Blog => "Read Full Article",
            CardKind::HomeNews | CardKind::HomeBlog | CardKind::RelatedBlog => "Read More",
            CardKind::Business => "Get Directions",
            CardKind::Service => "View Details",
        }
    }

    /// CSS class placed on the card container.
    pub fn css_class(&self) -> &'static str {
        match self {
            CardKind::News => "news-card",
            CardKind::HomeNews => "home-news-card",
            CardKind::Blog | CardKind::RelatedBlog => "blog-card",
            CardKind::HomeBlog => "home-blog-card",
            CardKind::Business => "business-card",
            CardKind::Service => "service-card",
        }
    }

    fn content_kind(&self) -> ContentKind {
        match self {
            CardKind::News | CardKind::HomeNews => ContentKind::News,
            CardKind::Blog | CardKind::HomeBlog | CardKind::RelatedBlog => ContentKind::Blog,
            CardKind::Business => ContentKind::Listing,
            CardKind::Service => ContentKind::Service,
        }
    }
}

/// Display label for a listing category.
pub fn listing_category_label(category: &str) -> String {
    let label = match category {
        "restaurant" => "Restaurant",
        "shop" => "Shop",
        "service" => "Service",
        "medical" => "Medical",
        "other" => "Other",
        other => other,
    };
    label.to_string()
}

/// Display label for a service category.
pub fn service_category_label(category: &str) -> String {
    let label = match category {
        "medical" => "Medical",
        "education" => "Education",
        "transport" => "Transport",
        "repair" => "Repair",
        "professional" => "Professional",
        "utility" => "Utility",
        "other" => "Other",
        other => other,
    };
    label.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBadge {
    pub slug: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDetail {
    pub icon: &'static str,
    pub label: Option<&'static str>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardAction {
    pub label: &'static str,
    pub href: String,
    pub primary: bool,
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderBadge {
    pub name: String,
    pub initial: String,
    pub experience: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    pub date: Option<String>,
    pub excerpt: String,
    pub image: String,
    pub fallback_image: String,
    pub link: Option<String>,
    pub link_label: &'static str,
    pub category: Option<CategoryBadge>,
    pub read_time: Option<u32>,
    pub byline: Option<String>,
    pub details: Vec<CardDetail>,
    pub features: Vec<String>,
    pub provider: Option<ProviderBadge>,
    pub actions: Vec<CardAction>,
}

impl Card {
    fn base(kind: CardKind, title: &str, image: &str) -> Self {
        let fallback_image = kind.fallback_image();
        let image = if image.trim().is_empty() {
            fallback_image.clone()
        } else {
            image.to_string()
        };
        Self {
            kind,
            title: title.to_string(),
            date: None,
            excerpt: String::new(),
            image,
            fallback_image,
            link: None,
            link_label: kind.link_label(),
            category: None,
            read_time: None,
            byline: None,
            details: Vec::new(),
            features: Vec::new(),
            provider: None,
            actions: Vec::new(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        self.kind.css_class()
    }
}

/// Card for a news or blog item.
pub fn content_card(item: &ContentItem, kind: CardKind) -> Card {
    let mut card = Card::base(kind, &item.title, &item.image);
    card.date = Some(format_date(&item.date));
    card.link = Some(item.href(kind.content_kind()));

    match kind {
        CardKind::RelatedBlog => {
            let text = item.content.as_deref().unwrap_or_else(|| item.summary_text());
            card.excerpt = truncate(text, RELATED_EXCERPT_LENGTH);
            card.link = Some(format!("{}/{}", ContentKind::Blog.route(), item.id));
        }
        _ => card.excerpt = truncate(item.summary_text(), DEFAULT_EXCERPT_LENGTH),
    }

    if kind == CardKind::Blog {
        card.category = item.category.as_ref().map(|c| CategoryBadge {
            slug: c.clone(),
            label: c.clone(),
        });
        card.read_time = item.read_time;
    }
    card
}

pub fn business_card(business: &Business) -> Card {
    let mut card = Card::base(CardKind::Business, &business.name, &business.image);
    card.excerpt = truncate(&business.description, DEFAULT_EXCERPT_LENGTH);
    card.category = Some(CategoryBadge {
        slug: business.category.clone(),
        label: listing_category_label(&business.category),
    });
    card.byline = business.owner.as_ref().map(|owner| format!("By {}", owner));

    if let Some(address) = &business.address {
        card.details.push(CardDetail {
            icon: "📍",
            label: None,
            text: address.clone(),
        });
    }
    if let Some(phone) = &business.phone {
        card.details.push(CardDetail {
            icon: "📞",
            label: None,
            text: phone.clone(),
        });
        card.actions.push(CardAction {
            label: "Call Now",
            href: format!("tel:{}", phone),
            primary: true,
            external: false,
        });
    }
    if let Some(hours) = &business.hours {
        card.details.push(CardDetail {
            icon: "🕒",
            label: Some("Opening Hours"),
            text: hours.clone(),
        });
    }
    if let Some(directions) = &business.directions {
        card.actions.push(CardAction {
            label: "Get Directions",
            href: directions.clone(),
            primary: false,
            external: true,
        });
    }
    card
}

pub fn service_card(service: &Service) -> Card {
    let mut card = Card::base(CardKind::Service, &service.name, &service.image);
    card.excerpt = truncate(&service.description, DEFAULT_EXCERPT_LENGTH);
    card.category = Some(CategoryBadge {
        slug: service.category.clone(),
        label: service_category_label(&service.category),
    });
    card.features = service.features.clone();
    card.provider = Some(ProviderBadge {
        name: service.provider.name.clone(),
        initial: service.provider.name.chars().next().map(String::from).unwrap_or_default(),
        experience: service.provider.experience.clone(),
    });

    if let Some(phone) = &service.phone {
        card.actions.push(CardAction {
            label: "Call Now",
            href: format!("tel:{}", phone),
            primary: true,
            external: false,
        });
    }
    let details = service.link.as_ref().filter(|link| !link.trim().is_empty());
    if let Some(href) = details.cloned() {
        card.link = Some(href.clone());
        card.actions.push(CardAction {
            label: "View Details",
            href,
            primary: false,
            external: false,
        });
    }
    card
}
