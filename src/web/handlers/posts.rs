// Single news and blog posts

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::Response,
};

use crate::cards::{content_card, CardKind};
use crate::content::{ContentItem, ContentKind};
use crate::dates::format_date;
use crate::error::{Result, SiteError};
use crate::fetch;
use crate::post_body::format_body;
use crate::posts::{
    adjacent_posts, author_initial, find_post, related_posts, DEFAULT_AUTHOR_BIO, RELATED_LIMIT,
};
use crate::web::errors::PageError;
use crate::web::templates::{AuthorView, NavLink, PostTemplate, PostView};
use crate::web::{render, AppState};

pub async fn news_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    uri: Uri,
) -> Response {
    post_page(&state, ContentKind::News, &id, &uri).await
}

pub async fn blog_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    uri: Uri,
) -> Response {
    post_page(&state, ContentKind::Blog, &id, &uri).await
}

async fn post_page(state: &AppState, kind: ContentKind, raw_id: &str, uri: &Uri) -> Response {
    let (nav, section, what, back_label) = match kind {
        ContentKind::Blog => ("blogs", "Blogs", "blog post", "Back to Blogs"),
        _ => ("news", "News", "news post", "Back to News"),
    };

    match load_post(state, kind, raw_id).await {
        Ok(post) => {
            let template = PostTemplate {
                chrome: state.chrome(nav),
                title: state.page_title(&post.title),
                post,
            };
            render(&template, StatusCode::OK)
        }
        Err(e) => PageError::from_site_error(&e, what, uri.to_string())
            .with_back(back_label, kind.route())
            .into_page(state.chrome(nav), state.page_title(section), section),
    }
}

async fn load_post(state: &AppState, kind: ContentKind, raw_id: &str) -> Result<PostView> {
    // Non-numeric ids can never match a post.
    let id: u32 = raw_id.trim().parse().map_err(|_| SiteError::NotFound {
        kind,
        id: raw_id.to_string(),
    })?;

    let resource = match kind {
        ContentKind::Blog => fetch::BLOG_POSTS,
        _ => fetch::NEWS_POSTS,
    };
    let posts: Vec<ContentItem> = state.fetcher.fetch(resource).await?;
    let post = find_post(&posts, kind, id)?;

    Ok(build_post_view(&posts, post, kind))
}

fn build_post_view(posts: &[ContentItem], post: &ContentItem, kind: ContentKind) -> PostView {
    let card_kind = if kind == ContentKind::Blog {
        CardKind::Blog
    } else {
        CardKind::News
    };

    let author = post.author.as_ref().map(|name| AuthorView {
        name: name.clone(),
        initial: author_initial(name),
        bio: post
            .author_bio
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTHOR_BIO.to_string()),
    });

    let mut view = PostView {
        title: post.title.clone(),
        date: format_date(&post.date),
        image: post.image.clone(),
        fallback_image: card_kind.fallback_image(),
        category: post.category.clone(),
        read_time: post.read_time,
        author,
        blocks: format_body(post.content.as_deref()),
        tags: post.tags.clone(),
        related_heading: "",
        related: Vec::new(),
        related_empty: None,
        previous: None,
        next: None,
        back: NavLink {
            label: format!("Back to {}", if kind == ContentKind::Blog { "Blogs" } else { "News" }),
            href: kind.route().to_string(),
        },
    };

    if kind == ContentKind::Blog {
        let related: Vec<_> = related_posts(posts, post, RELATED_LIMIT)
            .into_iter()
            .map(|item| content_card(item, CardKind::RelatedBlog))
            .collect();
        view.related_heading = "Related Blogs";
        view.related_empty = related
            .is_empty()
            .then(|| "No related blogs found.".to_string());
        view.related = related;

        let (previous, next) = adjacent_posts(posts, post);
        view.previous = previous.map(|p| post_link(kind, p));
        view.next = next.map(|p| post_link(kind, p));
    }
    view
}

fn post_link(kind: ContentKind, post: &ContentItem) -> NavLink {
    NavLink {
        label: post.title.clone(),
        href: format!("{}/{}", kind.route(), post.id),
    }
}
