// Route tests against the fixture content under tests/fixtures
//
// Run with: cargo test --test site_routes

#[cfg(feature = "server")]
mod site_tests {
    use std::path::PathBuf;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot
    use udhwa_site::{create_router, AppState, SiteConfig};

    fn fixture_app(dir: &str) -> axum::Router {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
        let config = SiteConfig {
            data_dir: root.join(dir),
            static_dir: root.join("static"),
            ..SiteConfig::default()
        };
        create_router(AppState::new(config))
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
        send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        (status, String::from_utf8(body.to_vec()).expect("Body is not UTF-8"))
    }

    async fn vary_headers(app: axum::Router, request: Request<Body>) -> Vec<String> {
        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get_all(header::VARY)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase())
            .collect()
    }

    fn card_count(body: &str) -> usize {
        body.matches("class=\"card ").count()
    }

    // =========================================================================
    // Section 1: Health and routing
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get(fixture_app("site"), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body).expect("Failed to parse JSON");
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_every_page_renders() {
        for uri in ["/", "/news", "/blogs", "/listings", "/services", "/news/1", "/blogs/1"] {
            let (status, body) = get(fixture_app("site"), uri).await;
            assert_eq!(status, StatusCode::OK, "GET {}", uri);
            assert!(body.contains("<html"), "GET {} returned no page shell", uri);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = get(fixture_app("site"), "/events").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
    }

    // =========================================================================
    // Section 2: Home
    // =========================================================================

    #[tokio::test]
    async fn test_home_shows_recent_content() {
        let (_, body) = get(fixture_app("site"), "/").await;
        assert!(body.contains("News Item 01"));
        assert!(body.contains("Blog Item 2"));
        assert_eq!(card_count(&body), 5);
    }

    #[tokio::test]
    async fn test_home_survives_broken_recent_posts() {
        let (status, body) = get(fixture_app("broken"), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Unable to load news"));
        assert!(body.contains("Unable to load blogs"));
        assert_eq!(card_count(&body), 0);
    }

    // =========================================================================
    // Section 3: Pagination
    // =========================================================================

    #[tokio::test]
    async fn test_news_first_page() {
        let (_, body) = get(fixture_app("site"), "/news").await;
        assert!(body.contains("Showing 1-6 of 14 news articles"));
        assert_eq!(card_count(&body), 6);
        assert!(body.contains("News Item 01"));
        assert!(!body.contains("News Item 07"));
    }

    #[tokio::test]
    async fn test_news_second_page() {
        let (status, body) = get(fixture_app("site"), "/news?page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Showing 7-12 of 14 news articles"));
        assert!(body.contains("News Item 07"));
        assert!(body.contains("News Item 12"));
        assert!(!body.contains("News Item 06"));
        assert!(!body.contains("News Item 13"));
    }

    #[tokio::test]
    async fn test_last_page_is_partial() {
        let (_, body) = get(fixture_app("site"), "/news?page=3").await;
        assert!(body.contains("Showing 13-14 of 14 news articles"));
        assert_eq!(card_count(&body), 2);
        assert!(body.contains("pagination-next disabled"));
    }

    #[tokio::test]
    async fn test_out_of_range_page_stays_on_first() {
        for uri in ["/news?page=4", "/news?page=0", "/news?page=two"] {
            let (status, body) = get(fixture_app("site"), uri).await;
            assert_eq!(status, StatusCode::OK, "GET {}", uri);
            assert!(body.contains("Showing 1-6 of 14 news articles"), "GET {}", uri);
        }
    }

    #[tokio::test]
    async fn test_repeated_query_key_still_renders_page() {
        let (status, body) = get(fixture_app("site"), "/news?page=1&page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<html"));
        assert!(body.contains("Showing 1-6 of 14 news articles"));

        let (status, body) = get(fixture_app("site"), "/services?category=medical&category=repair").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Local Services"));
    }

    #[tokio::test]
    async fn test_filtered_second_page() {
        let (status, body) = get(fixture_app("site"), "/services?category=medical&page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Showing 13-14 of 14 services"));
        assert_eq!(card_count(&body), 2);
        assert!(body.contains("Health Visit 12"));
        assert!(body.contains("Health Visit 13"));
        assert!(!body.contains("Health Visit 11"));
        assert!(!body.contains("Cafe Catering"));
        // page links keep the category filter
        assert!(body.contains("category=medical&amp;page=2"));
    }

    #[tokio::test]
    async fn test_filtered_and_searched_second_page() {
        let (_, body) = get(fixture_app("site"), "/services?category=medical&q=care&page=2").await;
        assert!(body.contains("Showing 13-13 of 13 services"));
        assert_eq!(card_count(&body), 1);
        assert!(body.contains("Health Visit 13"));
        assert!(body.contains("category=medical&amp;q=care&amp;page=2"));
    }

    #[tokio::test]
    async fn test_filter_change_without_page_starts_on_first() {
        let (_, body) = get(fixture_app("site"), "/services?category=medical").await;
        assert!(body.contains("Showing 1-12 of 14 services"));
        assert!(body.contains("Dr. Mehta Clinic"));
    }

    #[tokio::test]
    async fn test_single_page_has_no_controls() {
        let (_, body) = get(fixture_app("site"), "/blogs").await;
        assert_eq!(card_count(&body), 3);
        assert!(!body.contains("class=\"pagination\""));
    }

    // =========================================================================
    // Section 4: Filters and search
    // =========================================================================

    #[tokio::test]
    async fn test_listing_category_filter() {
        let (_, body) = get(fixture_app("site"), "/listings?category=shop").await;
        assert!(body.contains("Gupta General Store"));
        assert!(!body.contains("Lake View Tea Stall"));
        assert_eq!(card_count(&body), 1);
    }

    #[tokio::test]
    async fn test_empty_listing_category() {
        let (status, body) = get(fixture_app("site"), "/listings?category=medical").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No Listings found in the"));
        assert_eq!(card_count(&body), 0);
    }

    #[tokio::test]
    async fn test_service_search_ignores_case() {
        let (_, upper) = get(fixture_app("site"), "/services?q=CAFE").await;
        let (_, lower) = get(fixture_app("site"), "/services?q=cafe").await;
        assert_eq!(upper, lower);
        assert!(lower.contains("Cafe Catering"));
        assert!(!lower.contains("Plumbing Repairs"));
    }

    #[tokio::test]
    async fn test_service_search_matches_provider() {
        let (_, body) = get(fixture_app("site"), "/services?q=sahu").await;
        assert!(body.contains("Plumbing Repairs"));
        assert_eq!(card_count(&body), 1);
    }

    #[tokio::test]
    async fn test_service_search_without_matches() {
        let (_, body) = get(fixture_app("site"), "/services?q=zzz").await;
        assert!(body.contains("No Services Found"));
        assert_eq!(card_count(&body), 0);
    }

    #[tokio::test]
    async fn test_service_category_counts() {
        let (_, body) = get(fixture_app("site"), "/services").await;
        assert!(body.contains("1 Services"));
        assert!(body.contains("0 Services"));
    }

    #[tokio::test]
    async fn test_htmx_request_returns_fragment() {
        let request = Request::builder()
            .uri("/services?q=clinic")
            .header("HX-Request", "true")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(fixture_app("site"), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.trim_start().starts_with("<div id=\"results\""));
        assert!(!body.contains("<html"));
        assert!(body.contains("Dr. Mehta Clinic"));
    }

    #[tokio::test]
    async fn test_fragment_routes_vary_on_hx_request() {
        for uri in ["/services", "/listings"] {
            let full = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let fragment = Request::builder()
                .uri(uri)
                .header("HX-Request", "true")
                .body(Body::empty())
                .unwrap();

            for request in [full, fragment] {
                let vary = vary_headers(fixture_app("site"), request).await;
                assert!(
                    vary.iter().any(|value| value.contains("hx-request")),
                    "GET {} vary={:?}",
                    uri,
                    vary
                );
            }
        }
    }

    // =========================================================================
    // Section 5: Single posts
    // =========================================================================

    #[tokio::test]
    async fn test_news_post_renders_body() {
        let (_, body) = get(fixture_app("site"), "/news/2").await;
        assert!(body.contains("News Item 02"));
        assert!(body.contains("<h2>Details</h2>"));
        assert!(body.contains("<blockquote>A quote.</blockquote>"));
        assert!(body.contains("Back to News"));
    }

    #[tokio::test]
    async fn test_missing_post_is_404() {
        let (status, body) = get(fixture_app("site"), "/news/5").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("News post with ID 5 not found"));
        assert!(body.contains("Try Again"));
        assert!(body.contains("Back to News"));
    }

    #[tokio::test]
    async fn test_non_numeric_post_id_is_404() {
        let (status, body) = get(fixture_app("site"), "/blogs/latest").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Blog post with ID latest not found"));
    }

    #[tokio::test]
    async fn test_blog_post_related_and_navigation() {
        let (_, body) = get(fixture_app("site"), "/blogs/1").await;
        assert!(body.contains("Related Blogs"));
        assert!(body.contains("Blog Item 3"));
        assert!(body.contains("Blog Item 2"));
        assert!(body.contains("<li>first</li>"));
        assert!(body.contains("#udhwa"));
    }

    // =========================================================================
    // Section 6: Load failures
    // =========================================================================

    #[tokio::test]
    async fn test_malformed_collection_shows_error_panel() {
        let (status, body) = get(fixture_app("broken"), "/news").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Error Loading Content"));
        assert!(body.contains("Try Again"));
        assert_eq!(card_count(&body), 0);
    }

    #[tokio::test]
    async fn test_missing_collection_shows_error_panel() {
        for uri in ["/blogs", "/listings", "/services", "/blogs/1"] {
            let (status, body) = get(fixture_app("broken"), uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "GET {}", uri);
            assert!(body.contains("Try Again"), "GET {}", uri);
            assert!(body.contains("<html"), "GET {}", uri);
        }
    }
}
