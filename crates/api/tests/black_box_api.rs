use std::sync::Arc;

use lustre_api::app::{build_app, services::AppServices};
use lustre_catalog::Catalog;
use lustre_infra::{FileProductSource, StaticProductSource};
use reqwest::StatusCode;
use serde_json::{Value, json};

const FEED: &str = r#"[
    {"id": 1, "name": "Gold Ring", "category": "rings", "metal": "gold", "price": 5000,
     "imageUrl": "img/ring.jpg", "sku": "RG-1", "description": "A plain band."},
    {"id": 2, "name": "Silver Necklace", "category": "necklaces", "metal": "silver", "price": 15000,
     "sku": "NK-2", "description": "", "modelUrl": "https://cdn.example/necklace.glb"}
]"#;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(services: Arc<AppServices>) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            base_url,
            client,
            handle,
        }
    }

    async fn loaded() -> Self {
        let services = Arc::new(AppServices::in_memory());
        services
            .load(&StaticProductSource::new(Catalog::from_json(FEED).unwrap()))
            .await
            .unwrap();
        Self::spawn(services).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.get(self.url(path)).send().await.unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }

    async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self.client.post(self.url(path)).json(&body).send().await.unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn card_ids(listing: &Value) -> Vec<u64> {
    listing["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["product_id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn health_is_ok() {
    let server = TestServer::loaded().await;
    let res = server.client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn price_filter_wishlist_and_search_scenario() {
    let server = TestServer::loaded().await;

    let (status, view) = server.get_json("/api/collections?max_price=10000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(card_ids(&view["listing"]), vec![1]);
    assert_eq!(view["listing"]["cards"][0]["price_label"], "\u{20B9}5,000");
    assert_eq!(view["listing"]["cards"][0]["wishlisted"], false);

    let (status, outcome) = server.post_json("/api/wishlist/1/toggle", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome, json!({"added": true, "count": 1}));

    let (_, wishlist) = server.get_json("/api/wishlist").await;
    assert_eq!(card_ids(&wishlist), vec![1]);
    assert_eq!(wishlist["count"], 1);

    let (_, view) = server.get_json("/api/collections").await;
    assert_eq!(card_ids(&view["listing"]), vec![1, 2]);
    assert_eq!(view["listing"]["cards"][0]["wishlisted"], true);

    let (_, view) = server.get_json("/api/collections?search=platinum").await;
    assert!(card_ids(&view["listing"]).is_empty());
    assert_eq!(
        view["listing"]["empty_state"],
        "No products found matching your criteria."
    );
}

#[tokio::test]
async fn session_applies_url_hint_then_events() {
    let server = TestServer::loaded().await;

    let (status, view) = server.get_json("/api/collections/session?category=necklaces").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(card_ids(&view["listing"]), vec![2]);
    assert_eq!(view["filters"]["categories"][0]["checked"], false);

    let (_, view) = server
        .post_json(
            "/api/collections/session/events",
            json!({"type": "category_toggled", "value": "rings", "checked": true}),
        )
        .await;
    assert_eq!(card_ids(&view["listing"]), vec![1, 2]);

    let (_, view) = server
        .post_json("/api/collections/session/events", json!({"type": "clear_filters"}))
        .await;
    assert_eq!(view["filters"]["categories"][0]["checked"], true);
    assert_eq!(view["filters"]["max_price"], 15000);
}

#[tokio::test]
async fn unknown_filter_option_is_rejected() {
    let server = TestServer::loaded().await;
    let (status, body) = server.get_json("/api/collections?metals=platinum").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn malformed_requests_get_json_error_bodies() {
    let server = TestServer::loaded().await;

    let (status, body) = server.get_json("/api/collections?max_price=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
    assert!(body["message"].is_string());

    let (status, body) = server
        .post_json("/api/collections/session/events", json!({"type": "shake_screen"}))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_request");

    let res = server
        .client
        .post(server.url("/api/contact"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn detail_view_and_not_found() {
    let server = TestServer::loaded().await;

    let (status, detail) = server.get_json("/api/product?id=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["title"], "Silver Necklace - Lustre Jewels");
    assert_eq!(detail["viewer"]["kind"], "model");
    assert_eq!(detail["wishlist_label"], "Add to Wishlist");

    let (status, detail) = server.get_json("/api/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["viewer"]["kind"], "fallback");

    for path in ["/api/products/99", "/api/product?id=abc", "/api/product"] {
        let (status, body) = server.get_json(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(body["message"], "Product not found.");
        assert_eq!(body["back_href"], "collections.html");
    }
}

#[tokio::test]
async fn removing_from_wishlist_page_keeps_other_cards() {
    let server = TestServer::loaded().await;
    server.post_json("/api/wishlist/1/toggle", json!({})).await;
    server.post_json("/api/wishlist/2/toggle", json!({})).await;
    server.get_json("/api/wishlist").await;

    let res = server.client.delete(server.url("/api/wishlist/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(card_ids(&body), vec![2]);
    assert_eq!(body["count"], 1);

    let res = server.client.delete(server.url("/api/wishlist/2")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["empty_state"], "Your wishlist is empty.");
}

#[tokio::test]
async fn wishlist_toggle_rejects_bad_ids() {
    let server = TestServer::loaded().await;
    let (status, body) = server.post_json("/api/wishlist/abc/toggle", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn listing_reports_loading_then_terminal_failure() {
    let services = Arc::new(AppServices::in_memory());
    let server = TestServer::spawn(services.clone()).await;

    let (status, body) = server.get_json("/api/collections").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "loading");

    let dir = tempfile::tempdir().unwrap();
    services
        .load(&FileProductSource::new(dir.path().join("missing.json")))
        .await
        .unwrap();

    let (status, body) = server.get_json("/api/collections").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "Error loading products. Please try again later.");

    let (_, body) = server.get_json("/api/wishlist").await;
    assert_eq!(body["message"], "Could not load wishlist. Please try again later.");
}

#[tokio::test]
async fn search_redirects_to_listing() {
    let server = TestServer::loaded().await;

    let res = server.client.get(server.url("/api/search?q=%20gold%20ring%20")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers()["location"].to_str().unwrap(),
        "/collections?search=gold+ring"
    );

    let res = server.client.get(server.url("/api/search?q=%20%20")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn theme_follows_system_until_toggled() {
    let server = TestServer::loaded().await;

    let (_, body) = server.get_json("/api/theme?system_dark=true").await;
    assert_eq!(body["theme"], "dark");

    let res = server
        .client
        .post(server.url("/api/theme/toggle?system_dark=true"))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["theme"], "light");

    let (_, body) = server.get_json("/api/theme?system_dark=true").await;
    assert_eq!(body["theme"], "light");
}

#[tokio::test]
async fn contact_form_reports_field_errors() {
    let server = TestServer::loaded().await;

    let (status, body) = server
        .post_json("/api/contact", json!({"name": "Asha", "email": "not-an-email"}))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"]["email"], "Please enter a valid email address.");
    assert_eq!(body["fields"]["subject"], "This field is required.");
    assert!(body["fields"].get("name").is_none());

    let (status, body) = server
        .post_json(
            "/api/enquiry",
            json!({"name": "Asha", "email": "asha@example.com", "sku": "NK-2"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "enquiry");
}
