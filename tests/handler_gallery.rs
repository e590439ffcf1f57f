mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

fn server() -> TestServer {
    TestServer::new(common::create_test_app(common::create_test_state())).unwrap()
}

fn titles(json: &Value) -> Vec<String> {
    json["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_gallery_default_ordering() {
    let server = server();

    let response = server.get("/api/posts/1/gallery").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["post_id"], 1);
    assert_eq!(json["outcome"], "slideshow");
    assert_eq!(json["instance"], 1);
    assert_eq!(titles(&json), vec!["Dunes", "Harbour", "Lighthouse"]);
    assert_eq!(json["images"][0]["url"], common::variant_url(5, "large"));
    assert_eq!(json["images"][0]["big"], common::variant_url(5, "large"));
    assert_eq!(json["images"][0]["thumb"], common::variant_url(5, "thumbnail"));
    assert_eq!(json["images"][0]["type"], "image");

    let html = json["html"].as_str().unwrap();
    assert!(html.starts_with(r#"<div id="advanced_galleria_slideshow_1""#));
    assert!(html.contains(r##"jQuery("#advanced_galleria_slideshow_1").galleria("##));
}

#[tokio::test]
async fn test_gallery_explicit_ids_keep_list_order() {
    let server = server();

    let response = server
        .get("/api/posts/1/gallery")
        .add_query_param("ids", "5,3,9")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(titles(&json), vec!["Dunes", "Lighthouse", "Harbour"]);
}

#[tokio::test]
async fn test_gallery_ids_from_other_post() {
    let server = server();

    let response = server
        .get("/api/posts/3/gallery")
        .add_query_param("include", "20, 5")
        .await;

    let json = response.json::<Value>();
    assert_eq!(titles(&json), vec!["Cover", "Dunes"]);
}

#[tokio::test]
async fn test_gallery_exclude_and_descending() {
    let server = server();

    let response = server
        .get("/api/posts/1/gallery")
        .add_query_param("exclude", "9")
        .add_query_param("order", "desc")
        .await;

    let json = response.json::<Value>();
    assert_eq!(titles(&json), vec!["Lighthouse", "Dunes"]);
}

#[tokio::test]
async fn test_gallery_renderer_options() {
    let server = server();

    let response = server
        .get("/api/posts/1/gallery")
        .add_query_param("autoplay", "1")
        .add_query_param("captions", "on_hidden")
        .add_query_param("width", "640")
        .add_query_param("hideControls", "true")
        .await;

    let json = response.json::<Value>();
    assert_eq!(json["config"]["autoplay"], true);
    assert_eq!(json["config"]["width"], 640);
    assert_eq!(json["config"]["height"], 0.76);
    assert_eq!(json["config"]["_captionMode"], "on_hidden");
    assert_eq!(json["config"]["_hideControls"], true);
    assert_eq!(json["config"]["transition"], "slide");
}

#[tokio::test]
async fn test_gallery_instances_increase() {
    let server = server();

    let first = server.get("/api/posts/1/gallery").await.json::<Value>();
    let second = server.get("/api/posts/1/gallery").await.json::<Value>();

    assert_eq!(first["instance"], 1);
    assert_eq!(second["instance"], 2);
    assert!(
        second["html"]
            .as_str()
            .unwrap()
            .contains("advanced_galleria_slideshow_2")
    );
}

#[tokio::test]
async fn test_gallery_feed() {
    let server = server();

    let response = server
        .get("/api/posts/1/gallery")
        .add_query_param("feed", "true")
        .await;

    let json = response.json::<Value>();
    assert_eq!(json["outcome"], "syndicated");
    assert!(json.get("instance").is_none());

    let html = json["html"].as_str().unwrap();
    assert_eq!(html.matches("<img ").count(), 3);
    assert!(html.contains(&format!(
        r#"<img src="{}" width="300" height="200">"#,
        common::variant_url(5, "medium")
    )));
    assert!(!html.contains("<script"));
    assert!(!html.contains("<div"));
}

#[tokio::test]
async fn test_gallery_featured_singleton_suppressed() {
    let server = server();

    let response = server.get("/api/posts/2/gallery").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["outcome"], "empty");
    assert_eq!(json["html"], "");
}

#[tokio::test]
async fn test_gallery_empty_post() {
    let server = server();

    let response = server.get("/api/posts/3/gallery").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["outcome"], "empty");
    assert_eq!(json["html"], "");
    assert!(json["images"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_gallery_unknown_post() {
    let server = server();

    let response = server.get("/api/posts/99/gallery").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["post_id"], 99);
}

#[tokio::test]
async fn test_gallery_invalid_post_id() {
    let server = server();

    let response = server.get("/api/posts/0/gallery").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_preview_page() {
    let server = server();

    let response = server.get("/posts/1/gallery").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"<script src="/static/galleria/galleria-1.3.1.min.js"></script>"#));
    assert!(html.contains(
        "/static/galleria/themes/advanced-classic-light/galleria.advanced-classic-light.min.js"
    ));
    assert!(html.contains(
        "/static/galleria/themes/advanced-classic-light/galleria.advanced-classic-light.min.css"
    ));
    assert!(html.contains(r#"<div id="advanced_galleria_slideshow_1""#));
}

#[tokio::test]
async fn test_preview_page_empty_gallery() {
    let server = server();

    let response = server.get("/posts/3/gallery").await;

    response.assert_status_ok();
    assert!(response.text().contains("This post has no gallery images."));
}

#[tokio::test]
async fn test_preview_page_unknown_post() {
    let server = server();

    server
        .get("/posts/99/gallery")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_gallery_with_registered_hooks() {
    use advanced_galleria::application::hooks::GalleryHooks;
    use advanced_galleria::application::instance_counter::InstanceCounter;
    use advanced_galleria::application::services::GalleryService;
    use advanced_galleria::infrastructure::persistence::MemoryOptionStore;
    use std::sync::Arc;

    let hooks = GalleryHooks::new().on_images(|images| images.into_iter().take(1).collect());
    let state = common::create_test_state();
    let service = GalleryService::with_hooks(
        state.repository.clone(),
        Arc::new(MemoryOptionStore::new()),
        hooks,
        Arc::new(InstanceCounter::new()),
    );
    let server =
        TestServer::new(common::create_test_app(state.with_gallery_service(service))).unwrap();

    let json = server.get("/api/posts/1/gallery").await.json::<Value>();

    assert_eq!(titles(&json), vec!["Dunes"]);
    assert_eq!(json["outcome"], "slideshow");
}
