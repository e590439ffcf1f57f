mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_get_settings_defaults() {
    let app = common::create_test_app(common::create_test_state());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/settings").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["theme"], "advanced-classic-light");
    assert_eq!(json["thumb_size"], "thumbnail");
    assert_eq!(json["large_size"], "large");
    assert_eq!(json["themes"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_settings_applies_to_galleries() {
    let app = common::create_test_app(common::create_test_state());
    let server = TestServer::new(app).unwrap();

    let response = server
        .put("/api/settings")
        .json(&json!({
            "theme": "classic",
            "thumb_size": "medium",
            "large_size": "large"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["theme"], "classic");

    let settings = server.get("/api/settings").await.json::<serde_json::Value>();
    assert_eq!(settings["theme"], "classic");
    assert_eq!(settings["thumb_size"], "medium");

    let gallery = server
        .get(&format!("/api/posts/{}/gallery", common::TRIP_POST))
        .await
        .json::<serde_json::Value>();
    assert_eq!(gallery["images"][0]["thumb"], common::variant_url(5, "medium"));
}

#[tokio::test]
async fn test_update_settings_rejects_unknown_theme() {
    let app = common::create_test_app(common::create_test_state());
    let server = TestServer::new(app).unwrap();

    let response = server
        .put("/api/settings")
        .json(&json!({
            "theme": "neon",
            "thumb_size": "",
            "large_size": "large"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert!(json["error"]["details"].get("theme").is_some());
    assert!(json["error"]["details"].get("thumb_size").is_some());

    let settings = server.get("/api/settings").await.json::<serde_json::Value>();
    assert_eq!(settings["theme"], "advanced-classic-light");
}
