#![allow(dead_code)]

use advanced_galleria::api;
use advanced_galleria::domain::entities::ImageVariant;
use advanced_galleria::infrastructure::persistence::{
    ContentSnapshot, MemoryAttachmentRepository, MemoryOptionStore, StoredAttachment, StoredPost,
};
use advanced_galleria::state::AppState;
use advanced_galleria::web;
use axum::Router;
use axum::routing::get;
use std::collections::HashMap;
use std::sync::Arc;

pub const ASSET_BASE_URL: &str = "/static/galleria";

/// Post with three images attached out of id order.
pub const TRIP_POST: i64 = 1;
/// Post whose only image is its featured image.
pub const FEATURED_POST: i64 = 2;
/// Post without attachments.
pub const EMPTY_POST: i64 = 3;

pub fn variant_url(id: i64, size: &str) -> String {
    format!("https://cdn.example.com/uploads/{id}-{size}.jpg")
}

pub fn image(id: i64, parent_id: i64, menu_order: i64, title: &str) -> StoredAttachment {
    let sizes = [
        ("thumbnail", 150, 150),
        ("medium", 300, 200),
        ("large", 1024, 683),
    ]
    .into_iter()
    .map(|(size, w, h)| (size.to_string(), ImageVariant::new(variant_url(id, size), w, h)))
    .collect::<HashMap<_, _>>();

    StoredAttachment {
        id,
        parent_id,
        menu_order,
        title: title.to_string(),
        description: format!("<em>{title}</em>"),
        mime_type: "image/jpeg".to_string(),
        sizes,
    }
}

pub fn post(id: i64, featured_image_id: Option<i64>) -> StoredPost {
    StoredPost {
        id,
        title: format!("Post {id}"),
        featured_image_id,
    }
}

pub fn snapshot() -> ContentSnapshot {
    ContentSnapshot {
        posts: vec![
            post(TRIP_POST, Some(9)),
            post(FEATURED_POST, Some(20)),
            post(EMPTY_POST, None),
        ],
        attachments: vec![
            image(9, TRIP_POST, 1, "Harbour"),
            image(3, TRIP_POST, 2, "Lighthouse"),
            image(5, TRIP_POST, 0, "Dunes"),
            image(20, FEATURED_POST, 0, "Cover"),
        ],
    }
}

pub fn create_repository() -> Arc<MemoryAttachmentRepository> {
    Arc::new(MemoryAttachmentRepository::new(snapshot()))
}

pub fn create_test_state() -> AppState {
    create_test_state_with_options(MemoryOptionStore::new())
}

pub fn create_test_state_with_options(options: MemoryOptionStore) -> AppState {
    AppState::new(create_repository(), Arc::new(options), ASSET_BASE_URL)
}

/// Routes under test, without path normalization or static files.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::handlers::health_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .with_state(state)
}
