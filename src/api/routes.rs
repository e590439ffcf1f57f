//! API route configuration.

use crate::api::handlers::{gallery_handler, get_settings_handler, update_settings_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET /posts/{id}/gallery` - Rendered gallery of a post
/// - `GET /settings`           - Theme and size settings
/// - `PUT /settings`           - Replace the settings
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts/{id}/gallery", get(gallery_handler))
        .route(
            "/settings",
            get(get_settings_handler).put(update_settings_handler),
        )
}
