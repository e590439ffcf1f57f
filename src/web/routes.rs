//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::preview_handler;
use axum::{Router, routing::get};

/// Public HTML pages.
///
/// # Endpoints
///
/// - `GET /posts/{id}/gallery` - Gallery preview page
pub fn routes() -> Router<AppState> {
    Router::new().route("/posts/{id}/gallery", get(preview_handler))
}
