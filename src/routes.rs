//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET /health`                  - Health check (content store, settings)
//! - `GET /api/posts/{id}/gallery`  - Rendered gallery as JSON
//! - `GET|PUT /api/settings`        - Theme and size settings
//! - `GET /posts/{id}/gallery`      - Gallery preview page
//! - `/static/*`                    - Renderer library, themes and other assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Directory served under `/static`.
pub const STATIC_DIR: &str = "static";

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
