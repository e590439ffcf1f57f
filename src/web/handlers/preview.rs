//! Gallery preview page handler.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};

use crate::api::dto::gallery::PostPath;
use crate::api::handlers::gallery::{ensure_post, shortcode_from_query};
use crate::error::AppError;
use crate::state::AppState;

/// Template for the preview page.
///
/// Renders `templates/preview.html` with the gallery markup embedded as-is and
/// the theme assets the slideshow needs.
#[derive(Template, WebTemplate)]
#[template(path = "preview.html")]
pub struct PreviewTemplate {
    pub post_id: i64,
    pub theme: String,
    pub library_url: String,
    pub script_url: String,
    pub stylesheet_url: String,
    pub gallery_html: String,
}

/// Renders a post's gallery inside a standalone page.
///
/// # Endpoint
///
/// `GET /posts/{id}/gallery`
///
/// Accepts the same query parameters as the JSON endpoint.
///
/// # Errors
///
/// Returns 400 Bad Request for a non-positive id and 404 Not Found for an
/// unknown post.
pub async fn preview_handler(
    State(state): State<AppState>,
    Path(path): Path<PostPath>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<PreviewTemplate, AppError> {
    ensure_post(&state, &path).await?;

    let settings = state.gallery_service.settings().load().await;
    let assets = settings.theme_assets(&state.asset_base_url);

    let (request, context) = shortcode_from_query(path.id, params);
    let gallery_html = state.gallery_service.render_html(&request, context).await;

    Ok(PreviewTemplate {
        post_id: path.id,
        theme: settings.theme,
        library_url: assets.library,
        script_url: assets.script,
        stylesheet_url: assets.stylesheet,
        gallery_html,
    })
}
