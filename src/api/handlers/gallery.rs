//! Handler for gallery rendering.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::gallery::{GalleryResponse, PostPath};
use crate::domain::entities::{AttrValue, RenderContext, ShortcodeRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Query key selecting syndication output instead of a slideshow.
pub const FEED_PARAM: &str = "feed";

/// Splits query parameters into shortcode attributes and the render context.
///
/// Every parameter except [`FEED_PARAM`] is passed through as an attribute.
pub fn shortcode_from_query(
    post_id: i64,
    mut params: HashMap<String, String>,
) -> (ShortcodeRequest, RenderContext) {
    let feed = params
        .remove(FEED_PARAM)
        .is_some_and(|v| AttrValue::from(v).as_bool());

    let context = if feed {
        RenderContext::feed(post_id)
    } else {
        RenderContext::interactive(post_id)
    };

    (params.into_iter().collect(), context)
}

/// Validates the post id and checks that the post exists.
///
/// # Errors
///
/// Returns 400 Bad Request for a non-positive id and 404 Not Found for an
/// unknown post.
pub async fn ensure_post(state: &AppState, path: &PostPath) -> Result<(), AppError> {
    path.validate()?;

    if state.repository.find_post(path.id).await.is_none() {
        return Err(AppError::not_found(
            "Post not found",
            json!({ "post_id": path.id }),
        ));
    }

    Ok(())
}

/// Renders the gallery of a post.
///
/// # Endpoint
///
/// `GET /api/posts/{id}/gallery`
///
/// # Query Parameters
///
/// Shortcode attributes (`ids`, `order`, `orderby`, `exclude`, `width`,
/// `height`, `autoplay`, `captions`, `hideControls`, ...). `feed=true`
/// renders the syndication form.
///
/// # Response
///
/// ```json
/// {
///   "post_id": 42,
///   "html": "<div id=\"advanced_galleria_slideshow_1\" ...",
///   "images": [{ "url": "...", "big": "...", "thumb": "...", "title": "...", "description": "", "type": "image" }],
///   "config": { "width": "auto", "height": 0.76, ... },
///   "instance": 1,
///   "outcome": "slideshow"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a non-positive id and 404 Not Found for an
/// unknown post. An empty gallery is not an error.
pub async fn gallery_handler(
    State(state): State<AppState>,
    Path(path): Path<PostPath>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<GalleryResponse>, AppError> {
    ensure_post(&state, &path).await?;

    let (request, context) = shortcode_from_query(path.id, params);
    let rendered = state.gallery_service.render(&request, context).await;

    Ok(Json(GalleryResponse::new(path.id, rendered)))
}
