//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "content": { "status": "ok", "message": "3 posts, 12 attachments" },
///     "settings": { "status": "ok", "message": "Theme: advanced-classic-light" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let content = check_content(&state).await;
    let settings = check_settings(&state).await;

    let all_healthy = content.is_ok() && settings.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { content, settings },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports how much content the repository holds.
async fn check_content(state: &AppState) -> CheckStatus {
    let (posts, attachments) = state.repository.counts().await;
    CheckStatus::ok(format!("{posts} posts, {attachments} attachments"))
}

/// Reports the active theme, flagging themes the renderer does not ship.
async fn check_settings(state: &AppState) -> CheckStatus {
    let settings = state.gallery_service.settings().load().await;

    if settings.is_known_theme() {
        CheckStatus::ok(format!("Theme: {}", settings.theme))
    } else {
        CheckStatus::error(format!("Unknown theme: {}", settings.theme))
    }
}
