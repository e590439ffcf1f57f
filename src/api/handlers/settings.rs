//! Gallery settings endpoints.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::api::dto::settings::{SettingsResponse, UpdateSettingsRequest};
use crate::domain::entities::GallerySettings;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the effective settings.
///
/// # Endpoint
///
/// `GET /api/settings`
///
/// # Response
///
/// ```json
/// {
///   "theme": "advanced-classic-light",
///   "thumb_size": "thumbnail",
///   "large_size": "large",
///   "themes": [{ "key": "classic", "label": "Classic Dark (no fullscreen)" }]
/// }
/// ```
pub async fn get_settings_handler(State(state): State<AppState>) -> Json<SettingsResponse> {
    let settings = state.gallery_service.settings().load().await;
    Json(SettingsResponse::from(settings))
}

/// Replaces all three settings.
///
/// # Endpoint
///
/// `PUT /api/settings`
///
/// Galleries rendered after the call use the new theme and sizes.
///
/// # Errors
///
/// Returns 400 for an unknown theme or a blank size, and 500 if the option
/// store rejects a write.
pub async fn update_settings_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    payload.validate()?;

    let settings = GallerySettings::from(payload);
    state.gallery_service.settings().save(&settings).await?;

    tracing::info!(theme = %settings.theme, "Gallery settings updated");

    Ok(Json(SettingsResponse::from(settings)))
}
