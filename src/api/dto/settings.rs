//! DTOs for the settings endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::GallerySettings;
use crate::domain::entities::settings::AVAILABLE_THEMES;

/// Replacement gallery settings.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    #[validate(custom(function = "validate_theme"))]
    pub theme: String,

    #[validate(custom(function = "validate_size"))]
    pub thumb_size: String,

    #[validate(custom(function = "validate_size"))]
    pub large_size: String,
}

impl From<UpdateSettingsRequest> for GallerySettings {
    fn from(request: UpdateSettingsRequest) -> Self {
        Self {
            theme: request.theme,
            thumb_size: request.thumb_size.trim().to_string(),
            large_size: request.large_size.trim().to_string(),
        }
    }
}

fn validate_theme(theme: &str) -> Result<(), ValidationError> {
    if AVAILABLE_THEMES.iter().any(|(key, _)| *key == theme) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_theme").with_message("Unknown theme".into()))
    }
}

fn validate_size(size: &str) -> Result<(), ValidationError> {
    if size.trim().is_empty() {
        Err(ValidationError::new("blank").with_message("Size must not be blank".into()))
    } else {
        Ok(())
    }
}

/// A theme the renderer ships with.
#[derive(Debug, Serialize)]
pub struct ThemeItem {
    pub key: &'static str,
    pub label: &'static str,
}

/// Current settings plus the themes to choose from.
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub theme: String,
    pub thumb_size: String,
    pub large_size: String,
    pub themes: Vec<ThemeItem>,
}

impl From<GallerySettings> for SettingsResponse {
    fn from(settings: GallerySettings) -> Self {
        Self {
            theme: settings.theme,
            thumb_size: settings.thumb_size,
            large_size: settings.large_size,
            themes: AVAILABLE_THEMES
                .iter()
                .map(|&(key, label)| ThemeItem { key, label })
                .collect(),
        }
    }
}
