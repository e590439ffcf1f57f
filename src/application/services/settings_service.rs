//! Gallery settings backed by the option store.

use std::sync::Arc;

use crate::domain::entities::GallerySettings;
use crate::domain::entities::settings::{LARGE_SIZE_OPTION, THEME_OPTION, THUMB_SIZE_OPTION};
use crate::domain::repositories::OptionStore;
use tracing::warn;

/// Reads and writes [`GallerySettings`].
pub struct SettingsService<O: OptionStore> {
    store: Arc<O>,
}

impl<O: OptionStore> SettingsService<O> {
    pub fn new(store: Arc<O>) -> Self {
        Self { store }
    }

    /// Loads the settings, falling back to the defaults per key.
    ///
    /// Missing, blank and unreadable options all fall back silently (store
    /// errors are logged).
    pub async fn load(&self) -> GallerySettings {
        let defaults = GallerySettings::default();

        GallerySettings {
            theme: self.read(THEME_OPTION, defaults.theme).await,
            thumb_size: self.read(THUMB_SIZE_OPTION, defaults.thumb_size).await,
            large_size: self.read(LARGE_SIZE_OPTION, defaults.large_size).await,
        }
    }

    /// Stores every setting.
    ///
    /// # Errors
    ///
    /// Returns the first store error; earlier keys stay written.
    pub async fn save(&self, settings: &GallerySettings) -> Result<(), crate::error::AppError> {
        self.store.set_option(THEME_OPTION, &settings.theme).await?;
        self.store
            .set_option(THUMB_SIZE_OPTION, &settings.thumb_size)
            .await?;
        self.store
            .set_option(LARGE_SIZE_OPTION, &settings.large_size)
            .await?;
        Ok(())
    }

    async fn read(&self, key: &str, fallback: String) -> String {
        match self.store.get_option(key).await {
            Ok(Some(value)) if !value.trim().is_empty() => value,
            Ok(_) => fallback,
            Err(e) => {
                warn!(error = %e, key, "Option lookup failed, using default");
                fallback
            }
        }
    }
}
