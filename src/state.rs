//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::GalleryService;
use crate::infrastructure::persistence::{MemoryAttachmentRepository, MemoryOptionStore};

/// Gallery service over the in-memory adapters.
pub type AppGalleryService = GalleryService<MemoryAttachmentRepository, MemoryOptionStore>;

#[derive(Clone)]
pub struct AppState {
    pub gallery_service: Arc<AppGalleryService>,
    pub repository: Arc<MemoryAttachmentRepository>,
    /// Base URL of the renderer's static assets (themes live below it).
    pub asset_base_url: String,
}

impl AppState {
    pub fn new(
        repository: Arc<MemoryAttachmentRepository>,
        options: Arc<MemoryOptionStore>,
        asset_base_url: impl Into<String>,
    ) -> Self {
        Self {
            gallery_service: Arc::new(GalleryService::new(repository.clone(), options)),
            repository,
            asset_base_url: asset_base_url.into(),
        }
    }

    /// Replaces the gallery service, e.g. one built with hooks.
    pub fn with_gallery_service(mut self, service: AppGalleryService) -> Self {
        self.gallery_service = Arc::new(service);
        self
    }
}
