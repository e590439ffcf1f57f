//! Maps the display sequence to renderer input.

use std::sync::Arc;

use crate::domain::entities::{
    AttachmentRecord, GalleryOptions, GallerySettings, ImageVariant, PresentationConfig,
    RenderDescriptor,
};
use crate::domain::repositories::AttachmentRepository;
use tracing::warn;

/// Builds the renderer configuration from normalized options.
pub fn build_config(options: &GalleryOptions) -> PresentationConfig {
    PresentationConfig::new(
        options.width.clone(),
        options.height.clone(),
        options.autoplay,
        options.hide_controls,
        options.captions,
    )
}

/// Resolves image variants and produces render descriptors.
pub struct PresentationMapper<R: AttachmentRepository> {
    repository: Arc<R>,
}

impl<R: AttachmentRepository> PresentationMapper<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// One descriptor per record, in sequence order.
    ///
    /// Records whose variants cannot be resolved keep their slot with absent
    /// URLs.
    pub async fn describe(
        &self,
        records: &[AttachmentRecord],
        settings: &GallerySettings,
    ) -> Vec<RenderDescriptor> {
        let mut descriptors = Vec::with_capacity(records.len());

        for record in records {
            let thumb = self.variant(record.id, &settings.thumb_size).await;
            let large = self.variant(record.id, &settings.large_size).await;

            descriptors.push(RenderDescriptor::image(
                large.map(|v| v.url),
                thumb.map(|v| v.url),
                record.title.clone(),
                record.description.clone(),
            ));
        }

        descriptors
    }

    /// Resolves one variant per record at a fixed size.
    ///
    /// Every record keeps its slot; `None` where the size cannot be resolved.
    pub async fn variants(
        &self,
        records: &[AttachmentRecord],
        size: &str,
    ) -> Vec<Option<ImageVariant>> {
        let mut variants = Vec::with_capacity(records.len());
        for record in records {
            variants.push(self.variant(record.id, size).await);
        }
        variants
    }

    async fn variant(&self, attachment_id: i64, size: &str) -> Option<ImageVariant> {
        match self.repository.image_variant(attachment_id, size).await {
            Ok(variant) => variant,
            Err(e) => {
                warn!(error = %e, attachment_id, size, "Image variant lookup failed");
                None
            }
        }
    }
}
