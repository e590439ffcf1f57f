//! DTOs for the gallery endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{GalleryOutcome, RenderedGallery};
use crate::domain::entities::{PresentationConfig, RenderDescriptor};

/// Path parameters naming the post whose gallery is rendered.
#[derive(Debug, Deserialize, Validate)]
pub struct PostPath {
    #[validate(range(min = 1, message = "Post id must be positive"))]
    pub id: i64,
}

/// Rendered gallery.
///
/// `html` is what the shortcode is replaced with; the remaining fields expose
/// the resolved renderer input.
#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub post_id: i64,
    pub html: String,
    pub images: Vec<RenderDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PresentationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<u64>,
    pub outcome: &'static str,
}

impl GalleryResponse {
    pub fn new(post_id: i64, rendered: RenderedGallery) -> Self {
        let (outcome, instance) = match rendered.outcome {
            GalleryOutcome::Overridden => ("overridden", None),
            GalleryOutcome::Syndicated => ("syndicated", None),
            GalleryOutcome::Slideshow { instance } => ("slideshow", Some(instance)),
            GalleryOutcome::Empty => ("empty", None),
        };

        Self {
            post_id,
            html: rendered.html,
            images: rendered.images,
            config: rendered.config,
            instance,
            outcome,
        }
    }
}
