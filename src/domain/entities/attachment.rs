//! Attachment records returned by the content repository.

use serde::{Deserialize, Serialize};

/// One resolved rendering of an image at a named size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl ImageVariant {
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }
}

/// A media item attached to a post.
///
/// Image variants are not carried on the record; they are resolved per size
/// through [`crate::domain::repositories::AttachmentRepository::image_variant`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    pub id: i64,
    pub menu_order: i64,
    pub title: String,
    /// Pre-rendered caption text, emitted verbatim.
    pub description: String,
}

impl AttachmentRecord {
    pub fn new(
        id: i64,
        menu_order: i64,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            menu_order,
            title: title.into(),
            description: description.into(),
        }
    }
}
