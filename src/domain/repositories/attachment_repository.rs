//! Repository trait for the host content repository.

use crate::domain::entities::{AttachmentQuery, AttachmentRecord, ImageVariant};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to attachments and their image variants.
///
/// Callers in the resolution engine treat every error as "nothing found";
/// implementations should still report real failures so they get logged.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryAttachmentRepository`] - In-memory content snapshot
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    /// Fetches image attachments matching the query.
    ///
    /// Ordering is a hint only; explicit-ID galleries re-order the result
    /// themselves.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn find_attachments(
        &self,
        query: &AttachmentQuery,
    ) -> Result<Vec<AttachmentRecord>, AppError>;

    /// Resolves one named size of an attachment.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(variant))` if the size exists
    /// - `Ok(None)` if the attachment or the size is unknown
    async fn image_variant(
        &self,
        attachment_id: i64,
        size: &str,
    ) -> Result<Option<ImageVariant>, AppError>;

    /// Returns the featured image of a post, if it has one.
    async fn featured_image_id(&self, post_id: i64) -> Result<Option<i64>, AppError>;
}
