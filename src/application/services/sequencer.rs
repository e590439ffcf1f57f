//! Reduction of candidates to the final display sequence.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::AttachmentRecord;
use crate::domain::repositories::AttachmentRepository;
use tracing::{debug, warn};

/// Removes repeated IDs, keeping the first occurrence.
pub fn dedupe_by_id(records: Vec<AttachmentRecord>) -> Vec<AttachmentRecord> {
    let mut seen = HashSet::new();
    records.into_iter().filter(|r| seen.insert(r.id)).collect()
}

/// Drops a lone record that is the container's featured image.
///
/// Only fires for exactly one record; larger sets are returned untouched even
/// when they contain the featured image.
pub fn suppress_featured_singleton(
    records: Vec<AttachmentRecord>,
    featured_image_id: Option<i64>,
) -> Vec<AttachmentRecord> {
    match (records.as_slice(), featured_image_id) {
        ([only], Some(featured)) if only.id == featured => Vec::new(),
        _ => records,
    }
}

/// Turns selected candidates into the display sequence.
pub struct Sequencer<R: AttachmentRepository> {
    repository: Arc<R>,
}

impl<R: AttachmentRepository> Sequencer<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Deduplicates, then applies the featured-singleton rule for `post_id`.
    ///
    /// The featured image is only looked up when a single record is left.
    /// A failed lookup counts as "no featured image".
    pub async fn sequence(
        &self,
        candidates: Vec<AttachmentRecord>,
        post_id: i64,
    ) -> Vec<AttachmentRecord> {
        let records = dedupe_by_id(candidates);

        if records.len() != 1 {
            return records;
        }

        let featured = match self.repository.featured_image_id(post_id).await {
            Ok(featured) => featured,
            Err(e) => {
                warn!(error = %e, post_id, "Featured image lookup failed");
                None
            }
        };

        let sequence = suppress_featured_singleton(records, featured);
        if sequence.is_empty() {
            debug!(post_id, "Only image is the featured image, gallery suppressed");
        }
        sequence
    }
}
