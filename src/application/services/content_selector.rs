//! Candidate selection against the content repository.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{AttachmentQuery, AttachmentRecord, GalleryOptions, SortDirection};
use crate::domain::repositories::AttachmentRepository;
use tracing::{debug, warn};

/// Builds the repository query for normalized options.
///
/// Explicit IDs always win over parent/exclude criteria. Random order drops
/// the sort field, since the two cannot be combined.
pub fn build_query(options: &GalleryOptions) -> AttachmentQuery {
    let orderby = match options.order {
        SortDirection::Rand => None,
        _ => Some(options.orderby.clone()),
    };

    match &options.include {
        Some(ids) => AttachmentQuery::Include {
            ids: ids.clone(),
            order: options.order,
            orderby,
        },
        None => AttachmentQuery::Children {
            parent_id: options.parent_id,
            exclude: options.exclude.clone(),
            order: options.order,
            orderby,
        },
    }
}

/// Re-orders `records` to follow `ids`, dropping records not listed.
///
/// Repeated IDs yield the record once per occurrence; sequencing removes the
/// repeats afterwards.
pub fn order_by_id_list(records: Vec<AttachmentRecord>, ids: &[i64]) -> Vec<AttachmentRecord> {
    ids.iter()
        .filter_map(|id| records.iter().find(|r| r.id == *id).cloned())
        .collect()
}

/// Fetches gallery candidates in one of the two selection modes.
pub struct ContentSelector<R: AttachmentRepository> {
    repository: Arc<R>,
}

impl<R: AttachmentRepository> ContentSelector<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the candidate attachments for a gallery.
    ///
    /// Never fails. A repository error is logged and treated as an empty
    /// result, the same as a container without images.
    pub async fn select(&self, options: &GalleryOptions) -> Vec<AttachmentRecord> {
        let query = build_query(options);

        if let AttachmentQuery::Include { ids, .. } = &query
            && ids.is_empty()
        {
            debug!("Explicit ID list cleaned to nothing, skipping query");
            return Vec::new();
        }

        let records = match self.repository.find_attachments(&query).await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, ?query, "Attachment query failed, rendering no images");
                return Vec::new();
            }
        };

        match &query {
            AttachmentQuery::Include { ids, .. } => order_by_id_list(records, ids),
            AttachmentQuery::Children { exclude, .. } => {
                let excluded: HashSet<i64> = exclude.iter().copied().collect();
                records
                    .into_iter()
                    .filter(|r| !excluded.contains(&r.id))
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortcodeRequest;
    use crate::domain::repositories::MockAttachmentRepository;
    use crate::error::AppError;
    use serde_json::json;

    fn record(id: i64) -> AttachmentRecord {
        AttachmentRecord::new(id, 0, format!("Image {id}"), "")
    }

    fn options(request: ShortcodeRequest) -> GalleryOptions {
        GalleryOptions::normalize(&request, 10)
    }

    fn ids(records: &[AttachmentRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_build_query_defaults_to_children() {
        let query = build_query(&options(ShortcodeRequest::new()));
        assert_eq!(
            query,
            AttachmentQuery::Children {
                parent_id: 10,
                exclude: vec![],
                order: SortDirection::Asc,
                orderby: Some("menu_order ID".to_string()),
            }
        );
    }

    #[test]
    fn test_build_query_random_drops_sort_field() {
        let query = build_query(&options(
            ShortcodeRequest::new()
                .with("order", "RAND")
                .with("orderby", "title"),
        ));
        assert_eq!(query.order(), SortDirection::Rand);
        assert_eq!(query.orderby(), None);
        assert!(matches!(query, AttachmentQuery::Children { .. }));
    }

    #[test]
    fn test_build_query_explicit_ids_win_over_exclude() {
        let query = build_query(&options(
            ShortcodeRequest::new()
                .with("ids", "5,3,9")
                .with("exclude", "3"),
        ));
        assert_eq!(
            query,
            AttachmentQuery::Include {
                ids: vec![5, 3, 9],
                order: SortDirection::Asc,
                orderby: Some("menu_order ID".to_string()),
            }
        );
    }

    #[test]
    fn test_order_by_id_list() {
        let ordered = order_by_id_list(vec![record(3), record(5), record(9)], &[5, 3, 9]);
        assert_eq!(ids(&ordered), vec![5, 3, 9]);
    }

    #[test]
    fn test_order_by_id_list_drops_unlisted_and_missing() {
        let ordered = order_by_id_list(vec![record(3), record(4), record(9)], &[9, 7, 3]);
        assert_eq!(ids(&ordered), vec![9, 3]);
    }

    #[tokio::test]
    async fn test_select_explicit_ids_reorders() {
        let mut repo = MockAttachmentRepository::new();
        repo.expect_find_attachments()
            .withf(|q| matches!(q, AttachmentQuery::Include { ids, .. } if ids == &vec![5, 3, 9]))
            .times(1)
            .returning(|_| Ok(vec![record(9), record(3), record(5)]));

        let selector = ContentSelector::new(Arc::new(repo));
        let result = selector
            .select(&options(ShortcodeRequest::new().with("ids", "5,3,9")))
            .await;

        assert_eq!(ids(&result), vec![5, 3, 9]);
    }

    #[tokio::test]
    async fn test_select_drops_records_outside_id_list() {
        let mut repo = MockAttachmentRepository::new();
        repo.expect_find_attachments()
            .times(1)
            .returning(|_| Ok(vec![record(1), record(2), record(42)]));

        let selector = ContentSelector::new(Arc::new(repo));
        let result = selector
            .select(&options(ShortcodeRequest::new().with("include", "2,1")))
            .await;

        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_select_garbage_id_list_skips_query() {
        let mut repo = MockAttachmentRepository::new();
        repo.expect_find_attachments().times(0);

        let selector = ContentSelector::new(Arc::new(repo));
        let result = selector
            .select(&options(ShortcodeRequest::new().with("ids", "none")))
            .await;

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_select_children_honours_exclusion() {
        let mut repo = MockAttachmentRepository::new();
        repo.expect_find_attachments()
            .withf(|q| {
                matches!(q, AttachmentQuery::Children { parent_id: 10, exclude, .. } if exclude == &vec![2])
            })
            .times(1)
            // a repository that ignores the exclusion set
            .returning(|_| Ok(vec![record(1), record(2), record(3)]));

        let selector = ContentSelector::new(Arc::new(repo));
        let result = selector
            .select(&options(ShortcodeRequest::new().with("exclude", "2")))
            .await;

        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_select_repository_error_yields_empty() {
        let mut repo = MockAttachmentRepository::new();
        repo.expect_find_attachments()
            .times(1)
            .returning(|_| Err(AppError::internal("Store unavailable", json!({}))));

        let selector = ContentSelector::new(Arc::new(repo));
        let result = selector.select(&options(ShortcodeRequest::new())).await;

        assert!(result.is_empty());
    }
}
