//! In-memory implementation of the attachment repository.
//!
//! Serves a content snapshot (posts plus their attachments) loaded from JSON.
//! Used by the server and CLI when no host CMS is attached, and by tests.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{AttachmentQuery, AttachmentRecord, ImageVariant, SortDirection};
use crate::domain::repositories::AttachmentRepository;
use crate::error::AppError;

/// Errors raised while loading a content snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Failed to read content snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid content snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A post that can hold a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPost {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub featured_image_id: Option<i64>,
}

/// An attachment with its pre-computed sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAttachment {
    pub id: i64,
    pub parent_id: i64,
    #[serde(default)]
    pub menu_order: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    #[serde(default)]
    pub sizes: HashMap<String, ImageVariant>,
}

fn default_mime_type() -> String {
    "image/jpeg".to_string()
}

impl StoredAttachment {
    fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    fn to_record(&self) -> AttachmentRecord {
        AttachmentRecord::new(
            self.id,
            self.menu_order,
            self.title.clone(),
            self.description.clone(),
        )
    }
}

/// Serialized form of the whole content store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    #[serde(default)]
    pub posts: Vec<StoredPost>,
    #[serde(default)]
    pub attachments: Vec<StoredAttachment>,
}

/// Column an `orderby` clause can sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    MenuOrder,
    Id,
    Title,
}

impl SortKey {
    fn parse(column: &str) -> Option<Self> {
        match column.trim_matches('`').to_ascii_lowercase().as_str() {
            "menu_order" => Some(Self::MenuOrder),
            "id" => Some(Self::Id),
            "title" | "post_title" => Some(Self::Title),
            _ => None,
        }
    }

    fn compare(self, a: &StoredAttachment, b: &StoredAttachment) -> Ordering {
        match self {
            Self::MenuOrder => a.menu_order.cmp(&b.menu_order),
            Self::Id => a.id.cmp(&b.id),
            Self::Title => a.title.cmp(&b.title),
        }
    }
}

/// Parses a sanitized sort clause into keys with their directions.
///
/// Columns without an explicit direction use `default`; unknown columns are
/// skipped.
fn sort_keys(clause: &str, default: SortDirection) -> Vec<(SortKey, SortDirection)> {
    let mut keys = Vec::new();

    for part in clause.split(',') {
        let mut tokens = part.split_whitespace().peekable();
        while let Some(column) = tokens.next() {
            let direction = match tokens.peek().and_then(|t| SortDirection::parse(t)) {
                Some(dir @ (SortDirection::Asc | SortDirection::Desc)) => {
                    tokens.next();
                    dir
                }
                _ => default,
            };
            match SortKey::parse(column) {
                Some(key) => keys.push((key, direction)),
                None => debug!(column, "Ignoring unknown sort column"),
            }
        }
    }

    keys
}

fn sort_attachments(items: &mut [&StoredAttachment], order: SortDirection, orderby: Option<&str>) {
    let random = order == SortDirection::Rand || orderby == Some("RAND()");
    if random {
        items.shuffle(&mut rand::rng());
        return;
    }

    let Some(clause) = orderby else {
        return;
    };
    let keys = sort_keys(clause, order);

    items.sort_by(|a, b| {
        keys.iter()
            .map(|(key, dir)| match dir {
                SortDirection::Desc => key.compare(b, a),
                _ => key.compare(a, b),
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

/// In-memory attachment repository.
pub struct MemoryAttachmentRepository {
    snapshot: RwLock<ContentSnapshot>,
}

impl MemoryAttachmentRepository {
    /// Creates a repository serving the given snapshot.
    pub fn new(snapshot: ContentSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }

    /// Creates an empty repository.
    pub fn empty() -> Self {
        Self::new(ContentSnapshot::default())
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ContentStoreError`] if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ContentStoreError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parses a snapshot from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self, ContentStoreError> {
        let snapshot: ContentSnapshot = serde_json::from_str(raw)?;
        Ok(Self::new(snapshot))
    }

    /// Looks up a post by id.
    pub async fn find_post(&self, post_id: i64) -> Option<StoredPost> {
        self.snapshot
            .read()
            .await
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
    }

    /// Number of posts and attachments held.
    pub async fn counts(&self) -> (usize, usize) {
        let snapshot = self.snapshot.read().await;
        (snapshot.posts.len(), snapshot.attachments.len())
    }

    /// Copy of the current content.
    pub async fn snapshot(&self) -> ContentSnapshot {
        self.snapshot.read().await.clone()
    }
}

#[async_trait]
impl AttachmentRepository for MemoryAttachmentRepository {
    async fn find_attachments(
        &self,
        query: &AttachmentQuery,
    ) -> Result<Vec<AttachmentRecord>, AppError> {
        let snapshot = self.snapshot.read().await;

        let mut matches: Vec<&StoredAttachment> = match query {
            AttachmentQuery::Include { ids, .. } => {
                let wanted: HashSet<i64> = ids.iter().copied().collect();
                snapshot
                    .attachments
                    .iter()
                    .filter(|a| a.is_image() && wanted.contains(&a.id))
                    .collect()
            }
            AttachmentQuery::Children {
                parent_id, exclude, ..
            } => {
                let excluded: HashSet<i64> = exclude.iter().copied().collect();
                snapshot
                    .attachments
                    .iter()
                    .filter(|a| {
                        a.is_image() && a.parent_id == *parent_id && !excluded.contains(&a.id)
                    })
                    .collect()
            }
        };

        sort_attachments(&mut matches, query.order(), query.orderby());

        Ok(matches.into_iter().map(StoredAttachment::to_record).collect())
    }

    async fn image_variant(
        &self,
        attachment_id: i64,
        size: &str,
    ) -> Result<Option<ImageVariant>, AppError> {
        let snapshot = self.snapshot.read().await;

        Ok(snapshot
            .attachments
            .iter()
            .find(|a| a.id == attachment_id)
            .and_then(|a| a.sizes.get(size).cloned()))
    }

    async fn featured_image_id(&self, post_id: i64) -> Result<Option<i64>, AppError> {
        Ok(self.find_post(post_id).await.and_then(|p| p.featured_image_id))
    }
}
