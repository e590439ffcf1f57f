//! Selection criteria handed to the attachment repository.

use crate::domain::entities::gallery_options::SortDirection;

/// Which attachments to fetch. The two modes are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentQuery {
    /// Only the listed attachment IDs, in any order.
    Include {
        ids: Vec<i64>,
        order: SortDirection,
        orderby: Option<String>,
    },
    /// All image attachments of a container, minus the excluded IDs.
    Children {
        parent_id: i64,
        exclude: Vec<i64>,
        order: SortDirection,
        /// `None` means no sort field, as required by random order.
        orderby: Option<String>,
    },
}

impl AttachmentQuery {
    pub fn order(&self) -> SortDirection {
        match self {
            Self::Include { order, .. } | Self::Children { order, .. } => *order,
        }
    }

    pub fn orderby(&self) -> Option<&str> {
        match self {
            Self::Include { orderby, .. } | Self::Children { orderby, .. } => orderby.as_deref(),
        }
    }
}
