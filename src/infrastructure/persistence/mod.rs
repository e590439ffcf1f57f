//! In-memory repository implementations.
//!
//! Concrete implementations of the domain repository traits, serving a content
//! snapshot loaded at startup.
//!
//! # Repositories
//!
//! - [`MemoryAttachmentRepository`] - Posts, attachments and their image sizes
//! - [`MemoryOptionStore`] - Site options

pub mod memory_attachment_repository;
pub mod memory_option_store;

pub use memory_attachment_repository::{
    ContentSnapshot, ContentStoreError, MemoryAttachmentRepository, StoredAttachment, StoredPost,
};
pub use memory_option_store::MemoryOptionStore;
