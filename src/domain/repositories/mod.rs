//! Repository trait definitions for the domain layer.
//!
//! The content repository and the option store belong to the host system.
//! These traits describe the narrow slice of them the gallery engine needs.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AttachmentRepository`] - Attachment queries, size variants, featured images
//! - [`OptionStore`] - Site-wide settings

pub mod attachment_repository;
pub mod option_store;

pub use attachment_repository::AttachmentRepository;
pub use option_store::OptionStore;

#[cfg(test)]
pub use attachment_repository::MockAttachmentRepository;
#[cfg(test)]
pub use option_store::MockOptionStore;
