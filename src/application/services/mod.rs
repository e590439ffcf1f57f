//! Business logic services for the application layer.
//!
//! Each stage is a small service over [`crate::domain::repositories`];
//! [`GalleryService`] runs them in order.

pub mod content_selector;
pub mod gallery_service;
pub mod output_composer;
pub mod presentation_mapper;
pub mod sequencer;
pub mod settings_service;

pub use content_selector::ContentSelector;
pub use gallery_service::{GalleryOutcome, GalleryService, RenderedGallery};
pub use output_composer::OutputComposer;
pub use presentation_mapper::PresentationMapper;
pub use sequencer::Sequencer;
pub use settings_service::SettingsService;
