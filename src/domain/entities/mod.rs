//! Core domain entities representing the gallery data model.
//!
//! Entities are request-scoped values. Each resolution stage consumes one and
//! produces a new one; nothing is mutated after construction.
//!
//! # Entity Types
//!
//! - [`ShortcodeRequest`] - Raw, loosely typed attribute bag
//! - [`GalleryOptions`] - Normalized options with defaults applied
//! - [`AttachmentQuery`] - Selection criteria for the repository
//! - [`AttachmentRecord`] / [`ImageVariant`] - Repository records and resolved sizes
//! - [`RenderDescriptor`] / [`PresentationConfig`] - Renderer input
//! - [`GallerySettings`] - Site-wide settings from the option store
//! - [`RenderContext`] - Host context of one shortcode occurrence

pub mod attachment;
pub mod context;
pub mod gallery_options;
pub mod presentation;
pub mod query;
pub mod settings;
pub mod shortcode;

pub use attachment::{AttachmentRecord, ImageVariant};
pub use context::RenderContext;
pub use gallery_options::{CaptionMode, Dimension, GalleryOptions, SortDirection};
pub use presentation::{MediaKind, PresentationConfig, RenderDescriptor};
pub use query::AttachmentQuery;
pub use settings::{GallerySettings, ThemeAssets};
pub use shortcode::{AttrValue, ShortcodeRequest};
