//! # Advanced Galleria
//!
//! Resolves `[gallery]` shortcodes into Galleria slideshow markup.
//!
//! Given the attributes of a shortcode and the post it appears in, the engine
//! selects the post's image attachments (or an explicit id list), orders and
//! filters them, resolves image sizes and emits either a slideshow container
//! with its activation script or, in feeds, a plain list of images.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Gallery entities and repository traits
//! - **Application Layer** ([`application`]) - The resolution pipeline, hooks
//!   and the instance counter
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory content and
//!   option stores
//! - **API Layer** ([`api`]) - JSON endpoint, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML preview page
//!
//! ## Quick Start
//!
//! ```bash
//! export CONTENT_PATH="./content.json"
//! cargo run
//! curl "http://localhost:3000/api/posts/1/gallery?orderby=title&autoplay=1"
//!
//! # or render once from the command line
//! cargo run --bin galleria-render -- render --content content.json --post 1 ids=5,3,9
//! ```
//!
//! ## Library Use
//!
//! ```rust,ignore
//! use advanced_galleria::prelude::*;
//!
//! let service = GalleryService::new(repository, options);
//! let html = service
//!     .render_html(&ShortcodeRequest::new().with("ids", "5,3,9"), RenderContext::interactive(42))
//!     .await;
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::hooks::GalleryHooks;
    pub use crate::application::instance_counter::InstanceCounter;
    pub use crate::application::services::{GalleryOutcome, GalleryService, RenderedGallery};
    pub use crate::domain::entities::{
        AttachmentRecord, GallerySettings, ImageVariant, PresentationConfig, RenderContext,
        RenderDescriptor, ShortcodeRequest,
    };
    pub use crate::domain::repositories::{AttachmentRepository, OptionStore};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{MemoryAttachmentRepository, MemoryOptionStore};
    pub use crate::state::AppState;
}
