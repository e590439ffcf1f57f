//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod gallery;
pub mod health;
pub mod settings;

pub use gallery::gallery_handler;
pub use health::health_handler;
pub use settings::{get_settings_handler, update_settings_handler};
