//! Application layer implementing the gallery resolution engine.
//!
//! Services consume the repository traits and expose one entry point,
//! [`services::GalleryService`], to HTTP handlers and the CLI.
//!
//! # Modules
//!
//! - [`services`] - Resolution stages and their orchestration
//! - [`hooks`] - Override, images and options extension points
//! - [`instance_counter`] - Unique slideshow container numbering

pub mod hooks;
pub mod instance_counter;
pub mod services;
