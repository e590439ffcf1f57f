//! Domain layer containing the gallery data model and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Request-scoped value types
//! - [`repositories`] - Contracts for the host content repository and option store
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Resolution logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
