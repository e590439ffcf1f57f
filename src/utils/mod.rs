//! Utility functions for attribute cleaning and HTML-safe serialization.
//!
//! This module provides helper functions used across the application:
//!
//! - [`id_list`] - Attachment ID list cleaning and parsing
//! - [`orderby`] - Whitelist sanitizer for `orderby` clauses
//! - [`script_json`] - JSON encoding safe to embed in a `<script>` element

pub mod id_list;
pub mod orderby;
pub mod script_json;
