//! HTML template rendering handlers.

mod preview;

pub use preview::preview_handler;
