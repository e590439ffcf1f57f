//! Key-value option store trait.

use crate::error::AppError;
use async_trait::async_trait;

/// Persistent site options with get/set semantics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryOptionStore`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OptionStore: Send + Sync {
    /// Reads an option. `Ok(None)` when it was never set.
    async fn get_option(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Writes an option, replacing any previous value.
    async fn set_option(&self, key: &str, value: &str) -> Result<(), AppError>;
}
