//! Process-local option store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::repositories::OptionStore;
use crate::error::AppError;

/// Option store backed by a map, optionally seeded at startup.
#[derive(Debug, Default)]
pub struct MemoryOptionStore {
    options: RwLock<HashMap<String, String>>,
}

impl MemoryOptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given options.
    pub fn seeded<I, K, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            options: RwLock::new(
                options
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl OptionStore for MemoryOptionStore {
    async fn get_option(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.options.read().await.get(key).cloned())
    }

    async fn set_option(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.options
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
