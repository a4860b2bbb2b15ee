//! Key-value store abstraction for operator input

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;

/// Persistent text store Trait
///
/// Platform implementation:
/// - TUI: `JsonInputStore` (JSON file in the config directory)
/// - Tests: [`InMemoryInputStore`]
#[async_trait]
pub trait InputStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Overwrite the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> CoreResult<()>;
}

/// In-memory input store
///
/// Nothing survives the process.
#[derive(Clone, Default)]
pub struct InMemoryInputStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryInputStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InputStore for InMemoryInputStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
