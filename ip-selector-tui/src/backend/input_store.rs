//! 输入存储
//!
//! 使用 JSON 文件保存操作员输入（键值对）
//! 实现 ip-selector-core 的 InputStore trait

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use ip_selector_core::traits::InputStore;
use ip_selector_core::{CoreError, CoreResult};
use tokio::fs;
use tokio::sync::Mutex;

/// 基于 JSON 文件的输入存储
pub struct JsonInputStore {
    path: PathBuf,
    /// 内存缓存（首次访问时从文件加载）
    cache: Mutex<Option<HashMap<String, String>>>,
}

impl JsonInputStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    /// 从文件加载全部键值
    async fn load_from_file(&self) -> CoreResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    /// 保存全部键值到文件
    async fn save_to_file(&self, values: &HashMap<String, String>) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(values)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

#[async_trait]
impl InputStore for JsonInputStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load_from_file().await?);
        }
        Ok(cache.as_ref().and_then(|values| values.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut cache = self.cache.lock().await;
        let mut values = match cache.take() {
            Some(values) => values,
            None => self.load_from_file().await?,
        };
        values.insert(key.to_string(), value.to_string());

        let saved = self.save_to_file(&values).await;
        *cache = Some(values);
        saved?;

        log::debug!("Saved input '{key}' to {}", self.path.display());
        Ok(())
    }
}
