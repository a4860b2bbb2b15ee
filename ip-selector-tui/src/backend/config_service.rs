//! 配置服务
//!
//! 配置文件：`<config_dir>/ip-selector-tui/config.json`。
//! 文件不存在时写入默认配置；`IP_SELECTOR_BASE_URL` 环境变量覆盖后端地址。

use std::path::{Path, PathBuf};

use ip_selector_client::ClientConfig;
use ip_selector_core::types::PanelSettings;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 覆盖后端地址的环境变量
pub const BASE_URL_ENV: &str = "IP_SELECTOR_BASE_URL";

/// 获取配置目录路径
pub fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ip-selector-tui")
}

/// 配置服务错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config file {path} is not valid: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 后端连接
    pub client: ClientConfig,
    /// 轮询、横幅与输入相关参数
    pub panel: PanelSettings,
    pub theme: Theme,
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            panel: PanelSettings::default(),
            theme: Theme::Dark,
            language: "en-US".to_string(),
        }
    }
}

impl AppConfig {
    /// 环境变量优先于配置文件
    #[must_use]
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.client.base_url = url.trim().to_string();
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 本地 JSON 文件配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 位于配置目录下的默认配置文件
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("config.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置；文件不存在时写入默认值
    pub fn load_or_init(&self) -> Result<AppConfig, ConfigError> {
        if self.path.exists() {
            return self.load();
        }
        let config = AppConfig::default();
        self.save(&config)?;
        log::info!("Wrote default config to {}", self.path.display());
        Ok(config)
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}
