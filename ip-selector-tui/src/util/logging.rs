//! 日志初始化
//!
//! 终端被 TUI 占用，日志只写入配置目录下的文件。
//! `log` 宏（core / client 库）经 tracing-log 桥接到同一个订阅者。

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// 日志文件名
const LOG_FILE: &str = "ip-selector-tui.log";

/// 安装全局日志订阅者，返回日志文件路径
///
/// 级别由 `RUST_LOG` 控制，默认 `info`。
pub fn init_logging(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;

    Ok(path)
}
