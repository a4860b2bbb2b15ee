//! IP Selector TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! 启动顺序：
//!     init_logging()              // 日志写入配置目录，不占用终端
//!     load_or_init()              // 读取 config.json，环境变量覆盖后端地址
//!     PanelService::connect()     // 组装 ip-selector-core 服务
//!     restore_ranges()            // 恢复上次输入的 IP 段
//!     startup()                   // 后台：健康检查 + 拉取候选列表
//!     init_terminal()
//!     app::run()
//!     restore_terminal()          // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use backend::{BASE_URL_ENV, FileConfigService, JsonInputStore, PanelService, app_config_dir};
use i18n::{Language, set_language};
use util::{init_logging, init_terminal, restore_terminal};

/// 退出时等待输入保存的最长时间
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> Result<()> {
    let dir = app_config_dir();
    let log_path = init_logging(&dir)?;
    tracing::info!(log = %log_path.display(), "ip-selector-tui starting");

    // 1. 加载配置
    let config_service = FileConfigService::in_dir(&dir);
    let config = config_service
        .load_or_init()?
        .with_base_url_override(std::env::var(BASE_URL_ENV).ok());
    tracing::info!(config = %config_service.path().display(), base_url = %config.client.base_url, "config loaded");

    view::theme::set_theme(config.theme);
    let language = Language::from_code(&config.language).unwrap_or_default();
    set_language(language);
    tracing::debug!(language = language.code(), "language selected");

    // 2. 创建服务
    let input_store = Arc::new(JsonInputStore::new(dir.join("input.json")));
    let (panel, mut events) = PanelService::connect(&config, input_store)?;

    // 3. 创建应用实例
    let mut app = model::App::new(config.panel.success_linger());
    app.editor.set_text(&panel.restore_ranges().await);

    let startup = panel.clone();
    tokio::spawn(async move { startup.startup().await });

    // 4. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &panel, &mut events);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Some(pending) = result?
        && tokio::time::timeout(SHUTDOWN_GRACE, pending).await.is_err()
    {
        tracing::warn!("input was not saved before shutdown");
    }

    tracing::info!("ip-selector-tui exiting");
    Ok(())
}
