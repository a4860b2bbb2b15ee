//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的 I/O。
//! 通过 ip-selector-core 库实现提交、轮询、刷新与同步。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod panel_service;      // 面板服务入口
//!         mod input_store;        // 输入持久化（JSON 文件）
//!         mod config_service;     // 配置文件
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、面板服务（PanelService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     创建流程：
//!         1. 由 ClientConfig 创建 HttpSelectionBackend
//!         2. 创建 ChannelSink（UiTransition 通道）与提示通道
//!         3. 组装 PanelContext，再基于它创建 PanelServices
//!
//!     dispatch(Command) 在 tokio 任务中执行命令，立即返回。
//!     结果经 PanelEvents::drain() 回到主循环。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、输入存储（JsonInputStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     实现 ip-selector-core 的 InputStore trait。
//!     存储位置：<config_dir>/ip-selector-tui/input.json
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、配置（FileConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：<config_dir>/ip-selector-tui/config.json
//!     { "client": ClientConfig, "panel": PanelSettings, "theme", "language" }
//!     IP_SELECTOR_BASE_URL 环境变量覆盖 client.baseUrl。
//!

mod config_service;
mod input_store;
mod panel_service;

pub use config_service::{BASE_URL_ENV, FileConfigService, app_config_dir};
pub use input_store::JsonInputStore;
pub use panel_service::{PanelEvents, PanelService};
