//! 业务逻辑服务层

mod dns_sync_gate;
mod range_input_service;
mod selection_job_controller;
mod selection_result_store;

pub use dns_sync_gate::DnsSyncGate;
pub use range_input_service::RangeInputService;
pub use selection_job_controller::SelectionJobController;
pub use selection_result_store::SelectionResultStore;

use std::sync::Arc;

use ip_selector_client::SelectionBackend;

use crate::error::CoreError;
use crate::traits::{InputStore, UiSink};
use crate::types::{PanelSettings, UiTransition};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入后端客户端、输入存储和 UI 通道。
pub struct PanelContext {
    /// 后端客户端
    pub backend: Arc<dyn SelectionBackend>,
    /// 输入存储
    pub input_store: Arc<dyn InputStore>,
    /// UI 状态通道
    pub sink: Arc<dyn UiSink>,
    /// 面板参数
    pub settings: PanelSettings,
}

impl PanelContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        backend: Arc<dyn SelectionBackend>,
        input_store: Arc<dyn InputStore>,
        sink: Arc<dyn UiSink>,
        settings: PanelSettings,
    ) -> Self {
        Self {
            backend,
            input_store,
            sink,
            settings,
        }
    }

    /// 发送 UI 状态变更
    pub fn emit(&self, transition: UiTransition) {
        self.sink.emit(transition);
    }

    /// 记录错误并显示错误横幅
    pub fn report_failure(&self, operation: &str, err: &CoreError) {
        if err.is_expected() {
            log::warn!("{operation}: {err}");
        } else {
            log::error!("{operation}: {err}");
        }
        self.emit(UiTransition::Failed(err.user_message()));
    }
}

/// 面板服务集合
///
/// 所有服务共享同一个 [`PanelContext`]；结果表由任务控制器和同步门共享。
pub struct PanelServices {
    pub ctx: Arc<PanelContext>,
    pub jobs: Arc<SelectionJobController>,
    pub results: Arc<SelectionResultStore>,
    pub sync: Arc<DnsSyncGate>,
    pub ranges: Arc<RangeInputService>,
}

impl PanelServices {
    #[must_use]
    pub fn new(ctx: Arc<PanelContext>) -> Self {
        let results = Arc::new(SelectionResultStore::new(Arc::clone(&ctx)));
        let jobs = Arc::new(SelectionJobController::new(
            Arc::clone(&ctx),
            Arc::clone(&results),
        ));
        let sync = Arc::new(DnsSyncGate::new(Arc::clone(&ctx), Arc::clone(&results)));
        let ranges = Arc::new(RangeInputService::new(Arc::clone(&ctx)));

        Self {
            ctx,
            jobs,
            results,
            sync,
            ranges,
        }
    }
}
