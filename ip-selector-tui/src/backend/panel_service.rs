//! 面板服务
//!
//! 封装 ip-selector-core 的 PanelServices，提供给 TUI 层使用的统一接口。
//! 所有请求都在后台任务中执行，结果通过两个通道回到主循环：
//! - `UiTransition`：横幅与候选表格
//! - 提示文本：状态栏

use std::sync::Arc;

use anyhow::Result;
use ip_selector_client::{HttpSelectionBackend, SelectionBackend};
use ip_selector_core::services::{PanelContext, PanelServices};
use ip_selector_core::traits::{ChannelSink, InputStore};
use ip_selector_core::types::{PanelSettings, UiTransition};
use ip_selector_core::CoreError;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::config_service::AppConfig;
use crate::i18n::t;
use crate::message::{AppMessage, Command};

/// 服务层发往主循环的事件
pub struct PanelEvents {
    transitions: mpsc::UnboundedReceiver<UiTransition>,
    notices: mpsc::UnboundedReceiver<String>,
}

impl PanelEvents {
    /// 取出所有已到达的事件（不阻塞）
    pub fn drain(&mut self) -> Vec<AppMessage> {
        let mut messages = Vec::new();
        while let Ok(transition) = self.transitions.try_recv() {
            messages.push(AppMessage::Transition(transition));
        }
        while let Ok(notice) = self.notices.try_recv() {
            messages.push(AppMessage::Notice(notice));
        }
        messages
    }
}

/// TUI 面板服务
#[derive(Clone)]
pub struct PanelService {
    services: Arc<PanelServices>,
    notices: mpsc::UnboundedSender<String>,
}

impl PanelService {
    /// 连接 HTTP 后端
    pub fn connect(
        config: &AppConfig,
        input_store: Arc<dyn InputStore>,
    ) -> Result<(Self, PanelEvents)> {
        let backend = HttpSelectionBackend::new(&config.client)?;
        log::info!("Using selection backend at {}", backend.base_url());
        Ok(Self::with_backend(
            Arc::new(backend),
            input_store,
            config.panel.clone(),
        ))
    }

    /// 使用任意后端实现创建服务
    pub fn with_backend(
        backend: Arc<dyn SelectionBackend>,
        input_store: Arc<dyn InputStore>,
        settings: PanelSettings,
    ) -> (Self, PanelEvents) {
        let (sink, transitions) = ChannelSink::new();
        let (notices_tx, notices) = mpsc::unbounded_channel();

        let ctx = Arc::new(PanelContext::new(
            backend,
            input_store,
            Arc::new(sink),
            settings,
        ));

        let service = Self {
            services: Arc::new(PanelServices::new(ctx)),
            notices: notices_tx,
        };
        (
            service,
            PanelEvents {
                transitions,
                notices,
            },
        )
    }

    /// 恢复编辑器文本；失败时退回默认地址段
    pub async fn restore_ranges(&self) -> String {
        match self.services.ranges.restore().await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to restore saved ranges: {e}");
                self.notify(t().status_bar.restore_failed);
                self.services.ctx.settings.default_ranges.join("\n")
            }
        }
    }

    /// 启动时检查后端并加载已有的候选列表
    pub async fn startup(&self) {
        let (health, refresh) = futures::join!(
            self.services.ctx.backend.health_check(),
            self.services.results.refresh()
        );

        if let Err(e) = health {
            log::warn!("Backend health check failed: {e}");
            self.notify(format!("{}: {}", t().status_bar.backend_unreachable, e.user_message()));
        }
        if let Ok(rows) = refresh {
            log::info!("Loaded {} candidates at startup", rows.len());
        }
    }

    /// 在后台任务中执行命令
    pub fn dispatch(&self, command: Command) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move { this.run(command).await })
    }

    async fn run(&self, command: Command) {
        match command {
            Command::PersistRanges(text) => self.persist(&text).await,

            Command::SubmitSelection(text) => {
                self.persist(&text).await;
                let ranges = self.services.ranges.ranges(&text);
                match self.services.jobs.submit_and_poll(&ranges).await {
                    Ok((handle, poll)) => match poll.await {
                        Ok(Ok(outcome)) => log::info!("{handle} ended: {outcome:?}"),
                        Ok(Err(e)) => log::warn!("{handle} ended with error: {e}"),
                        Err(e) => log::error!("Poll task for {handle} failed: {e}"),
                    },
                    Err(CoreError::JobInProgress) => self.notify(t().status_bar.job_in_progress),
                    // 其余错误已显示在横幅上
                    Err(e) => log::debug!("Submit failed: {e}"),
                }
            }

            Command::RefreshCandidates => {
                if let Err(e) = self.services.results.refresh().await {
                    log::debug!("Refresh failed: {e}");
                }
            }

            Command::SyncDns(selection) => {
                if let Err(e) = self.services.sync.sync(selection).await {
                    log::debug!("Sync failed: {e}");
                }
            }
        }
    }

    async fn persist(&self, text: &str) {
        if let Err(e) = self.services.ranges.persist(text).await {
            log::warn!("Failed to save ranges: {e}");
            self.notify(t().status_bar.persist_failed);
        }
    }

    fn notify(&self, notice: impl Into<String>) {
        if self.notices.send(notice.into()).is_err() {
            log::debug!("Notice receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use ip_selector_client::{CandidateRecord, ClientError, JobStatus};
    use ip_selector_core::traits::InMemoryInputStore;
    use ip_selector_core::types::RowId;
    use tokio::sync::Notify;

    use super::*;

    struct StubBackend {
        status: JobStatus,
        healthy: bool,
        submits: AtomicUsize,
        syncs: AtomicUsize,
        status_seen: Notify,
    }

    impl StubBackend {
        fn new(status: JobStatus) -> Self {
            Self {
                status,
                healthy: true,
                submits: AtomicUsize::new(0),
                syncs: AtomicUsize::new(0),
                status_seen: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl SelectionBackend for StubBackend {
        async fn list_selected(&self) -> ip_selector_client::Result<Vec<CandidateRecord>> {
            Ok(vec![CandidateRecord::new(vec![
                "1.2.3.4".to_string(),
                "4".to_string(),
            ])])
        }

        async fn submit_selection(&self, _ranges: &[String]) -> ip_selector_client::Result<()> {
            self.submits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn selection_status(&self) -> ip_selector_client::Result<JobStatus> {
            self.status_seen.notify_one();
            Ok(self.status.clone())
        }

        async fn sync_dns(&self, _ip: &str) -> ip_selector_client::Result<()> {
            self.syncs.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn health_check(&self) -> ip_selector_client::Result<()> {
            if self.healthy {
                Ok(())
            } else {
                Err(ClientError::NetworkError {
                    detail: "connection refused".to_string(),
                })
            }
        }
    }

    fn service_with(
        backend: Arc<StubBackend>,
    ) -> (PanelService, PanelEvents, Arc<InMemoryInputStore>) {
        let store = Arc::new(InMemoryInputStore::new());
        let (service, events) =
            PanelService::with_backend(backend, store.clone(), PanelSettings::default());
        (service, events, store)
    }

    fn transitions(messages: &[AppMessage]) -> Vec<&UiTransition> {
        messages
            .iter()
            .filter_map(|m| match m {
                AppMessage::Transition(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    fn notices(messages: &[AppMessage]) -> Vec<&str> {
        messages
            .iter()
            .filter_map(|m| match m {
                AppMessage::Notice(n) => Some(n.as_str()),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn submit_runs_job_to_completion() {
        let backend = Arc::new(StubBackend::new(JobStatus::Pending));
        let (service, mut events, store) = service_with(backend.clone());

        service
            .dispatch(Command::SubmitSelection("1.1.1.0/24\n".to_string()))
            .await
            .unwrap();

        assert_eq!(backend.submits.load(Ordering::SeqCst), 1);
        assert_eq!(
            store.get("ip_ranges").await.unwrap().as_deref(),
            Some("1.1.1.0/24")
        );

        let messages = events.drain();
        let seen = transitions(&messages);
        assert_eq!(seen[0], &UiTransition::Loading);
        assert!(matches!(seen[1], UiTransition::CandidatesReplaced(rows) if rows.len() == 1));
        assert!(matches!(seen[2], UiTransition::Succeeded(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn second_submit_while_polling_is_refused() {
        let backend = Arc::new(StubBackend::new(JobStatus::Processing));
        let (service, mut events, _) = service_with(backend.clone());

        let first = service.dispatch(Command::SubmitSelection("1.1.1.0/24".to_string()));
        backend.status_seen.notified().await;

        service
            .dispatch(Command::SubmitSelection("1.0.0.0/24".to_string()))
            .await
            .unwrap();

        assert_eq!(backend.submits.load(Ordering::SeqCst), 1);
        assert_eq!(
            notices(&events.drain()),
            vec![t().status_bar.job_in_progress]
        );
        first.abort();
    }

    #[tokio::test]
    async fn sync_without_choice_sends_nothing() {
        let backend = Arc::new(StubBackend::new(JobStatus::Pending));
        let (service, mut events, _) = service_with(backend.clone());

        service.dispatch(Command::SyncDns(None)).await.unwrap();

        assert_eq!(backend.syncs.load(Ordering::SeqCst), 0);
        let messages = events.drain();
        assert!(matches!(
            transitions(&messages).last(),
            Some(UiTransition::Failed(_))
        ));
    }

    #[tokio::test]
    async fn sync_of_loaded_row_reaches_backend() {
        let backend = Arc::new(StubBackend::new(JobStatus::Pending));
        let (service, _events, _) = service_with(backend.clone());

        service.dispatch(Command::RefreshCandidates).await.unwrap();
        service
            .dispatch(Command::SyncDns(Some(RowId {
                generation: 1,
                index: 0,
            })))
            .await
            .unwrap();

        assert_eq!(backend.syncs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn startup_reports_unreachable_backend() {
        let mut stub = StubBackend::new(JobStatus::Pending);
        stub.healthy = false;
        let (service, mut events, _) = service_with(Arc::new(stub));

        service.startup().await;

        let messages = events.drain();
        let notes = notices(&messages);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].starts_with(t().status_bar.backend_unreachable));
        assert!(
            transitions(&messages)
                .iter()
                .any(|t| matches!(t, UiTransition::CandidatesReplaced(_)))
        );
    }

    #[tokio::test]
    async fn restore_uses_defaults_until_something_is_saved() {
        let backend = Arc::new(StubBackend::new(JobStatus::Pending));
        let (service, _events, _) = service_with(backend);

        let text = service.restore_ranges().await;
        assert_eq!(text.lines().next(), Some("173.245.48.0/20"));

        service
            .dispatch(Command::PersistRanges("10.0.0.0/8".to_string()))
            .await
            .unwrap();
        assert_eq!(service.restore_ranges().await, "10.0.0.0/8");
    }
}
