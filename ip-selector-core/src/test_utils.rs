//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ip_selector_client::{CandidateRecord, ClientError, JobStatus, SelectionBackend};
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::services::{PanelContext, PanelServices};
use crate::traits::{InMemoryInputStore, UiSink};
use crate::types::{PanelSettings, UiTransition};

type ClientResult<T> = std::result::Result<T, ClientError>;

// ===== MockBackend =====

/// 后端收到的一次调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    ListSelected,
    SubmitSelection(Vec<String>),
    SelectionStatus,
    SyncDns(String),
    HealthCheck,
}

pub struct MockBackend {
    calls: RwLock<Vec<BackendCall>>,
    status_times: RwLock<Vec<Instant>>,
    /// 依次返回的状态；用尽后一直返回 `Processing`
    statuses: RwLock<VecDeque<ClientResult<JobStatus>>>,
    candidates: RwLock<ClientResult<Vec<CandidateRecord>>>,
    submit_error: RwLock<Option<ClientError>>,
    sync_error: RwLock<Option<ClientError>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            status_times: RwLock::new(Vec::new()),
            statuses: RwLock::new(VecDeque::new()),
            candidates: RwLock::new(Ok(Vec::new())),
            submit_error: RwLock::new(None),
            sync_error: RwLock::new(None),
        }
    }

    pub async fn push_statuses(
        &self,
        statuses: impl IntoIterator<Item = ClientResult<JobStatus>>,
    ) {
        self.statuses.write().await.extend(statuses);
    }

    pub async fn set_candidates(&self, candidates: ClientResult<Vec<CandidateRecord>>) {
        *self.candidates.write().await = candidates;
    }

    pub async fn set_submit_error(&self, err: Option<ClientError>) {
        *self.submit_error.write().await = err;
    }

    pub async fn set_sync_error(&self, err: Option<ClientError>) {
        *self.sync_error.write().await = err;
    }

    pub async fn calls(&self) -> Vec<BackendCall> {
        self.calls.read().await.clone()
    }

    pub async fn count(&self, pred: impl Fn(&BackendCall) -> bool) -> usize {
        self.calls.read().await.iter().filter(|c| pred(c)).count()
    }

    /// 每次状态请求的（虚拟）时间
    pub async fn status_times(&self) -> Vec<Instant> {
        self.status_times.read().await.clone()
    }

    async fn record(&self, call: BackendCall) {
        self.calls.write().await.push(call);
    }
}

#[async_trait]
impl SelectionBackend for MockBackend {
    async fn list_selected(&self) -> ClientResult<Vec<CandidateRecord>> {
        self.record(BackendCall::ListSelected).await;
        self.candidates.read().await.clone()
    }

    async fn submit_selection(&self, ranges: &[String]) -> ClientResult<()> {
        self.record(BackendCall::SubmitSelection(ranges.to_vec()))
            .await;
        match self.submit_error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn selection_status(&self) -> ClientResult<JobStatus> {
        self.record(BackendCall::SelectionStatus).await;
        self.status_times.write().await.push(Instant::now());
        self.statuses
            .write()
            .await
            .pop_front()
            .unwrap_or(Ok(JobStatus::Processing))
    }

    async fn sync_dns(&self, ip: &str) -> ClientResult<()> {
        self.record(BackendCall::SyncDns(ip.to_string())).await;
        match self.sync_error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn health_check(&self) -> ClientResult<()> {
        self.record(BackendCall::HealthCheck).await;
        Ok(())
    }
}

// ===== RecordingSink =====

pub struct RecordingSink {
    transitions: Mutex<Vec<UiTransition>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            transitions: Mutex::new(Vec::new()),
        }
    }

    pub fn transitions(&self) -> Vec<UiTransition> {
        self.transitions.lock().unwrap().clone()
    }
}

impl UiSink for RecordingSink {
    fn emit(&self, transition: UiTransition) {
        self.transitions.lock().unwrap().push(transition);
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `PanelServices`（默认参数）
pub fn create_test_services() -> (PanelServices, Arc<MockBackend>, Arc<RecordingSink>) {
    create_test_services_with(PanelSettings::default())
}

/// 创建测试用 `PanelServices`
pub fn create_test_services_with(
    settings: PanelSettings,
) -> (PanelServices, Arc<MockBackend>, Arc<RecordingSink>) {
    let backend = Arc::new(MockBackend::new());
    let sink = Arc::new(RecordingSink::new());
    let ctx = Arc::new(PanelContext::new(
        backend.clone(),
        Arc::new(InMemoryInputStore::new()),
        sink.clone(),
        settings,
    ));
    (PanelServices::new(ctx), backend, sink)
}

/// 由字符串字段构造候选记录
pub fn record(fields: &[&str]) -> CandidateRecord {
    CandidateRecord::new(fields.iter().map(|f| (*f).to_string()).collect())
}
