use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CandidateRecord, JobStatus};

/// IP 优选 / DNS 同步后端 Trait
///
/// 每个方法对应后端的一个 HTTP 端点。`code != 0` 的响应统一映射为
/// [`ClientError::Api`](crate::ClientError::Api)。
#[async_trait]
pub trait SelectionBackend: Send + Sync {
    /// 获取已优选的候选 IP 列表 (`GET /api/ip/select`)
    ///
    /// 成功响应缺少 `data` 时返回空列表。
    async fn list_selected(&self) -> Result<Vec<CandidateRecord>>;

    /// 提交优选任务 (`POST /api/ip/select`)
    ///
    /// # Arguments
    /// * `ranges` - CIDR 列表，按原顺序作为 JSON 数组发送
    async fn submit_selection(&self, ranges: &[String]) -> Result<()>;

    /// 查询优选任务状态 (`GET /api/ip/select/status`)
    async fn selection_status(&self) -> Result<JobStatus>;

    /// 将 DNS 记录同步到指定 IP (`POST /api/dns/sync`)
    async fn sync_dns(&self, ip: &str) -> Result<()>;

    /// 健康检查 (`GET /api/server/health_check`)
    async fn health_check(&self) -> Result<()>;
}
