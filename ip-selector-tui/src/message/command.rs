//! 副作用命令
//!
//! Update 层不做 I/O。需要调用服务时返回一个 `Command`，
//! 由主循环交给 Backend 层在后台任务中执行。

use ip_selector_core::types::RowId;

/// 需要 Backend 层执行的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 保存编辑器文本
    PersistRanges(String),
    /// 保存文本，提交任务，轮询直到结束
    SubmitSelection(String),
    /// 拉取候选列表
    RefreshCandidates,
    /// 同步 DNS 记录
    SyncDns(Option<RowId>),
}
