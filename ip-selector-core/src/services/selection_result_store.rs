//! 候选结果表服务

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::PanelContext;
use crate::types::{CandidateRecord, CandidateRow, RowId, SUCCESS_MESSAGE, UiTransition};

#[derive(Default)]
struct CandidateTable {
    generation: u64,
    rows: Vec<CandidateRow>,
}

/// 候选结果表服务
///
/// 候选列表的唯一数据源。每次刷新整体替换，不做增量合并。
pub struct SelectionResultStore {
    ctx: Arc<PanelContext>,
    table: RwLock<CandidateTable>,
}

impl SelectionResultStore {
    #[must_use]
    pub fn new(ctx: Arc<PanelContext>) -> Self {
        Self {
            ctx,
            table: RwLock::new(CandidateTable::default()),
        }
    }

    /// 拉取候选列表并替换当前表格
    ///
    /// 失败时保留旧表格，显示错误横幅。
    pub async fn refresh(&self) -> CoreResult<Vec<CandidateRow>> {
        let records = match self.ctx.backend.list_selected().await {
            Ok(records) => records,
            Err(e) => {
                let err = CoreError::Fetch(e);
                self.ctx.report_failure("Candidate refresh", &err);
                return Err(err);
            }
        };

        let rows = {
            let mut table = self.table.write().await;
            table.generation += 1;
            let generation = table.generation;
            table.rows = records
                .into_iter()
                .enumerate()
                .map(|(index, record)| CandidateRow::new(RowId { generation, index }, record))
                .collect();
            // 持锁发送，保证界面收到的代数与表格一致
            self.ctx
                .emit(UiTransition::CandidatesReplaced(table.rows.clone()));
            table.rows.clone()
        };

        log::info!("Candidate table replaced with {} rows", rows.len());
        self.ctx
            .emit(UiTransition::Succeeded(SUCCESS_MESSAGE.to_string()));
        Ok(rows)
    }

    /// 按行标识查找候选记录（仅限当前表格）
    pub async fn lookup(&self, row_id: RowId) -> Option<CandidateRecord> {
        let table = self.table.read().await;
        if row_id.generation != table.generation {
            return None;
        }
        table.rows.get(row_id.index).map(|row| row.record.clone())
    }

    /// 当前表格快照
    pub async fn rows(&self) -> Vec<CandidateRow> {
        self.table.read().await.rows.clone()
    }
}
