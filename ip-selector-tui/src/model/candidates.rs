//! 候选表格状态

use chrono::{DateTime, Local};
use ip_selector_core::types::{CandidateRow, RowId};

/// 候选表格状态
///
/// `cursor` 是高亮行，`chosen` 是单选框选中的行，两者互相独立。
#[derive(Debug, Default)]
pub struct CandidatesState {
    /// 当前表格
    pub rows: Vec<CandidateRow>,
    /// 高亮行下标
    pub cursor: usize,
    /// 单选选中的行
    pub chosen: Option<RowId>,
    /// 上次刷新时间
    pub refreshed_at: Option<DateTime<Local>>,
}

impl CandidatesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 整体替换表格；旧的选择随之失效
    pub fn replace(&mut self, rows: Vec<CandidateRow>) {
        self.rows = rows;
        self.cursor = 0;
        self.chosen = None;
        self.refreshed_at = Some(Local::now());
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// 选中高亮行（单选：替换之前的选择）
    pub fn choose_current(&mut self) {
        if let Some(row) = self.rows.get(self.cursor) {
            self.chosen = Some(row.id);
        }
    }

    pub fn is_chosen(&self, row: &CandidateRow) -> bool {
        self.chosen == Some(row.id)
    }

    /// 表格最宽一行的字段数
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.record.len()).max().unwrap_or(0)
    }
}
