//! 应用主状态结构

use std::time::Duration;

use ip_selector_core::types::UiState;

use super::{CandidatesState, EditorState, FocusPanel};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 地址段编辑器
    pub editor: EditorState,

    /// 候选表格
    pub candidates: CandidatesState,

    /// 横幅状态（同一时刻只显示一个）
    pub banner: UiState,

    /// 成功横幅的停留时间
    pub success_linger: Duration,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(success_linger: Duration) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Editor,
            editor: EditorState::new(),
            candidates: CandidatesState::new(),
            banner: UiState::Idle,
            success_linger,
            status_message: None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
