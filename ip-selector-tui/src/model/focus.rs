//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧地址段编辑器
    #[default]
    Editor,
    /// 右侧候选表格
    Candidates,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Editor => FocusPanel::Candidates,
            FocusPanel::Candidates => FocusPanel::Editor,
        }
    }

    /// 是否是编辑器
    pub fn is_editor(self) -> bool {
        matches!(self, FocusPanel::Editor)
    }

    /// 是否是候选表格
    pub fn is_candidates(self) -> bool {
        matches!(self, FocusPanel::Candidates)
    }
}
