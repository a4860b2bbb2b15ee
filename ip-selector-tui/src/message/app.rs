//! 应用主消息枚举

use ip_selector_core::types::UiTransition;

use super::{EditorMessage, TableMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（离开编辑器时保存输入）
    ToggleFocus,

    /// 编辑器相关消息
    Editor(EditorMessage),

    /// 候选表格相关消息
    Table(TableMessage),

    /// 提交编辑器中的地址段并开始轮询
    SubmitSelection,

    /// 把 DNS 记录同步到选中的地址
    SyncDns,

    /// 重新拉取候选列表
    Refresh,

    /// 服务层发来的状态变更
    Transition(UiTransition),

    /// 服务层发来的提示（显示在状态栏）
    Notice(String),

    /// 定时器：让过期的成功横幅消失
    Tick,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
