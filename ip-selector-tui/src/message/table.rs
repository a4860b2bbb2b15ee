//! 候选表格消息

/// 候选表格消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMessage {
    /// 上移高亮
    SelectPrevious,
    /// 下移高亮
    SelectNext,
    /// 跳到第一行
    SelectFirst,
    /// 跳到最后一行
    SelectLast,
    /// 选中高亮行的单选框
    Choose,
}
