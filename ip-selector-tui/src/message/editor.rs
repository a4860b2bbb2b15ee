//! 编辑器消息

/// 编辑器消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMessage {
    Input(char),
    Newline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
}
