//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const CLEAR_STATUS: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 操作
    pub const SUBMIT: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const SYNC: KeyBinding = KeyBinding::alt(KeyCode::Char('y'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));

    // 表格
    pub const CHOOSE: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const CHOOSE_ENTER: KeyBinding = KeyBinding::key(KeyCode::Enter);
}
