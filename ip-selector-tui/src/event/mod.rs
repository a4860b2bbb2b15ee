//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     handle_event 的判断顺序：
//!         - 只处理 Press，忽略 Release / Repeat
//!         - 全局快捷键：Alt+q 退出、Tab 切换面板、Alt+s 开始优选、
//!           Alt+y 同步 DNS、Alt+r 刷新、Esc 清除状态消息
//!         - 焦点在编辑器：字符输入、换行、删除、光标移动
//!         - 焦点在表格：↑↓/jk 移动高亮，空格/Enter 选中单选框
//!
//!     编辑器里的普通字母不会被当成快捷键，所有操作键都带 Alt。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
