//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 键盘事件与服务层的状态变更都被翻译成 `AppMessage`，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod editor;         // 编辑器子消息
//!         mod table;          // 候选表格子消息
//!         mod command;        // Update 返回的副作用命令
//!
//!
//!     消息来源有两个：
//!         · event/handler.rs      键盘 → AppMessage
//!         · app.rs                服务层 UiTransition → AppMessage::Transition
//!
//!     Update 处理完消息后可能返回 Some(Command)，
//!     主循环把它交给 backend::PanelService::dispatch()。
//!

mod app;
mod command;
mod editor;
mod table;

pub use app::AppMessage;
pub use command::Command;
pub use editor::EditorMessage;
pub use table::TableMessage;
