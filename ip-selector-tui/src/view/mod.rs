//!
//! src/view/mod.rs
//! View 层：只读 Model，渲染一帧
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ 标题栏                                        │
//!     │ 横幅（UiState：空 / 处理中 / 成功 / 错误）      │
//!     ├───────────────┬──────────────────────────────┤
//!     │ IP 段编辑器    │ 候选表格（单选列 + 记录字段）   │
//!     ├───────────────┴──────────────────────────────┤
//!     │ 状态栏（快捷键提示 + 状态消息）                │
//!     └──────────────────────────────────────────────┘
//!

mod components;
mod layout;
mod panes;
pub mod theme;

pub use layout::render;
