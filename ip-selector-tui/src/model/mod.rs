//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 只保存数据，不做 I/O。
//! 所有修改都经由 Update 层完成，View 层只读。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App 主状态
//!         mod focus;          // 焦点面板
//!         mod editor;         // 地址段编辑器（多行文本 + 光标）
//!         mod candidates;     // 候选表格（高亮行 + 单选行）
//!
//!
//!     App {
//!         should_quit: false,
//!         focus: FocusPanel::Editor,
//!         editor: EditorState,              // 启动时由 RangeInputService::restore 填充
//!         candidates: CandidatesState,      // 由 UiTransition::CandidatesReplaced 整体替换
//!         banner: UiState::Idle,            // 由其余 UiTransition 驱动
//!         success_linger: 3s,
//!         status_message: None,
//!     }
//!

mod app;
mod candidates;
mod editor;
mod focus;

pub use app::App;
pub use candidates::CandidatesState;
pub use editor::EditorState;
pub use focus::FocusPanel;
