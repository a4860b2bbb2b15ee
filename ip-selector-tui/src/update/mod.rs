//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod editor;         // 编辑器子消息处理
//!         mod table;          // 候选表格子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {...}
//!
//!
//!     Update 不直接调用服务。需要 I/O 的消息（提交、刷新、同步、保存输入）
//!     返回一个 Command，由主循环交给 Backend 层：
//!
//!         AppMessage::SubmitSelection     → Command::SubmitSelection(text)
//!         AppMessage::SyncDns             → Command::SyncDns(chosen)
//!         AppMessage::Refresh             → Command::RefreshCandidates
//!         AppMessage::ToggleFocus         → Command::PersistRanges(text)   // 仅当离开编辑器
//!
//!     服务层的结果以 AppMessage::Transition 的形式回到这里，
//!     折叠进 app.banner（UiState）与 app.candidates。
//!

mod editor;
mod table;

use tokio::time::Instant;

use ip_selector_core::types::UiTransition;

use crate::message::{AppMessage, Command};
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            app.editor
                .take_dirty()
                .then(|| Command::PersistRanges(app.editor.text()))
        }

        AppMessage::ToggleFocus => {
            let leaving_editor = app.focus.is_editor();
            app.focus = app.focus.toggle();
            if leaving_editor {
                app.editor.take_dirty();
                Some(Command::PersistRanges(app.editor.text()))
            } else {
                None
            }
        }

        AppMessage::Editor(editor_msg) => {
            if app.focus.is_editor() {
                editor::update(&mut app.editor, editor_msg);
            }
            None
        }

        AppMessage::Table(table_msg) => {
            if app.focus.is_candidates() {
                table::update(&mut app.candidates, table_msg);
            }
            None
        }

        AppMessage::SubmitSelection => {
            app.editor.take_dirty();
            app.clear_status();
            Some(Command::SubmitSelection(app.editor.text()))
        }

        AppMessage::SyncDns => {
            app.clear_status();
            Some(Command::SyncDns(app.candidates.chosen))
        }

        AppMessage::Refresh => {
            app.clear_status();
            Some(Command::RefreshCandidates)
        }

        AppMessage::Transition(transition) => {
            app.banner.apply(&transition, Instant::now());
            if let UiTransition::CandidatesReplaced(rows) = transition {
                app.candidates.replace(rows);
            }
            None
        }

        AppMessage::Notice(message) => {
            app.set_status(message);
            None
        }

        AppMessage::Tick => {
            app.banner.tick(Instant::now(), app.success_linger);
            None
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Noop => None,
    }
}
