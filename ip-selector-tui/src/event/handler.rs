//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, EditorMessage, TableMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变等，自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::SubmitSelection;
    }
    if DefaultKeymap::SYNC.matches(&key) {
        return AppMessage::SyncDns;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::CLEAR_STATUS.matches(&key) {
        return AppMessage::ClearStatus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_editor() {
        handle_editor_keys(key)
    } else {
        handle_table_keys(key)
    }
}

/// 处理编辑器的按键
fn handle_editor_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            EditorMessage::Input(c)
        }
        KeyCode::Enter => EditorMessage::Newline,
        KeyCode::Backspace => EditorMessage::Backspace,
        KeyCode::Delete => EditorMessage::Delete,
        KeyCode::Left => EditorMessage::CursorLeft,
        KeyCode::Right => EditorMessage::CursorRight,
        KeyCode::Up => EditorMessage::CursorUp,
        KeyCode::Down => EditorMessage::CursorDown,
        KeyCode::Home => EditorMessage::CursorHome,
        KeyCode::End => EditorMessage::CursorEnd,
        _ => return AppMessage::Noop,
    };
    AppMessage::Editor(msg)
}

/// 处理候选表格的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CHOOSE.matches(&key) || DefaultKeymap::CHOOSE_ENTER.matches(&key) {
        return AppMessage::Table(TableMessage::Choose);
    }

    let msg = match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => TableMessage::SelectPrevious,
        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => TableMessage::SelectNext,
        KeyCode::Home => TableMessage::SelectFirst,
        KeyCode::End => TableMessage::SelectLast,
        _ => return AppMessage::Noop,
    };
    AppMessage::Table(msg)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyEventState;

    use super::*;
    use crate::model::FocusPanel;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn app_with_focus(focus: FocusPanel) -> App {
        let mut app = App::new(Duration::from_secs(3));
        app.focus = focus;
        app
    }

    #[test]
    fn action_keys_work_from_either_panel() {
        for focus in [FocusPanel::Editor, FocusPanel::Candidates] {
            let app = app_with_focus(focus);
            let alt = |c| press(KeyCode::Char(c), KeyModifiers::ALT);
            assert!(matches!(handle_event(alt('s'), &app), AppMessage::SubmitSelection));
            assert!(matches!(handle_event(alt('y'), &app), AppMessage::SyncDns));
            assert!(matches!(handle_event(alt('r'), &app), AppMessage::Refresh));
            assert!(matches!(handle_event(alt('q'), &app), AppMessage::Quit));
            assert!(matches!(
                handle_event(press(KeyCode::Tab, KeyModifiers::NONE), &app),
                AppMessage::ToggleFocus
            ));
        }
    }

    #[test]
    fn plain_letters_type_into_editor() {
        let app = app_with_focus(FocusPanel::Editor);
        assert!(matches!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app),
            AppMessage::Editor(EditorMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Editor(EditorMessage::Newline)
        ));
    }

    #[test]
    fn space_chooses_row_in_table() {
        let app = app_with_focus(FocusPanel::Candidates);
        assert!(matches!(
            handle_event(press(KeyCode::Char(' '), KeyModifiers::NONE), &app),
            AppMessage::Table(TableMessage::Choose)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('j'), KeyModifiers::NONE), &app),
            AppMessage::Table(TableMessage::SelectNext)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app_with_focus(FocusPanel::Editor);
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }
}
