//! 编辑器消息处理

use crate::message::EditorMessage;
use crate::model::EditorState;

pub fn update(editor: &mut EditorState, msg: EditorMessage) {
    match msg {
        EditorMessage::Input(c) => editor.insert_char(c),
        EditorMessage::Newline => editor.insert_newline(),
        EditorMessage::Backspace => editor.backspace(),
        EditorMessage::Delete => editor.delete(),
        EditorMessage::CursorLeft => editor.move_left(),
        EditorMessage::CursorRight => editor.move_right(),
        EditorMessage::CursorUp => editor.move_up(),
        EditorMessage::CursorDown => editor.move_down(),
        EditorMessage::CursorHome => editor.move_home(),
        EditorMessage::CursorEnd => editor.move_end(),
    }
}
