//! 地址段编辑器视图

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染编辑器
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_editor();

    let block = Block::default()
        .title(format!(" {} ", texts.editor.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(c.border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let editor = &app.editor;
    if editor.text().is_empty() && !focused {
        let placeholder = Paragraph::new(Line::styled(
            texts.editor.placeholder,
            Style::default().fg(c.muted),
        ));
        frame.render_widget(placeholder, inner);
        return;
    }

    let (row, col) = editor.cursor();
    let offset = scroll_offset(row, inner.height);
    let lines: Vec<Line> = editor.lines().iter().map(|l| Line::raw(l.as_str())).collect();
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(c.fg))
        .scroll((offset, 0));
    frame.render_widget(paragraph, inner);

    if focused {
        let prefix: String = editor.lines()[row].chars().take(col).collect();
        let x = inner.x.saturating_add(to_u16(prefix.width()));
        let y = inner.y.saturating_add(to_u16(row).saturating_sub(offset));
        frame.set_cursor_position(Position::new(x.min(inner.right().saturating_sub(1)), y));
    }
}

/// 使光标所在行可见所需的滚动行数
fn scroll_offset(cursor_row: usize, height: u16) -> u16 {
    let visible = usize::from(height.max(1));
    to_u16(cursor_row.saturating_sub(visible - 1))
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
