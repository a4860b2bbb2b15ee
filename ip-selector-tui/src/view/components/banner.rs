//! 横幅组件
//!
//! 同一时刻只显示一种横幅：处理中、成功或错误。

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use ip_selector_core::types::UiState;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染横幅
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let line = match &app.banner {
        UiState::Idle => Line::from(""),
        UiState::Loading => Line::from(Span::styled(
            format!(" ◌ {}", t().banner.loading),
            Style::default().fg(c.warning),
        )),
        UiState::Success { message, .. } => Line::from(Span::styled(
            format!(" ✔ {message}"),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )),
        UiState::Error { message } => Line::from(Span::styled(
            format!(" ✘ {message}"),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
