//! 候选表格视图

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::i18n::t;
use crate::model::{App, CandidatesState};
use crate::view::theme::colors;

const RADIO_ON: &str = "(•)";
const RADIO_OFF: &str = "( )";

/// 渲染候选表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let table = &app.candidates;

    let title = match table.refreshed_at {
        Some(at) => format!(
            " {} ({} {}) ",
            texts.candidates.title,
            texts.candidates.updated_at,
            at.format("%H:%M:%S")
        ),
        None => format!(" {} ", texts.candidates.title),
    };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(c.border_style(app.focus.is_candidates()));

    if table.rows.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                format!("  {}", texts.candidates.empty),
                Style::default().fg(c.muted),
            ),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let columns = table.column_count();
    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(header_labels(columns).into_iter().map(Cell::from)),
    )
    .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD));

    let rows = table.rows.iter().map(|row| {
        let radio = if table.is_chosen(row) { RADIO_ON } else { RADIO_OFF };
        let radio_style = if table.is_chosen(row) {
            Style::default().fg(c.success)
        } else {
            Style::default().fg(c.muted)
        };
        Row::new(
            std::iter::once(Cell::from(radio).style(radio_style))
                .chain(row.record.fields().iter().map(|f| Cell::from(f.as_str()))),
        )
    });

    let widths = std::iter::once(Constraint::Length(3))
        .chain(std::iter::repeat_n(Constraint::Fill(1), columns));

    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .style(Style::default().fg(c.fg))
        .row_highlight_style(
            Style::default()
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = table_state(table);
    frame.render_stateful_widget(widget, area, &mut state);
}

fn table_state(table: &CandidatesState) -> TableState {
    TableState::default().with_selected(Some(table.cursor))
}

/// 表头：已知列使用翻译名，多余的列编号
fn header_labels(columns: usize) -> Vec<String> {
    let known = &t().candidates.columns;
    (0..columns)
        .map(|i| {
            known
                .get(i)
                .map_or_else(|| format!("#{}", i + 1), |label| (*label).to_string())
        })
        .collect()
}
