//! Field rendering utilities for the form

use super::presentation::{CheckboxView, TextInputView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a text input: bordered box plus one error line
pub const TEXT_INPUT_HEIGHT: u16 = 4;

fn focus_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a text input with its error line beneath
pub fn draw_text_input(frame: &mut Frame, area: Rect, input: &TextInputView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let cursor = if input.is_active { "▌" } else { "" };

    let value = if input.value.is_empty() {
        Span::styled(input.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(input.value, focus_style(input.is_active))
    };

    let content = Paragraph::new(Line::from(vec![
        value,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", input.field))
        .borders(Borders::ALL)
        .border_style(focus_style(input.is_active));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(error) = input.error {
        let error_line = Paragraph::new(Span::styled(error, Style::default().fg(Color::Red)));
        frame.render_widget(error_line, chunks[1]);
    }
}

/// Draw the checkbox and its caption on a single row
pub fn draw_checkbox(frame: &mut Frame, area: Rect, checkbox: &CheckboxView) {
    let mark = if checkbox.checked { "[x]" } else { "[ ]" };
    let mark_style = if checkbox.is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::styled(checkbox.caption, focus_style(checkbox.is_active)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
