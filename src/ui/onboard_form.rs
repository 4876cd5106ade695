//! Onboarding form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_checkbox, draw_text_input, TEXT_INPUT_HEIGHT};
use super::presentation::FormView;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the form described by `view`
pub fn draw(frame: &mut Frame, area: Rect, view: &FormView) {
    let block = Block::default()
        .title(" Onboarding ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)]; // heading + blank
    constraints.extend(view.inputs.iter().map(|_| Constraint::Length(TEXT_INPUT_HEIGHT)));
    constraints.push(Constraint::Length(2)); // checkbox + blank
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    let heading = Paragraph::new(Span::styled(
        view.heading,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, chunks[0]);

    for (i, input) in view.inputs.iter().enumerate() {
        draw_text_input(frame, chunks[i + 1], input);
    }

    let checkbox_row = view.inputs.len() + 1;
    draw_checkbox(frame, chunks[checkbox_row], &view.tos);

    let button_area = chunks[checkbox_row + 1];
    let button_width = (view.submit_label.len() as u16 + 4).min(button_area.width);
    render_button(
        frame,
        Rect {
            width: button_width,
            ..button_area
        },
        view.submit_label,
        view.submit_active,
    );
}
