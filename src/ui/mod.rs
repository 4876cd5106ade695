//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod onboard_form;
mod presentation;

pub use presentation::present;

use crate::app::App;
use crate::state::OnboardForm;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    draw_form(frame, &app.form);
}

/// Draw the form screen and the status bar for a given form state
pub fn draw_form(frame: &mut Frame, form: &OnboardForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let snapshot = form.snapshot();
    let view = present(&snapshot);
    onboard_form::draw(frame, chunks[0], &view);

    draw_status_bar(frame, chunks[1], form);
}

/// Key hints for whatever currently has focus
fn get_hints(form: &OnboardForm) -> &'static str {
    match form.active() {
        Some(field) if field.is_text() => " Tab/↑↓:move  Enter:submit  Esc:quit",
        Some(_) => " Tab/↑↓:move  Space:toggle  Esc:quit",
        None => " Tab/↑↓:move  Enter:submit  Esc:quit",
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, form: &OnboardForm) {
    let spans = vec![Span::styled(
        get_hints(form),
        Style::default().fg(Color::White),
    )];
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let width = quit_hint.len() as u16;
    if area.width > width {
        let hint_area = Rect {
            x: area.x + area.width - width,
            width,
            ..area
        };
        frame.render_widget(
            Paragraph::new(quit_hint).style(Style::default().fg(Color::White).bg(Color::DarkGray)),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, Form, OnboardValues, REQUIRED_MESSAGE};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(form: &OnboardForm) -> String {
        let backend = TestBackend::new(70, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw_form(frame, form)).unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_fields_and_controls() {
        let screen = render(&OnboardForm::new());
        assert!(screen.contains("I am a FORM"));
        assert!(screen.contains("What is your name?"));
        assert!(screen.contains("What is your email?"));
        assert!(screen.contains("What is your password?"));
        assert!(screen.contains("[ ] DO YOU AGREE?"));
        assert!(screen.contains("Submit. Or don't. Do you."));
        assert!(!screen.contains(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_renders_error_for_touched_name_only() {
        let mut form = OnboardForm::with_values(OnboardValues {
            name: String::new(),
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            tos: true,
        });
        form.blur(FieldName::Name);

        let screen = render(&form);
        assert_eq!(screen.matches(REQUIRED_MESSAGE).count(), 1);
        assert!(screen.contains("[x] DO YOU AGREE?"));
        assert!(screen.contains("a@b.com"));
    }

    #[test]
    fn test_renders_all_errors_after_touch_all() {
        let mut form = OnboardForm::new();
        form.touch_all();
        let screen = render(&form);
        assert_eq!(screen.matches(REQUIRED_MESSAGE).count(), 3);
    }

    #[test]
    fn test_hints_follow_focus() {
        let mut form = OnboardForm::new();
        assert!(get_hints(&form).contains("Enter:submit"));
        form.focus(FieldName::Tos);
        assert!(get_hints(&form).contains("Space:toggle"));
        form.next_field();
        assert!(get_hints(&form).contains("Enter:submit"));
    }
}
