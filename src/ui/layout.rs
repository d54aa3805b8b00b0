//! Layout components (form panel, product panel, status bar)

use crate::state::{AppState, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the form panel
pub const FORM_WIDTH: u16 = 46;

/// Split the screen into form panel (left) and product table (right),
/// leaving the bottom row for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(FORM_WIDTH), // Form
            Constraint::Min(0),             // Product table
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", focus_label(state.focus)),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        focus_hints(state.focus),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ?:help ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn focus_label(focus: Focus) -> &'static str {
    match focus {
        Focus::Form => "FORM",
        Focus::List => "LIST",
    }
}

/// Get keyboard hints for the focused panel
fn focus_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Form => "Tab:next  Enter:submit  Esc:back",
        Focus::List => "j/k:nav  e:edit  d:delete  n/p:page  a:form",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_row() {
        let (form, list) = create_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(form.height, 39);
        assert_eq!(list.height, 39);
        assert_eq!(form.width, FORM_WIDTH);
        assert_eq!(list.x, FORM_WIDTH);
        assert_eq!(list.width, 120 - FORM_WIDTH);
    }

    #[test]
    fn test_hints_differ_by_focus() {
        assert_ne!(focus_hints(Focus::Form), focus_hints(Focus::List));
        assert_eq!(focus_label(Focus::List), "LIST");
    }
}
