//! Delete confirmation dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::PendingDeleteAction;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const DIALOG_WIDTH: u16 = 50;

/// Render the confirmation dialog for a pending delete
pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingDeleteAction) {
    // Room for borders, padding, the id and the question mark
    let max_name_len = DIALOG_WIDTH.min(frame.area().width).saturating_sub(14) as usize;

    let mut body = vec![
        Line::from(Span::styled(
            "Delete this product?",
            Style::default().fg(Color::White),
        )),
        Line::from(vec![
            Span::styled(
                format!("#{} ", action.product_id),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("{}?", truncate_string(&action.product_name, max_name_len)),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
    ];
    body.extend(option_lines(action.selected_option));

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::DarkGray));
    let hint = vec![
        key("↑↓"),
        text(" select  "),
        key("Enter"),
        text(" confirm  "),
        key("y/n"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Confirm Delete",
            title_color: Color::Red,
            border_color: Color::Red,
            body,
            hint: Some(hint),
            max_width: DIALOG_WIDTH,
        },
    );
}

/// Cancel / Delete choices, the selected one marked and bold
fn option_lines(delete_selected: bool) -> Vec<Line<'static>> {
    [(false, "Cancel", Color::White), (true, "Delete", Color::Red)]
        .into_iter()
        .map(|(is_delete, label, color)| {
            if is_delete == delete_selected {
                Line::from(Span::styled(
                    format!("▸ {label}"),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {label}"),
                    Style::default().fg(Color::DarkGray),
                ))
            }
        })
        .collect()
}

/// Truncate to `max_len` characters, ending in an ellipsis when shortened
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_selected_option_is_marked() {
        let lines = option_lines(false);
        assert_eq!(line_text(&lines[0]), "▸ Cancel");
        assert_eq!(line_text(&lines[1]), "  Delete");

        let lines = option_lines(true);
        assert_eq!(line_text(&lines[1]), "▸ Delete");
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_string("Mouse", 10), "Mouse");
    }

    #[test]
    fn test_truncate_long_string_adds_ellipsis() {
        assert_eq!(truncate_string("Mechanical Keyboard", 10), "Mechani...");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_string("Teclado Mecánico", 16), "Teclado Mecánico");
    }
}
