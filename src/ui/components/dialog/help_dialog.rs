//! Key binding overlay

use super::base::{render_dialog, DialogConfig};
use crate::platform::{SUBMIT_SHORTCUT, TODAY_SHORTCUT};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// (keys, description) pairs for the form panel
const FORM_KEYS: &[(&str, &str)] = &[
    ("Tab/S-Tab", "next/previous field"),
    ("Enter", "submit, or press selected button"),
    (SUBMIT_SHORTCUT, "submit from any field"),
    (TODAY_SHORTCUT, "entry date = today"),
    ("Esc", "cancel edit / go to list"),
];

/// (keys, description) pairs for the product list
const LIST_KEYS: &[(&str, &str)] = &[
    ("j/k", "move selection"),
    ("e/Enter", "edit product"),
    ("d/Del", "delete product"),
    ("n/p", "next/previous page"),
    ("a/Tab", "focus form"),
    ("q", "quit"),
];

fn section<'a>(title: &'a str, keys: &[(&'a str, &'a str)]) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(keys.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Cyan)),
            Span::styled(*description, Style::default().fg(Color::White)),
        ])
    }));
    lines
}

/// Render the help overlay centered on the screen
pub fn render_help_dialog(frame: &mut Frame) {
    let mut body = section("Form", FORM_KEYS);
    body.push(Line::from(""));
    body.extend(section("Products", LIST_KEYS));

    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "?",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Keys",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            body,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
