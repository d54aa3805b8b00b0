//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Pre-styled body lines
    pub body: Vec<Line<'a>>,
    /// Hint text shown at the bottom (e.g., "Press Esc to close")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

/// Outer size of a dialog for the given config, before clamping to the screen
pub fn dialog_size(config: &DialogConfig<'_>) -> (u16, u16) {
    let padding = 4u16;
    let content_width = config
        .body
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let width = (content_width + padding + 2).min(config.max_width);

    // title + blank + body + (blank + hint) + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let height = (2 + config.body.len() as u16 + hint_lines + 2).max(5);
    (width, height)
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let (width, height) = dialog_size(&config);
    let dialog_width = width.min(area.width);
    let dialog_height = height.min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(config.body);

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(body: Vec<Line<'static>>, hint: bool) -> DialogConfig<'static> {
        DialogConfig {
            title: "Help",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            body,
            hint: hint.then(|| vec![Span::raw("Esc")]),
            max_width: 40,
        }
    }

    #[test]
    fn test_size_grows_with_body() {
        let (_, small) = dialog_size(&config(vec![Line::from("a")], false));
        let (_, large) = dialog_size(&config(vec![Line::from("a"); 4], false));
        assert_eq!(large - small, 3);
    }

    #[test]
    fn test_hint_adds_two_rows() {
        let body = vec![Line::from("a"); 3];
        let (_, without) = dialog_size(&config(body.clone(), false));
        let (_, with) = dialog_size(&config(body, true));
        assert_eq!(with - without, 2);
    }

    #[test]
    fn test_width_is_capped() {
        let (width, _) = dialog_size(&config(vec![Line::from("x".repeat(200))], false));
        assert_eq!(width, 40);
    }
}
