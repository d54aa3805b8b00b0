//! Product form rendering (create and edit)

use super::field_renderer::{draw_field, FieldView, FIELD_HEIGHT};
use crate::platform::{SUBMIT_SHORTCUT, TODAY_SHORTCUT};
use crate::state::{FormButton, ProductField, ProductForm};
use crate::ui::components::{button_width, render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the product form with its action buttons
pub fn draw_product_form(frame: &mut Frame, area: Rect, form: &ProductForm, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Price
            Constraint::Length(FIELD_HEIGHT),  // Supplier email
            Constraint::Length(FIELD_HEIGHT),  // Entry date
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(2),             // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let border_color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let title = match form.editing_id() {
        Some(id) => format!(" {} #{id} ", form.mode().title()),
        None => format!(" {} ", form.mode().title()),
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if form.has_errors() {
        let count = form.report().error_count();
        let noun = if count == 1 { "error" } else { "errors" };
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {count} {noun} "),
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(block, area);

    for field in ProductField::ALL {
        draw_field(
            frame,
            chunks[field.index()],
            FieldView {
                label: field.label(),
                value: form.value(field),
                placeholder: field.placeholder(),
                is_active: focused && form.active_product_field() == Some(field),
                error: form.error(field),
            },
        );
    }

    draw_buttons(frame, chunks[4], form, focused);

    let help = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next  "),
            Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
            Span::raw(": submit"),
        ]),
        Line::from(vec![
            Span::styled(TODAY_SHORTCUT, Style::default().fg(Color::Cyan)),
            Span::raw(": today  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(if form.is_edit() { ": cancel edit" } else { ": list" }),
        ]),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[5]);
}

/// Draw the buttons row left to right
fn draw_buttons(frame: &mut Frame, area: Rect, form: &ProductForm, focused: bool) {
    let on_buttons = focused && form.is_buttons_row_active();
    let buttons = form.buttons();

    let mut constraints: Vec<Constraint> = buttons
        .iter()
        .map(|b| Constraint::Length(button_width(b.label(form.mode()))))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, button) in buttons.iter().enumerate() {
        let accent = match button {
            FormButton::Submit => Color::Green,
            FormButton::CancelEdit => Color::Gray,
        };
        render_action_button(
            frame,
            chunks[idx],
            button.label(form.mode()),
            on_buttons && form.selected() == *button,
            Some(accent),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MockProductFormHandler, Product};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render(form: &ProductForm) -> String {
        let backend = TestBackend::new(50, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_product_form(frame, frame.area(), form, true))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn keyboard() -> Product {
        Product {
            id: 1,
            name: "Mechanical Keyboard".to_string(),
            price: 120.0,
            supplier_email: "keyboards@supplier.com".to_string(),
            entry_date: "2024-05-20".to_string(),
        }
    }

    #[test]
    fn test_renders_all_fields_and_add_button() {
        let output = render(&ProductForm::create());
        for field in ProductField::ALL {
            assert!(output.contains(field.label()), "missing {}", field.label());
        }
        assert!(output.contains("Add Product"));
        assert!(!output.contains("Cancel Edit"));
    }

    #[test]
    fn test_edit_mode_renders_values_and_edit_buttons() {
        let output = render(&ProductForm::edit(&keyboard()));
        assert!(output.contains("Mechanical Keyboard"));
        assert!(output.contains("120"));
        assert!(output.contains("keyboards@supplier.com"));
        assert!(output.contains("2024-05-20"));
        assert!(output.contains("Save Changes"));
        assert!(output.contains("Cancel Edit"));
        assert!(output.contains("Edit Product #1"));
    }

    #[test]
    fn test_renders_inline_errors_after_failed_submit() {
        let mut handler = MockProductFormHandler::new();
        handler.expect_on_submit().never();
        let mut form = ProductForm::create();
        form.submit(&mut handler);

        let output = render(&form);
        assert!(output.contains("name is required"));
        assert!(output.contains("price must be a number greater than 0"));
        assert!(output.contains("supplier email is required"));
        assert!(output.contains("entry date is required"));
        assert!(output.contains("4 errors"));
    }

    #[test]
    fn test_no_errors_before_submit() {
        let output = render(&ProductForm::create());
        assert!(!output.contains("is required"));
        assert!(!output.contains("errors"));
    }
}
