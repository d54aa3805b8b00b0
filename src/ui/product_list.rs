//! Product table
//!
//! Stateless: rows are derived from whatever slice the caller passes in, and
//! row actions are forwarded to a [`ProductListHandler`].

use super::widgets::render_scrollable_table;
use crate::state::{Product, ProductId, ProductListHandler};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Shown in place of rows when the page is empty
pub const EMPTY_PAGE_MESSAGE: &str = "No products on this page.";

/// Column headers, actions last
pub const HEADERS: [&str; 5] = ["Name", "Price", "Supplier Email", "Entry Date", "Actions"];

/// Row-level actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Edit,
    Delete,
}

impl ListAction {
    pub const ALL: [ListAction; 2] = [ListAction::Edit, ListAction::Delete];

    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }

    /// Key that triggers the action from the list
    pub fn key(self) -> char {
        match self {
            Self::Edit => 'e',
            Self::Delete => 'd',
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    /// Single informational row spanning all columns, no actions
    Placeholder(&'static str),
    Product {
        id: ProductId,
        name: String,
        price: String,
        supplier_email: String,
        entry_date: String,
        actions: [ListAction; 2],
    },
}

impl ListRow {
    pub fn actions(&self) -> &[ListAction] {
        match self {
            Self::Placeholder(_) => &[],
            Self::Product { actions, .. } => actions,
        }
    }
}

/// Format a price as currency with two decimals
pub fn format_price(price: f64) -> String {
    if price.is_finite() {
        format!("${price:.2}")
    } else {
        "$NaN".to_string()
    }
}

/// Map products to table rows in the order given
pub fn rows(products: &[Product]) -> Vec<ListRow> {
    if products.is_empty() {
        return vec![ListRow::Placeholder(EMPTY_PAGE_MESSAGE)];
    }
    products
        .iter()
        .map(|product| ListRow::Product {
            id: product.id,
            name: product.name.clone(),
            price: format_price(product.price),
            supplier_email: product.supplier_email.clone(),
            entry_date: product.entry_date.clone(),
            actions: ListAction::ALL,
        })
        .collect()
}

/// Forward `action` on the product at `index` to `handler`.
///
/// Edit receives the full product, Delete only its id. Returns false when
/// there is no product at `index`.
pub fn activate<H>(products: &[Product], index: usize, action: ListAction, handler: &mut H) -> bool
where
    H: ProductListHandler + ?Sized,
{
    let Some(product) = products.get(index) else {
        return false;
    };
    match action {
        ListAction::Edit => handler.on_edit(product.clone()),
        ListAction::Delete => handler.on_delete(product.id),
    }
    true
}

/// What the table needs to know about its surroundings
#[derive(Debug, Clone, Copy)]
pub struct ListView<'a> {
    pub products: &'a [Product],
    pub selected: usize,
    pub focused: bool,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    /// Product currently loaded into the form
    pub editing: Option<ProductId>,
}

fn column_widths() -> [Constraint; 5] {
    [
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Min(22),
        Constraint::Length(12),
        Constraint::Length(18),
    ]
}

fn header_row() -> Row<'static> {
    Row::new(HEADERS.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .bottom_margin(1)
}

fn action_spans(actions: &[ListAction]) -> Vec<Span<'static>> {
    actions
        .iter()
        .flat_map(|action| {
            let color = match action {
                ListAction::Edit => Color::Yellow,
                ListAction::Delete => Color::Red,
            };
            [
                Span::styled(
                    format!("[{}]", action.key()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(format!("{} ", action.label()), Style::default().fg(color)),
            ]
        })
        .collect()
}

fn product_row(row: ListRow, editing: Option<ProductId>) -> Option<Row<'static>> {
    let actions = Line::from(action_spans(row.actions()));
    let ListRow::Product {
        id,
        name,
        price,
        supplier_email,
        entry_date,
        ..
    } = row
    else {
        return None;
    };
    let marker = if editing == Some(id) { "✎ " } else { "" };
    Some(Row::new(vec![
        Cell::from(format!("{marker}{name}")),
        Cell::from(price),
        Cell::from(supplier_email),
        Cell::from(entry_date),
        Cell::from(actions),
    ]))
}

/// Draw the product table
pub fn draw(frame: &mut Frame, area: Rect, view: ListView<'_>) {
    let border_color = if view.focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" Products ({}) ", view.total))
        .title_bottom(Line::from(format!(
            " Page {} of {} ",
            view.page + 1,
            view.page_count
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let rows = rows(view.products);

    if let [ListRow::Placeholder(message)] = rows.as_slice() {
        // Header, blank margin, then the message across every column
        let inner = block.inner(area);
        let table = Table::new(Vec::<Row>::new(), column_widths())
            .header(header_row())
            .block(block);
        frame.render_widget(table, area);

        let message_area = Rect {
            y: inner.y.saturating_add(2),
            height: inner.height.saturating_sub(2).min(1),
            ..inner
        };
        let message = Paragraph::new(*message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(message, message_area);
        return;
    }

    let table_rows: Vec<Row> = rows
        .into_iter()
        .filter_map(|row| product_row(row, view.editing))
        .collect();

    let mut table = Table::new(table_rows, column_widths())
        .header(header_row())
        .block(block)
        .column_spacing(1);
    if view.focused {
        table = table
            .row_highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▸ ");
    }

    render_scrollable_table(frame, area, table, view.selected);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MockProductListHandler;
    use mockall::predicate::eq;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn product(id: ProductId, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            supplier_email: format!("{}@supplier.com", name.to_lowercase()),
            entry_date: "2024-05-20".to_string(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Keyboard", 120.0),
            product(2, "Mouse", 25.5),
            product(3, "Monitor", 199.999),
        ]
    }

    mod formatting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_format_price_two_decimals() {
            assert_eq!(format_price(120.0), "$120.00");
            assert_eq!(format_price(1500.5), "$1500.50");
            assert_eq!(format_price(0.004), "$0.00");
        }

        #[test]
        fn test_format_price_nan() {
            assert_eq!(format_price(f64::NAN), "$NaN");
        }
    }

    mod row_mapping {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_list_is_single_placeholder_without_actions() {
            let rows = rows(&[]);
            assert_eq!(rows, vec![ListRow::Placeholder(EMPTY_PAGE_MESSAGE)]);
            assert!(rows[0].actions().is_empty());
        }

        #[test]
        fn test_one_row_per_product_in_order() {
            let rows = rows(&sample());
            assert_eq!(rows.len(), 3);
            let ids: Vec<_> = rows
                .iter()
                .filter_map(|r| match r {
                    ListRow::Product { id, .. } => Some(*id),
                    ListRow::Placeholder(_) => None,
                })
                .collect();
            assert_eq!(ids, vec![1, 2, 3]);
            assert!(rows
                .iter()
                .all(|r| r.actions() == [ListAction::Edit, ListAction::Delete]));
        }

        #[test]
        fn test_cells_are_verbatim_except_price() {
            let rows = rows(&[product(9, "Mouse", 25.5)]);
            assert_eq!(
                rows[0],
                ListRow::Product {
                    id: 9,
                    name: "Mouse".to_string(),
                    price: "$25.50".to_string(),
                    supplier_email: "mouse@supplier.com".to_string(),
                    entry_date: "2024-05-20".to_string(),
                    actions: ListAction::ALL,
                }
            );
        }
    }

    mod actions {
        use super::*;

        #[test]
        fn test_edit_forwards_full_product() {
            let products = sample();
            let mut handler = MockProductListHandler::new();
            handler
                .expect_on_edit()
                .with(eq(products[1].clone()))
                .times(1)
                .return_const(());
            handler.expect_on_delete().never();

            assert!(activate(&products, 1, ListAction::Edit, &mut handler));
        }

        #[test]
        fn test_delete_forwards_only_id() {
            let products = sample();
            let mut handler = MockProductListHandler::new();
            handler
                .expect_on_delete()
                .with(eq(3))
                .times(1)
                .return_const(());
            handler.expect_on_edit().never();

            assert!(activate(&products, 2, ListAction::Delete, &mut handler));
        }

        #[test]
        fn test_out_of_range_forwards_nothing() {
            let mut handler = MockProductListHandler::new();
            handler.expect_on_edit().never();
            handler.expect_on_delete().never();

            assert!(!activate(&sample(), 3, ListAction::Edit, &mut handler));
            assert!(!activate(&[], 0, ListAction::Delete, &mut handler));
        }
    }

    mod rendering {
        use super::*;
        use pretty_assertions::assert_eq;

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

        fn render(products: &[Product]) -> String {
            let backend = TestBackend::new(110, 14);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw(
                        frame,
                        frame.area(),
                        ListView {
                            products,
                            selected: 0,
                            focused: false,
                            page: 0,
                            page_count: 1,
                            total: products.len(),
                            editing: None,
                        },
                    );
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn test_renders_headers() {
            let output = render(&sample());
            for header in HEADERS {
                assert!(output.contains(header), "missing header {header}");
            }
        }

        #[test]
        fn test_renders_placeholder_for_empty_page() {
            let output = render(&[]);
            assert!(output.contains(EMPTY_PAGE_MESSAGE));
            assert!(!output.contains("[e]Edit"));
        }

        #[test]
        fn test_renders_rows_with_actions() {
            let output = render(&sample());
            assert!(output.contains("Keyboard"));
            assert!(output.contains("$120.00"));
            assert!(output.contains("$200.00"));
            assert!(output.contains("mouse@supplier.com"));
            assert_eq!(output.matches("[e]Edit").count(), 3);
            assert_eq!(output.matches("[d]Delete").count(), 3);
        }

        #[test]
        fn test_renders_page_indicator() {
            let output = render(&sample());
            assert!(output.contains("Page 1 of 1"));
        }
    }
}
