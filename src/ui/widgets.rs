//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{Table, TableState},
    Frame,
};

/// Render a scrollable table that automatically keeps the selected row visible.
///
/// Wraps `render_stateful_widget` with a `TableState`, so the table scrolls to
/// keep the selected row in view when a page is taller than the panel.
pub fn render_scrollable_table(frame: &mut Frame, area: Rect, table: Table, selected_index: usize) {
    let mut table_state = TableState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(table, area, &mut table_state);
}
