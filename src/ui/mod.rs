//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
pub mod product_list;
mod widgets;

use crate::state::{AppState, Focus};
use components::{render_confirm_dialog, render_help_dialog};
use product_list::ListView;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let (form_area, list_area) = layout::create_layout(area);

    forms::draw_product_form(frame, form_area, &state.form, state.focus == Focus::Form);

    let catalog = &state.catalog;
    product_list::draw(
        frame,
        list_area,
        ListView {
            products: catalog.current_page(),
            selected: state.selected_index,
            focused: state.focus == Focus::List,
            page: catalog.page(),
            page_count: catalog.page_count(),
            total: catalog.len(),
            editing: catalog.product_to_edit().map(|p| p.id),
        },
    );

    layout::draw_status_bar(frame, state);

    // Overlays
    if let Some(action) = &state.pending_delete {
        render_confirm_dialog(frame, action);
    } else if state.show_help {
        render_help_dialog(frame);
    }
}
