//! Application controller and key handling

use crate::config::TuiConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{
    AppState, Focus, Form, FormButton, PendingDeleteAction, ProductCatalog, ProductListHandler,
    SubmitOutcome,
};
use crate::ui::product_list::{self, ListAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from the loaded configuration
    pub fn new(config: &TuiConfig) -> Self {
        let catalog = ProductCatalog::new(config.initial_products(), config.page_size());
        tracing::debug!(
            products = catalog.len(),
            page_size = catalog.page_size(),
            "catalog loaded"
        );
        Self {
            state: AppState::new(catalog, config.confirm_delete()),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Delete confirmation is modal
        if self.state.pending_delete.is_some() {
            self.handle_confirm_delete_key(key);
            self.after_key();
            return;
        }

        if self.state.show_help {
            if matches!(
                key.code,
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter
            ) {
                self.state.show_help = false;
            }
            return;
        }

        // Clear any status message on key press
        self.state.status_message = None;

        if key.code == KeyCode::F(1) {
            self.state.show_help = true;
            return;
        }

        match self.state.focus {
            Focus::Form => self.handle_form_key(key),
            Focus::List => self.handle_list_key(key),
        }
        self.after_key();
    }

    /// Keep the form and list cursor consistent with the catalog
    fn after_key(&mut self) {
        if self.state.sync_form() {
            tracing::debug!(
                editing = ?self.state.form.editing_id(),
                "form re-initialized"
            );
        }
        self.state.clamp_selection();
    }

    /// Handle keys while the form panel has focus
    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_buttons = self.state.form.is_buttons_row_active();
        let shortcut = key.modifiers.contains(SHORTCUT_MODIFIER)
            || key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('s') if shortcut => self.submit_form(),
            KeyCode::Char('t') if shortcut => self.state.form.fill_today(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if on_buttons => self.state.form.prev_button(),
            KeyCode::Right if on_buttons => self.state.form.next_button(),
            KeyCode::Enter if on_buttons => match self.state.form.selected() {
                FormButton::Submit => self.submit_form(),
                FormButton::CancelEdit => {
                    self.cancel_edit();
                }
            },
            KeyCode::Enter => self.submit_form(),
            KeyCode::Esc => {
                if !self.cancel_edit() {
                    self.state.focus = Focus::List;
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_char(c)
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let was_edit = self.state.form.is_edit();
        let state = &mut self.state;
        match state.form.submit(&mut state.catalog) {
            SubmitOutcome::Submitted => {
                if was_edit {
                    state.set_status("Changes saved");
                } else {
                    state.set_status("Product added");
                    state.selected_index = state.catalog.current_page().len().saturating_sub(1);
                }
            }
            SubmitOutcome::Invalid(report) => {
                let count = report.error_count();
                state.set_status(if count == 1 {
                    "1 field needs attention".to_string()
                } else {
                    format!("{count} fields need attention")
                });
                if let Some(first) = report.errors().next() {
                    state.form.set_active_field(first.field().index());
                }
            }
        }
    }

    /// Returns false when the form was not editing anything
    fn cancel_edit(&mut self) -> bool {
        let state = &mut self.state;
        if state.form.cancel(&mut state.catalog) {
            state.set_status("Edit cancelled");
            true
        } else {
            false
        }
    }

    /// Handle keys while the product list has focus
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('?') => self.state.show_help = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
                if self.state.catalog.next_page() {
                    self.state.reset_selection();
                }
            }
            KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
                if self.state.catalog.prev_page() {
                    self.state.reset_selection();
                }
            }
            KeyCode::Char('e') | KeyCode::Enter | KeyCode::Char('d') | KeyCode::Delete
                if self.state.catalog.is_empty() =>
            {
                self.state.set_status("No products yet, press a to add one");
            }
            KeyCode::Char('e') | KeyCode::Enter => self.edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('a') | KeyCode::Tab | KeyCode::Esc => self.state.focus = Focus::Form,
            _ => {}
        }
    }

    fn edit_selected(&mut self) {
        let page = self.state.catalog.current_page().to_vec();
        if product_list::activate(
            &page,
            self.state.selected_index,
            ListAction::Edit,
            &mut self.state.catalog,
        ) {
            self.state.focus = Focus::Form;
        }
    }

    fn delete_selected(&mut self) {
        if self.state.confirm_delete {
            self.state.pending_delete = self.state.selected_product().map(PendingDeleteAction::new);
            return;
        }

        let page = self.state.catalog.current_page().to_vec();
        if product_list::activate(
            &page,
            self.state.selected_index,
            ListAction::Delete,
            &mut self.state.catalog,
        ) {
            self.state.set_status("Product deleted");
        }
    }

    /// Handle keys while the delete confirmation dialog is open
    fn handle_confirm_delete_key(&mut self, key: KeyEvent) {
        let Some(action) = self.state.pending_delete.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => action.toggle(),
            KeyCode::Enter => {
                if action.selected_option {
                    self.confirm_delete();
                } else {
                    self.state.pending_delete = None;
                }
            }
            KeyCode::Char('y') => self.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Esc => self.state.pending_delete = None,
            _ => {}
        }
    }

    fn confirm_delete(&mut self) {
        let Some(action) = self.state.pending_delete.take() else {
            return;
        };
        self.state.catalog.on_delete(action.product_id);
        self.state
            .set_status(format!("Deleted \"{}\"", action.product_name));
    }
}
