//! Application state definitions

use super::catalog::ProductCatalog;
use super::forms::ProductForm;
use super::product::{Product, ProductId};

/// Which panel receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    List,
}

/// Delete waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeleteAction {
    pub product_id: ProductId,
    pub product_name: String,
    /// false = Cancel, true = Delete
    pub selected_option: bool,
}

impl PendingDeleteAction {
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            selected_option: false,
        }
    }

    pub fn toggle(&mut self) {
        self.selected_option = !self.selected_option;
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Data
    pub catalog: ProductCatalog,
    pub form: ProductForm,

    // Selection within the current page
    pub selected_index: usize,
    pub focus: Focus,

    // UI state
    pub confirm_delete: bool,
    pub pending_delete: Option<PendingDeleteAction>,
    pub show_help: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(catalog: ProductCatalog, confirm_delete: bool) -> Self {
        Self {
            catalog,
            confirm_delete,
            ..Default::default()
        }
    }

    /// Product under the list cursor
    pub fn selected_product(&self) -> Option<&Product> {
        self.catalog.current_page().get(self.selected_index)
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let max = self.catalog.current_page().len();
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep the cursor on an existing row after the page changed
    pub fn clamp_selection(&mut self) {
        let len = self.catalog.current_page().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Re-initialize the form when the catalog's edit reference changes.
    ///
    /// Returns true if the form was replaced.
    pub fn sync_form(&mut self) -> bool {
        let target = self.catalog.product_to_edit().map(|p| p.id);
        if self.form.editing_id() == target {
            return false;
        }
        self.form = ProductForm::new(self.catalog.product_to_edit());
        true
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
