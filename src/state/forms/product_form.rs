//! Product form state and submit/reset logic

use super::field::ProductField;
use super::validation::{validate, FieldError, ValidationReport};
use crate::state::{Product, ProductDraft, ProductFormHandler, ProductId};
use chrono::NaiveDate;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Whether the form creates a new product or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Add Product",
            Self::Edit => "Save Changes",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "New Product",
            Self::Edit => "Edit Product",
        }
    }
}

/// Buttons on the form's action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Submit,
    CancelEdit,
}

impl FormButton {
    pub fn label(self, mode: FormMode) -> &'static str {
        match self {
            Self::Submit => mode.submit_label(),
            Self::CancelEdit => "Cancel Edit",
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The handler received the draft
    Submitted,
    /// At least one field failed; the handler was not called
    Invalid(ValidationReport),
}

/// Index of the buttons row, after the four fields
const BUTTONS_ROW: usize = 4;

/// Product create/edit form
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    values: ProductDraft,
    mode: FormMode,
    editing_id: Option<ProductId>,
    report: ValidationReport,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl ProductForm {
    /// Edit mode when a product is given, create mode otherwise
    pub fn new(product_to_edit: Option<&Product>) -> Self {
        match product_to_edit {
            Some(product) => Self::edit(product),
            None => Self::create(),
        }
    }

    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(product: &Product) -> Self {
        Self {
            values: ProductDraft::from(product),
            mode: FormMode::Edit,
            editing_id: Some(product.id),
            ..Self::default()
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        self.mode == FormMode::Edit
    }

    /// Id of the product this form was pre-filled from
    pub fn editing_id(&self) -> Option<ProductId> {
        self.editing_id
    }

    pub fn values(&self) -> &ProductDraft {
        &self.values
    }

    pub fn value(&self, field: ProductField) -> &str {
        field.get(self.values())
    }

    /// Replace a field's value. Does not validate.
    pub fn set_value(&mut self, field: ProductField, value: impl Into<String>) {
        *field.get_mut(&mut self.values) = value.into();
    }

    /// Error from the last submit attempt for this field
    pub fn error(&self, field: ProductField) -> Option<FieldError> {
        self.report.error(field)
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn has_errors(&self) -> bool {
        !self.report.is_valid()
    }

    /// The field under the cursor, or None on the buttons row
    pub fn active_product_field(&self) -> Option<ProductField> {
        ProductField::from_index(self.active_field_index)
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// Buttons shown for the current mode
    pub fn buttons(&self) -> &'static [FormButton] {
        match self.mode {
            FormMode::Create => &[FormButton::Submit],
            FormMode::Edit => &[FormButton::Submit, FormButton::CancelEdit],
        }
    }

    pub fn selected(&self) -> FormButton {
        let buttons = self.buttons();
        buttons[self.selected_button.min(buttons.len() - 1)]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % self.buttons().len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = self.buttons().len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_product_field() {
            if field.accepts(c) {
                field.get_mut(&mut self.values).push(c);
            }
        }
    }

    /// Remove the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_product_field() {
            field.get_mut(&mut self.values).pop();
        }
    }

    /// Set the entry date to the given day in ISO format
    pub fn fill_date(&mut self, date: NaiveDate) {
        self.set_value(
            ProductField::EntryDate,
            date.format("%Y-%m-%d").to_string(),
        );
    }

    /// Set the entry date to today's local date
    pub fn fill_today(&mut self) {
        self.fill_date(chrono::Local::now().date_naive());
    }

    /// Validate every field and hand the draft to `handler` if all pass.
    ///
    /// Create mode clears the fields afterwards; edit mode keeps them.
    pub fn submit<H>(&mut self, handler: &mut H) -> SubmitOutcome
    where
        H: ProductFormHandler + ?Sized,
    {
        let report = validate(&self.values);
        if !report.is_valid() {
            tracing::debug!(errors = report.error_count(), "product form rejected");
            self.report = report.clone();
            return SubmitOutcome::Invalid(report);
        }

        self.report = ValidationReport::default();
        handler.on_submit(self.values.clone());
        tracing::debug!(mode = ?self.mode, "product form submitted");

        if self.mode == FormMode::Create {
            self.values = ProductDraft::default();
            self.active_field_index = 0;
        }
        SubmitOutcome::Submitted
    }

    /// Abandon the current edit. No-op in create mode.
    pub fn cancel<H>(&mut self, handler: &mut H) -> bool
    where
        H: ProductFormHandler + ?Sized,
    {
        if self.mode != FormMode::Edit {
            return false;
        }
        *self = Self::create();
        handler.on_cancel();
        true
    }
}

impl Form for ProductForm {
    fn field_count(&self) -> usize {
        5 // name, price, supplier email, entry date, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
}
