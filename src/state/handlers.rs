//! Handler traits through which the form and list report user intent
//!
//! The components never touch the product collection themselves; whoever owns
//! it implements these traits.

use super::product::{Product, ProductDraft, ProductId};

/// Receives the outcome of the product form
#[cfg_attr(test, mockall::automock)]
pub trait ProductFormHandler {
    /// Called exactly once per successful submit with the raw field values
    fn on_submit(&mut self, draft: ProductDraft);

    /// Called when the user abandons an edit
    fn on_cancel(&mut self);
}

/// Receives row actions from the product list
#[cfg_attr(test, mockall::automock)]
pub trait ProductListHandler {
    fn on_edit(&mut self, product: Product);

    fn on_delete(&mut self, id: ProductId);
}
