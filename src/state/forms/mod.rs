//! Form domain layer
//!
//! Type-safe product form handling: field identities, validation rules and
//! the create/edit submit state machine.

mod field;
mod product_form;
mod validation;

pub use field::ProductField;
pub use product_form::{Form, FormButton, FormMode, ProductForm, SubmitOutcome};
pub use validation::FieldError;
