//! Form rendering module
//!
//! - `field_renderer`: single field with inline validation message
//! - `product_form`: product create/edit form

mod field_renderer;
mod product_form;

pub use product_form::draw_product_form;
