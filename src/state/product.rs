//! Product records

use serde::{Deserialize, Serialize};

/// Caller-assigned product identifier
pub type ProductId = u64;

/// A product as stored by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub supplier_email: String,
    pub entry_date: String,
}

impl Product {
    /// Build a product from a submitted draft.
    ///
    /// The draft has already passed validation, so the price parses; a
    /// malformed price is kept as NaN rather than rejected here.
    pub fn from_draft(id: ProductId, draft: &ProductDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            price: draft.price.trim().parse().unwrap_or(f64::NAN),
            supplier_email: draft.supplier_email.clone(),
            entry_date: draft.entry_date.clone(),
        }
    }
}

/// The four editable product fields, string-typed while being edited.
///
/// This is also the record handed to the submit handler: the price stays
/// text exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub supplier_email: String,
    pub entry_date: String,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        supplier_email: impl Into<String>,
        entry_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            supplier_email: supplier_email.into(),
            entry_date: entry_date.into(),
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self::new(
            &product.name,
            product.price.to_string(),
            &product.supplier_email,
            &product.entry_date,
        )
    }
}
