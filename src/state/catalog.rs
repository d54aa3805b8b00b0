//! In-memory product catalog owned by the application

use super::handlers::{ProductFormHandler, ProductListHandler};
use super::product::{Product, ProductDraft, ProductId};
use std::collections::HashSet;

/// Default number of products shown per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Canonical product list, edit reference and pagination
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
    product_to_edit: Option<Product>,
    next_id: ProductId,
    page: usize,
    page_size: usize,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

impl ProductCatalog {
    /// Build a catalog from seed products.
    ///
    /// Ids must be unique and below `ProductId::MAX`, which stays free so the
    /// id counter cannot overflow. Offending seeds are dropped with a warning.
    pub fn new(seed: Vec<Product>, page_size: usize) -> Self {
        let mut seen = HashSet::new();
        let products: Vec<Product> = seed
            .into_iter()
            .filter(|product| {
                if product.id == ProductId::MAX {
                    tracing::warn!(
                        id = product.id,
                        name = %product.name,
                        "skipping product with reserved id"
                    );
                    false
                } else if !seen.insert(product.id) {
                    tracing::warn!(
                        id = product.id,
                        name = %product.name,
                        "skipping product with duplicate id"
                    );
                    false
                } else {
                    true
                }
            })
            .collect();
        let next_id = products.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        Self {
            products,
            product_to_edit: None,
            next_id,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The product currently loaded into the form, if any
    pub fn product_to_edit(&self) -> Option<&Product> {
        self.product_to_edit.as_ref()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based index of the current page
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages, never less than one
    pub fn page_count(&self) -> usize {
        self.products.len().div_ceil(self.page_size).max(1)
    }

    /// Products on the current page
    pub fn current_page(&self) -> &[Product] {
        let start = (self.page * self.page_size).min(self.products.len());
        let end = (start + self.page_size).min(self.products.len());
        &self.products[start..end]
    }

    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn last_page(&mut self) {
        self.page = self.page_count() - 1;
    }

    fn clamp_page(&mut self) {
        self.page = self.page.min(self.page_count() - 1);
    }

    /// Append a new product built from `draft` and return its id.
    ///
    /// Returns None once the id space is used up.
    pub fn add(&mut self, draft: &ProductDraft) -> Option<ProductId> {
        let id = self.next_id;
        let Some(next_id) = id.checked_add(1) else {
            tracing::warn!(id, name = %draft.name, "no product ids left");
            return None;
        };
        self.next_id = next_id;
        self.products.push(Product::from_draft(id, draft));
        tracing::info!(id, name = %draft.name, "product added");
        Some(id)
    }

    /// Replace the product with `id`, keeping its position
    pub fn update(&mut self, id: ProductId, draft: &ProductDraft) -> bool {
        let Some(slot) = self.products.iter_mut().find(|p| p.id == id) else {
            tracing::warn!(id, "update for unknown product");
            return false;
        };
        *slot = Product::from_draft(id, draft);
        tracing::info!(id, "product updated");
        true
    }

    /// Remove the product with `id`
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        let removed = self.products.remove(index);
        if self.product_to_edit.as_ref().is_some_and(|p| p.id == id) {
            self.product_to_edit = None;
        }
        self.clamp_page();
        tracing::info!(id, "product deleted");
        Some(removed)
    }
}

impl ProductFormHandler for ProductCatalog {
    fn on_submit(&mut self, draft: ProductDraft) {
        match self.product_to_edit.as_ref().map(|p| p.id) {
            Some(id) => {
                if self.update(id, &draft) {
                    self.product_to_edit = self.get(id).cloned();
                } else {
                    self.product_to_edit = None;
                }
            }
            None => {
                if self.add(&draft).is_some() {
                    self.last_page();
                }
            }
        }
    }

    fn on_cancel(&mut self) {
        self.product_to_edit = None;
    }
}

impl ProductListHandler for ProductCatalog {
    fn on_edit(&mut self, product: Product) {
        tracing::debug!(id = product.id, "editing product");
        self.product_to_edit = Some(product);
    }

    fn on_delete(&mut self, id: ProductId) {
        self.remove(id);
    }
}
