//! Form field value objects

use crate::state::ProductDraft;

/// The editable fields of a product, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Price,
    SupplierEmail,
    EntryDate,
}

impl ProductField {
    /// All fields in the order they are rendered and validated
    pub const ALL: [ProductField; 4] = [
        ProductField::Name,
        ProductField::Price,
        ProductField::SupplierEmail,
        ProductField::EntryDate,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Price => 1,
            Self::SupplierEmail => 2,
            Self::EntryDate => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label shown on the field border
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Product Name",
            Self::Price => "Price",
            Self::SupplierEmail => "Supplier Email",
            Self::EntryDate => "Entry Date",
        }
    }

    /// Placeholder shown while the field is empty and unfocused
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "(empty)",
            Self::Price => "0.00",
            Self::SupplierEmail => "name@example.com",
            Self::EntryDate => "YYYY-MM-DD",
        }
    }

    /// Read this field's value out of a draft
    pub fn get(self, draft: &ProductDraft) -> &str {
        match self {
            Self::Name => &draft.name,
            Self::Price => &draft.price,
            Self::SupplierEmail => &draft.supplier_email,
            Self::EntryDate => &draft.entry_date,
        }
    }

    /// Mutable access to this field's value in a draft
    pub fn get_mut(self, draft: &mut ProductDraft) -> &mut String {
        match self {
            Self::Name => &mut draft.name,
            Self::Price => &mut draft.price,
            Self::SupplierEmail => &mut draft.supplier_email,
            Self::EntryDate => &mut draft.entry_date,
        }
    }

    /// Whether a typed character is accepted by this field
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Price => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
            Self::EntryDate => c.is_ascii_digit() || c == '-',
            Self::SupplierEmail => !c.is_whitespace(),
            Self::Name => !c.is_control(),
        }
    }
}
