//! Product field validation
//!
//! Every rule runs on every submit; a failing field never hides the errors of
//! the fields after it.

use super::field::ProductField;
use crate::state::ProductDraft;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Loose `local@domain.tld` shape
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A single field's validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("name is required")]
    NameRequired,
    #[error("price must be a number greater than 0")]
    PriceInvalid,
    #[error("supplier email is required")]
    EmailRequired,
    #[error("invalid email address format")]
    EmailInvalid,
    #[error("entry date is required")]
    EntryDateRequired,
}

impl FieldError {
    /// The field this error belongs to
    pub fn field(self) -> ProductField {
        match self {
            Self::NameRequired => ProductField::Name,
            Self::PriceInvalid => ProductField::Price,
            Self::EmailRequired | Self::EmailInvalid => ProductField::SupplierEmail,
            Self::EntryDateRequired => ProductField::EntryDate,
        }
    }
}

/// Per-field outcome of validating a whole draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: [Option<FieldError>; 4],
}

impl ValidationReport {
    pub fn error(&self, field: ProductField) -> Option<FieldError> {
        self.errors[field.index()]
    }

    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    pub fn error_count(&self) -> usize {
        self.errors.iter().flatten().count()
    }

    /// Errors in field order
    pub fn errors(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors.iter().flatten().copied()
    }

    fn record(&mut self, error: Option<FieldError>) {
        if let Some(error) = error {
            self.errors[error.field().index()] = Some(error);
        }
    }
}

pub fn validate_name(name: &str) -> Option<FieldError> {
    name.trim().is_empty().then_some(FieldError::NameRequired)
}

pub fn validate_price(price: &str) -> Option<FieldError> {
    match price.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => None,
        _ => Some(FieldError::PriceInvalid),
    }
}

pub fn validate_supplier_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        Some(FieldError::EmailRequired)
    } else if !EMAIL_REGEX.is_match(email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

pub fn validate_entry_date(entry_date: &str) -> Option<FieldError> {
    entry_date.is_empty().then_some(FieldError::EntryDateRequired)
}

/// Run all four rules against a draft.
pub fn validate(draft: &ProductDraft) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.record(validate_name(&draft.name));
    report.record(validate_price(&draft.price));
    report.record(validate_supplier_email(&draft.supplier_email));
    report.record(validate_entry_date(&draft.entry_date));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_draft() -> ProductDraft {
        ProductDraft::new(
            "Laptop Gaming",
            "1500.50",
            "sales@gamingtech.com",
            "2025-07-01",
        )
    }

    mod rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_name_whitespace_only_is_required() {
            assert_eq!(validate_name("   "), Some(FieldError::NameRequired));
            assert_eq!(validate_name(""), Some(FieldError::NameRequired));
            assert_eq!(validate_name(" Mouse "), None);
        }

        #[test]
        fn test_price_rejects_non_numbers_and_non_positive() {
            for bad in ["", "abc", "0", "-3", "0.00", "12abc", "inf", "NaN"] {
                assert_eq!(
                    validate_price(bad),
                    Some(FieldError::PriceInvalid),
                    "price {bad:?} should be rejected"
                );
            }
        }

        #[test]
        fn test_price_accepts_positive_numbers() {
            for good in ["1", "0.01", "1500.50", " 42 ", "1e3"] {
                assert_eq!(validate_price(good), None, "price {good:?} should pass");
            }
        }

        #[test]
        fn test_email_required_before_format() {
            assert_eq!(validate_supplier_email(""), Some(FieldError::EmailRequired));
        }

        #[test]
        fn test_email_format() {
            for bad in ["invalid-email", "a@b", "@b.c", "a b@c.d", "a@b.", "a@@b.c"] {
                assert_eq!(
                    validate_supplier_email(bad),
                    Some(FieldError::EmailInvalid),
                    "email {bad:?} should be rejected"
                );
            }
            assert_eq!(validate_supplier_email("x@y.z"), None);
            assert_eq!(validate_supplier_email("sales@gamingtech.com"), None);
        }

        #[test]
        fn test_entry_date_required() {
            assert_eq!(
                validate_entry_date(""),
                Some(FieldError::EntryDateRequired)
            );
            assert_eq!(validate_entry_date("2025-07-01"), None);
        }
    }

    mod report {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_draft_has_no_errors() {
            let report = validate(&valid_draft());
            assert!(report.is_valid());
            assert_eq!(report.error_count(), 0);
        }

        #[test]
        fn test_empty_draft_reports_all_four_errors() {
            let report = validate(&ProductDraft::default());
            let errors: Vec<_> = report.errors().collect();
            assert_eq!(
                errors,
                vec![
                    FieldError::NameRequired,
                    FieldError::PriceInvalid,
                    FieldError::EmailRequired,
                    FieldError::EntryDateRequired,
                ]
            );
        }

        #[test]
        fn test_bad_price_reports_only_price() {
            let mut draft = valid_draft();
            draft.price = "-1".to_string();
            let report = validate(&draft);
            assert_eq!(report.error_count(), 1);
            assert_eq!(
                report.error(ProductField::Price),
                Some(FieldError::PriceInvalid)
            );
        }

        #[test]
        fn test_error_is_keyed_by_field() {
            let mut draft = valid_draft();
            draft.supplier_email = "invalid-email".to_string();
            let report = validate(&draft);
            assert_eq!(
                report.error(ProductField::SupplierEmail),
                Some(FieldError::EmailInvalid)
            );
            assert_eq!(report.error(ProductField::Name), None);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::NameRequired.to_string(), "name is required");
        assert_eq!(
            FieldError::PriceInvalid.to_string(),
            "price must be a number greater than 0"
        );
        assert_eq!(
            FieldError::EmailRequired.to_string(),
            "supplier email is required"
        );
        assert_eq!(
            FieldError::EmailInvalid.to_string(),
            "invalid email address format"
        );
        assert_eq!(
            FieldError::EntryDateRequired.to_string(),
            "entry date is required"
        );
    }
}
