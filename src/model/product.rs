//! Product records as the catalog service returns them, plus the
//! not-yet-persisted draft shape used by the create form.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A persisted product owned by the catalog service.
///
/// The identifier is assigned by the server; the storefront only ever holds
/// transient copies of these records and never invents an id of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Creates a product record.
    ///
    /// # Arguments
    /// * `id` - Server-assigned identifier
    /// * `name` - Display name
    /// * `sku` - Stock keeping unit
    /// * `price` - Unit price
    pub fn new(id: i64, name: impl Into<String>, sku: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            sku: sku.into(),
            price,
            description: String::new(),
        }
    }

    /// Same record with a description attached.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Payload for creating a new product (DTO - no id until the server assigns
/// one).
///
/// Carries the form policy: the create form refuses to submit a draft that
/// fails these rules, and no request is issued for an invalid draft.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ProductDraft {
    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "sku is required"))]
    pub sku: String,
    #[validate(range(min = 1.0, message = "price must be at least 1"))]
    pub price: f64,
    pub description: String,
}

impl ProductDraft {
    /// Creates a draft ready for submission.
    pub fn new(name: impl Into<String>, sku: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            price,
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_with_valid_fields_passes_policy() {
        let draft = ProductDraft::new("Keyboard", "KB-01", 49.9);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn short_name_is_rejected() {
        let draft = ProductDraft::new("Ky", "KB-01", 49.9);
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn missing_sku_and_zero_price_are_both_reported() {
        let draft = ProductDraft::new("Keyboard", "", 0.0);
        let errors = draft.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("sku"));
        assert!(fields.contains_key("price"));
    }
}
