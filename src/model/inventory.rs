//! The joined product-plus-stock view served by the inventory service.

use serde::{Deserialize, Serialize};

/// A product joined with its available quantity.
///
/// This shape is always derived on the server (product fields from the
/// catalog service, quantity from the inventory store) and is never
/// persisted by the storefront. The wire field for the identifier is `id`,
/// matching the inventory service's response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInventory {
    #[serde(rename = "id")]
    pub product_id: i64,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub description: String,
}

impl ProductInventory {
    /// Creates a joined record.
    pub fn new(
        product_id: i64,
        name: impl Into<String>,
        sku: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            sku: sku.into(),
            price,
            quantity,
            description: String::new(),
        }
    }
}

/// Body of the absolute quantity update (`PUT /inventories/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityUpdate {
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_record_uses_id_on_the_wire() {
        let json = r#"{"id":7,"name":"Mug","sku":"MUG-1","price":9.5,"quantity":4}"#;
        let record: ProductInventory = serde_json::from_str(json).unwrap();
        assert_eq!(record.product_id, 7);
        assert_eq!(record.quantity, 4);
        assert_eq!(record.description, "");

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["id"], 7);
    }
}
