//! Typed gateways to the two storefront services.
//!
//! [`CatalogClient`] and [`InventoryClient`] wrap one [`HttpClient`] each;
//! the [`CatalogApi`] and [`InventoryApi`] traits are the seam the view
//! controllers depend on, with in-memory [`mock`] implementations for
//! tests.

pub mod catalog;
pub mod error;
pub mod http;
pub mod inventory;
pub mod mock;

pub use catalog::{CatalogApi, CatalogClient};
pub use error::{ApiError, ApiResult};
pub use http::HttpClient;
pub use inventory::{InventoryApi, InventoryClient};
pub use mock::{CatalogCall, InventoryCall, MockCatalog, MockInventory};
