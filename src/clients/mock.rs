//! # Mock Gateways
//!
//! Utilities for testing view controllers in isolation.
//!
//! [`MockCatalog`] and [`MockInventory`] implement the gateway traits over
//! an in-memory store, record every call they receive, and can be scripted
//! to fail. Handles are cheap clones sharing one store, so a test can keep
//! one handle for assertions while the controller owns another.
//!
//! # Example
//! ```ignore
//! let catalog = MockCatalog::with_products(seed_products(13));
//! let mut list = ProductsListController::new(catalog.clone(), CancellationToken::new());
//! list.load().await;
//! assert_eq!(catalog.calls(), vec![CatalogCall::List(PageRequest::first(10))]);
//! ```

use crate::clients::{ApiError, ApiResult, CatalogApi, InventoryApi};
use crate::model::{PageRequest, Product, ProductDraft, ProductInventory};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// MOCK CATALOG
// =============================================================================

/// A call observed by [`MockCatalog`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCall {
    List(PageRequest),
    Get(i64),
    Create { name: String },
    Update(i64),
    Delete(i64),
}

struct CatalogState {
    products: Vec<Product>,
    next_id: i64,
    failures: VecDeque<ApiError>,
    calls: Vec<CatalogCall>,
}

/// In-memory stand-in for the product catalog service.
#[derive(Clone)]
pub struct MockCatalog {
    state: Arc<Mutex<CatalogState>>,
}

impl MockCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Creates a catalog seeded with the given products.
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            state: Arc::new(Mutex::new(CatalogState {
                products,
                next_id,
                failures: VecDeque::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Scripts the next call to fail with `error` instead of touching the
    /// store. Queued failures are consumed in order, one per call.
    pub fn fail_next(&self, error: ApiError) {
        self.state.lock().unwrap().failures.push_back(error);
    }

    /// Every call observed so far.
    pub fn calls(&self) -> Vec<CatalogCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Snapshot of the stored products.
    pub fn products(&self) -> Vec<Product> {
        self.state.lock().unwrap().products.clone()
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogApi for MockCatalog {
    async fn list_products(&self, page: PageRequest) -> ApiResult<Vec<Product>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(CatalogCall::List(page));
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        let offset = (page.offset_page() * page.limit) as usize;
        Ok(state
            .products
            .iter()
            .skip(offset)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn get_product(&self, id: i64) -> ApiResult<Product> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(CatalogCall::Get(id));
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        state
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("product {id}")))
    }

    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(CatalogCall::Create {
            name: draft.name.clone(),
        });
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        let id = state.next_id;
        state.next_id += 1;
        let product = Product::new(id, &draft.name, &draft.sku, draft.price)
            .with_description(&draft.description);
        state.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: i64, product: &Product) -> ApiResult<Product> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(CatalogCall::Update(id));
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        let slot = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("product {id}")))?;
        *slot = product.clone();
        slot.id = id;
        Ok(slot.clone())
    }

    async fn delete_product(&self, id: i64) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(CatalogCall::Delete(id));
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(ApiError::NotFound(format!("product {id}")));
        }
        Ok(())
    }
}

// =============================================================================
// MOCK INVENTORY
// =============================================================================

/// A call observed by [`MockInventory`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCall {
    Get(i64),
    List,
    SetQuantity { product_id: i64, quantity: u32 },
    Purchase { product_id: i64, quantity: u32 },
}

struct InventoryState {
    records: Vec<ProductInventory>,
    failures: VecDeque<ApiError>,
    calls: Vec<InventoryCall>,
}

/// In-memory stand-in for the inventory service.
#[derive(Clone)]
pub struct MockInventory {
    state: Arc<Mutex<InventoryState>>,
}

impl MockInventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates an inventory seeded with the given joined records.
    pub fn with_records(records: Vec<ProductInventory>) -> Self {
        Self {
            state: Arc::new(Mutex::new(InventoryState {
                records,
                failures: VecDeque::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Scripts the next call to fail with `error`.
    pub fn fail_next(&self, error: ApiError) {
        self.state.lock().unwrap().failures.push_back(error);
    }

    /// Every call observed so far.
    pub fn calls(&self) -> Vec<InventoryCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// The stored quantity for a product, if tracked.
    pub fn quantity_of(&self, product_id: i64) -> Option<u32> {
        self.state
            .lock()
            .unwrap()
            .records
            .iter()
            .find(|r| r.product_id == product_id)
            .map(|r| r.quantity)
    }
}

impl Default for MockInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InventoryApi for MockInventory {
    async fn get_inventory(&self, product_id: i64) -> ApiResult<ProductInventory> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(InventoryCall::Get(product_id));
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        state
            .records
            .iter()
            .find(|r| r.product_id == product_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("inventory {product_id}")))
    }

    async fn list_inventories(&self) -> ApiResult<Vec<ProductInventory>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(InventoryCall::List);
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        Ok(state.records.clone())
    }

    async fn set_quantity(&self, product_id: i64, quantity: u32) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(InventoryCall::SetQuantity {
            product_id,
            quantity,
        });
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        let record = state
            .records
            .iter_mut()
            .find(|r| r.product_id == product_id)
            .ok_or_else(|| ApiError::NotFound(format!("inventory {product_id}")))?;
        record.quantity = quantity;
        Ok(())
    }

    async fn purchase(&self, product_id: i64, quantity: u32) -> ApiResult<ProductInventory> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(InventoryCall::Purchase {
            product_id,
            quantity,
        });
        if let Some(error) = state.failures.pop_front() {
            return Err(error);
        }
        let record = state
            .records
            .iter_mut()
            .find(|r| r.product_id == product_id)
            .ok_or_else(|| ApiError::NotFound(format!("inventory {product_id}")))?;
        if quantity > record.quantity {
            return Err(ApiError::Internal(format!(
                "insufficient stock for product {product_id}"
            )));
        }
        record.quantity -= quantity;
        Ok(record.clone())
    }
}
