use crate::clients::http::HttpClient;
use crate::clients::ApiResult;
use crate::config::StoreConfig;
use crate::model::{ProductInventory, QuantityUpdate};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Operations exposed by the inventory service.
///
/// Reads return the joined product-plus-stock record, so a purchase view
/// needs exactly one round trip to render.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Fetch the joined product and stock record for one product.
    async fn get_inventory(&self, product_id: i64) -> ApiResult<ProductInventory>;

    /// Fetch the joined records for every product with stock tracking.
    async fn list_inventories(&self) -> ApiResult<Vec<ProductInventory>>;

    /// Overwrite the stored quantity with an absolute value.
    async fn set_quantity(&self, product_id: i64, quantity: u32) -> ApiResult<()>;

    /// Record a purchase of `quantity` units, letting the service apply
    /// the decrement. Returns the updated record.
    async fn purchase(&self, product_id: i64, quantity: u32) -> ApiResult<ProductInventory>;
}

/// Client for the inventory service.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    inner: HttpClient,
}

impl InventoryClient {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            inner: HttpClient::new(config),
        }
    }

    /// Tie every future request to the given cancellation token.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.inner = self.inner.with_cancellation(cancel);
        self
    }
}

#[async_trait]
impl InventoryApi for InventoryClient {
    #[instrument(skip(self))]
    async fn get_inventory(&self, product_id: i64) -> ApiResult<ProductInventory> {
        debug!("Sending request");
        self.inner.get(&format!("/inventories/{product_id}")).await
    }

    #[instrument(skip(self))]
    async fn list_inventories(&self) -> ApiResult<Vec<ProductInventory>> {
        debug!("Sending request");
        self.inner.get("/inventories").await
    }

    #[instrument(skip(self))]
    async fn set_quantity(&self, product_id: i64, quantity: u32) -> ApiResult<()> {
        debug!("Sending request");
        self.inner
            .put_no_content(
                &format!("/inventories/{product_id}"),
                &QuantityUpdate { quantity },
            )
            .await
    }

    #[instrument(skip(self))]
    async fn purchase(&self, product_id: i64, quantity: u32) -> ApiResult<ProductInventory> {
        debug!("Sending request");
        self.inner
            .post_with_query(
                &format!("/inventories/{product_id}/purchase"),
                &[("quantity", quantity)],
            )
            .await
    }
}
