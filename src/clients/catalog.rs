use crate::clients::http::HttpClient;
use crate::clients::ApiResult;
use crate::config::StoreConfig;
use crate::model::{PageRequest, Product, ProductDraft};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Operations exposed by the product catalog service.
///
/// View controllers depend on this trait rather than on the HTTP client
/// so tests can swap in [`crate::clients::MockCatalog`].
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch one page of products.
    async fn list_products(&self, page: PageRequest) -> ApiResult<Vec<Product>>;

    /// Fetch a single product by id.
    async fn get_product(&self, id: i64) -> ApiResult<Product>;

    /// Create a product and return it with its server-assigned id.
    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product>;

    /// Replace a product with the given full record.
    async fn update_product(&self, id: i64, product: &Product) -> ApiResult<Product>;

    /// Delete a product by id.
    async fn delete_product(&self, id: i64) -> ApiResult<()>;
}

/// Client for the product catalog service.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    inner: HttpClient,
}

impl CatalogClient {
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
impl CatalogApi for CatalogClient {
    /// The service counts pages from zero, the views count from one.
    /// [`PageRequest::offset_page`] bridges the two here so the rest of
    /// the crate only ever sees one-based pages.
    #[instrument(skip(self))]
    async fn list_products(&self, page: PageRequest) -> ApiResult<Vec<Product>> {
        debug!("Sending request");
        self.inner
            .get_with_query(
                "/products",
                &[("page", page.offset_page()), ("limit", page.limit)],
            )
            .await
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: i64) -> ApiResult<Product> {
        debug!("Sending request");
        self.inner.get(&format!("/products/{id}")).await
    }

    #[instrument(skip(self, draft))]
    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<Product> {
        debug!(name = %draft.name, "Sending request");
        self.inner.post("/products", draft).await
    }

    #[instrument(skip(self, product))]
    async fn update_product(&self, id: i64, product: &Product) -> ApiResult<Product> {
        debug!("Sending request");
        self.inner.put(&format!("/products/{id}"), product).await
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: i64) -> ApiResult<()> {
        debug!("Sending request");
        self.inner.delete(&format!("/products/{id}")).await
    }
}
