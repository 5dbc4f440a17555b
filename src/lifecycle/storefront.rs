use crate::clients::{CatalogClient, InventoryClient};
use crate::config::StoreConfig;
use crate::shell::{ProductsPage, PurchasePage, Route};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// The page a route resolved to, already mounted.
pub enum ActivePage {
    Products(ProductsPage<CatalogClient>),
    Purchase(PurchasePage<InventoryClient>),
}

/// The composition root of the storefront.
///
/// `Storefront` is responsible for:
/// - **Gateway Wiring**: Building the catalog and inventory clients from
///   one [`StoreConfig`].
/// - **Page Construction**: Handing each page its own cancellation scope
///   so closing a page aborts only that page's requests.
/// - **Teardown**: [`Self::shutdown`] cancels every scope at once.
///
/// # Example
///
/// ```ignore
/// let store = Storefront::new(StoreConfig::from_env());
///
/// let mut page = store.products_page();
/// page.open().await;
/// for product in page.list.items() {
///     println!("{} - {}", product.sku, product.name);
/// }
///
/// store.shutdown();
/// ```
pub struct Storefront {
    /// Client for the product catalog service.
    pub catalog: CatalogClient,

    /// Client for the inventory service.
    pub inventory: InventoryClient,

    config: StoreConfig,

    /// Root of every page's cancellation scope.
    cancel: CancellationToken,
}

impl Storefront {
    /// Builds the gateway clients and gets ready to serve pages.
    pub fn new(config: StoreConfig) -> Self {
        let catalog = CatalogClient::new(&config);
        let inventory = InventoryClient::new(&config);
        info!(api_url = %config.api_url, "Storefront ready");

        Self {
            catalog,
            inventory,
            config,
            cancel: CancellationToken::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Navigates: builds the page for `route` and mounts it, which
    /// triggers the page's initial fetch.
    pub async fn open(&self, route: Route) -> ActivePage {
        match route {
            Route::Products => {
                let mut page = self.products_page();
                page.open().await;
                ActivePage::Products(page)
            }
            Route::Purchase { product_id } => {
                let mut page = self.purchase_page();
                page.open(product_id).await;
                ActivePage::Purchase(page)
            }
        }
    }

    /// A fresh products page bound to its own cancellation scope.
    pub fn products_page(&self) -> ProductsPage<CatalogClient> {
        let cancel = self.cancel.child_token();
        let catalog = self.catalog.clone().with_cancellation(cancel.clone());
        ProductsPage::new(catalog, cancel).with_page_size(self.config.page_size)
    }

    /// A fresh purchase page bound to its own cancellation scope.
    pub fn purchase_page(&self) -> PurchasePage<InventoryClient> {
        let cancel = self.cancel.child_token();
        let inventory = self.inventory.clone().with_cancellation(cancel.clone());
        PurchasePage::new(inventory, cancel)
    }

    /// Cancels every page spawned from this storefront. In-flight
    /// requests resolve as cancelled and are absorbed by their
    /// controllers like any other failure.
    pub fn shutdown(&self) {
        info!("Shutting down storefront");
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::products_list::MSG_LOAD_FAILED;

    // Port 9 is the discard service; nothing listens there, so requests
    // fail fast with a connection error.
    fn unreachable_store() -> Storefront {
        Storefront::new(StoreConfig::new("http://127.0.0.1:9").with_timeout(1))
    }

    #[tokio::test]
    async fn route_dispatch_mounts_the_matching_page() {
        let store = unreachable_store();

        match store.open(Route::Products).await {
            ActivePage::Products(page) => {
                // The backend is unreachable; the failure stays inside
                // the controller as an inline error.
                assert_eq!(page.list.error(), Some(MSG_LOAD_FAILED));
            }
            ActivePage::Purchase(_) => panic!("expected the products page"),
        }

        match store.open(Route::Purchase { product_id: Some(7) }).await {
            ActivePage::Purchase(page) => assert!(page.purchase.error().is_some()),
            ActivePage::Products(_) => panic!("expected the purchase page"),
        }
    }

    #[tokio::test]
    async fn shutdown_cancels_pages_before_they_fetch() {
        let store = unreachable_store();
        store.shutdown();

        let mut page = store.products_page();
        page.open().await;

        assert_eq!(page.list.error(), Some(MSG_LOAD_FAILED));
    }
}
