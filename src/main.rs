//! # Storefront Demo
//!
//! A scripted browse-and-buy session against a live backend.
//!
//! ## 🚀 What It Shows
//!
//! 1. Opening the products page ([`Storefront::products_page`]) and
//!    listing the first page.
//! 2. Creating a product through the page's form.
//! 3. Buying two units of the first listed product on the purchase page.
//! 4. Reading the stock overview straight from the inventory gateway.
//!
//! Point [`StoreConfig`] at a backend first:
//!
//! ```bash
//! STOREFRONT_API_URL=http://localhost:8080 RUST_LOG=info cargo run
//! ```

use storefront::clients::InventoryApi;
use storefront::config::StoreConfig;
use storefront::lifecycle::{setup_tracing, Storefront};
use storefront::shell::Route;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront");

    let config = StoreConfig::from_env();
    let api_url = config.api_url.clone();
    let store = Storefront::new(config);

    // Browse the first page of products
    let span = tracing::info_span!("products_page");
    let mut page = async {
        info!("Opening the products page");
        let mut page = store.products_page();
        page.open().await;
        page
    }
    .instrument(span)
    .await;

    if let Some(message) = page.list.error() {
        error!(%message, %api_url, "Is the backend running?");
        return Ok(());
    }
    for product in page.list.items() {
        info!(
            id = product.id,
            sku = %product.sku,
            name = %product.name,
            price = product.price,
            "Listed product"
        );
    }

    // Create a product through the page's form
    let span = tracing::info_span!("create_product");
    async {
        page.toggle_form();
        let draft = page.form.draft_mut();
        draft.name = "Travel Mug".to_string();
        draft.sku = "MUG-TRAVEL".to_string();
        draft.price = 14.5;
        page.submit_form().await;

        match page.form.take_notice() {
            Some(notice) => info!(message = %notice.message(), "Form submitted"),
            None => warn!("Form produced no outcome"),
        }
    }
    .instrument(span)
    .await;

    // Buy two units of the first listed product
    let first_id = page.list.items().first().map(|p| p.id);
    let span = tracing::info_span!("purchase_flow");
    async {
        let route = Route::Purchase {
            product_id: first_id,
        };
        info!(path = %route.path(), "Navigating");

        let mut purchase_page = store.purchase_page();
        purchase_page.open(first_id).await;

        if let Some(message) = purchase_page.purchase.error() {
            warn!(%message, "Purchase page failed to load");
            return;
        }

        purchase_page.purchase.set_quantity(2);
        purchase_page.purchase.purchase().await;

        if let Some(notice) = purchase_page.purchase.take_notice() {
            info!(message = %notice.message(), "Purchase outcome");
        }
    }
    .instrument(span)
    .await;

    // Stock overview straight from the gateway
    let records = store
        .inventory
        .list_inventories()
        .await
        .map_err(|e| e.to_string())?;
    for record in records {
        info!(
            id = record.product_id,
            name = %record.name,
            quantity = record.quantity,
            "Stock level"
        );
    }

    store.shutdown();

    info!("Storefront session completed");
    Ok(())
}
