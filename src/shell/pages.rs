//! Page composition: the widgets each route mounts.

use crate::clients::{CatalogApi, InventoryApi};
use crate::shell::Route;
use crate::views::{ProductFormController, ProductsListController, PurchaseController};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// The products page: the paged list plus a collapsible create form.
///
/// Both controllers share the page's gateway and cancellation token. The
/// page wires the form's outcome back into the list, the controllers
/// never talk to each other directly.
pub struct ProductsPage<C> {
    pub list: ProductsListController<C>,
    pub form: ProductFormController<C>,
    show_form: bool,
    cancel: CancellationToken,
}

impl<C: CatalogApi + Clone> ProductsPage<C> {
    pub fn new(catalog: C, cancel: CancellationToken) -> Self {
        Self {
            list: ProductsListController::new(catalog.clone(), cancel.clone()),
            form: ProductFormController::new(catalog, cancel.clone()),
            show_form: false,
            cancel,
        }
    }

    /// Overrides the list's starting page size.
    pub fn with_page_size(mut self, limit: u32) -> Self {
        self.list = self.list.with_limit(limit);
        self
    }

    /// Mounting the page fetches the first page of products.
    pub async fn open(&mut self) {
        self.list.load().await;
    }

    /// Shows or hides the create form.
    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    pub fn is_form_visible(&self) -> bool {
        self.show_form
    }

    /// Submits the create form. A created product closes the form and
    /// refreshes the list so the new row is visible; a rejected or
    /// failed submit leaves the form open for correction.
    pub async fn submit_form(&mut self) {
        self.form.submit().await;
        if let Some(product) = self.form.take_created() {
            info!(product_id = product.id, "Refreshing list after create");
            self.show_form = false;
            self.list.load().await;
        }
    }

    /// The form's cancel callback: hide it and drop the draft.
    pub fn cancel_form(&mut self) {
        self.show_form = false;
        self.form.reset();
    }

    /// Cancels whatever this page still has in flight.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}

/// The purchase page for a single product.
pub struct PurchasePage<I> {
    pub purchase: PurchaseController<I>,
    cancel: CancellationToken,
}

impl<I: InventoryApi> PurchasePage<I> {
    pub fn new(inventory: I, cancel: CancellationToken) -> Self {
        Self {
            purchase: PurchaseController::new(inventory, cancel.clone()),
            cancel,
        }
    }

    /// Mounting the page loads the routed product, or fails in place
    /// when the route carried no id.
    pub async fn open(&mut self, product_id: Option<i64>) {
        self.purchase.load(product_id).await;
    }

    /// Where the back button leads.
    pub fn back(&self) -> Route {
        Route::Products
    }

    /// Cancels whatever this page still has in flight.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{MockCatalog, MockInventory};
    use crate::model::{Product, ProductInventory};
    use crate::views::PurchaseState;

    fn seeded_catalog() -> MockCatalog {
        MockCatalog::with_products(vec![
            Product::new(1, "Mug", "MUG-1", 9.5),
            Product::new(2, "Poster", "POS-1", 4.0),
        ])
    }

    #[tokio::test]
    async fn opening_the_products_page_loads_the_list() {
        let mut page = ProductsPage::new(seeded_catalog(), CancellationToken::new());

        page.open().await;

        assert_eq!(page.list.items().len(), 2);
        assert!(!page.is_form_visible());
    }

    #[tokio::test]
    async fn created_product_closes_the_form_and_refreshes() {
        let catalog = seeded_catalog();
        let mut page = ProductsPage::new(catalog, CancellationToken::new());
        page.open().await;

        page.toggle_form();
        assert!(page.is_form_visible());

        let draft = page.form.draft_mut();
        draft.name = "Sticker Pack".to_string();
        draft.sku = "STK-1".to_string();
        draft.price = 3.0;
        page.submit_form().await;

        assert!(!page.is_form_visible());
        assert!(page.list.items().iter().any(|p| p.name == "Sticker Pack"));
    }

    #[tokio::test]
    async fn rejected_submit_keeps_the_form_open() {
        let mut page = ProductsPage::new(seeded_catalog(), CancellationToken::new());
        page.open().await;
        page.toggle_form();

        page.form.draft_mut().name = "ab".to_string();
        page.submit_form().await;

        assert!(page.is_form_visible());
        assert!(!page.form.errors().is_empty());
        // The list was fetched once, on open.
        assert_eq!(page.list.items().len(), 2);
    }

    #[tokio::test]
    async fn cancelling_the_form_drops_the_draft() {
        let mut page = ProductsPage::new(seeded_catalog(), CancellationToken::new());
        page.toggle_form();
        page.form.draft_mut().name = "Half-typed".to_string();

        page.cancel_form();

        assert!(!page.is_form_visible());
        assert!(page.form.draft().name.is_empty());
    }

    #[tokio::test]
    async fn purchase_page_mounts_from_the_route() {
        let inventory = MockInventory::with_records(vec![ProductInventory::new(
            7, "Keyboard", "SKU-007", 25.0, 5,
        )]);
        let mut page = PurchasePage::new(inventory, CancellationToken::new());

        let route = Route::parse("/purchase?id=7").unwrap();
        let Route::Purchase { product_id } = route else {
            panic!("expected a purchase route");
        };
        page.open(product_id).await;

        assert!(matches!(page.purchase.state(), PurchaseState::Loaded(_)));
        assert_eq!(page.back(), Route::Products);
    }
}
