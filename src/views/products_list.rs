//! The paged product list and its edit and delete flows.

use crate::clients::CatalogApi;
use crate::model::{PageRequest, Product, DEFAULT_LIMIT};
use crate::views::Notice;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

pub const MSG_LOAD_FAILED: &str = "Could not load products.";
pub const MSG_NO_PRODUCTS: &str = "No products found.";
pub const MSG_END_OF_LIST: &str = "No more products.";
pub const MSG_NO_MORE_PAGES: &str = "No more pages.";
pub const MSG_SAVE_FAILED: &str = "Could not save changes.";
pub const MSG_DELETE_FAILED: &str = "Could not delete the product.";

/// Drives the paged product table.
///
/// The controller owns the visible page outright: items, paging cursor,
/// the staged in-place edit and the pending delete all live here, and the
/// shell reads them through getters. Every gateway failure is absorbed
/// into [`Self::error`] or a [`Notice`]; nothing propagates.
///
/// There is no total count to lean on, so a full page is read as "there
/// is probably a next page". See [`Self::load`] for how the false
/// positive on an exact multiple resolves itself.
pub struct ProductsListController<C> {
    catalog: C,
    cancel: CancellationToken,
    items: Vec<Product>,
    page: u32,
    limit: u32,
    has_next: bool,
    loading: bool,
    error: Option<String>,
    notice: Option<Notice>,
    staged: Option<Product>,
    pending_delete: Option<i64>,
}

impl<C: CatalogApi> ProductsListController<C> {
    /// Creates the controller on the first page at [`DEFAULT_LIMIT`].
    /// Nothing is fetched until [`Self::load`] runs.
    pub fn new(catalog: C, cancel: CancellationToken) -> Self {
        Self {
            catalog,
            cancel,
            items: Vec::new(),
            page: 1,
            limit: DEFAULT_LIMIT,
            has_next: false,
            loading: false,
            error: None,
            notice: None,
            staged: None,
            pending_delete: None,
        }
    }

    /// Overrides the starting page size (the configured default).
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Fetches the current page.
    ///
    /// An empty result past page 1 means the full-page heuristic promised
    /// a page that does not exist: step the cursor back without another
    /// fetch, the previous page is still on screen.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;
        let request = PageRequest::new(self.page, self.limit);
        let result = self.catalog.list_products(request).await;
        self.loading = false;

        match result {
            Ok(products) if products.is_empty() && self.page > 1 => {
                self.page -= 1;
                self.has_next = false;
                self.notice = Some(Notice::Warning(MSG_END_OF_LIST.to_string()));
                debug!(page = self.page, "Stepped back from an empty page");
            }
            Ok(products) if products.is_empty() => {
                self.items.clear();
                self.has_next = false;
                self.notice = Some(Notice::Warning(MSG_NO_PRODUCTS.to_string()));
            }
            Ok(products) => {
                // A full page is taken to mean more data exists. The last
                // page of exactly `limit` items costs one extra hop that
                // lands on the step-back branch above.
                self.has_next = products.len() as u32 == self.limit;
                self.items = products;
                info!(
                    page = self.page,
                    count = self.items.len(),
                    "Products loaded"
                );
            }
            Err(error) => {
                warn!(%error, page = self.page, "Failed to load products");
                self.error = Some(MSG_LOAD_FAILED.to_string());
            }
        }
    }

    /// Switches the page size and reloads from the first page.
    pub async fn change_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.page = 1;
        self.load().await;
    }

    /// Advances one page, or reports that there is none.
    pub async fn next_page(&mut self) {
        if !self.has_next {
            self.notice = Some(Notice::Warning(MSG_NO_MORE_PAGES.to_string()));
            return;
        }
        self.page += 1;
        self.load().await;
    }

    /// Steps back one page. A no-op on the first page.
    pub async fn prev_page(&mut self) {
        if self.page <= 1 {
            return;
        }
        self.page -= 1;
        self.load().await;
    }

    /// Stages a copy of the listed product for in-place editing. Returns
    /// false when the id is not on the current page.
    pub fn start_edit(&mut self, id: i64) -> bool {
        match self.items.iter().find(|p| p.id == id) {
            Some(product) => {
                self.staged = Some(product.clone());
                true
            }
            None => false,
        }
    }

    /// The staged edit, if any. The visible row stays untouched until
    /// [`Self::save_edit`] succeeds.
    pub fn staged(&self) -> Option<&Product> {
        self.staged.as_ref()
    }

    /// Mutable access to the staged edit for the form bindings.
    pub fn staged_mut(&mut self) -> Option<&mut Product> {
        self.staged.as_mut()
    }

    /// Id of the row being edited, if any.
    pub fn editing_id(&self) -> Option<i64> {
        self.staged.as_ref().map(|p| p.id)
    }

    /// Discards the staged edit.
    pub fn cancel_edit(&mut self) {
        self.staged = None;
    }

    /// Sends the staged edit as a full-record update.
    ///
    /// On success the staging is cleared and the page reloads; on failure
    /// the staged values stay put so the user can retry or cancel.
    #[instrument(skip(self))]
    pub async fn save_edit(&mut self) {
        let Some(staged) = self.staged.clone() else {
            return;
        };
        match self.catalog.update_product(staged.id, &staged).await {
            Ok(_) => {
                debug!(product_id = staged.id, "Edit saved");
                self.staged = None;
                self.load().await;
            }
            Err(error) => {
                warn!(%error, product_id = staged.id, "Failed to save edit");
                self.notice = Some(Notice::Error(MSG_SAVE_FAILED.to_string()));
            }
        }
    }

    /// Marks a product for deletion, pending [`Self::confirm_delete`].
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    /// The id awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Drops the pending delete without touching the gateway.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the pending product.
    ///
    /// Deleting the only item of a later page would leave an empty page,
    /// so the cursor retreats before the reload.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        match self.catalog.delete_product(id).await {
            Ok(()) => {
                info!(product_id = id, "Product deleted");
                if self.items.len() == 1 && self.page > 1 {
                    self.page -= 1;
                }
                self.load().await;
            }
            Err(error) => {
                warn!(%error, product_id = id, "Failed to delete product");
                self.notice = Some(Notice::Error(MSG_DELETE_FAILED.to_string()));
            }
        }
    }

    /// Cancels any request still in flight for this view.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The inline load error, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Peeks at the pending notice.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Consumes the pending notice for display.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
