//! The single-product purchase flow.

use crate::clients::InventoryApi;
use crate::model::ProductInventory;
use crate::views::Notice;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

pub const MSG_MISSING_ID: &str = "Product id is missing.";
pub const MSG_NOT_FOUND: &str = "Product not found.";
pub const MSG_LOAD_FAILED: &str = "Could not load product information.";
pub const MSG_NOT_AVAILABLE: &str = "Product not available.";
pub const MSG_INSUFFICIENT_STOCK: &str = "Not enough stock for this quantity.";
pub const MSG_SELECT_AT_LEAST_ONE: &str = "Select at least one unit.";
pub const MSG_PURCHASE_FAILED: &str = "Could not process the purchase.";

/// Where the purchase view stands.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseState {
    /// Nothing requested yet.
    Idle,
    /// The joined record is being fetched.
    Loading,
    /// Ready to sell.
    Loaded(ProductInventory),
    /// The record could not be loaded; the message is user-facing.
    Failed(String),
}

/// Drives the purchase page for one product.
///
/// Holds the joined product-plus-stock record and the quantity picked in
/// the stepper. Selection is clamped into `[1, available]` as it changes,
/// and [`Self::purchase`] re-checks the same bounds before any network
/// call, so an out-of-range request is rejected locally every time.
pub struct PurchaseController<I> {
    inventory: I,
    cancel: CancellationToken,
    state: PurchaseState,
    selected: u32,
    notice: Option<Notice>,
}

impl<I: InventoryApi> PurchaseController<I> {
    pub fn new(inventory: I, cancel: CancellationToken) -> Self {
        Self {
            inventory,
            cancel,
            state: PurchaseState::Idle,
            selected: 1,
            notice: None,
        }
    }

    /// Fetches the joined record for `product_id`.
    ///
    /// An absent id fails immediately; no request is attempted. On
    /// success the selection resets to one unit.
    #[instrument(skip(self))]
    pub async fn load(&mut self, product_id: Option<i64>) {
        let Some(product_id) = product_id else {
            warn!("Purchase page opened without a product id");
            self.state = PurchaseState::Failed(MSG_MISSING_ID.to_string());
            return;
        };

        self.state = PurchaseState::Loading;
        self.state = match self.inventory.get_inventory(product_id).await {
            Ok(record) => {
                info!(product_id, quantity = record.quantity, "Product loaded");
                self.selected = 1;
                PurchaseState::Loaded(record)
            }
            Err(error) if error.is_not_found() => {
                warn!(product_id, "Product not found");
                PurchaseState::Failed(MSG_NOT_FOUND.to_string())
            }
            Err(error) => {
                warn!(%error, product_id, "Failed to load product");
                PurchaseState::Failed(MSG_LOAD_FAILED.to_string())
            }
        };
    }

    /// Sets the selected quantity, clamped against available stock.
    ///
    /// The upper bound is checked first, so with zero stock a positive
    /// request clamps to 0 while a zero request clamps to 1. Both end up
    /// rejected by [`Self::purchase`], one per guard.
    pub fn set_quantity(&mut self, requested: u32) {
        let available = self.available_quantity();
        self.selected = requested;
        if self.selected > available {
            self.selected = available;
        } else if self.selected < 1 {
            self.selected = 1;
        }
    }

    /// Buys the selected quantity.
    ///
    /// The three local guards run in order: nothing loaded, more than
    /// available, less than one. Any hit raises a notice and returns
    /// before the gateway is touched. A confirmed purchase writes the
    /// decremented quantity as an absolute value, then applies the same
    /// decrement locally and resets the selection to one.
    #[instrument(skip(self))]
    pub async fn purchase(&mut self) {
        let (product_id, available) = match &self.state {
            PurchaseState::Loaded(record) => (record.product_id, record.quantity),
            _ => {
                self.notice = Some(Notice::Error(MSG_NOT_AVAILABLE.to_string()));
                return;
            }
        };
        if self.selected > available {
            self.notice = Some(Notice::Warning(MSG_INSUFFICIENT_STOCK.to_string()));
            return;
        }
        if self.selected < 1 {
            self.notice = Some(Notice::Warning(MSG_SELECT_AT_LEAST_ONE.to_string()));
            return;
        }

        let purchased = self.selected;
        let remaining = available - purchased;
        match self.inventory.set_quantity(product_id, remaining).await {
            Ok(()) => {
                info!(product_id, purchased, remaining, "Purchase applied");
                if let PurchaseState::Loaded(record) = &mut self.state {
                    record.quantity = remaining;
                }
                self.selected = 1;
                self.notice = Some(Notice::Success(format!(
                    "Purchased {purchased} unit(s). Remaining stock: {remaining}."
                )));
            }
            Err(error) => {
                warn!(%error, product_id, "Failed to process purchase");
                self.notice = Some(Notice::Error(MSG_PURCHASE_FAILED.to_string()));
            }
        }
    }

    /// Cancels any request still in flight for this view.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    pub fn state(&self) -> &PurchaseState {
        &self.state
    }

    /// The loaded record, if the view is ready to sell.
    pub fn product(&self) -> Option<&ProductInventory> {
        match &self.state {
            PurchaseState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// The load failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            PurchaseState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == PurchaseState::Loading
    }

    pub fn selected_quantity(&self) -> u32 {
        self.selected
    }

    /// Units in stock, zero unless loaded.
    pub fn available_quantity(&self) -> u32 {
        match &self.state {
            PurchaseState::Loaded(record) => record.quantity,
            _ => 0,
        }
    }

    pub fn has_stock(&self) -> bool {
        self.available_quantity() > 0
    }

    /// True when the current selection would pass the purchase guards.
    pub fn is_quantity_valid(&self) -> bool {
        self.selected >= 1 && self.selected <= self.available_quantity()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ApiError, InventoryCall, MockInventory};

    fn keyboard(quantity: u32) -> ProductInventory {
        ProductInventory::new(7, "Keyboard", "SKU-007", 25.0, quantity)
    }

    fn controller(inventory: MockInventory) -> PurchaseController<MockInventory> {
        PurchaseController::new(inventory, CancellationToken::new())
    }

    #[tokio::test]
    async fn missing_id_fails_without_any_request() {
        let inventory = MockInventory::new();
        let mut purchase = controller(inventory.clone());

        purchase.load(None).await;

        assert_eq!(purchase.error(), Some(MSG_MISSING_ID));
        assert!(inventory.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_reports_not_found() {
        let inventory = MockInventory::new();
        let mut purchase = controller(inventory.clone());

        purchase.load(Some(9)).await;

        assert_eq!(purchase.error(), Some(MSG_NOT_FOUND));
        assert_eq!(inventory.calls(), vec![InventoryCall::Get(9)]);
    }

    #[tokio::test]
    async fn transport_failure_reports_load_error() {
        let inventory = MockInventory::with_records(vec![keyboard(5)]);
        inventory.fail_next(ApiError::Internal("boom".to_string()));
        let mut purchase = controller(inventory);

        purchase.load(Some(7)).await;

        assert_eq!(purchase.error(), Some(MSG_LOAD_FAILED));
    }

    #[tokio::test]
    async fn load_resets_the_selection() {
        let inventory = MockInventory::with_records(vec![keyboard(5)]);
        let mut purchase = controller(inventory);

        purchase.load(Some(7)).await;
        purchase.set_quantity(4);
        assert_eq!(purchase.selected_quantity(), 4);

        purchase.load(Some(7)).await;

        assert_eq!(purchase.selected_quantity(), 1);
        assert_eq!(purchase.available_quantity(), 5);
        assert!(purchase.has_stock());
    }

    #[tokio::test]
    async fn selection_clamps_into_the_valid_range() {
        let inventory = MockInventory::with_records(vec![keyboard(12)]);
        let mut purchase = controller(inventory);
        purchase.load(Some(7)).await;

        purchase.set_quantity(20);
        assert_eq!(purchase.selected_quantity(), 12);

        purchase.set_quantity(0);
        assert_eq!(purchase.selected_quantity(), 1);

        purchase.set_quantity(7);
        assert_eq!(purchase.selected_quantity(), 7);
        assert!(purchase.is_quantity_valid());
    }

    #[tokio::test]
    async fn zero_stock_keeps_the_historical_clamp_order() {
        let inventory = MockInventory::with_records(vec![keyboard(0)]);
        let mut purchase = controller(inventory.clone());
        purchase.load(Some(7)).await;

        // Upper bound first: a positive request lands on 0.
        purchase.set_quantity(5);
        assert_eq!(purchase.selected_quantity(), 0);
        assert!(!purchase.is_quantity_valid());

        purchase.purchase().await;
        assert_eq!(
            purchase.take_notice(),
            Some(Notice::Warning(MSG_SELECT_AT_LEAST_ONE.to_string()))
        );

        // A zero request skips the upper bound and lands on 1.
        purchase.set_quantity(0);
        assert_eq!(purchase.selected_quantity(), 1);

        purchase.purchase().await;
        assert_eq!(
            purchase.take_notice(),
            Some(Notice::Warning(MSG_INSUFFICIENT_STOCK.to_string()))
        );

        // Neither rejection reached the gateway.
        assert_eq!(inventory.calls(), vec![InventoryCall::Get(7)]);
    }

    #[tokio::test]
    async fn purchase_without_a_loaded_product_is_rejected() {
        let inventory = MockInventory::new();
        let mut purchase = controller(inventory.clone());

        purchase.purchase().await;

        assert_eq!(
            purchase.take_notice(),
            Some(Notice::Error(MSG_NOT_AVAILABLE.to_string()))
        );
        assert!(inventory.calls().is_empty());
    }

    #[tokio::test]
    async fn successful_purchase_decrements_and_resets() {
        let inventory = MockInventory::with_records(vec![keyboard(5)]);
        let mut purchase = controller(inventory.clone());
        purchase.load(Some(7)).await;

        purchase.set_quantity(3);
        purchase.purchase().await;

        assert_eq!(purchase.available_quantity(), 2);
        assert_eq!(purchase.selected_quantity(), 1);
        assert_eq!(inventory.quantity_of(7), Some(2));
        assert!(inventory.calls().contains(&InventoryCall::SetQuantity {
            product_id: 7,
            quantity: 2
        }));

        let notice = purchase.take_notice().unwrap();
        assert_eq!(notice, Notice::Success("Purchased 3 unit(s). Remaining stock: 2.".to_string()));
    }

    #[tokio::test]
    async fn failed_purchase_leaves_state_untouched() {
        let inventory = MockInventory::with_records(vec![keyboard(5)]);
        let mut purchase = controller(inventory.clone());
        purchase.load(Some(7)).await;

        purchase.set_quantity(2);
        inventory.fail_next(ApiError::Internal("boom".to_string()));
        purchase.purchase().await;

        assert_eq!(
            purchase.take_notice(),
            Some(Notice::Error(MSG_PURCHASE_FAILED.to_string()))
        );
        assert_eq!(purchase.available_quantity(), 5);
        assert_eq!(purchase.selected_quantity(), 2);
        assert_eq!(inventory.quantity_of(7), Some(5));
    }
}
