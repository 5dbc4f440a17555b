//! The product creation form.

use crate::clients::CatalogApi;
use crate::model::{Product, ProductDraft};
use crate::views::Notice;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use validator::{Validate, ValidationErrors};

pub const MSG_CREATE_FAILED: &str = "Could not create the product.";

/// A single field-level validation problem, for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Drives the create-product form.
///
/// The draft is validated locally before anything is sent; an invalid
/// draft never produces a request. A created product is parked in the
/// controller until the owning page consumes it via
/// [`Self::take_created`].
pub struct ProductFormController<C> {
    catalog: C,
    cancel: CancellationToken,
    draft: ProductDraft,
    errors: Vec<FieldError>,
    submitting: bool,
    notice: Option<Notice>,
    created: Option<Product>,
}

impl<C: CatalogApi> ProductFormController<C> {
    pub fn new(catalog: C, cancel: CancellationToken) -> Self {
        Self {
            catalog,
            cancel,
            draft: ProductDraft::default(),
            errors: Vec::new(),
            submitting: false,
            notice: None,
            created: None,
        }
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Mutable access to the draft for the form bindings.
    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    /// Runs the draft policy and refreshes the field errors.
    pub fn validate(&mut self) -> bool {
        match self.draft.validate() {
            Ok(()) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = collect_field_errors(&errors);
                false
            }
        }
    }

    /// Submits the draft.
    ///
    /// Local rejection is silent on the notice channel; the per-field
    /// errors carry the details. On success the draft resets for the
    /// next entry and the created product is parked for the page.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) {
        if !self.validate() {
            debug!(problems = self.errors.len(), "Draft rejected locally");
            return;
        }

        self.submitting = true;
        let result = self.catalog.create_product(&self.draft).await;
        self.submitting = false;

        match result {
            Ok(product) => {
                info!(product_id = product.id, "Product created");
                self.notice = Some(Notice::Success(format!(
                    "Product \"{}\" created.",
                    product.name
                )));
                self.created = Some(product);
                self.draft = ProductDraft::default();
                self.errors.clear();
            }
            Err(error) => {
                warn!(%error, "Failed to create product");
                self.notice = Some(Notice::Error(MSG_CREATE_FAILED.to_string()));
            }
        }
    }

    /// The product created by the last successful submit, if the page
    /// has not consumed it yet.
    pub fn take_created(&mut self) -> Option<Product> {
        self.created.take()
    }

    /// Clears the draft and its errors.
    pub fn reset(&mut self) {
        self.draft = ProductDraft::default();
        self.errors.clear();
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The first message recorded against `field`, if any.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Peeks at the pending notice.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Consumes the pending notice for display.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Cancels any request still in flight for this view.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}

/// Flattens [`ValidationErrors`] into displayable field entries, sorted
/// by field for stable rendering.
fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
            out.push(FieldError {
                field: field.to_string(),
                message,
            });
        }
    }
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ApiError, CatalogCall, MockCatalog};

    fn controller(catalog: MockCatalog) -> ProductFormController<MockCatalog> {
        ProductFormController::new(catalog, CancellationToken::new())
    }

    fn fill_valid(form: &mut ProductFormController<MockCatalog>) {
        let draft = form.draft_mut();
        draft.name = "Mechanical Keyboard".to_string();
        draft.sku = "KB-001".to_string();
        draft.price = 59.9;
    }

    #[tokio::test]
    async fn invalid_draft_makes_no_request() {
        let catalog = MockCatalog::new();
        let mut form = controller(catalog.clone());

        form.draft_mut().name = "ab".to_string();
        form.submit().await;

        assert!(!form.errors().is_empty());
        assert!(form.field_error("name").is_some());
        assert!(form.field_error("sku").is_some());
        assert!(form.field_error("price").is_some());
        assert!(catalog.calls().is_empty());
        assert!(form.take_created().is_none());
    }

    #[tokio::test]
    async fn valid_draft_is_created_and_parked() {
        let catalog = MockCatalog::new();
        let mut form = controller(catalog.clone());

        fill_valid(&mut form);
        form.submit().await;

        let created = form.take_created().unwrap();
        assert_eq!(created.name, "Mechanical Keyboard");
        assert!(created.id > 0);
        assert_eq!(
            catalog.calls(),
            vec![CatalogCall::Create {
                name: "Mechanical Keyboard".to_string()
            }]
        );

        // Draft resets for the next entry.
        assert!(form.draft().name.is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(
            form.take_notice(),
            Some(Notice::Success(
                "Product \"Mechanical Keyboard\" created.".to_string()
            ))
        );

        // Parked product is consumed exactly once.
        assert!(form.take_created().is_none());
    }

    #[tokio::test]
    async fn failed_create_keeps_the_draft() {
        let catalog = MockCatalog::new();
        let mut form = controller(catalog.clone());

        fill_valid(&mut form);
        catalog.fail_next(ApiError::Internal("boom".to_string()));
        form.submit().await;

        assert_eq!(form.draft().name, "Mechanical Keyboard");
        assert!(form.take_created().is_none());
        assert_eq!(
            form.take_notice(),
            Some(Notice::Error(MSG_CREATE_FAILED.to_string()))
        );
    }

    #[tokio::test]
    async fn validate_reports_each_broken_rule() {
        let mut form = controller(MockCatalog::new());

        assert!(!form.validate());
        let fields: Vec<&str> = form.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "price", "sku"]);

        fill_valid(&mut form);
        assert!(form.validate());
        assert!(form.errors().is_empty());
    }
}
