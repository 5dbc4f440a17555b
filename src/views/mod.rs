//! View controllers: the state behind each storefront screen.
//!
//! Each controller exclusively owns its screen's state and exposes it
//! through getters; the shell calls the async operations and re-renders
//! from whatever state they leave behind. Gateway failures never leave a
//! controller, they surface as an inline error or a [`Notice`].

pub mod notice;
pub mod product_form;
pub mod products_list;
pub mod purchase;

pub use notice::Notice;
pub use product_form::{FieldError, ProductFormController};
pub use products_list::ProductsListController;
pub use purchase::{PurchaseController, PurchaseState};
