//! Routing and page composition.

pub mod pages;
pub mod routes;

pub use pages::{ProductsPage, PurchasePage};
pub use routes::Route;
