#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Storefront
//!
//! > **A headless storefront client for a product catalog and its inventory.**
//!
//! This crate drives the two screens of a small shop - a paged product
//! list with inline editing and a create form, and a purchase page for a
//! single product - against two REST services. The screens themselves are
//! view controllers: plain structs that own their state, talk to the
//! services, and absorb every failure into user-facing messages.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Exclusive State, Explicit Reads
//!
//! Each controller exclusively owns the state of its screen and mutates
//! it through `&mut self` operations. There is no shared mutable state
//! and no concurrency coordination: one user drives one screen, and no
//! two requests from the same controller can ever overlap.
//!
//! ### Failures Stop at the Controller
//!
//! The gateways return a small [`clients::ApiError`] taxonomy (not found,
//! rejected payload, transport trouble, cancelled). Controllers map every
//! variant to an inline error or a [`views::Notice`]; callers of a
//! controller never see a `Result` and never need a retry loop.
//!
//! ### Trust the Server, Check Locally First
//!
//! Quantities and drafts are validated locally so impossible requests are
//! never sent, but whatever the services return is displayed as-is. The
//! storefront caches nothing beyond the page on screen.
//!
//! ## 🗺️ Module Tour
//!
//! - **[model]**: Pure data structures ([`Product`](model::Product),
//!   [`ProductInventory`](model::ProductInventory),
//!   [`PageRequest`](model::PageRequest)) shared by every layer.
//! - **[clients]**: The HTTP gateways. [`CatalogClient`](clients::CatalogClient)
//!   and [`InventoryClient`](clients::InventoryClient) implement the
//!   [`CatalogApi`](clients::CatalogApi) and
//!   [`InventoryApi`](clients::InventoryApi) traits; [`clients::mock`]
//!   provides in-memory doubles for tests.
//! - **[views]**: The controllers behind each screen:
//!   [`ProductsListController`](views::ProductsListController),
//!   [`ProductFormController`](views::ProductFormController) and
//!   [`PurchaseController`](views::PurchaseController).
//! - **[shell]**: The [`Route`](shell::Route) table and the pages that
//!   compose controllers ([`ProductsPage`](shell::ProductsPage),
//!   [`PurchasePage`](shell::PurchasePage)).
//! - **[lifecycle]**: The [`Storefront`](lifecycle::Storefront)
//!   composition root, per-page cancellation scopes and
//!   [`setup_tracing`](lifecycle::setup_tracing).
//! - **[config]**: [`StoreConfig`](config::StoreConfig), read from the
//!   environment with development defaults.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Point the demo at a backend and run with info logs
//! STOREFRONT_API_URL=http://localhost:8080 RUST_LOG=info cargo run
//! ```
//!
//! ## 🧪 Testing
//!
//! Controller behavior is covered in each module against the
//! [`clients::mock`] doubles; the end-to-end flows run against an
//! in-process stub backend in `tests/storefront_flow.rs`.
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod shell;
pub mod views;
