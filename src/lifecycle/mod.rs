//! Startup, wiring and teardown.

pub mod storefront;
pub mod tracing;

pub use storefront::{ActivePage, Storefront};
pub use tracing::setup_tracing;
