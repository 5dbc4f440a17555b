//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole
//! storefront with the `tracing` crate.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`)
//! to keep log lines short while preserving structured fields. Levels are
//! controlled through the standard `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Gateway requests**: every catalog and inventory call runs inside
//!   an instrumented span named after the operation.
//! - **Controller actions**: loads, edits, deletes and purchases log
//!   their outcome with the ids and counts involved.
//! - **Failures**: absorbed errors are logged at `warn` with the full
//!   error before they are reduced to a user-facing message.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show each outgoing request
//! RUST_LOG=debug cargo run
//!
//! # Filter to the gateways only
//! RUST_LOG=storefront::clients=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a purchase reads like:
//!
//! ```text
//! INFO purchase_flow:load: Product loaded product_id=7 quantity=5
//! INFO purchase_flow:purchase: Purchase applied product_id=7 purchased=3 remaining=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the span names carry the context
        .compact() // Compact format shows spans inline (e.g., "purchase_flow:purchase")
        .init();
}
