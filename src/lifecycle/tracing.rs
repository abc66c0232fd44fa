//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # load, shutdown, persistence warnings
//! RUST_LOG=debug cargo run    # every request, with drafts and ids
//! ```
//!
//! Log lines carry an `entity_type` field instead of the module path, so `with_target` is off.
//! Typical `info` output for a session:
//!
//! ```text
//! INFO Starting inventory system storage=FileStorage { dir: "/home/me/.local/share/product-inventory" } key=products capacity=32
//! INFO Loaded entity_type="Product" key=products size=2
//! INFO Actor started entity_type="Product" size=2
//! INFO Shutdown entity_type="Product" size=3
//! ```
//!
//! A failed snapshot write shows up as a `WARN` and is otherwise swallowed.

/// Installs the global subscriber. Panics if one is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
