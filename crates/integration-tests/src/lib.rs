//! Integration tests for the Green Basket client support layer.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p greenbasket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart store behavior over the file backend
//! - `route_titles` - Route table resolution over the standard table
//!
//! Tests here run against real device storage (a temporary directory per
//! test) rather than the in-memory backend, so they cover the durability
//! path the unit tests do not.

use tracing_subscriber::EnvFilter;

/// Initialize the diagnostic subscriber for a test binary.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
