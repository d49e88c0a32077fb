//! Per-user cart persistence.
//!
//! # Storage layout
//!
//! ```text
//! shopping_cart        - serialized CartRecord for the anonymous cart
//! user_cart_<userId>   - serialized CartRecord for a signed-in identity
//! ```
//!
//! The store is a keyed snapshot store: whole-record overwrite on save,
//! last-write-wins, identity-based partitioning so a shared device holds
//! independent carts per signed-in user plus one guest cart. Switching
//! identity switches which record is read and written; guest-cart contents
//! are never migrated to a signed-in identity.
//!
//! Persistence is best-effort. Backend failures are reported to the
//! diagnostic sink and absorbed; no operation here ever surfaces an error to
//! the caller. A lost cart draft is recoverable by the user re-adding items.

mod store;

pub use store::CartStore;

use greenbasket_core::UserId;

/// Storage key for the anonymous (guest) cart.
pub const ANONYMOUS_CART_KEY: &str = "shopping_cart";

/// Key prefix for per-user carts; the identity string follows the prefix.
pub const USER_CART_PREFIX: &str = "user_cart_";

/// Compute the storage key owned by `user`.
///
/// Deterministic: the same identity always maps to the same key, and distinct
/// identities map to distinct keys.
#[must_use]
pub fn storage_key(user: Option<&UserId>) -> String {
    user.map_or_else(
        || ANONYMOUS_CART_KEY.to_owned(),
        |id| format!("{USER_CART_PREFIX}{id}"),
    )
}

/// True for keys owned by this store under either naming scheme.
#[must_use]
pub fn is_cart_key(key: &str) -> bool {
    key == ANONYMOUS_CART_KEY || key.starts_with(USER_CART_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_anonymous() {
        assert_eq!(storage_key(None), "shopping_cart");
    }

    #[test]
    fn test_storage_key_per_user() {
        let user = UserId::new("u-42");
        assert_eq!(storage_key(Some(&user)), "user_cart_u-42");
    }

    #[test]
    fn test_distinct_users_get_distinct_keys() {
        let a = UserId::new("a");
        let b = UserId::new("b");
        assert_ne!(storage_key(Some(&a)), storage_key(Some(&b)));
    }

    #[test]
    fn test_is_cart_key() {
        assert!(is_cart_key("shopping_cart"));
        assert!(is_cart_key("user_cart_u-42"));
        assert!(!is_cart_key("session_token"));
        assert!(!is_cart_key("shopping_cart_backup"));
    }
}
