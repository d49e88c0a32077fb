//! Cart data contract.
//!
//! The persisted cart is a normalized snapshot: a defined record shape with
//! required and optional fields, validated at the storage boundary instead of
//! an opaque payload passed through silently. Serialized field names follow
//! the client apps' existing storage layout (`items`, `totalItems`,
//! `subtotal`, `userId`, `lastUpdated`), so records written by older app
//! builds keep loading.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::identity::UserId;

const fn default_quantity() -> u32 {
    1
}

/// A single cart line item.
///
/// Only `id` is meaningful to every consumer; the remaining fields exist so
/// the presentation layer can render a cart without refetching the catalog.
/// Missing fields deserialize to their defaults rather than failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CartItem {
    /// Product or variant identifier the item refers to.
    pub id: String,
    /// Display name, if known at add time.
    pub name: Option<String>,
    /// Variant description (size, flavor), if any.
    pub variant: Option<String>,
    /// Thumbnail URL for cart rendering.
    pub image_url: Option<String>,
    /// Number of units. Defaults to 1 when absent.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Price per unit in the store currency.
    pub unit_price: Decimal,
}

impl CartItem {
    /// Create an item with the given id, one unit, zero price.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            quantity: 1,
            ..Self::default()
        }
    }
}

/// The normalized, persisted representation of a shopping cart.
///
/// Exactly one record is addressable per distinct [`UserId`], plus one
/// anonymous record. Records are whole-snapshot values: every save overwrites
/// the previous record at the same key, and no merging happens between the
/// anonymous record and any per-user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CartRecord {
    /// Line items, in the order the user added them.
    pub items: Vec<CartItem>,
    /// Caller-supplied item count. Not recomputed by the store.
    pub total_items: u32,
    /// Caller-supplied subtotal. Not recomputed by the store.
    pub subtotal: Decimal,
    /// Owning identity; `None` for the anonymous cart.
    pub user_id: Option<UserId>,
    /// Stamped by the store at write time; `None` until first persisted.
    pub last_updated: Option<DateTime<Utc>>,
}

impl CartRecord {
    /// The canonical empty record returned when nothing is stored.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when this record equals the canonical empty record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::empty()
    }
}

/// Caller-facing cart payload with possibly-missing fields.
///
/// The store accepts this loose shape and normalizes it into a
/// [`CartRecord`]: a missing item list becomes an empty list, missing
/// numeric fields become zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartInput {
    /// Line items, if any.
    pub items: Option<Vec<CartItem>>,
    /// Item count, if the caller computed one.
    pub total_items: Option<u32>,
    /// Subtotal, if the caller computed one.
    pub subtotal: Option<Decimal>,
}

impl CartInput {
    /// Normalize into a record owned by `user`.
    ///
    /// `last_updated` is left unset; the store stamps it at write time.
    #[must_use]
    pub fn normalize(self, user: Option<&UserId>) -> CartRecord {
        CartRecord {
            items: self.items.unwrap_or_default(),
            total_items: self.total_items.unwrap_or(0),
            subtotal: self.subtotal.unwrap_or_default(),
            user_id: user.cloned(),
            last_updated: None,
        }
    }
}
