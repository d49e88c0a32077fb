//! The cart snapshot store.

use chrono::Utc;
use tracing::instrument;

use greenbasket_core::{CartInput, CartRecord, UserId};

use super::{is_cart_key, storage_key};
use crate::storage::StorageBackend;

/// Durable per-user cart store over a [`StorageBackend`].
///
/// Constructed explicitly and handed to the presentation layer; there is no
/// ambient global instance. The store does not validate cart contents, does
/// not merge concurrent writes, and does not coordinate cross-tab races:
/// it is a keyed snapshot store, last-write-wins.
///
/// ## Examples
///
/// ```
/// use greenbasket_client::{CartStore, MemoryBackend};
/// use greenbasket_core::{CartInput, UserId};
///
/// let store = CartStore::new(MemoryBackend::new());
/// let user = UserId::new("u-7");
///
/// store.save(Some(&user), CartInput::default());
/// let record = store.load(Some(&user));
/// assert!(record.last_updated.is_some());
/// ```
#[derive(Debug)]
pub struct CartStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> CartStore<B> {
    /// Create a store over `backend`.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The backend this store persists into.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Persist a cart snapshot for `user`.
    ///
    /// The input is normalized (missing items become an empty list, missing
    /// numeric fields become zero), stamped with the current time, and
    /// written as a whole-record overwrite at the identity's key.
    ///
    /// Best-effort: a failed write is logged and dropped; the next
    /// successful write wins.
    #[instrument(skip(self, input), fields(user = user.map(UserId::as_str)))]
    pub fn save(&self, user: Option<&UserId>, input: CartInput) {
        let mut record = input.normalize(user);
        record.last_updated = Some(Utc::now());

        let key = storage_key(user);
        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(%key, error = %e, "failed to serialize cart; write dropped");
                return;
            }
        };

        if let Err(e) = self.backend.set(&key, &json) {
            tracing::warn!(%key, error = %e, "failed to persist cart; write dropped");
        }
    }

    /// Load the cart snapshot for `user`.
    ///
    /// Returns the canonical empty record when nothing is stored, when the
    /// stored value fails to parse, or when the backend cannot be read.
    #[instrument(skip(self), fields(user = user.map(UserId::as_str)))]
    pub fn load(&self, user: Option<&UserId>) -> CartRecord {
        let key = storage_key(user);
        match self.backend.get(&key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(%key, error = %e, "malformed cart record; treating as empty");
                CartRecord::empty()
            }),
            Ok(None) => CartRecord::empty(),
            Err(e) => {
                tracing::warn!(%key, error = %e, "failed to read cart; treating as empty");
                CartRecord::empty()
            }
        }
    }

    /// Remove the cart snapshot for `user`. Best-effort.
    #[instrument(skip(self), fields(user = user.map(UserId::as_str)))]
    pub fn clear(&self, user: Option<&UserId>) {
        let key = storage_key(user);
        if let Err(e) = self.backend.remove(&key) {
            tracing::warn!(%key, error = %e, "failed to clear cart");
        }
    }

    /// Remove every cart snapshot: the anonymous record and all per-user
    /// records. Keys outside the cart naming schemes are untouched.
    /// Best-effort.
    #[instrument(skip(self))]
    pub fn clear_all(&self) {
        let keys = match self.backend.keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(error = %e, "failed to enumerate storage; nothing cleared");
                return;
            }
        };

        for key in keys.iter().filter(|key| is_cart_key(key)) {
            if let Err(e) = self.backend.remove(key) {
                tracing::warn!(%key, error = %e, "failed to clear cart");
            }
        }
    }
}
