//! Green Basket client support library.
//!
//! Device-local infrastructure shared by the storefront and delivery-partner
//! client apps. Two independent components live here:
//!
//! - [`cart`] - a keyed snapshot store persisting per-user shopping carts to
//!   local device storage, last-write-wins, best-effort
//! - [`nav`] - a static route table resolving navigation paths to display
//!   titles
//!
//! Neither component depends on the other; presentation code decides when to
//! read and write. Storage access goes through the [`storage`] backends so
//! the store can be constructed explicitly instead of reaching for ambient
//! global state.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod nav;
pub mod storage;

pub use cart::CartStore;
pub use nav::RouteTable;
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError};
