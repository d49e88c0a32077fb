//! Green Basket Core - Shared types library.
//!
//! This crate provides common types used across the Green Basket client
//! components:
//! - `client` - Device-local cart persistence and navigation support
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. The cart
//! data contract lives here so that the persistence layer and the
//! presentation layer agree on one normalized record shape.
//!
//! # Modules
//!
//! - [`types`] - Identity newtype and the cart data contract

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
