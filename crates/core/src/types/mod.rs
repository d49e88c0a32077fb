//! Core types for Green Basket.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod identity;

pub use cart::{CartInput, CartItem, CartRecord};
pub use identity::UserId;
