//! Tienda Storefront library.
//!
//! Client-side state for the storefront: the persisted shopping cart and the
//! checkout handoff built from it.
//!
//! # Modules
//!
//! - [`cart`] - `CartStore`, line items and storage backends
//! - [`checkout`] - Shipping rule, order summary and chat link
//! - [`config`] - Environment-driven settings
//! - [`error`] - `AppError` for callers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;

pub use cart::{CartStore, FileStorage, LineItem, LineKey, MemoryStorage, STORAGE_KEY};
pub use checkout::{CheckoutSummary, ShippingPolicy};
pub use config::StorefrontConfig;
pub use error::{AppError, Result};
pub use tienda_core::CartItemInput;
