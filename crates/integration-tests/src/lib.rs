//! Integration tests for Tienda.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tienda-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - File-backed carts surviving a reload
//! - `checkout_flow` - Catalog selection through to the checkout link
//!
//! Shared fixtures live here so each test file stays focused on behavior.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tienda_core::{CartItemInput, Catalog, ProductId, StaticCatalog};

/// Load the built-in catalog.
///
/// # Panics
///
/// Panics if the embedded catalog is malformed.
#[must_use]
#[allow(clippy::expect_used)]
pub fn catalog() -> StaticCatalog {
    StaticCatalog::builtin().expect("built-in catalog should parse")
}

/// Select a variant from the built-in catalog.
///
/// # Panics
///
/// Panics if the product does not exist or the selection is invalid.
#[must_use]
#[allow(clippy::expect_used)]
pub fn select(id: &str, size: &str, color: &str) -> CartItemInput {
    catalog()
        .product(&ProductId::new(id))
        .expect("product should exist")
        .select(Some(size), Some(color))
        .expect("selection should be valid")
}
