//! Tienda Core - Shared types library.
//!
//! This crate provides common types used across all Tienda components:
//! - `storefront` - Cart store, persistence and checkout handoff
//! - `cli` - Command-line presentation layer over the storefront
//!
//! # Architecture
//!
//! The core crate contains only types, traits and the embedded product
//! catalog - no file access, no HTTP clients. This keeps it lightweight and
//! allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`catalog`] - Immutable product records and the selection boundary

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{
    CartItemInput, Catalog, CatalogError, Category, Product, SelectionError, StaticCatalog,
};
pub use types::*;
