//! Unified error handling.
//!
//! Provides a unified `AppError` type for callers that drive the storefront
//! (the CLI). Cart mutations themselves never fail; these errors come from
//! configuration, the catalog, checkout and writing output.

use thiserror::Error;

use tienda_core::{CatalogError, SelectionError};

use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog data could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The size/color selection was incomplete or invalid.
    #[error("Invalid selection: {0}")]
    Selection(#[from] SelectionError),

    /// Checkout could not start.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
