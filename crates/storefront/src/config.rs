//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TIENDA_DATA_DIR` - Directory holding the saved cart (default: `.tienda`)
//! - `TIENDA_WHATSAPP_NUMBER` - Store chat number, digits only (default: 5491123456789)
//! - `TIENDA_FREE_SHIPPING_OVER` - Subtotal above which shipping is free (default: 50000)
//! - `TIENDA_SHIPPING_COST` - Flat shipping charge (default: 2500)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::checkout::ShippingPolicy;

const DEFAULT_DATA_DIR: &str = ".tienda";
const DEFAULT_WHATSAPP_NUMBER: &str = "5491123456789";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory for file-backed cart storage
    pub data_dir: PathBuf,
    /// Number checkout messages are sent to
    pub whatsapp_number: String,
    /// Shipping charged at checkout
    pub shipping: ShippingPolicy,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            shipping: ShippingPolicy::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("TIENDA_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);

        let whatsapp_number = lookup("TIENDA_WHATSAPP_NUMBER")
            .unwrap_or(defaults.whatsapp_number);
        validate_phone(&whatsapp_number, "TIENDA_WHATSAPP_NUMBER")?;

        let free_over = parse_or(
            &lookup,
            "TIENDA_FREE_SHIPPING_OVER",
            defaults.shipping.free_over,
        )?;
        let flat_rate = parse_or(&lookup, "TIENDA_SHIPPING_COST", defaults.shipping.flat_rate)?;
        if flat_rate.is_sign_negative() {
            return Err(ConfigError::InvalidEnvVar(
                "TIENDA_SHIPPING_COST".to_string(),
                "must not be negative".to_string(),
            ));
        }

        Ok(Self {
            data_dir,
            whatsapp_number,
            shipping: ShippingPolicy {
                free_over,
                flat_rate,
            },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a decimal variable, or use `default` when unset.
fn parse_or(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Decimal,
) -> Result<Decimal, ConfigError> {
    lookup(key).map_or(Ok(default), |value| {
        Decimal::from_str(value.trim())
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// `wa.me` links take the number in international format, digits only.
fn validate_phone(value: &str, var_name: &str) -> Result<(), ConfigError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("expected digits only, got {value:?}"),
        ));
    }
    Ok(())
}
