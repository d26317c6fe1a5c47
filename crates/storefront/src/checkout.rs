//! Checkout handoff.
//!
//! There is no in-app order pipeline. Checkout turns the current cart into a
//! plain-text order summary and a `wa.me` link that opens a chat with the
//! store carrying that summary.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use tienda_core::format_ars;

use crate::cart::{CartStorage, CartStore, LineItem};

/// Errors that can occur when starting checkout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Nothing to check out.
    #[error("the cart is empty")]
    EmptyCart,
}

/// Flat-rate shipping that becomes free above a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotals strictly above this ship free.
    pub free_over: Decimal,
    /// Charged otherwise.
    pub flat_rate: Decimal,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_over: Decimal::from(50_000),
            flat_rate: Decimal::from(2500),
        }
    }
}

impl ShippingPolicy {
    /// Shipping charged for `subtotal`.
    #[must_use]
    pub fn shipping_for(&self, subtotal: Decimal) -> Decimal {
        if subtotal > self.free_over {
            Decimal::ZERO
        } else {
            self.flat_rate
        }
    }
}

/// Snapshot of the cart at the moment checkout starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub lines: Vec<LineItem>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl CheckoutSummary {
    /// Read the store's current lines and totals.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no lines.
    pub fn from_store<S: CartStorage>(
        store: &CartStore<S>,
        policy: &ShippingPolicy,
    ) -> Result<Self, CheckoutError> {
        if store.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let subtotal = store.total_price();
        let shipping = policy.shipping_for(subtotal);
        Ok(Self {
            lines: store.items().to_vec(),
            subtotal,
            shipping,
            total: subtotal.saturating_add(shipping),
        })
    }

    /// Whether shipping was waived.
    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Human-readable order message.
    #[must_use]
    pub fn message(&self) -> String {
        let lines = self
            .lines
            .iter()
            .map(|item| {
                format!(
                    "• {} - Talle: {} - Color: {} - Cantidad: {}",
                    item.name, item.size, item.color, item.quantity
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Hola! Quiero finalizar mi compra:\n\n{lines}\n\nTotal: {}",
            format_ars(self.total)
        )
    }

    /// Chat link for `phone` (international format, digits only) with the
    /// message prefilled.
    #[must_use]
    pub fn whatsapp_url(&self, phone: &str) -> String {
        let url = format!(
            "https://wa.me/{phone}?text={}",
            urlencoding::encode(&self.message())
        );
        info!(
            lines = self.lines.len(),
            total = %self.total,
            "Prepared checkout handoff"
        );
        url
    }
}
