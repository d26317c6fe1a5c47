//! The cart store.

use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use tienda_core::{CartItemInput, ProductId, format_ars};

use super::line_item::{LineItem, LineKey};
use super::persisted;
use super::storage::{CartStorage, StorageError};
use super::STORAGE_KEY;

/// Owns the cart's lines and keeps them persisted.
///
/// At most one line exists per `(product, size, color)` and every line has
/// a quantity of at least 1. The whole cart is written back to storage after
/// every mutating call. Write failures are logged and exposed through
/// [`last_save_error`](Self::last_save_error); the in-memory cart is kept
/// as mutated either way.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<LineItem>,
    storage: S,
    last_save_error: Option<StorageError>,
}

impl<S: CartStorage> CartStore<S> {
    /// Restore the cart saved in `storage`.
    ///
    /// A missing, unreadable or malformed record gives an empty cart.
    #[instrument(skip_all)]
    pub fn load(storage: S) -> Self {
        let items = match storage.read(STORAGE_KEY) {
            Ok(Some(raw)) => persisted::decode(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Discarding unreadable saved cart");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Cart storage unavailable, starting empty");
                Vec::new()
            }
        };

        debug!(lines = items.len(), "Cart loaded");
        Self {
            items,
            storage,
            last_save_error: None,
        }
    }

    /// Start with an empty cart without reading storage.
    pub const fn empty(storage: S) -> Self {
        Self {
            items: Vec::new(),
            storage,
            last_save_error: None,
        }
    }

    /// Add one unit of a variant.
    ///
    /// If the variant is already in the cart its quantity goes up by one and
    /// its snapshot fields stay as they were. Otherwise a new line with
    /// quantity 1 is appended.
    pub fn add_item(&mut self, candidate: CartItemInput) {
        let key = LineKey::from(&candidate);
        if let Some(item) = self.items.iter_mut().find(|item| item.is(key)) {
            item.quantity = item.quantity.saturating_add(1);
            debug!(
                product_id = %item.product_id,
                size = %item.size,
                color = %item.color,
                quantity = item.quantity,
                "Incremented cart line"
            );
        } else {
            debug!(
                product_id = %candidate.product_id,
                size = %candidate.size,
                color = %candidate.color,
                "Added cart line"
            );
            self.items.push(LineItem::from_input(candidate));
        }
        self.persist();
    }

    /// Remove a variant. Does nothing if it is not in the cart.
    pub fn remove_item(&mut self, product_id: &ProductId, size: &str, color: &str) {
        let key = LineKey::new(product_id, size, color);
        let before = self.items.len();
        self.items.retain(|item| !item.is(key));
        if self.items.len() != before {
            debug!(product_id = %product_id, size, color, "Removed cart line");
        }
        self.persist();
    }

    /// Set a variant's quantity.
    ///
    /// Zero or negative removes the line. Unknown variants are ignored.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
        new_quantity: i64,
    ) {
        if new_quantity <= 0 {
            self.remove_item(product_id, size, color);
            return;
        }

        let key = LineKey::new(product_id, size, color);
        if let Some(item) = self.items.iter_mut().find(|item| item.is(key)) {
            item.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            debug!(
                product_id = %product_id,
                size,
                color,
                quantity = item.quantity,
                "Updated cart line quantity"
            );
        }
        self.persist();
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        debug!("Cleared cart");
        self.persist();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `unit_price × quantity` across all lines.
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Render an amount for display, e.g. `"$ 25.500,00"`.
    ///
    /// Does not depend on the cart's contents.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn formatted_price(&self, amount: Decimal) -> String {
        format_ars(amount)
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Find the line for a variant.
    #[must_use]
    pub fn item(&self, key: LineKey<'_>) -> Option<&LineItem> {
        self.items.iter().find(|item| item.is(key))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Error from the most recent save, if it failed.
    #[must_use]
    pub const fn last_save_error(&self) -> Option<&StorageError> {
        self.last_save_error.as_ref()
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let result = persisted::encode(&self.items)
            .map_err(StorageError::from)
            .and_then(|raw| self.storage.write(STORAGE_KEY, &raw));

        match result {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                warn!(error = %e, lines = self.items.len(), "Failed to save cart");
                self.last_save_error = Some(e);
            }
        }
    }
}
