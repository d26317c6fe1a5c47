//! Display-ready cart data.

use tienda_core::format_ars;

use super::line_item::LineItem;
use super::storage::CartStorage;
use super::store::CartStore;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    /// `"Talle: M • Color: Negro"`
    pub variant: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: CartStorage> From<&CartStore<S>> for CartView {
    fn from(store: &CartStore<S>) -> Self {
        Self {
            items: store.items().iter().map(CartItemView::from).collect(),
            subtotal: store.formatted_price(store.total_price()),
            item_count: store.total_items(),
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            name: item.name.clone(),
            variant: format!("Talle: {} • Color: {}", item.size, item.color),
            quantity: item.quantity,
            price: format_ars(item.unit_price),
            line_price: format_ars(item.line_total()),
            image: item.image.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;
    use tienda_core::{CartItemInput, ProductId};

    use super::*;
    use crate::cart::MemoryStorage;

    #[test]
    fn test_empty_view() {
        let view = CartView::from(&CartStore::load(MemoryStorage::new()));
        assert!(view.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.subtotal, "$ 0,00");
    }

    #[test]
    fn test_view_from_store() {
        let mut store = CartStore::load(MemoryStorage::new());
        let input = CartItemInput {
            product_id: ProductId::new("2"),
            name: "Jean Argentino Clásico".to_string(),
            unit_price: Decimal::from(15_500),
            size: "32".to_string(),
            color: "Negro".to_string(),
            image: "/jean.jpg".to_string(),
        };
        store.add_item(input.clone());
        store.add_item(input);

        let view = CartView::from(&store);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.subtotal, "$ 31.000,00");

        let item = &view.items[0];
        assert_eq!(item.variant, "Talle: 32 • Color: Negro");
        assert_eq!(item.price, "$ 15.500,00");
        assert_eq!(item.line_price, "$ 31.000,00");
    }
}
