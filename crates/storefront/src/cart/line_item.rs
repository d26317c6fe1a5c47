//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tienda_core::{CartItemInput, ProductId};

/// A quantity of one product variant in the cart.
///
/// `name`, `unit_price` and `image` are snapshots taken when the variant was
/// first added; they are never refreshed from the catalog. Field names on the
/// wire follow the persisted cart format (`id`, `price`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    #[serde(rename = "price", with = "rust_decimal::serde::arbitrary_precision")]
    pub unit_price: Decimal,
    pub size: String,
    pub color: String,
    /// Always at least 1 while the item is in a cart.
    pub quantity: u32,
    pub image: String,
}

impl LineItem {
    /// Start a new line with quantity 1.
    #[must_use]
    pub fn from_input(input: CartItemInput) -> Self {
        Self {
            product_id: input.product_id,
            name: input.name,
            unit_price: input.unit_price,
            size: input.size,
            color: input.color,
            quantity: 1,
            image: input.image,
        }
    }

    /// The identity triple of this line.
    #[must_use]
    pub fn key(&self) -> LineKey<'_> {
        LineKey {
            product_id: &self.product_id,
            size: &self.size,
            color: &self.color,
        }
    }

    /// Whether this line is the given variant.
    #[must_use]
    pub fn is(&self, key: LineKey<'_>) -> bool {
        self.key() == key
    }

    /// `unit_price × quantity`, saturating at the bounds of `Decimal`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// The `(product, size, color)` triple that identifies a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineKey<'a> {
    pub product_id: &'a ProductId,
    pub size: &'a str,
    pub color: &'a str,
}

impl<'a> LineKey<'a> {
    #[must_use]
    pub const fn new(product_id: &'a ProductId, size: &'a str, color: &'a str) -> Self {
        Self {
            product_id,
            size,
            color,
        }
    }
}

impl<'a> From<&'a CartItemInput> for LineKey<'a> {
    fn from(input: &'a CartItemInput) -> Self {
        Self::new(&input.product_id, &input.size, &input.color)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn input() -> CartItemInput {
        CartItemInput {
            product_id: ProductId::new("1"),
            name: "Remera Básica Premium".to_string(),
            unit_price: Decimal::from(8500),
            size: "M".to_string(),
            color: "Negro".to_string(),
            image: "/remera.jpg".to_string(),
        }
    }

    #[test]
    fn test_from_input_starts_at_one() {
        let item = LineItem::from_input(input());
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price, Decimal::from(8500));
    }

    #[test]
    fn test_key_matching() {
        let item = LineItem::from_input(input());
        let id = ProductId::new("1");
        assert!(item.is(LineKey::new(&id, "M", "Negro")));
        assert!(!item.is(LineKey::new(&id, "L", "Negro")));
        assert!(!item.is(LineKey::new(&id, "M", "Blanco")));
    }

    #[test]
    fn test_line_total() {
        let mut item = LineItem::from_input(input());
        item.quantity = 3;
        assert_eq!(item.line_total(), Decimal::from(25_500));
    }

    #[test]
    fn test_wire_field_names() {
        let item = LineItem::from_input(input());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["price"], 8500);
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["image"], "/remera.jpg");
    }

    #[test]
    fn test_price_keeps_every_digit() {
        let mut item = LineItem::from_input(input());
        item.unit_price = "12345678901234.5678".parse().unwrap();

        let raw = serde_json::to_string(&item).unwrap();
        assert!(raw.contains(r#""price":12345678901234.5678"#));

        let back: LineItem = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_line_total_saturates() {
        let mut item = LineItem::from_input(input());
        item.unit_price = Decimal::MAX;
        item.quantity = 2;
        assert_eq!(item.line_total(), Decimal::MAX);
    }
}
