//! Immutable product catalog.
//!
//! The storefront ships a fixed product list embedded at compile time from
//! `data/catalog.json`. Records are read-only: the cart snapshots what it
//! needs at add time through [`Product::select`] and never reads the catalog
//! again.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CategoryId, Price, ProductId};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Errors that can occur when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document could not be parsed.
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reasons a size/color selection cannot become a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No size was chosen.
    #[error("select a size before adding to the cart")]
    MissingSize,
    /// No color was chosen.
    #[error("select a color before adding to the cart")]
    MissingColor,
    /// The size is not offered for this product.
    #[error("size {size:?} is not available for product {product_id}")]
    UnknownSize {
        /// Product the selection was made on.
        product_id: ProductId,
        /// The rejected size.
        size: String,
    },
    /// The color is not offered for this product.
    #[error("color {color:?} is not available for product {product_id}")]
    UnknownColor {
        /// Product the selection was made on.
        product_id: ProductId,
        /// The rejected color.
        color: String,
    },
}

/// A product as offered by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Current selling price in pesos.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    /// Pre-sale price, shown struck through when present.
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Decimal>,
    /// Advertised discount percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
    pub category: CategoryId,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Selling price with currency.
    #[must_use]
    pub const fn selling_price(&self) -> Price {
        Price::ars(self.price)
    }

    /// Whether the product is on sale.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Amount saved against the original price, if on sale.
    #[must_use]
    pub fn savings(&self) -> Option<Decimal> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    /// Whether `size` is one of the offered sizes.
    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Whether `color` is one of the offered colors.
    #[must_use]
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Turn a size/color choice into a cart line candidate.
    ///
    /// Empty strings count as "not selected". The candidate snapshots the
    /// product's name, current price and first image.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] if either option is missing or is not one
    /// of the product's declared options. Size is checked before color.
    pub fn select(
        &self,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<CartItemInput, SelectionError> {
        let size = size
            .filter(|s| !s.is_empty())
            .ok_or(SelectionError::MissingSize)?;
        let color = color
            .filter(|c| !c.is_empty())
            .ok_or(SelectionError::MissingColor)?;

        if !self.offers_size(size) {
            return Err(SelectionError::UnknownSize {
                product_id: self.id.clone(),
                size: size.to_owned(),
            });
        }
        if !self.offers_color(color) {
            return Err(SelectionError::UnknownColor {
                product_id: self.id.clone(),
                color: color.to_owned(),
            });
        }

        Ok(CartItemInput {
            product_id: self.id.clone(),
            name: self.name.clone(),
            unit_price: self.price,
            size: size.to_owned(),
            color: color.to_owned(),
            image: self.images.first().cloned().unwrap_or_default(),
        })
    }
}

/// A product category with its advertised item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub count: u32,
}

/// Everything needed to put one product variant in the cart.
///
/// Built by the presentation layer, normally through [`Product::select`].
/// The cart trusts these fields as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemInput {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub size: String,
    pub color: String,
    pub image: String,
}

/// Read access to product definitions.
pub trait Catalog {
    /// All products, in catalog order.
    fn products(&self) -> &[Product];

    /// All categories, in catalog order.
    fn categories(&self) -> &[Category];

    /// Look up a product by ID.
    fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products().iter().find(|p| &p.id == id)
    }

    /// Products flagged for the home page.
    fn featured(&self) -> Vec<&Product> {
        self.products().iter().filter(|p| p.featured).collect()
    }

    /// Products belonging to a category.
    fn in_category(&self, category: &CategoryId) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| &p.category == category)
            .collect()
    }
}

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl StaticCatalog {
    /// The store's own product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the embedded data is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog document of the form
    /// `{"categories": [...], "products": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if `json` is not a valid catalog.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Catalog for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}
