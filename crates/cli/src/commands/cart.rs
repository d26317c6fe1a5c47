//! Cart commands.
//!
//! Each command runs one store operation and reports the result. Save
//! failures are surfaced as a warning line; the command still succeeds
//! because the in-memory change was applied.

use std::io::Write;
use std::num::NonZeroU32;

use tracing::info;

use tienda_core::{Catalog, ProductId};
use tienda_storefront::cart::{CartStorage, CartStore, CartView};
use tienda_storefront::{AppError, Result};

/// A variant as given on the command line.
#[derive(Debug, Clone)]
pub struct VariantArgs {
    pub product_id: String,
    pub size: String,
    pub color: String,
}

/// Print the cart contents and totals.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show<S: CartStorage>(
    store: &CartStore<S>,
    out: &mut impl Write,
) -> Result<()> {
    let view = CartView::from(store);
    if view.is_empty() {
        writeln!(out, "Tu carrito está vacío")?;
        return Ok(());
    }

    let lines = view.items.len();
    writeln!(
        out,
        "{lines} producto{} en tu carrito",
        if lines == 1 { "" } else { "s" }
    )?;
    for item in &view.items {
        writeln!(
            out,
            "  [{}] {} ({}) x{} @ {} = {}",
            item.product_id, item.name, item.variant, item.quantity, item.price, item.line_price
        )?;
    }
    writeln!(out, "Artículos: {}", view.item_count)?;
    writeln!(out, "Subtotal: {}", view.subtotal)?;
    Ok(())
}

/// Add `quantity` units of a catalog variant.
///
/// Each unit goes through [`CartStore::add_item`], so repeated units land on
/// one line.
///
/// # Errors
///
/// Returns `AppError::NotFound` for unknown products, `AppError::Selection`
/// if the size or color is not offered, or an I/O error from `out`.
pub fn add<S: CartStorage>(
    store: &mut CartStore<S>,
    catalog: &impl Catalog,
    variant: &VariantArgs,
    quantity: NonZeroU32,
    out: &mut impl Write,
) -> Result<()> {
    let product = catalog
        .product(&ProductId::new(variant.product_id.as_str()))
        .ok_or_else(|| AppError::NotFound(format!("product {}", variant.product_id)))?;
    let candidate = product.select(Some(variant.size.as_str()), Some(variant.color.as_str()))?;

    for _ in 0..quantity.get() {
        store.add_item(candidate.clone());
    }
    info!(product_id = %product.id, quantity = quantity.get(), "Added to cart");

    writeln!(
        out,
        "Agregaste {quantity} x {} (Talle: {}, Color: {}) al carrito",
        product.name, variant.size, variant.color
    )?;
    report_save(store, out)
}

/// Remove a variant.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn remove<S: CartStorage>(
    store: &mut CartStore<S>,
    variant: &VariantArgs,
    out: &mut impl Write,
) -> Result<()> {
    let before = store.line_count();
    store.remove_item(
        &ProductId::new(variant.product_id.as_str()),
        &variant.size,
        &variant.color,
    );

    if store.line_count() < before {
        writeln!(out, "Producto eliminado del carrito")?;
    } else {
        writeln!(out, "El producto no estaba en el carrito")?;
    }
    report_save(store, out)
}

/// Set a variant's quantity. Zero or less removes it.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn update<S: CartStorage>(
    store: &mut CartStore<S>,
    variant: &VariantArgs,
    quantity: i64,
    out: &mut impl Write,
) -> Result<()> {
    store.update_quantity(
        &ProductId::new(variant.product_id.as_str()),
        &variant.size,
        &variant.color,
        quantity,
    );
    writeln!(out, "Artículos en el carrito: {}", store.total_items())?;
    report_save(store, out)
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn clear<S: CartStorage>(
    store: &mut CartStore<S>,
    out: &mut impl Write,
) -> Result<()> {
    store.clear_cart();
    writeln!(out, "Carrito vaciado")?;
    report_save(store, out)
}

fn report_save<S: CartStorage>(
    store: &CartStore<S>,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(e) = store.last_save_error() {
        writeln!(out, "Aviso: el carrito no se pudo guardar ({e})")?;
    }
    Ok(())
}
