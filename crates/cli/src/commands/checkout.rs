//! Checkout handoff command.

use std::io::Write;

use tienda_core::format_ars;
use tienda_storefront::cart::{CartStorage, CartStore};
use tienda_storefront::{CheckoutSummary, Result, StorefrontConfig};

/// Print the order summary and the chat link that completes the purchase.
///
/// # Errors
///
/// Returns `AppError::Checkout` if the cart is empty, or an I/O error from
/// `out`.
pub fn run<S: CartStorage>(
    store: &CartStore<S>,
    config: &StorefrontConfig,
    out: &mut impl Write,
) -> Result<()> {
    let summary = CheckoutSummary::from_store(store, &config.shipping)?;

    writeln!(out, "Subtotal: {}", format_ars(summary.subtotal))?;
    if summary.free_shipping() {
        writeln!(out, "Envío: Gratis")?;
    } else {
        writeln!(out, "Envío: {}", format_ars(summary.shipping))?;
    }
    writeln!(out, "Total: {}", format_ars(summary.total))?;
    writeln!(out)?;
    writeln!(out, "Te contactaremos por WhatsApp para finalizar tu compra:")?;
    writeln!(out, "{}", summary.whatsapp_url(&config.whatsapp_number))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use tienda_core::{CartItemInput, ProductId};
    use tienda_storefront::MemoryStorage;

    use super::*;

    #[test]
    fn test_checkout_output() {
        let mut store = CartStore::load(MemoryStorage::new());
        store.add_item(CartItemInput {
            product_id: ProductId::new("4"),
            name: "Campera de Cuero Premium".to_string(),
            unit_price: Decimal::from(45_000),
            size: "M".to_string(),
            color: "Cognac".to_string(),
            image: String::new(),
        });
        store.update_quantity(&ProductId::new("4"), "M", "Cognac", 2);

        let mut out = Vec::new();
        run(&store, &StorefrontConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Subtotal: $ 90.000,00"));
        assert!(text.contains("Envío: Gratis"));
        assert!(text.contains("Total: $ 90.000,00"));
        assert!(text.contains("https://wa.me/5491123456789?text="));
    }

    #[test]
    fn test_checkout_empty_cart() {
        let store = CartStore::load(MemoryStorage::new());
        let err = run(&store, &StorefrontConfig::default(), &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Checkout error: the cart is empty");
    }
}
