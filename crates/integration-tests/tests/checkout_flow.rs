//! Integration tests for the catalog → cart → checkout flow.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use tienda_core::{Catalog, ProductId, SelectionError};
use tienda_integration_tests::{catalog, select};
use tienda_storefront::checkout::CheckoutError;
use tienda_storefront::{CartStore, CheckoutSummary, LineKey, MemoryStorage, StorefrontConfig};

#[test]
fn test_incomplete_selection_never_reaches_cart() {
    let catalog = catalog();
    let product = catalog.product(&ProductId::new("1")).unwrap();

    assert_eq!(
        product.select(Some("M"), None),
        Err(SelectionError::MissingColor)
    );
    assert!(matches!(
        product.select(Some("38"), Some("Negro")),
        Err(SelectionError::UnknownSize { .. })
    ));
}

#[test]
fn test_two_sizes_same_color_scenario() {
    let mut store = CartStore::load(MemoryStorage::new());
    store.add_item(select("1", "M", "Negro"));
    store.add_item(select("1", "M", "Negro"));
    store.add_item(select("1", "L", "Negro"));

    assert_eq!(store.line_count(), 2);
    assert_eq!(store.total_items(), 3);
    assert_eq!(store.total_price(), Decimal::from(25_500));

    let id = ProductId::new("1");
    store.update_quantity(&id, "M", "Negro", 5);
    assert_eq!(store.item(LineKey::new(&id, "M", "Negro")).unwrap().quantity, 5);

    store.update_quantity(&id, "L", "Negro", -5);
    assert_eq!(store.line_count(), 1);
    assert_eq!(store.total_items(), 5);
}

#[test]
fn test_checkout_link_from_selection() {
    let config = StorefrontConfig::default();
    let mut store = CartStore::load(MemoryStorage::new());
    store.add_item(select("4", "M", "Negro"));
    store.add_item(select("2", "34", "Azul Clásico"));

    let summary = CheckoutSummary::from_store(&store, &config.shipping).unwrap();
    assert_eq!(summary.subtotal, Decimal::from(60_500));
    assert!(summary.free_shipping());

    let message = summary.message();
    assert!(message.contains("• Campera de Cuero Premium - Talle: M - Color: Negro - Cantidad: 1"));
    assert!(message.ends_with("Total: $ 60.500,00"));

    let url = summary.whatsapp_url(&config.whatsapp_number);
    assert!(url.starts_with("https://wa.me/5491123456789?text="));
}

#[test]
fn test_checkout_after_clear() {
    let mut store = CartStore::load(MemoryStorage::new());
    store.add_item(select("6", "Único", "Beige"));
    store.clear_cart();

    assert_eq!(
        CheckoutSummary::from_store(&store, &StorefrontConfig::default().shipping),
        Err(CheckoutError::EmptyCart)
    );
}
