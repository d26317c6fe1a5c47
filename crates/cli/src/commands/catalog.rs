//! Browse the product catalog.

use std::io::Write;

use tienda_core::{Catalog, CategoryId, Product, ProductId, format_ars};
use tienda_storefront::{AppError, Result};

/// List products, optionally only featured ones or one category.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list(
    catalog: &impl Catalog,
    featured: bool,
    category: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let products: Vec<&Product> = match category {
        Some(category) => catalog.in_category(&CategoryId::new(category)),
        None => catalog.products().iter().collect(),
    };

    for product in products.into_iter().filter(|p| !featured || p.featured) {
        write!(
            out,
            "{:>3}  {:<28} {}",
            product.id,
            product.name,
            product.selling_price()
        )?;
        if let Some(original) = product.original_price.filter(|_| product.has_discount()) {
            write!(out, " (antes {})", format_ars(original))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Show one product with its options.
///
/// # Errors
///
/// Returns `AppError::NotFound` for unknown IDs, or an I/O error if writing
/// to `out` fails.
pub fn show(
    catalog: &impl Catalog,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let product = catalog
        .product(&ProductId::new(id))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    writeln!(out, "{} ({})", product.name, product.id)?;
    writeln!(out, "{}", product.description)?;
    write!(out, "Precio: {}", product.selling_price())?;
    if let (Some(savings), Some(discount)) = (product.savings(), product.discount) {
        write!(out, " - {discount}% OFF, ahorrás {}", format_ars(savings))?;
    }
    writeln!(out)?;
    writeln!(out, "Talles: {}", product.sizes.join(", "))?;
    writeln!(out, "Colores: {}", product.colors.join(", "))?;
    if !product.in_stock {
        writeln!(out, "Sin stock")?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tienda_core::StaticCatalog;

    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_featured() {
        let catalog = StaticCatalog::builtin().unwrap();
        let output = render(|out| list(&catalog, true, None, out));
        assert_eq!(output.lines().count(), 6);
        assert!(output.contains("Remera Básica Premium"));
        assert!(output.contains("(antes $ 12.000,00)"));
        assert!(!output.contains("Remera Polo"));
    }

    #[test]
    fn test_list_category() {
        let catalog = StaticCatalog::builtin().unwrap();
        let output = render(|out| list(&catalog, false, Some("vestidos"), out));
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("Vestido Cóctel Elegante"));
    }

    #[test]
    fn test_show_product() {
        let catalog = StaticCatalog::builtin().unwrap();
        let output = render(|out| show(&catalog, "1", out));
        assert!(output.contains("Precio: $ 8.500,00 - 30% OFF, ahorrás $ 3.500,00"));
        assert!(output.contains("Talles: XS, S, M, L, XL"));
    }

    #[test]
    fn test_show_unknown_product() {
        let catalog = StaticCatalog::builtin().unwrap();
        let mut out = Vec::new();
        let err = show(&catalog, "99", &mut out).unwrap_err();
        assert!(err.to_string().contains("product 99"));
    }
}
