//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are kept in the currency's standard unit (whole pesos for ARS)
//! and rendered with Argentine conventions: `.` groups thousands, `,`
//! separates the two decimal places, and the symbol is followed by a space.
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use tienda_core::{CurrencyCode, Price};
//!
//! let price = Price::new(Decimal::from(8500), CurrencyCode::ARS);
//! assert_eq!(price.to_string(), "$ 8.500,00");
//! ```

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., pesos, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in Argentine pesos.
    #[must_use]
    pub const fn ars(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::ARS)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.amount, self.currency_code))
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    ARS,
    USD,
}

impl CurrencyCode {
    /// Display symbol as used by the es-AR locale.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::ARS => "$",
            Self::USD => "US$",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ARS => "ARS",
            Self::USD => "USD",
        }
    }
}

/// Format an amount in Argentine pesos, e.g. `"$ 8.500,00"`.
#[must_use]
pub fn format_ars(amount: Decimal) -> String {
    format_amount(amount, CurrencyCode::ARS)
}

/// Format an amount for display using es-AR separators.
///
/// Rounds half away from zero to two decimal places.
#[must_use]
pub fn format_amount(amount: Decimal, currency: CurrencyCode) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{sign}{} {},{fraction}",
        currency.symbol(),
        group_thousands(whole)
    )
}

/// Insert `.` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
