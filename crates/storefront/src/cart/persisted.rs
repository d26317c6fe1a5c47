//! Serialized form of the cart.
//!
//! ```json
//! {"state":{"items":[{"id":"1","name":"...","price":8500,"size":"M","color":"Negro","quantity":2,"image":"/x.jpg"}]},"version":0}
//! ```
//!
//! Prices are written as JSON numbers carrying every digit of the `Decimal`.
//! There is no migration logic. The version is written but never checked.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::line_item::LineItem;

/// Version number written into every envelope.
pub const ENVELOPE_VERSION: u32 = 0;

/// Reasons a persisted record is rejected.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not JSON, or not the expected shape.
    #[error("malformed cart record: {0}")]
    Json(#[from] serde_json::Error),

    /// A line carried a quantity below 1.
    #[error("line {index} has quantity 0")]
    EmptyLine {
        /// Position of the offending line.
        index: usize,
    },

    /// A line total or the cart total does not fit in a `Decimal`.
    #[error("line {index} overflows the cart total")]
    Overflow {
        /// Position of the offending line after merging.
        index: usize,
    },
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: StateRef<'a>,
    version: u32,
}

#[derive(Serialize)]
struct StateRef<'a> {
    items: &'a [LineItem],
}

#[derive(Deserialize)]
struct Envelope {
    state: State,
}

#[derive(Deserialize)]
struct State {
    items: Vec<LineItem>,
}

/// Serialize lines into an envelope.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn encode(items: &[LineItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeRef {
        state: StateRef { items },
        version: ENVELOPE_VERSION,
    })
}

/// Parse an envelope back into lines, order preserved.
///
/// Lines repeating an earlier `(id, size, color)` are folded into the first
/// occurrence so the result never holds duplicate keys.
///
/// # Errors
///
/// Returns [`DecodeError`] if the record is malformed, any line has a
/// zero quantity, or the totals would overflow.
pub fn decode(raw: &str) -> Result<Vec<LineItem>, DecodeError> {
    let envelope: Envelope = serde_json::from_str(raw)?;

    let mut items: Vec<LineItem> = Vec::with_capacity(envelope.state.items.len());
    for (index, item) in envelope.state.items.into_iter().enumerate() {
        if item.quantity == 0 {
            return Err(DecodeError::EmptyLine { index });
        }
        match items.iter_mut().find(|existing| existing.is(item.key())) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => items.push(item),
        }
    }

    let mut total = Decimal::ZERO;
    for (index, item) in items.iter().enumerate() {
        total = item
            .unit_price
            .checked_mul(Decimal::from(item.quantity))
            .and_then(|line| total.checked_add(line))
            .ok_or(DecodeError::Overflow { index })?;
    }

    Ok(items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use tienda_core::ProductId;

    use super::*;

    fn line(id: &str, size: &str, quantity: u32) -> LineItem {
        LineItem {
            product_id: ProductId::new(id),
            name: format!("Producto {id}"),
            unit_price: Decimal::from(1000),
            size: size.to_string(),
            color: "Negro".to_string(),
            quantity,
            image: String::new(),
        }
    }

    #[test]
    fn test_encode_shape() {
        let raw = encode(&[line("1", "M", 2)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["items"][0]["id"], "1");
        assert_eq!(value["state"]["items"][0]["quantity"], 2);
    }

    #[test]
    fn test_decode_integer_prices() {
        let raw = r#"{"state":{"items":[{"id":"4","name":"Campera","price":45000,"size":"L","color":"Negro","quantity":1,"image":"/c.jpg"}]},"version":0}"#;
        let items = decode(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].unit_price, Decimal::from(45_000));
    }

    #[test]
    fn test_decode_ignores_version() {
        let raw = r#"{"state":{"items":[]},"version":7}"#;
        assert!(decode(raw).unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(decode("not json"), Err(DecodeError::Json(_))));
        assert!(matches!(decode("[]"), Err(DecodeError::Json(_))));
        assert!(matches!(
            decode(r#"{"state":{"items":[{"id":"1"}]}}"#),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_decode_rejects_negative_and_zero_quantity() {
        let negative = r#"{"state":{"items":[{"id":"1","name":"n","price":1,"size":"M","color":"Negro","quantity":-1,"image":""}]}}"#;
        assert!(matches!(decode(negative), Err(DecodeError::Json(_))));

        let zero = r#"{"state":{"items":[{"id":"1","name":"n","price":1,"size":"M","color":"Negro","quantity":0,"image":""}]}}"#;
        assert!(matches!(
            decode(zero),
            Err(DecodeError::EmptyLine { index: 0 })
        ));
    }

    #[test]
    fn test_decode_merges_duplicate_keys() {
        let raw = encode(&[line("1", "M", 2), line("2", "S", 1), line("1", "M", 3)]).unwrap();
        let items = decode(&raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 5);
        assert_eq!(items[1].product_id, ProductId::new("2"));
    }

    #[test]
    fn test_encode_keeps_exact_prices() {
        let mut item = line("1", "M", 1);
        item.unit_price = "12345678901234.5678".parse().unwrap();

        let raw = encode(std::slice::from_ref(&item)).unwrap();
        assert!(raw.contains(r#""price":12345678901234.5678"#));
        assert_eq!(decode(&raw).unwrap(), vec![item]);
    }

    #[test]
    fn test_decode_rejects_overflowing_totals() {
        let line_overflow = r#"{"state":{"items":[{"id":"1","name":"n","price":70000000000000000000000000000,"size":"M","color":"Negro","quantity":2,"image":""}]}}"#;
        assert!(matches!(
            decode(line_overflow),
            Err(DecodeError::Overflow { index: 0 })
        ));

        let sum_overflow = r#"{"state":{"items":[
            {"id":"1","name":"n","price":50000000000000000000000000000,"size":"M","color":"Negro","quantity":1,"image":""},
            {"id":"2","name":"n","price":50000000000000000000000000000,"size":"M","color":"Negro","quantity":1,"image":""}
        ]}}"#;
        assert!(matches!(
            decode(sum_overflow),
            Err(DecodeError::Overflow { index: 1 })
        ));
    }
}
