//! Position and report records.
//!
//! These types flow between the input-parsing layer, the calculators, and
//! the report renderers. They are constructed once and never mutated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input record
// ---------------------------------------------------------------------------

/// One input trade position.
///
/// Quantity is signed: positive = long, negative = short. The same
/// (trader, broker, symbol) triple may appear on any number of rows; the
/// calculators net them. Price is carried for input fidelity only — neither
/// calculator reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub trader: String,
    pub broker: String,
    pub symbol: String,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl Position {
    pub fn new(
        trader: impl Into<String>,
        broker: impl Into<String>,
        symbol: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            trader: trader.into(),
            broker: broker.into(),
            symbol: symbol.into(),
            quantity,
            price,
        }
    }
}

// ---------------------------------------------------------------------------
// Report records
// ---------------------------------------------------------------------------

/// Net quantity for one (trader, symbol) pair across all brokers.
///
/// Quantity is signed and may be exactly zero — net-flat pairs are still
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetPosition {
    pub trader: String,
    pub symbol: String,
    pub quantity: Decimal,
}

impl NetPosition {
    pub fn new(trader: impl Into<String>, symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self { trader: trader.into(), symbol: symbol.into(), quantity }
    }
}

/// Boxed quantity for one (trader, symbol) pair: held long at some
/// broker(s) and short at other broker(s) simultaneously, after
/// broker-level netting. Quantity is always strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxedPosition {
    pub trader: String,
    pub symbol: String,
    pub quantity: Decimal,
}

impl BoxedPosition {
    pub fn new(trader: impl Into<String>, symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self { trader: trader.into(), symbol: symbol.into(), quantity }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn field_wise_equality() {
        let a = NetPosition::new("Mike", "AAPL.N", dec!(300));
        let b = NetPosition::new("Mike", "AAPL.N", dec!(300));
        let c = NetPosition::new("Mike", "AAPL.N", dec!(301));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn decimal_equality_is_value_based() {
        // 300 and 300.0 differ in scale but are the same value.
        assert_eq!(
            BoxedPosition::new("Mike", "AAPL.N", dec!(300)),
            BoxedPosition::new("Mike", "AAPL.N", dec!(300.0)),
        );
    }
}
