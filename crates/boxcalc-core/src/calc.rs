//! Net and boxed position calculators.
//!
//! Two independent, pure computations over the same batch of [`Position`]
//! records:
//!
//! - [`compute_net_positions`] — signed quantity per (trader, symbol)
//!   across all brokers.
//! - [`compute_boxed_positions`] — quantity held long at one broker and
//!   short at another for the same trader/symbol, after broker-level
//!   netting.
//!
//! Both run in O(n) over the input, are order-independent, touch no state
//! outside their local accumulators, and may be called concurrently on
//! independent batches. Output order is unspecified; callers that need a
//! stable order sort the result themselves.

use ahash::AHashMap;
use rust_decimal::Decimal;
use tracing::debug;

use crate::types::{BoxedPosition, NetPosition, Position};

// ---------------------------------------------------------------------------
// Composite accumulator keys
// ---------------------------------------------------------------------------

/// Grouping key for per-trader, per-symbol accumulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TraderSymbol {
    trader: String,
    symbol: String,
}

/// Grouping key for broker-level netting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TraderBrokerSymbol {
    trader: String,
    broker: String,
    symbol: String,
}

// ---------------------------------------------------------------------------
// Net positions
// ---------------------------------------------------------------------------

/// Aggregate positions into one net quantity per (trader, symbol),
/// irrespective of broker.
///
/// Every (trader, symbol) pair observed in the input yields exactly one
/// record, including pairs whose quantities sum to exactly zero. Empty
/// input yields an empty result.
pub fn compute_net_positions(positions: &[Position]) -> Vec<NetPosition> {
    let mut net: AHashMap<TraderSymbol, Decimal> = AHashMap::new();

    for position in positions {
        let key = TraderSymbol {
            trader: position.trader.clone(),
            symbol: position.symbol.clone(),
        };
        *net.entry(key).or_insert(Decimal::ZERO) += position.quantity;
    }

    debug!("netted {} position(s) into {} (trader, symbol) pair(s)", positions.len(), net.len());

    net.into_iter()
        .map(|(key, quantity)| NetPosition::new(key.trader, key.symbol, quantity))
        .collect()
}

// ---------------------------------------------------------------------------
// Boxed positions
// ---------------------------------------------------------------------------

/// Detect boxed positions: quantity held long at one or more brokers and
/// short at one or more other brokers for the same trader/symbol.
///
/// Positions are netted per (trader, broker, symbol) first, so an
/// up-and-down at the same broker flattens into a single exposure at that
/// broker and never by itself creates a box. Broker nets of exactly zero
/// join neither pool. For a (trader, symbol) present in both pools the
/// boxed quantity is `min(long total, |short total|)`; a pair boxed at
/// several broker pairs still yields one aggregate record.
pub fn compute_boxed_positions(positions: &[Position]) -> Vec<BoxedPosition> {
    // Pass 1: net each (trader, broker, symbol) triple.
    let mut broker_net: AHashMap<TraderBrokerSymbol, Decimal> = AHashMap::new();
    for position in positions {
        let key = TraderBrokerSymbol {
            trader: position.trader.clone(),
            broker: position.broker.clone(),
            symbol: position.symbol.clone(),
        };
        *broker_net.entry(key).or_insert(Decimal::ZERO) += position.quantity;
    }

    // Pass 2: split the broker nets into long and short pools per
    // (trader, symbol). The short pool keeps its negative sign.
    let mut long_pool: AHashMap<TraderSymbol, Decimal> = AHashMap::new();
    let mut short_pool: AHashMap<TraderSymbol, Decimal> = AHashMap::new();
    for (key, net) in broker_net {
        if net.is_zero() {
            // Flat at this broker.
            continue;
        }
        let pool_key = TraderSymbol { trader: key.trader, symbol: key.symbol };
        let pool = if net > Decimal::ZERO { &mut long_pool } else { &mut short_pool };
        *pool.entry(pool_key).or_insert(Decimal::ZERO) += net;
    }

    debug!("long pool has {} key(s), short pool has {} key(s)", long_pool.len(), short_pool.len());

    // Pass 3: the overlap of the two pools is the boxed quantity.
    let mut boxed = Vec::new();
    for (key, long_total) in long_pool {
        if let Some(short_total) = short_pool.get(&key) {
            let quantity = long_total.min(short_total.abs());
            boxed.push(BoxedPosition::new(key.trader, key.symbol, quantity));
        }
    }
    boxed
}
